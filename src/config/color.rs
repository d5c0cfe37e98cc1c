//! Color schemes and color patches
//!
//! A [`ColorScheme`] carries the five colors every template reads
//! (`primary`, `secondary`, `background`, `text`, `accent`) plus any number of
//! extra named colors a particular template may use. Values are CSS color
//! tokens and are validated with [`is_color_token`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Names of the colors every scheme must define
pub const REQUIRED_COLORS: [&str; 5] = ["primary", "secondary", "background", "text", "accent"];

/// A color value that is not a recognised color token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color '{value}' for '{key}'")]
pub struct InvalidColor {
    pub key: String,
    pub value: String,
}

/// Color scheme of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
    /// Additional named colors: token name -> color
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ColorScheme {
    /// Resolve a color by name, looking at required colors first
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "primary" => Some(&self.primary),
            "secondary" => Some(&self.secondary),
            "background" => Some(&self.background),
            "text" => Some(&self.text),
            "accent" => Some(&self.accent),
            other => self.extra.get(other).map(|s| s.as_str()),
        }
    }

    /// Iterate over every (name, color) pair, required colors first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let required = [
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("accent", self.accent.as_str()),
        ];
        required
            .into_iter()
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Check that every value is a color token
    pub fn validate(&self) -> Result<(), InvalidColor> {
        check_tokens(self.iter())
    }

    /// Shallow-merge a patch, returning the merged scheme
    pub fn merged(&self, patch: &ColorPatch) -> ColorScheme {
        let mut next = self.clone();
        if let Some(v) = &patch.primary {
            next.primary = v.clone();
        }
        if let Some(v) = &patch.secondary {
            next.secondary = v.clone();
        }
        if let Some(v) = &patch.background {
            next.background = v.clone();
        }
        if let Some(v) = &patch.text {
            next.text = v.clone();
        }
        if let Some(v) = &patch.accent {
            next.accent = v.clone();
        }
        next.extra
            .extend(patch.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        next
    }
}

/// Partial update for a [`ColorScheme`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ColorPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the primary color
    pub fn with_primary(mut self, color: impl Into<String>) -> Self {
        self.primary = Some(color.into());
        self
    }

    /// Set the secondary color
    pub fn with_secondary(mut self, color: impl Into<String>) -> Self {
        self.secondary = Some(color.into());
        self
    }

    /// Set the background color
    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    /// Set the text color
    pub fn with_text(mut self, color: impl Into<String>) -> Self {
        self.text = Some(color.into());
        self
    }

    /// Set the accent color
    pub fn with_accent(mut self, color: impl Into<String>) -> Self {
        self.accent = Some(color.into());
        self
    }

    /// Set any color by name
    ///
    /// Required color names map onto their dedicated fields, anything else
    /// goes into the extra colors.
    pub fn with_color(self, name: &str, color: impl Into<String>) -> Self {
        match name {
            "primary" => self.with_primary(color),
            "secondary" => self.with_secondary(color),
            "background" => self.with_background(color),
            "text" => self.with_text(color),
            "accent" => self.with_accent(color),
            other => {
                let mut patch = self;
                patch.extra.insert(other.to_string(), color.into());
                patch
            }
        }
    }

    /// Check whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.primary.is_none()
            && self.secondary.is_none()
            && self.background.is_none()
            && self.text.is_none()
            && self.accent.is_none()
            && self.extra.is_empty()
    }

    /// Check that every value in the patch is a color token
    pub fn validate(&self) -> Result<(), InvalidColor> {
        let fields = [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("background", &self.background),
            ("text", &self.text),
            ("accent", &self.accent),
        ];
        let set = fields
            .into_iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k, v)));
        check_tokens(set.chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str()))))
    }
}

fn check_tokens<'a>(
    mut colors: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), InvalidColor> {
    match colors.find(|(_, value)| !is_color_token(value)) {
        Some((key, value)) => Err(InvalidColor {
            key: key.to_string(),
            value: value.to_string(),
        }),
        None => Ok(()),
    }
}

/// CSS named colors, plus `transparent` and `currentcolor`, sorted
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "currentcolor", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue",
    "tan", "teal", "thistle", "tomato", "transparent", "turquoise", "violet", "wheat", "white",
    "whitesmoke", "yellow", "yellowgreen",
];

const ANGLE_UNITS: &[&str] = &["deg", "grad", "rad", "turn"];

/// Check whether a string is a CSS color token
///
/// Accepts hex colors (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), the
/// `rgb()`/`rgba()`/`hsl()`/`hsla()` functions with numeric arguments, and
/// CSS named colors.
pub fn is_color_token(value: &str) -> bool {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    let lower = value.to_ascii_lowercase();
    for (func, hue_first) in [("rgba(", false), ("rgb(", false), ("hsla(", true), ("hsl(", true)] {
        if let Some(args) = lower.strip_prefix(func) {
            return match args.strip_suffix(')').and_then(split_arguments) {
                Some((channels, alpha)) => {
                    channels.iter().enumerate().all(|(i, channel)| {
                        let units: &[&str] = if hue_first && i == 0 { ANGLE_UNITS } else { &["%"] };
                        is_number(channel, units)
                    }) && alpha.map_or(true, |a| is_number(a, &["%"]))
                }
                None => false,
            };
        }
    }

    NAMED_COLORS.binary_search(&lower.as_str()).is_ok()
}

/// Split function arguments into three channels and an optional alpha
///
/// Handles both the legacy comma syntax (`1, 2, 3, 0.5`) and the space
/// syntax (`1 2 3 / 0.5`).
fn split_arguments(args: &str) -> Option<([&str; 3], Option<&str>)> {
    if args.contains(',') {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        return match parts.as_slice() {
            [a, b, c] => Some(([*a, *b, *c], None)),
            [a, b, c, alpha] => Some(([*a, *b, *c], Some(*alpha))),
            _ => None,
        };
    }

    let (channels, alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (args, None),
    };
    match channels.split_whitespace().collect::<Vec<_>>().as_slice() {
        [a, b, c] => Some(([*a, *b, *c], alpha)),
        _ => None,
    }
}

/// A finite number, bare or followed by one of `units`
fn is_number(component: &str, units: &[&str]) -> bool {
    let number = units
        .iter()
        .find_map(|unit| component.strip_suffix(*unit))
        .unwrap_or(component);
    !number.is_empty()
        && number
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e'))
        && number.parse::<f64>().is_ok_and(f64::is_finite)
}
