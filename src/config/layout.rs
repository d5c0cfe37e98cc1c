//! Page layout settings

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Layout options shared by every section of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Maximum content width (CSS length)
    pub max_width: String,

    /// Padding around the page content
    pub padding: String,

    /// Vertical spacing between sections
    pub spacing: String,

    /// Template-specific layout settings
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: "1200px".to_string(),
            padding: "2rem".to_string(),
            spacing: "4rem".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum content width
    pub fn with_max_width(mut self, max_width: impl Into<String>) -> Self {
        self.max_width = max_width.into();
        self
    }

    /// Set the page padding
    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the spacing between sections
    pub fn with_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Look up a setting by its serialized name
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "maxWidth" => Some(&self.max_width),
            "padding" => Some(&self.padding),
            "spacing" => Some(&self.spacing),
            other => self.extra.get(other).map(|s| s.as_str()),
        }
    }

    /// Shallow-merge a patch, returning the merged layout
    pub fn merged(&self, patch: &LayoutPatch) -> LayoutConfig {
        let mut next = self.clone();
        if let Some(v) = &patch.max_width {
            next.max_width = v.clone();
        }
        if let Some(v) = &patch.padding {
            next.padding = v.clone();
        }
        if let Some(v) = &patch.spacing {
            next.spacing = v.clone();
        }
        next.extra
            .extend(patch.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        next
    }
}

/// Partial update for a [`LayoutConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl LayoutPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_width(mut self, max_width: impl Into<String>) -> Self {
        self.max_width = Some(max_width.into());
        self
    }

    pub fn with_padding(mut self, padding: impl Into<String>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_spacing(mut self, spacing: impl Into<String>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    /// Set a template-specific layout setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
