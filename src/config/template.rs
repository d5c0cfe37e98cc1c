//! Template configuration, the aggregate a renderer consumes

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ColorScheme, LayoutConfig, Section, TypographyConfig};
use crate::error::ConfigError;

/// A template identifier outside the supported set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown template variant '{0}' (expected one of: professional, modern, minimalist, vanta)")]
pub struct UnknownVariant(pub String);

/// The visual templates a portfolio can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    Professional,
    Modern,
    Minimalist,
    Vanta,
}

impl TemplateVariant {
    /// Every supported variant, in declaration order
    pub const ALL: [TemplateVariant; 4] = [
        TemplateVariant::Professional,
        TemplateVariant::Modern,
        TemplateVariant::Minimalist,
        TemplateVariant::Vanta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateVariant::Professional => "professional",
            TemplateVariant::Modern => "modern",
            TemplateVariant::Minimalist => "minimalist",
            TemplateVariant::Vanta => "vanta",
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        TemplateVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == name)
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// A configured template instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    pub description: String,
    pub template: TemplateVariant,
    /// Sections in insertion order; render order comes from `Section::order`
    pub sections: Vec<Section>,
    pub colors: ColorScheme,
    pub layout: LayoutConfig,
    pub typography: TypographyConfig,
}

impl TemplateConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = ConfigError::read(path)?;
        Self::from_toml_str(&content)
    }

    /// Load a configuration from a TOML string and validate it
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: TemplateConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check color tokens and section id uniqueness
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.colors.validate()?;

        let mut seen = HashSet::new();
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::DuplicateSection {
                    id: section.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Get a section by id
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Position of a section in the section list
    pub fn section_position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Id-keyed view of the sections
    pub fn sections_by_id(&self) -> BTreeMap<&str, &Section> {
        self.sections.iter().map(|s| (s.id.as_str(), s)).collect()
    }

    /// All sections in render order
    ///
    /// Sorted by `order`; the sort is stable so ties keep list position.
    pub fn ordered_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    /// Enabled sections in render order
    pub fn visible_sections(&self) -> Vec<&Section> {
        self.ordered_sections()
            .into_iter()
            .filter(|s| s.enabled)
            .collect()
    }

    /// Reassign section orders from a list of list positions
    ///
    /// `new_order[i] = p` gives the section at position `p` the order `i`.
    /// Sections that are not mentioned keep their order, positions past the
    /// end of the section list are skipped, and a repeated position takes
    /// the last index it appears at.
    pub fn with_order(&self, new_order: &[usize]) -> TemplateConfig {
        let mut next = self.clone();
        for (order, &position) in new_order.iter().enumerate() {
            if let Some(section) = next.sections.get_mut(position) {
                section.order = order;
            }
        }
        next
    }
}

/// Check whether `new_order` is a permutation of `0..count`
pub fn is_permutation(new_order: &[usize], count: usize) -> bool {
    if new_order.len() != count {
        return false;
    }
    let mut seen = vec![false; count];
    for &position in new_order {
        match seen.get_mut(position) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
