//! Typography settings

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fonts and base text size of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    /// Font stack for headings
    pub heading_font: String,
    /// Font stack for body text
    pub body_font: String,
    /// Root font size (CSS length)
    pub base_size: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            heading_font: "Inter, sans-serif".to_string(),
            body_font: "Inter, sans-serif".to_string(),
            base_size: "16px".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

impl TypographyConfig {
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "headingFont" => Some(&self.heading_font),
            "bodyFont" => Some(&self.body_font),
            "baseSize" => Some(&self.base_size),
            other => self.extra.get(other).map(|s| s.as_str()),
        }
    }

    /// Shallow-merge a patch, returning the merged typography
    pub fn merged(&self, patch: &TypographyPatch) -> TypographyConfig {
        let mut next = self.clone();
        if let Some(v) = &patch.heading_font {
            next.heading_font = v.clone();
        }
        if let Some(v) = &patch.body_font {
            next.body_font = v.clone();
        }
        if let Some(v) = &patch.base_size {
            next.base_size = v.clone();
        }
        next.extra
            .extend(patch.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        next
    }
}

/// Partial update for a [`TypographyConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographyPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_size: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl TypographyPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heading_font(mut self, font: impl Into<String>) -> Self {
        self.heading_font = Some(font.into());
        self
    }

    pub fn with_body_font(mut self, font: impl Into<String>) -> Self {
        self.body_font = Some(font.into());
        self
    }

    pub fn with_base_size(mut self, size: impl Into<String>) -> Self {
        self.base_size = Some(size.into());
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
