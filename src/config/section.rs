//! Portfolio sections

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of content a section renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Education,
    Certificates,
    Contact,
    Custom,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Hero => "hero",
            SectionKind::About => "about",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Certificates => "certificates",
            SectionKind::Contact => "contact",
            SectionKind::Custom => "custom",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, orderable content block of a portfolio page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique within a template configuration
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub enabled: bool,
    /// Render position; ties are broken by position in the section list
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
    /// Renderer-specific arrangement (e.g. "grid", "timeline")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

impl Section {
    /// Create an enabled section
    pub fn new(id: impl Into<String>, title: impl Into<String>, kind: SectionKind, order: usize) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            enabled: true,
            order,
            is_custom: None,
            layout: None,
            columns: None,
            gap: None,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.is_custom.unwrap_or(self.kind == SectionKind::Custom)
    }

    /// Shallow-merge a patch, returning the merged section
    ///
    /// The id is never changed by a patch.
    pub fn merged(&self, patch: &SectionPatch) -> Section {
        let mut next = self.clone();
        if let Some(v) = &patch.title {
            next.title = v.clone();
        }
        if let Some(v) = patch.kind {
            next.kind = v;
        }
        if let Some(v) = patch.enabled {
            next.enabled = v;
        }
        if let Some(v) = patch.order {
            next.order = v;
        }
        if let Some(v) = patch.is_custom {
            next.is_custom = Some(v);
        }
        if let Some(v) = &patch.layout {
            next.layout = Some(v.clone());
        }
        if let Some(v) = patch.columns {
            next.columns = Some(v);
        }
        if let Some(v) = &patch.gap {
            next.gap = Some(v.clone());
        }
        next
    }
}

/// Partial update for a [`Section`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SectionKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
}

impl SectionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = Some(gap.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_section_is_enabled() {
        let section = Section::new("about", "Sobre", SectionKind::About, 0);
        assert!(section.enabled);
        assert!(!section.is_custom());
    }

    #[test]
    fn test_custom_kind_is_custom() {
        let section = Section::new("talks", "Palestras", SectionKind::Custom, 6);
        assert!(section.is_custom());
    }

    #[test]
    fn test_merge_section_patch() {
        let section = Section::new("projects", "Projetos", SectionKind::Projects, 2);
        let merged = section.merged(
            &SectionPatch::new()
                .with_title("Trabalhos")
                .with_layout("grid")
                .with_columns(3),
        );

        assert_eq!(merged.id, "projects");
        assert_eq!(merged.title, "Trabalhos");
        assert_eq!(merged.layout.as_deref(), Some("grid"));
        assert_eq!(merged.columns, Some(3));
        assert_eq!(merged.order, 2);
        assert!(merged.enabled);
        assert_eq!(section.title, "Projetos");
    }

    #[test]
    fn test_section_json_shape() {
        let section = Section::new("contact", "Contato", SectionKind::Contact, 4);
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "contact");
        assert_eq!(json["enabled"], true);
        assert!(json.get("isCustom").is_none());
    }

    #[test]
    fn test_patch_type_field() {
        let patch: SectionPatch =
            serde_json::from_str(r#"{"type": "custom", "isCustom": true}"#).unwrap();
        assert_eq!(patch.kind, Some(SectionKind::Custom));
        assert_eq!(patch.is_custom, Some(true));
    }
}
