//! Portfolio content supplied by the user or an import flow
//!
//! Every field is optional. Renderers substitute placeholder content for
//! anything missing, so nothing here enforces non-empty values.

use serde::{Deserialize, Serialize};

/// The user's professional data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
    pub custom_sections: Vec<CustomSection>,
}

impl PortfolioData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// True when no content has been entered at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Skills grouped by category, in first-seen category order
    ///
    /// Skills without a category are grouped under `None`.
    pub fn skills_by_category(&self) -> Vec<(Option<&str>, Vec<&Skill>)> {
        let mut groups: Vec<(Option<&str>, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            let category = skill.category.as_deref();
            match groups.iter_mut().find(|(c, _)| *c == category) {
                Some((_, skills)) => skills.push(skill),
                None => groups.push((category, vec![skill])),
            }
        }
        groups
    }
}

/// A position held
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    /// None while `current` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub current: bool,
    pub description: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    /// Proficiency from 0 to 100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Free-form content for a custom section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomSection {
    /// Matches the id of the `Section` that renders it
    pub id: String,
    pub title: String,
    pub content: String,
    pub items: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(PortfolioData::default().is_empty());
        assert!(!PortfolioData::new().with_name("Ana Souza").is_empty());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let data: PortfolioData = serde_json::from_str(
            r#"{
                "name": "Ana Souza",
                "experiences": [{"company": "Acme", "position": "Engineer", "current": true}]
            }"#,
        )
        .unwrap();

        assert_eq!(data.name.as_deref(), Some("Ana Souza"));
        assert_eq!(data.title, None);
        assert_eq!(data.experiences.len(), 1);
        assert!(data.experiences[0].current);
        assert_eq!(data.experiences[0].end_date, None);
        assert!(data.projects.is_empty());
    }

    #[test]
    fn test_skills_by_category() {
        let data = PortfolioData {
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    level: Some(90),
                    category: Some("Languages".to_string()),
                },
                Skill {
                    name: "Figma".to_string(),
                    level: None,
                    category: None,
                },
                Skill {
                    name: "TypeScript".to_string(),
                    level: Some(80),
                    category: Some("Languages".to_string()),
                },
            ],
            ..PortfolioData::default()
        };

        let groups = data.skills_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Some("Languages"));
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, None);
    }

    #[test]
    fn test_custom_sections_camel_case() {
        let data = PortfolioData {
            custom_sections: vec![CustomSection {
                id: "talks".to_string(),
                title: "Palestras".to_string(),
                ..CustomSection::default()
            }],
            ..PortfolioData::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["customSections"][0]["id"], "talks");
        assert!(json.get("name").is_none());
    }
}
