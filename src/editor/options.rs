//! Editor session options

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// What an edit does when it references something that does not exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Leave the configuration unchanged, still record the edit
    #[default]
    Ignore,
    /// Fail the edit without touching state or history
    Reject,
}

/// Options for a [`TemplateEditor`](super::TemplateEditor)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    /// Maximum number of history entries to keep (`None` keeps all)
    pub history_limit: Option<usize>,

    /// Handling of unknown section ids and malformed reorder lists
    pub miss_policy: MissPolicy,
}

impl EditorOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = ConfigError::read(path)?;
        Self::from_toml_str(&content)
    }

    /// Load options from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Keep at most `limit` history entries
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep every history entry
    pub fn unbounded(mut self) -> Self {
        self.history_limit = None;
        self
    }

    pub fn with_miss_policy(mut self, policy: MissPolicy) -> Self {
        self.miss_policy = policy;
        self
    }
}
