//! The configuration value an editor session works on

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::TemplateConfig;
use crate::data::PortfolioData;

/// Portfolio content together with the template that renders it
///
/// Both branches sit behind an `Arc`. An edit to one branch builds a new
/// value that shares the other branch with the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub data: Arc<PortfolioData>,
    pub template: Arc<TemplateConfig>,
}

impl PortfolioConfig {
    pub fn new(data: PortfolioData, template: TemplateConfig) -> Self {
        Self {
            data: Arc::new(data),
            template: Arc::new(template),
        }
    }

    /// Start from a template with no content entered yet
    pub fn from_template(template: TemplateConfig) -> Self {
        Self::new(PortfolioData::default(), template)
    }

    /// A copy with new content and the same template
    pub fn with_data(&self, data: PortfolioData) -> Self {
        Self {
            data: Arc::new(data),
            template: Arc::clone(&self.template),
        }
    }

    /// A copy with a new template and the same content
    pub fn with_template(&self, template: TemplateConfig) -> Self {
        Self {
            data: Arc::clone(&self.data),
            template: Arc::new(template),
        }
    }
}
