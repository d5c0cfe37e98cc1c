//! History-tracked configuration editor

use std::sync::Arc;

use tracing::{debug, warn};

use super::history::{History, HistoryEntry};
use super::options::{EditorOptions, MissPolicy};
use super::{EditorError, PortfolioConfig};
use crate::config::{
    is_permutation, ColorPatch, LayoutPatch, SectionPatch, TemplateConfig, TypographyPatch,
};
use crate::data::PortfolioData;

/// Editor for one portfolio configuration
///
/// Holds the current configuration and the edit history. Every operation
/// builds a new configuration from the current one, replaces it and records
/// a history entry; configurations handed out earlier are never modified.
#[derive(Debug, Clone)]
pub struct TemplateEditor {
    current: Arc<PortfolioConfig>,
    history: History,
    options: EditorOptions,
}

impl TemplateEditor {
    /// Create an editor with default options
    pub fn new(initial: PortfolioConfig) -> Self {
        Self::with_options(initial, EditorOptions::default())
    }

    pub fn with_options(initial: PortfolioConfig, options: EditorOptions) -> Self {
        Self {
            current: Arc::new(initial),
            history: History::new(options.history_limit),
            options,
        }
    }

    /// The current configuration
    pub fn current(&self) -> &Arc<PortfolioConfig> {
        &self.current
    }

    /// History entries, most recent first
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The entry recorded by the most recent edit
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.history.latest()
    }

    /// Entry `steps_back` edits ago (0 is the latest)
    pub fn history_entry(&self, steps_back: usize) -> Option<&HistoryEntry> {
        self.history.get(steps_back)
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Consume the editor, returning the current configuration and history
    pub fn into_parts(self) -> (Arc<PortfolioConfig>, History) {
        (self.current, self.history)
    }

    /// Replace the portfolio content
    pub fn update_data(&mut self, data: PortfolioData) -> Arc<PortfolioConfig> {
        let next = self.current.with_data(data);
        self.commit(next, "Dados atualizados".to_string())
    }

    /// Merge a color patch into the color scheme
    pub fn update_colors(&mut self, patch: ColorPatch) -> Result<Arc<PortfolioConfig>, EditorError> {
        patch.validate()?;
        let next = self.map_template(|template| TemplateConfig {
            colors: template.colors.merged(&patch),
            ..template.clone()
        });
        Ok(self.commit(next, "Cores atualizadas".to_string()))
    }

    /// Merge a patch into one section
    pub fn update_section(
        &mut self,
        id: &str,
        patch: SectionPatch,
    ) -> Result<Arc<PortfolioConfig>, EditorError> {
        let next = match self.current.template.section_position(id) {
            Some(position) => self.map_template(|template| {
                let mut next = template.clone();
                next.sections[position] = template.sections[position].merged(&patch);
                next
            }),
            None => {
                self.tolerate_missing_section(id)?;
                (*self.current).clone()
            }
        };
        Ok(self.commit(next, format!("Seção {id} atualizada")))
    }

    /// Merge a patch into the page layout
    pub fn update_layout(&mut self, patch: LayoutPatch) -> Arc<PortfolioConfig> {
        let next = self.map_template(|template| TemplateConfig {
            layout: template.layout.merged(&patch),
            ..template.clone()
        });
        self.commit(next, "Layout atualizado".to_string())
    }

    /// Merge a patch into the typography
    pub fn update_typography(&mut self, patch: TypographyPatch) -> Arc<PortfolioConfig> {
        let next = self.map_template(|template| TemplateConfig {
            typography: template.typography.merged(&patch),
            ..template.clone()
        });
        self.commit(next, "Tipografia atualizada".to_string())
    }

    /// Flip whether a section is shown
    ///
    /// A missing section tolerated by the miss policy is reported as
    /// disabled, since it is not rendered.
    pub fn toggle_section(&mut self, id: &str) -> Result<Arc<PortfolioConfig>, EditorError> {
        let (next, enabled) = match self.current.template.section_position(id) {
            Some(position) => {
                let enabled = !self.current.template.sections[position].enabled;
                let next = self.map_template(|template| {
                    let mut next = template.clone();
                    next.sections[position].enabled = enabled;
                    next
                });
                (next, enabled)
            }
            None => {
                self.tolerate_missing_section(id)?;
                ((*self.current).clone(), false)
            }
        };
        let state = if enabled { "ativada" } else { "desativada" };
        Ok(self.commit(next, format!("Seção {id} {state}")))
    }

    /// Reassign section orders by list position
    ///
    /// `new_order[i] = p` gives the section at position `p` the order `i`.
    /// A list that is not a permutation of the section positions is applied
    /// as far as it goes under [`MissPolicy::Ignore`]; see
    /// [`TemplateConfig::with_order`].
    pub fn reorder_sections(
        &mut self,
        new_order: &[usize],
    ) -> Result<Arc<PortfolioConfig>, EditorError> {
        let count = self.current.template.sections.len();
        if !is_permutation(new_order, count) {
            match self.options.miss_policy {
                MissPolicy::Ignore => warn!(
                    order = ?new_order,
                    sections = count,
                    "reorder list is not a permutation, applying partially"
                ),
                MissPolicy::Reject => return Err(EditorError::invalid_reorder(new_order, count)),
            }
        }
        let next = self.map_template(|template| template.with_order(new_order));
        Ok(self.commit(next, "Ordem das seções atualizada".to_string()))
    }

    /// Make a recorded snapshot current again
    ///
    /// The restore is itself recorded; no entries are dropped.
    pub fn restore_from_history(&mut self, entry: &HistoryEntry) -> Arc<PortfolioConfig> {
        let description = format!("Configuração restaurada de {}", entry.timestamp_label());
        self.commit_shared(Arc::clone(&entry.config), description)
    }

    fn map_template(&self, f: impl FnOnce(&TemplateConfig) -> TemplateConfig) -> PortfolioConfig {
        let template: &TemplateConfig = &self.current.template;
        self.current.with_template(f(template))
    }

    fn tolerate_missing_section(&self, id: &str) -> Result<(), EditorError> {
        match self.options.miss_policy {
            MissPolicy::Ignore => {
                warn!(section = id, "section not found, configuration left unchanged");
                Ok(())
            }
            MissPolicy::Reject => Err(EditorError::section_not_found(id)),
        }
    }

    fn commit(&mut self, next: PortfolioConfig, description: String) -> Arc<PortfolioConfig> {
        self.commit_shared(Arc::new(next), description)
    }

    fn commit_shared(
        &mut self,
        next: Arc<PortfolioConfig>,
        description: String,
    ) -> Arc<PortfolioConfig> {
        debug!(%description, history = self.history.len() + 1, "applied edit");
        self.history
            .push(HistoryEntry::new(Arc::clone(&next), description));
        self.current = Arc::clone(&next);
        next
    }
}
