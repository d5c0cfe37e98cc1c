//! History-tracked editing of portfolio configurations
//!
//! A [`TemplateEditor`] owns the current [`PortfolioConfig`] of one editing
//! session together with its history. Each operation takes a typed patch,
//! merges it into the matching sub-tree, swaps in the resulting
//! configuration and records a [`HistoryEntry`] describing the change.
//! Configurations are shared as `Arc`s and never modified after creation,
//! so a renderer holding an older snapshot keeps seeing it unchanged.
//!
//! # Example
//!
//! ```rust
//! use portfolio_builder::editor::{PortfolioConfig, TemplateEditor};
//! use portfolio_builder::{default_config, TemplateVariant};
//!
//! let template = default_config(TemplateVariant::Minimalist).unwrap();
//! let mut editor = TemplateEditor::new(PortfolioConfig::from_template(template));
//!
//! let before = editor.current().clone();
//! editor.toggle_section("contact").unwrap();
//!
//! assert!(before.template.section("contact").unwrap().enabled);
//! assert!(!editor.current().template.section("contact").unwrap().enabled);
//! assert_eq!(editor.latest().unwrap().description, "Seção contact desativada");
//! ```

mod engine;
mod error;
mod history;
mod options;
mod script;
mod state;

pub use engine::TemplateEditor;
pub use error::EditorError;
pub use history::{History, HistoryEntry};
pub use options::{EditorOptions, MissPolicy};
pub use script::{EditCommand, EditScript, ScriptError};
pub use state::PortfolioConfig;
