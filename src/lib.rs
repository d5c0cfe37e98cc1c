//! Portfolio Builder - template configuration engine for portfolio websites
//!
//! This library provides the configuration model shared by a family of
//! interchangeable portfolio templates, a catalog of per-template defaults,
//! and a history-tracked editor that applies typed patches immutably.
//!
//! # Example
//!
//! ```rust
//! use portfolio_builder::{default_config, ColorPatch, PortfolioConfig, TemplateEditor, TemplateVariant};
//!
//! let template = default_config(TemplateVariant::Minimalist).unwrap();
//! let mut editor = TemplateEditor::new(PortfolioConfig::from_template(template));
//!
//! let updated = editor
//!     .update_colors(ColorPatch::new().with_primary("#FF0000"))
//!     .unwrap();
//!
//! assert_eq!(updated.template.colors.primary, "#FF0000");
//! assert_eq!(updated.template.colors.secondary, "#10B981");
//! assert_eq!(editor.latest().unwrap().description, "Cores atualizadas");
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod editor;
pub mod error;

pub use catalog::{default_config, CatalogError, TemplateCatalog};
pub use config::{
    ColorPatch, ColorScheme, LayoutConfig, LayoutPatch, Section, SectionKind, SectionPatch,
    TemplateConfig, TemplateVariant, TypographyConfig, TypographyPatch,
};
pub use data::PortfolioData;
pub use editor::{
    EditScript, EditorError, EditorOptions, HistoryEntry, MissPolicy, PortfolioConfig,
    TemplateEditor,
};
pub use error::ConfigError;
