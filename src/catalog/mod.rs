//! Default configurations for the built-in templates
//!
//! Each template variant ships a preset describing its color scheme,
//! section list, layout and typography. Presets are embedded TOML files
//! parsed once per process; lookups hand out independent copies so a
//! caller can never modify the catalog.
//!
//! # Example
//!
//! ```rust
//! use portfolio_builder::catalog::TemplateCatalog;
//! use portfolio_builder::TemplateVariant;
//!
//! let config = TemplateCatalog::builtin()
//!     .get_default(TemplateVariant::Minimalist)
//!     .unwrap();
//! assert_eq!(config.sections.len(), 5);
//! assert_eq!(config.colors.primary, "#3B82F6");
//! ```

mod registry;

pub use registry::{default_config, CatalogError, TemplateCatalog};
