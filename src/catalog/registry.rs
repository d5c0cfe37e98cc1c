//! Catalog of default configurations, one per template variant

use std::collections::BTreeMap;
use std::sync::OnceLock;

use thiserror::Error;
use tracing::debug;

use crate::config::{TemplateConfig, TemplateVariant, UnknownVariant};
use crate::error::ConfigError;

/// Errors that can occur when looking up or registering defaults
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Identifier outside the supported template variants
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),

    /// Variant has no preset in this catalog
    #[error("no default configuration for template '{variant}'")]
    NotFound { variant: TemplateVariant },

    /// Second preset for the same variant
    #[error("duplicate default configuration for template '{variant}'")]
    Duplicate { variant: TemplateVariant },

    /// Preset failed to parse or validate
    #[error("invalid preset: {0}")]
    InvalidPreset(#[from] ConfigError),
}

const BUILTIN_PRESETS: [&str; 4] = [
    include_str!("presets/professional.toml"),
    include_str!("presets/modern.toml"),
    include_str!("presets/minimalist.toml"),
    include_str!("presets/vanta.toml"),
];

/// Read-only mapping from template variant to its preset configuration
#[derive(Debug, Default)]
pub struct TemplateCatalog {
    presets: BTreeMap<TemplateVariant, TemplateConfig>,
}

impl TemplateCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog, seeded from the embedded presets on first use
    pub fn builtin() -> &'static TemplateCatalog {
        static CATALOG: OnceLock<TemplateCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            let catalog = Self::from_presets(BUILTIN_PRESETS)
                .expect("Built-in presets should be valid TOML");
            debug!(templates = catalog.len(), "seeded template catalog");
            catalog
        })
    }

    /// Build a catalog from TOML preset sources
    pub fn from_presets<'a>(
        sources: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for source in sources {
            catalog.register(TemplateConfig::from_toml_str(source)?)?;
        }
        Ok(catalog)
    }

    /// Register a preset for its variant
    pub fn register(&mut self, config: TemplateConfig) -> Result<(), CatalogError> {
        let variant = config.template;
        if self.presets.contains_key(&variant) {
            return Err(CatalogError::Duplicate { variant });
        }
        config.validate()?;
        self.presets.insert(variant, config);
        Ok(())
    }

    /// Get an independent copy of a variant's default configuration
    pub fn get_default(&self, variant: TemplateVariant) -> Result<TemplateConfig, CatalogError> {
        self.presets
            .get(&variant)
            .cloned()
            .ok_or(CatalogError::NotFound { variant })
    }

    /// Get a default configuration by variant identifier
    pub fn get_default_by_name(&self, name: &str) -> Result<TemplateConfig, CatalogError> {
        self.get_default(name.parse()?)
    }

    /// The fallback configuration used when no template has been picked
    pub fn global_default(&self) -> Result<TemplateConfig, CatalogError> {
        self.get_default(TemplateVariant::Professional)
    }

    /// Variants with a preset, in declaration order
    pub fn variants(&self) -> impl Iterator<Item = TemplateVariant> + '_ {
        self.presets.keys().copied()
    }

    pub fn contains(&self, variant: TemplateVariant) -> bool {
        self.presets.contains_key(&variant)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

/// Get a default configuration from the built-in catalog
pub fn default_config(variant: TemplateVariant) -> Result<TemplateConfig, CatalogError> {
    TemplateCatalog::builtin().get_default(variant)
}
