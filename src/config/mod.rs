//! Configuration schema for portfolio templates
//!
//! A [`TemplateConfig`] parameterizes one of the interchangeable visual
//! templates: which sections are shown and in what order, the color
//! scheme, the page layout and the typography. Every sub-tree has a
//! matching patch type ([`ColorPatch`], [`LayoutPatch`],
//! [`TypographyPatch`], [`SectionPatch`]) that is merged shallowly to
//! produce the next configuration.

mod color;
mod layout;
mod section;
mod template;
mod typography;

pub use color::{is_color_token, ColorPatch, ColorScheme, InvalidColor, REQUIRED_COLORS};
pub use layout::{LayoutConfig, LayoutPatch};
pub use section::{Section, SectionKind, SectionPatch};
pub use template::{is_permutation, TemplateConfig, TemplateVariant, UnknownVariant};
pub use typography::{TypographyConfig, TypographyPatch};
