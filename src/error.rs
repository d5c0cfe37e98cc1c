//! Error types for loading and validating configuration files

use std::ops::Range;
use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::config::InvalidColor;

/// Byte range in source text
pub type Span = Range<usize>;

/// Errors that can occur while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {}", .0.message())]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidColor(#[from] InvalidColor),

    #[error("duplicate section id '{id}'")]
    DuplicateSection { id: String },
}

impl ConfigError {
    /// Read a file, attaching the path to any I/O error
    pub fn read(path: &std::path::Path) -> Result<String, ConfigError> {
        std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the source span if available
    pub fn span(&self) -> Option<Span> {
        match self {
            ConfigError::Toml(e) => e.span(),
            _ => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their `Display` output.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return self.to_string();
        };

        let message = match self {
            ConfigError::Toml(e) => e.message().to_string(),
            other => other.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message("invalid configuration")
            .with_label(
                Label::new((filename, span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8(buf).unwrap_or_else(|_| self.to_string()),
            Err(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_error_has_span() {
        let err: ConfigError = toml::from_str::<toml::Table>("name = ").unwrap_err().into();
        assert!(err.span().is_some());
        assert!(err.to_string().starts_with("failed to parse TOML"));
    }

    #[test]
    fn test_format_includes_filename() {
        let source = "id = \"x\"\nname = \n";
        let err: ConfigError = toml::from_str::<toml::Table>(source).unwrap_err().into();
        let report = err.format(source, "broken.toml");
        assert!(report.contains("broken.toml"));
    }

    #[test]
    fn test_format_without_span_uses_display() {
        let err = ConfigError::DuplicateSection {
            id: "about".to_string(),
        };
        assert_eq!(err.format("", "config.toml"), "duplicate section id 'about'");
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let err = ConfigError::read(std::path::Path::new("/nonexistent/portfolio.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/portfolio.toml"));
    }
}
