//! Edit scripts: a serialized sequence of editor operations
//!
//! Scripts let a batch of edits be stored next to a portfolio and replayed
//! against a fresh editor. They are written in TOML or JSON:
//!
//! ```toml
//! [[edits]]
//! op = "colors"
//! primary = "#FF0000"
//!
//! [[edits]]
//! op = "toggle"
//! id = "contact"
//!
//! [[edits]]
//! op = "restore"
//! steps_back = 1
//! ```

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use super::{EditorError, PortfolioConfig, TemplateEditor};
use crate::config::{ColorPatch, LayoutPatch, SectionPatch, TypographyPatch};
use crate::data::PortfolioData;
use crate::error::ConfigError;

/// Errors that can occur while replaying a script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("edit {index} failed: {source}")]
    Edit {
        index: usize,
        #[source]
        source: EditorError,
    },

    #[error("edit {index} restores {steps_back} steps back but history has {available} entries")]
    MissingHistory {
        index: usize,
        steps_back: usize,
        available: usize,
    },
}

/// One editor operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    Data(PortfolioData),
    Colors(ColorPatch),
    Section {
        id: String,
        #[serde(default)]
        patch: SectionPatch,
    },
    Layout(LayoutPatch),
    Typography(TypographyPatch),
    Toggle {
        id: String,
    },
    Reorder {
        order: Vec<usize>,
    },
    /// Restore the snapshot recorded `steps_back` edits ago (0 is the latest)
    Restore {
        #[serde(default)]
        steps_back: usize,
    },
}

impl EditCommand {
    /// Apply this command as edit `index` of a script
    fn apply_at(
        &self,
        index: usize,
        editor: &mut TemplateEditor,
    ) -> Result<Arc<PortfolioConfig>, ScriptError> {
        let edited = match self {
            EditCommand::Data(data) => Ok(editor.update_data(data.clone())),
            EditCommand::Colors(patch) => editor.update_colors(patch.clone()),
            EditCommand::Section { id, patch } => editor.update_section(id, patch.clone()),
            EditCommand::Layout(patch) => Ok(editor.update_layout(patch.clone())),
            EditCommand::Typography(patch) => Ok(editor.update_typography(patch.clone())),
            EditCommand::Toggle { id } => editor.toggle_section(id),
            EditCommand::Reorder { order } => editor.reorder_sections(order),
            EditCommand::Restore { steps_back } => {
                let entry = editor.history_entry(*steps_back).cloned().ok_or(
                    ScriptError::MissingHistory {
                        index,
                        steps_back: *steps_back,
                        available: editor.history_len(),
                    },
                )?;
                Ok(editor.restore_from_history(&entry))
            }
        };
        edited.map_err(|source| ScriptError::Edit { index, source })
    }
}

/// A sequence of edits
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EditScript {
    #[serde(default)]
    pub edits: Vec<EditCommand>,
}

impl EditScript {
    /// Load a script, choosing JSON for `.json` files and TOML otherwise
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = ConfigError::read(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content),
            _ => Self::from_toml_str(&content),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every edit in order, stopping at the first failure
    ///
    /// Edits before the failing one stay applied.
    pub fn apply(&self, editor: &mut TemplateEditor) -> Result<Arc<PortfolioConfig>, ScriptError> {
        let mut current = Arc::clone(editor.current());
        for (index, command) in self.edits.iter().enumerate() {
            current = command.apply_at(index, editor)?;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_config;
    use crate::config::TemplateVariant;
    use crate::editor::{EditorOptions, MissPolicy};

    fn editor() -> TemplateEditor {
        TemplateEditor::new(PortfolioConfig::from_template(
            default_config(TemplateVariant::Minimalist).unwrap(),
        ))
    }

    #[test]
    fn test_parse_toml_script() {
        let script = EditScript::from_toml_str(
            r##"
[[edits]]
op = "colors"
primary = "#FF0000"
glow = "#00FF00"

[[edits]]
op = "section"
id = "projects"
patch = { layout = "grid", columns = 3 }

[[edits]]
op = "toggle"
id = "contact"

[[edits]]
op = "reorder"
order = [4, 3, 2, 1, 0]

[[edits]]
op = "restore"
"##,
        )
        .expect("Should parse");

        assert_eq!(script.len(), 5);
        assert_eq!(
            script.edits[0],
            EditCommand::Colors(
                ColorPatch::new()
                    .with_primary("#FF0000")
                    .with_color("glow", "#00FF00")
            )
        );
        assert_eq!(script.edits[4], EditCommand::Restore { steps_back: 0 });
    }

    #[test]
    fn test_parse_json_script() {
        let script = EditScript::from_json_str(
            r#"{"edits": [
                {"op": "data", "name": "Ana Souza", "title": "Engenheira"},
                {"op": "typography", "headingFont": "Lora, serif"},
                {"op": "layout", "maxWidth": "960px"}
            ]}"#,
        )
        .expect("Should parse");

        assert_eq!(
            script.edits[0],
            EditCommand::Data(PortfolioData::new().with_name("Ana Souza").with_title("Engenheira"))
        );
        assert_eq!(
            script.edits[1],
            EditCommand::Typography(TypographyPatch::new().with_heading_font("Lora, serif"))
        );
    }

    #[test]
    fn test_unknown_op_fails() {
        let result = EditScript::from_json_str(r#"{"edits": [{"op": "explode"}]}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_apply_script() {
        let script = EditScript::from_toml_str(
            r##"
[[edits]]
op = "colors"
primary = "#FF0000"

[[edits]]
op = "toggle"
id = "contact"

[[edits]]
op = "restore"
steps_back = 1
"##,
        )
        .unwrap();

        let mut editor = editor();
        let result = script.apply(&mut editor).expect("Should apply");

        assert_eq!(editor.history_len(), 3);
        assert_eq!(result.template.colors.primary, "#FF0000");
        assert!(result.template.section("contact").unwrap().enabled);
    }

    #[test]
    fn test_restore_past_history_fails() {
        let script = EditScript {
            edits: vec![EditCommand::Restore { steps_back: 3 }],
        };
        let mut editor = editor();
        let err = script.apply(&mut editor).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::MissingHistory {
                index: 0,
                steps_back: 3,
                available: 0
            }
        ));
        assert_eq!(editor.history_len(), 0);
    }

    #[test]
    fn test_restore_past_history_after_edits_keeps_earlier_edits() {
        let script = EditScript {
            edits: vec![
                EditCommand::Toggle {
                    id: "contact".to_string(),
                },
                EditCommand::Restore { steps_back: 1 },
            ],
        };
        let mut editor = editor();
        let err = script.apply(&mut editor).unwrap_err();

        assert!(matches!(
            err,
            ScriptError::MissingHistory {
                index: 1,
                steps_back: 1,
                available: 1
            }
        ));
        assert_eq!(editor.history_len(), 1);
        assert!(!editor.current().template.section("contact").unwrap().enabled);
    }

    #[test]
    fn test_failing_edit_reports_index() {
        let script = EditScript {
            edits: vec![
                EditCommand::Layout(LayoutPatch::new().with_padding("1rem")),
                EditCommand::Toggle {
                    id: "blog".to_string(),
                },
            ],
        };
        let mut editor = TemplateEditor::with_options(
            PortfolioConfig::from_template(default_config(TemplateVariant::Minimalist).unwrap()),
            EditorOptions::new().with_miss_policy(MissPolicy::Reject),
        );

        let err = script.apply(&mut editor).unwrap_err();
        assert!(matches!(err, ScriptError::Edit { index: 1, .. }));
        assert_eq!(editor.history_len(), 1);
    }
}
