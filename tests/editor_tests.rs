//! Integration tests for the history-tracked editor
//!
//! These exercise the public API the way a host UI would: start from a
//! catalog default, apply edits, read the history back.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use portfolio_builder::{
    default_config, ColorPatch, EditScript, EditorOptions, LayoutPatch, MissPolicy,
    PortfolioConfig, PortfolioData, SectionPatch, TemplateEditor, TemplateVariant,
    TypographyPatch,
};

fn editor_for(variant: TemplateVariant) -> TemplateEditor {
    let template = default_config(variant).expect("built-in preset");
    TemplateEditor::new(PortfolioConfig::from_template(template))
}

/// One call of every operation kind, so the laws below cover all of them
fn apply_each_operation(editor: &mut TemplateEditor) -> Vec<Arc<PortfolioConfig>> {
    let mut results = Vec::new();
    results.push(editor.update_data(PortfolioData::new().with_name("Ana Souza")));
    results.push(
        editor
            .update_colors(ColorPatch::new().with_primary("#FF0000"))
            .unwrap(),
    );
    results.push(
        editor
            .update_section("about", SectionPatch::new().with_title("Quem sou"))
            .unwrap(),
    );
    results.push(editor.update_layout(LayoutPatch::new().with_max_width("960px")));
    results.push(editor.update_typography(TypographyPatch::new().with_body_font("Georgia, serif")));
    results.push(editor.toggle_section("skills").unwrap());
    results.push(editor.reorder_sections(&[4, 3, 2, 1, 0]).unwrap());
    let entry = editor.history_entry(3).unwrap().clone();
    results.push(editor.restore_from_history(&entry));
    results
}

#[test]
fn test_every_operation_returns_new_config_and_keeps_old() {
    let mut editor = editor_for(TemplateVariant::Minimalist);

    let mut previous = Arc::clone(editor.current());
    let mut previous_value = (*previous).clone();
    for next in apply_each_operation(&mut editor) {
        assert!(!Arc::ptr_eq(&previous, &next));
        assert_eq!(*previous, previous_value, "earlier snapshot was modified");
        previous = next;
        previous_value = (*previous).clone();
    }
}

#[test]
fn test_history_length_and_order() {
    let mut editor = editor_for(TemplateVariant::Minimalist);
    let results = apply_each_operation(&mut editor);

    assert_eq!(editor.history_len(), results.len());
    assert!(Arc::ptr_eq(&editor.latest().unwrap().config, results.last().unwrap()));

    let descriptions: Vec<&str> = editor
        .history()
        .skip(1)
        .map(|e| e.description.as_str())
        .collect();
    insta::assert_snapshot!(descriptions.join("\n"), @r"
    Ordem das seções atualizada
    Seção skills desativada
    Tipografia atualizada
    Layout atualizado
    Seção about atualizada
    Cores atualizadas
    Dados atualizados
    ");
}

#[test]
fn test_history_timestamps_never_go_backwards() {
    let mut editor = editor_for(TemplateVariant::Modern);
    apply_each_operation_on_modern(&mut editor);

    let timestamps: Vec<_> = editor.history().map(|e| e.timestamp).collect();
    assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
}

fn apply_each_operation_on_modern(editor: &mut TemplateEditor) {
    editor.update_layout(LayoutPatch::new().with_setting("cardRadius", "0.5rem"));
    editor.toggle_section("hero").unwrap();
    editor.reorder_sections(&[5, 4, 3, 2, 1, 0]).unwrap();
}

#[test]
fn test_restore_equals_entry_and_grows_history() {
    let mut editor = editor_for(TemplateVariant::Professional);
    editor
        .update_colors(ColorPatch::new().with_accent("#22C55E"))
        .unwrap();
    editor.toggle_section("certificates").unwrap();
    editor.update_data(PortfolioData::new().with_email("ana@example.com"));

    let entry = editor.history_entry(2).unwrap().clone();
    let restored = editor.restore_from_history(&entry);

    assert_eq!(*restored, *entry.config);
    assert!(restored.data.is_empty());
    assert!(!restored.template.section("certificates").unwrap().enabled);
    assert_eq!(editor.history_len(), 4);
    assert!(editor
        .latest()
        .unwrap()
        .description
        .starts_with("Configuração restaurada de "));
}

#[test]
fn test_toggle_twice_round_trips() {
    for variant in TemplateVariant::ALL {
        let mut editor = editor_for(variant);
        let ids: Vec<String> = editor
            .current()
            .template
            .sections
            .iter()
            .map(|s| s.id.clone())
            .collect();
        for id in ids {
            let before = editor.current().template.section(&id).unwrap().enabled;
            editor.toggle_section(&id).unwrap();
            let after = editor.toggle_section(&id).unwrap();
            assert_eq!(after.template.section(&id).unwrap().enabled, before);
        }
    }
}

#[test]
fn test_empty_color_patch_twice_equals_once() {
    let mut editor = editor_for(TemplateVariant::Vanta);
    let once = editor.update_colors(ColorPatch::new()).unwrap();
    let twice = editor.update_colors(ColorPatch::new()).unwrap();
    assert_eq!(*once, *twice);
    assert_eq!(once.template.colors, default_config(TemplateVariant::Vanta).unwrap().colors);
}

#[test]
fn test_minimalist_colors_scenario() {
    let mut editor = editor_for(TemplateVariant::Minimalist);
    assert_eq!(editor.current().template.sections.len(), 5);
    assert_eq!(editor.current().template.colors.primary, "#3B82F6");

    let next = editor
        .update_colors(ColorPatch::new().with_primary("#FF0000"))
        .unwrap();

    assert_eq!(next.template.colors.primary, "#FF0000");
    assert_eq!(next.template.colors.secondary, "#10B981");
    assert_eq!(editor.history_entry(0).unwrap().description, "Cores atualizadas");
    assert_eq!(editor.history_len(), 1);
}

#[test]
fn test_reorder_mismatched_length_under_both_policies() {
    let mut lenient = editor_for(TemplateVariant::Minimalist);
    let next = lenient.reorder_sections(&[2, 0, 1]).unwrap();
    let orders: Vec<usize> = next.template.sections.iter().map(|s| s.order).collect();
    // positions 3 and 4 are not mentioned and keep their orders
    assert_eq!(orders, vec![1, 2, 0, 3, 4]);

    let template = default_config(TemplateVariant::Minimalist).unwrap();
    let mut strict = TemplateEditor::with_options(
        PortfolioConfig::from_template(template),
        EditorOptions::new().with_miss_policy(MissPolicy::Reject),
    );
    assert!(strict.reorder_sections(&[2, 0, 1]).is_err());
    assert_eq!(strict.history_len(), 0);
}

#[test]
fn test_script_round_trip_through_editor() {
    let script = EditScript::from_toml_str(
        r##"
[[edits]]
op = "data"
name = "Ana Souza"
title = "Engenheira de Software"

[[edits]]
op = "colors"
primary = "#FF0000"

[[edits]]
op = "section"
id = "projects"
patch = { layout = "grid", columns = 2 }

[[edits]]
op = "reorder"
order = [4, 0, 1, 2, 3]
"##,
    )
    .expect("Should parse");

    let mut editor = editor_for(TemplateVariant::Minimalist);
    let result = script.apply(&mut editor).expect("Should apply");

    assert_eq!(editor.history_len(), 4);
    assert_eq!(result.data.name.as_deref(), Some("Ana Souza"));
    let ids: Vec<&str> = result
        .template
        .visible_sections()
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["contact", "about", "experience", "projects", "skills"]);
}
