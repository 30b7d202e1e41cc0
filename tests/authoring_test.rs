//! End-to-end authoring and scoring scenarios

use std::collections::HashMap;

use chrono::Utc;
use riskforms::{
    export, scoring, Actor, Direction, FieldControl, FieldDraft, FieldOption, FormError,
    FormTemplate, FormType, RiskLevel, ScoringRules, TemplateStore,
};

fn safety_manager() -> Actor {
    Actor::new("Safety Manager - Current User", "safety")
}

fn empty_frat() -> FormTemplate {
    FormTemplate {
        id: "FRAT-TEMPLATE-001".to_string(),
        name: "Flight Risk Assessment Tool".to_string(),
        form_type: FormType::Frat,
        description: None,
        fields: vec![],
        scoring_rules: Some(ScoringRules::new(10, 20, 30, 40)),
        last_modified: Utc::now(),
        modified_by: "seed".to_string(),
    }
}

#[test]
fn authoring_an_assessment_from_scratch() {
    // Start from an empty FRAT template, author two weighted fields,
    // set thresholds, then score a worst-case submission.
    let mut store = TemplateStore::with_templates(vec![empty_frat()]);
    let actor = safety_manager();
    let token = store.get(FormType::Frat).unwrap().last_modified;

    let mut editor = store.editor(&actor).unwrap();

    let field_a = FieldDraft::new(
        "Crew Experience",
        FieldControl::Select {
            options: vec![
                FieldOption::weighted("a", "Seasoned crew", 0),
                FieldOption::weighted("b", "New pairing", 5),
            ],
        },
    );
    let token = editor
        .save_field(FormType::Frat, field_a, None, token)
        .unwrap()
        .last_modified;

    let field_b = FieldDraft::new(
        "Destination Weather",
        FieldControl::Select {
            options: vec![
                FieldOption::weighted("c", "Clear", 0),
                FieldOption::weighted("d", "Severe", 10),
            ],
        },
    );
    let token = editor
        .save_field(FormType::Frat, field_b, None, token)
        .unwrap()
        .last_modified;

    let template = store.get(FormType::Frat).unwrap().clone();
    assert_eq!(scoring::max_score(&template).unwrap(), 15);

    let mut editor = store.editor(&actor).unwrap();
    let template = editor
        .update_scoring_rules(FormType::Frat, ScoringRules::new(5, 10, 12, 20), token)
        .unwrap();

    // Worst-case answers: both highest-weighted options selected
    let answers: HashMap<String, Vec<String>> = template
        .fields
        .iter()
        .map(|f| {
            let worst = f
                .control
                .options()
                .unwrap()
                .iter()
                .max_by_key(|o| o.points.unwrap_or(0))
                .unwrap();
            (f.id.clone(), vec![worst.value.clone()])
        })
        .collect();

    let scored = scoring::score_submission(&template, &answers).unwrap();
    assert_eq!(scored.total_score, 15);
    assert_eq!(scored.risk_level, RiskLevel::Critical);
}

#[test]
fn order_density_holds_across_random_walk_of_mutations() {
    let mut store = TemplateStore::new();
    let actor = safety_manager();
    let mut token = store.get(FormType::Frat).unwrap().last_modified;

    let mut editor = store.editor(&actor).unwrap();

    // Mixed add/duplicate/reorder/delete sequence
    for i in 0..4 {
        let draft = FieldDraft::new(
            format!("Extra question {i}"),
            FieldControl::Radio {
                options: vec![
                    FieldOption::weighted("no", "No", 0),
                    FieldOption::weighted("yes", "Yes", i),
                ],
            },
        );
        token = editor
            .save_field(FormType::Frat, draft, None, token)
            .unwrap()
            .last_modified;
    }
    token = editor
        .duplicate_field(FormType::Frat, "field-1", token)
        .unwrap()
        .last_modified;
    token = editor
        .delete_field(FormType::Frat, "field-3", token)
        .unwrap()
        .last_modified;
    token = editor
        .reorder_field(FormType::Frat, "field-5", Direction::Down, token)
        .unwrap()
        .last_modified;
    let template = editor
        .reorder_field(FormType::Frat, "field-4", Direction::Up, token)
        .unwrap();

    let mut orders: Vec<u32> = template.fields.iter().map(|f| f.order).collect();
    orders.sort_unstable();
    let expected: Vec<u32> = (1..=template.field_count() as u32).collect();
    assert_eq!(orders, expected);
    template.validate().unwrap();
}

#[test]
fn concurrent_editors_cannot_silently_overwrite() {
    let mut store = TemplateStore::new();
    let shared_token = store.get(FormType::Grat).unwrap().last_modified;

    // First editor wins
    let first = Actor::new("Safety Manager - John Smith", "safety");
    let mut editor = store.editor(&first).unwrap();
    editor
        .update_scoring_rules(FormType::Grat, ScoringRules::new(8, 16, 24, 32), shared_token)
        .unwrap();

    // Second editor, still holding the token it read earlier, is told
    // its snapshot is stale instead of clobbering the first edit
    let second = Actor::new("Admin - Jane Doe", "admin");
    let mut editor = store.editor(&second).unwrap();
    let result = editor.update_scoring_rules(
        FormType::Grat,
        ScoringRules::new(5, 10, 15, 20),
        shared_token,
    );
    assert!(matches!(result, Err(FormError::StaleWrite { .. })));

    let rules = store.get(FormType::Grat).unwrap().scoring_rules.unwrap();
    assert_eq!(rules, ScoringRules::new(8, 16, 24, 32));
}

#[test]
fn unauthorized_roles_cannot_touch_any_template() {
    let mut store = TemplateStore::new();
    let before: Vec<FormTemplate> = store.iter().cloned().collect();

    for role in ["pilot", "dispatcher", "passenger", ""] {
        let result = store.editor(&Actor::new("Intruder", role));
        assert!(matches!(result, Err(FormError::RoleDenied { .. })));
    }

    let after: Vec<FormTemplate> = store.iter().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn scoring_surface_is_closed_to_report_forms() {
    let store = TemplateStore::new();
    for form_type in [
        FormType::Hazard,
        FormType::Asap,
        FormType::Waiver,
        FormType::Audit,
    ] {
        let template = store.get(form_type).unwrap();
        assert!(matches!(
            scoring::max_score(template),
            Err(FormError::ScoringNotSupported { .. })
        ));
        assert!(matches!(
            scoring::score_submission(template, &HashMap::new()),
            Err(FormError::ScoringNotSupported { .. })
        ));
    }
}

#[test]
fn exported_template_can_be_imported_into_another_store() {
    let mut source = TemplateStore::new();
    let actor = safety_manager();
    let token = source.get(FormType::Frat).unwrap().last_modified;

    // Author a change, export the result
    let mut editor = source.editor(&actor).unwrap();
    let exported = editor
        .duplicate_field(FormType::Frat, "field-1", token)
        .unwrap();
    let document = export::to_export_json(&exported).unwrap();

    // Import into a second store via the authoring surface
    let mut target = TemplateStore::new();
    let target_token = target.get(FormType::Frat).unwrap().last_modified;
    let imported = export::from_export_json(&document).unwrap();

    let mut editor = target.editor(&actor).unwrap();
    let installed = editor
        .replace_template(FormType::Frat, imported, target_token)
        .unwrap();

    assert_eq!(installed.field_count(), exported.field_count());
    assert_eq!(
        scoring::max_score(&installed).unwrap(),
        scoring::max_score(&exported).unwrap()
    );
}

#[test]
fn import_of_mismatched_form_type_is_rejected() {
    let mut store = TemplateStore::new();
    let actor = safety_manager();
    let token = store.get(FormType::Frat).unwrap().last_modified;

    let hazard = store.get(FormType::Hazard).unwrap().clone();
    let mut editor = store.editor(&actor).unwrap();
    let result = editor.replace_template(FormType::Frat, hazard, token);
    assert!(matches!(result, Err(FormError::InvalidStructure(_))));
}
