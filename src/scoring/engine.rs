//! Scoring engine
//!
//! Pure functions over a template and its scoring rules. Template-level
//! entry points are gated on the form type: only FRAT and GRAT carry
//! scoring, everything else fails `ScoringNotSupported`. The risk level
//! on a submission is always derived here, never hand-set by callers.

use std::collections::HashMap;

use crate::error::{FormError, FormResult};
use crate::models::{FormTemplate, RiskLevel, ScoringRules};

/// Per-field share of a submission's total score
#[derive(Debug, Clone)]
pub struct FieldContribution {
    pub field_id: String,
    pub label: String,
    pub points: u32,
}

/// Outcome of scoring a filled-in form
#[derive(Debug, Clone)]
pub struct ScoredSubmission {
    pub total_score: u32,
    pub risk_level: RiskLevel,
    pub contributions: Vec<FieldContribution>,
}

/// Classify a score into a risk band
///
/// Total over all scores: Low [0, low], Medium (low, medium],
/// High (medium, high], Critical (high, inf).
pub fn classify(score: u32, rules: &ScoringRules) -> RiskLevel {
    if score <= rules.low_risk {
        RiskLevel::Low
    } else if score <= rules.medium_risk {
        RiskLevel::Medium
    } else if score <= rules.high_risk {
        RiskLevel::High
    } else {
        RiskLevel::Critical
    }
}

/// Maximum achievable score for a template: the sum, over every field
/// that carries options, of the highest option point weight
pub fn max_score(template: &FormTemplate) -> FormResult<u32> {
    require_scoring(template)?;
    Ok(template.fields.iter().map(|f| f.max_points()).sum())
}

/// Score a submission against its template
///
/// `answers` maps field id to the selected option value(s); checkbox
/// fields may select several. Fields without options contribute 0.
/// Unknown field ids or option values are errors, not silent zeros.
pub fn score_submission(
    template: &FormTemplate,
    answers: &HashMap<String, Vec<String>>,
) -> FormResult<ScoredSubmission> {
    let rules = require_scoring(template)?;

    let mut total_score = 0u32;
    let mut contributions = Vec::new();

    for field in &template.fields {
        let Some(selected) = answers.get(&field.id) else {
            continue;
        };
        let Some(options) = field.control.options() else {
            continue;
        };

        let mut points = 0u32;
        for value in selected {
            let option = options.iter().find(|o| &o.value == value).ok_or_else(|| {
                FormError::OptionNotFound {
                    field_id: field.id.clone(),
                    value: value.clone(),
                }
            })?;
            points += option.points.unwrap_or(0);
        }

        total_score += points;
        contributions.push(FieldContribution {
            field_id: field.id.clone(),
            label: field.label.clone(),
            points,
        });
    }

    for field_id in answers.keys() {
        if template.field(field_id).is_none() {
            return Err(FormError::FieldNotFound {
                field_id: field_id.clone(),
            });
        }
    }

    Ok(ScoredSubmission {
        total_score,
        risk_level: classify(total_score, rules),
        contributions,
    })
}

fn require_scoring(template: &FormTemplate) -> FormResult<&ScoringRules> {
    if !template.form_type.has_scoring() {
        return Err(FormError::ScoringNotSupported {
            form_type: template.form_type,
        });
    }
    template
        .scoring_rules
        .as_ref()
        .ok_or_else(|| FormError::InvalidStructure("scoring rules are missing".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldControl, FieldDraft, FieldOption, FormType};
    use chrono::Utc;

    fn scored_template(fields: Vec<(&str, Vec<FieldOption>)>) -> FormTemplate {
        FormTemplate {
            id: "FRAT-TEMPLATE-001".to_string(),
            name: "Flight Risk Assessment Tool".to_string(),
            form_type: FormType::Frat,
            description: None,
            fields: fields
                .into_iter()
                .enumerate()
                .map(|(i, (id, options))| {
                    FieldDraft::new(format!("Question {}", i + 1), FieldControl::Select { options })
                        .into_field(id, i as u32 + 1)
                })
                .collect(),
            scoring_rules: Some(ScoringRules::new(10, 20, 30, 40)),
            last_modified: Utc::now(),
            modified_by: "Safety Manager".to_string(),
        }
    }

    #[test]
    fn test_classify_band_boundaries() {
        let rules = ScoringRules::new(10, 20, 30, 40);
        assert_eq!(classify(0, &rules), RiskLevel::Low);
        assert_eq!(classify(10, &rules), RiskLevel::Low);
        assert_eq!(classify(11, &rules), RiskLevel::Medium);
        assert_eq!(classify(20, &rules), RiskLevel::Medium);
        assert_eq!(classify(21, &rules), RiskLevel::High);
        assert_eq!(classify(30, &rules), RiskLevel::High);
        assert_eq!(classify(31, &rules), RiskLevel::Critical);
        assert_eq!(classify(1000, &rules), RiskLevel::Critical);
    }

    #[test]
    fn test_classify_is_total_over_a_range() {
        let rules = ScoringRules::new(10, 20, 30, 40);
        for score in 0..=200 {
            // Every score lands in exactly one band; just ensure no panic
            // and the band ordering is monotone in the score.
            let level = classify(score, &rules);
            if score > 0 {
                let previous = classify(score - 1, &rules);
                assert!(band_rank(level) >= band_rank(previous));
            }
        }
    }

    fn band_rank(level: RiskLevel) -> u8 {
        match level {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
            RiskLevel::Critical => 3,
        }
    }

    #[test]
    fn test_max_score_sums_per_field_maxima() {
        let template = scored_template(vec![
            (
                "field-a",
                vec![
                    FieldOption::weighted("a", "A", 3),
                    FieldOption::weighted("b", "B", 7),
                ],
            ),
            (
                "field-b",
                vec![
                    FieldOption::weighted("c", "C", 0),
                    FieldOption::weighted("d", "D", 10),
                ],
            ),
        ]);
        assert_eq!(max_score(&template).unwrap(), 17);
    }

    #[test]
    fn test_max_score_strictly_increases_with_higher_option() {
        let mut template = scored_template(vec![(
            "field-a",
            vec![
                FieldOption::weighted("a", "A", 3),
                FieldOption::weighted("b", "B", 7),
            ],
        )]);
        let before = max_score(&template).unwrap();

        template.fields[0]
            .control
            .options_mut()
            .unwrap()
            .push(FieldOption::weighted("c", "C", 10));
        let after = max_score(&template).unwrap();

        assert_eq!(before, 7);
        assert_eq!(after, 10);
        assert_eq!(after - before, 3);
    }

    #[test]
    fn test_max_score_rejected_for_unscored_type() {
        let mut template = scored_template(vec![]);
        template.form_type = FormType::Hazard;
        template.scoring_rules = None;
        assert!(matches!(
            max_score(&template),
            Err(FormError::ScoringNotSupported { .. })
        ));
    }

    #[test]
    fn test_score_submission_sums_selected_points() {
        let template = scored_template(vec![
            (
                "field-a",
                vec![
                    FieldOption::weighted("a", "A", 0),
                    FieldOption::weighted("b", "B", 5),
                ],
            ),
            (
                "field-b",
                vec![
                    FieldOption::weighted("c", "C", 0),
                    FieldOption::weighted("d", "D", 10),
                ],
            ),
        ]);

        let answers = HashMap::from([
            ("field-a".to_string(), vec!["b".to_string()]),
            ("field-b".to_string(), vec!["d".to_string()]),
        ]);

        let scored = score_submission(&template, &answers).unwrap();
        assert_eq!(scored.total_score, 15);
        assert_eq!(scored.risk_level, RiskLevel::Medium);
        assert_eq!(scored.contributions.len(), 2);
    }

    #[test]
    fn test_score_submission_rejects_unknown_field() {
        let template = scored_template(vec![(
            "field-a",
            vec![FieldOption::weighted("a", "A", 0)],
        )]);
        let answers = HashMap::from([("ghost".to_string(), vec!["a".to_string()])]);
        assert!(matches!(
            score_submission(&template, &answers),
            Err(FormError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_score_submission_rejects_unknown_option_value() {
        let template = scored_template(vec![(
            "field-a",
            vec![FieldOption::weighted("a", "A", 0)],
        )]);
        let answers = HashMap::from([("field-a".to_string(), vec!["zzz".to_string()])]);
        assert!(matches!(
            score_submission(&template, &answers),
            Err(FormError::OptionNotFound { .. })
        ));
    }
}
