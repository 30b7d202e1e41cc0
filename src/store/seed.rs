//! Default template definitions
//!
//! The engine ships one seeded template per form type: the two scored
//! risk assessment tools (FRAT/GRAT) with weighted options and default
//! thresholds, and the four unscored report forms.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
    FieldControl, FieldDraft, FieldOption, FormField, FormTemplate, FormType, ScoringRules,
};

fn seed_time(hour: u32, minute: u32) -> DateTime<Utc> {
    // Fixed, known-valid seed timestamp
    Utc.with_ymd_and_hms(2025, 2, 8, hour, minute, 0).unwrap()
}

fn select(
    id: &str,
    order: u32,
    label: &str,
    category: &str,
    options: Vec<FieldOption>,
) -> FormField {
    FieldDraft::new(label, FieldControl::Select { options })
        .with_category(category)
        .into_field(id, order)
}

fn text(id: &str, order: u32, label: &str, category: &str) -> FormField {
    FieldDraft::new(label, FieldControl::Text)
        .with_category(category)
        .into_field(id, order)
}

fn date(id: &str, order: u32, label: &str, category: &str) -> FormField {
    FieldDraft::new(label, FieldControl::Date)
        .with_category(category)
        .into_field(id, order)
}

fn textarea(id: &str, order: u32, label: &str, category: &str) -> FormField {
    FieldDraft::new(label, FieldControl::Textarea)
        .with_category(category)
        .into_field(id, order)
}

fn with_help(mut field: FormField, help_text: &str) -> FormField {
    field.help_text = Some(help_text.to_string());
    field
}

fn optional(mut field: FormField) -> FormField {
    field.required = false;
    field
}

pub fn frat() -> FormTemplate {
    FormTemplate {
        id: "FRAT-TEMPLATE-001".to_string(),
        name: "Flight Risk Assessment Tool".to_string(),
        form_type: FormType::Frat,
        description: Some("Comprehensive pre-flight risk assessment".to_string()),
        fields: vec![
            with_help(
                select(
                    "field-1",
                    1,
                    "Weather Conditions",
                    "Environmental",
                    vec![
                        FieldOption::weighted("vfr-clear", "VFR - Clear", 0),
                        FieldOption::weighted("vfr-marginal", "VFR - Marginal", 2),
                        FieldOption::weighted("ifr-good", "IFR - Good Conditions", 4),
                        FieldOption::weighted("ifr-challenging", "IFR - Challenging", 6),
                        FieldOption::weighted("severe", "Severe Weather", 10),
                    ],
                ),
                "Assess current and forecast weather conditions",
            ),
            with_help(
                select(
                    "field-2",
                    2,
                    "Airport Familiarity",
                    "Experience",
                    vec![
                        FieldOption::weighted("highly-familiar", "Highly Familiar (10+ times)", 0),
                        FieldOption::weighted("familiar", "Familiar (5-9 times)", 1),
                        FieldOption::weighted("some-experience", "Some Experience (2-4 times)", 3),
                        FieldOption::weighted("limited", "Limited (1 time)", 5),
                        FieldOption::weighted("new", "New Airport", 7),
                    ],
                ),
                "PIC experience at destination airport",
            ),
            with_help(
                select(
                    "field-3",
                    3,
                    "Crew Rest",
                    "Fatigue",
                    vec![
                        FieldOption::weighted("adequate-10plus", "10+ hours", 0),
                        FieldOption::weighted("good-8to10", "8-10 hours", 1),
                        FieldOption::weighted("moderate-6to8", "6-8 hours", 3),
                        FieldOption::weighted("limited-4to6", "4-6 hours", 6),
                        FieldOption::weighted("minimal", "Less than 4 hours", 10),
                    ],
                ),
                "Hours of rest in last 24 hours",
            ),
            select(
                "field-4",
                4,
                "Flight Duration",
                "Operational",
                vec![
                    FieldOption::weighted("short", "Short (0-2 hours)", 0),
                    FieldOption::weighted("medium", "Medium (2-4 hours)", 1),
                    FieldOption::weighted("long", "Long (4-6 hours)", 3),
                    FieldOption::weighted("extended", "Extended (6+ hours)", 5),
                ],
            ),
            FieldDraft::new(
                "Night Operations",
                FieldControl::Radio {
                    options: vec![
                        FieldOption::weighted("day", "Day Flight", 0),
                        FieldOption::weighted("night", "Night Flight", 2),
                    ],
                },
            )
            .with_category("Operational")
            .into_field("field-5", 5),
        ],
        scoring_rules: Some(ScoringRules::new(10, 20, 30, 40)),
        last_modified: seed_time(10, 30),
        modified_by: "Safety Manager - John Smith".to_string(),
    }
}

pub fn grat() -> FormTemplate {
    FormTemplate {
        id: "GRAT-TEMPLATE-001".to_string(),
        name: "Ground Risk Assessment Tool".to_string(),
        form_type: FormType::Grat,
        description: Some("Ground operations risk assessment (AM/PM)".to_string()),
        fields: vec![
            with_help(
                select(
                    "gfield-1",
                    1,
                    "Weather Conditions",
                    "Environmental",
                    vec![
                        FieldOption::weighted("clear", "Clear/Good", 0),
                        FieldOption::weighted("rain", "Rain", 2),
                        FieldOption::weighted("ice-snow", "Ice/Snow", 4),
                        FieldOption::weighted("severe", "Severe Weather", 6),
                    ],
                ),
                "Ground weather conditions",
            ),
            select(
                "gfield-2",
                2,
                "Equipment Status",
                "Equipment",
                vec![
                    FieldOption::weighted("all-operational", "All Equipment Operational", 0),
                    FieldOption::weighted("minor-issues", "Minor Issues", 2),
                    FieldOption::weighted("significant-issues", "Significant Issues", 5),
                    FieldOption::weighted("critical-issues", "Critical Issues", 8),
                ],
            ),
            with_help(
                select(
                    "gfield-3",
                    3,
                    "Personnel Factors",
                    "Personnel",
                    vec![
                        FieldOption::weighted("full-experienced", "Full Staff - Experienced", 0),
                        FieldOption::weighted("full-mixed", "Full Staff - Mixed Experience", 2),
                        FieldOption::weighted("reduced", "Reduced Staff", 4),
                        FieldOption::weighted("minimal", "Minimal Staff", 6),
                    ],
                ),
                "Staff availability and experience",
            ),
            select(
                "gfield-4",
                4,
                "Time Pressure",
                "Operational",
                vec![
                    FieldOption::weighted("none", "No Time Pressure", 0),
                    FieldOption::weighted("moderate", "Moderate Pressure", 2),
                    FieldOption::weighted("significant", "Significant Pressure", 4),
                    FieldOption::weighted("critical", "Critical Time Constraint", 6),
                ],
            ),
            select(
                "gfield-5",
                5,
                "Operation Complexity",
                "Operational",
                vec![
                    FieldOption::weighted("routine", "Routine Operation", 0),
                    FieldOption::weighted("moderate", "Moderate Complexity", 2),
                    FieldOption::weighted("complex", "Complex Operation", 4),
                    FieldOption::weighted("highly-complex", "Highly Complex", 6),
                ],
            ),
        ],
        scoring_rules: Some(ScoringRules::new(10, 20, 30, 40)),
        last_modified: seed_time(14, 45),
        modified_by: "Safety Manager - John Smith".to_string(),
    }
}

pub fn hazard() -> FormTemplate {
    FormTemplate {
        id: "HAZARD-TEMPLATE-001".to_string(),
        name: "Hazard Report Form".to_string(),
        form_type: FormType::Hazard,
        description: Some("Report and document safety hazards".to_string()),
        fields: vec![
            with_help(
                text("hfield-1", 1, "Hazard Location", "Identification"),
                "Where was the hazard identified?",
            ),
            date("hfield-2", 2, "Date of Discovery", "Identification"),
            select(
                "hfield-3",
                3,
                "Hazard Category",
                "Classification",
                vec![
                    FieldOption::new("aircraft", "Aircraft/Equipment"),
                    FieldOption::new("environmental", "Environmental"),
                    FieldOption::new("procedural", "Procedural"),
                    FieldOption::new("personnel", "Personnel/Human Factors"),
                    FieldOption::new("facility", "Facility/Infrastructure"),
                    FieldOption::new("other", "Other"),
                ],
            ),
            select(
                "hfield-4",
                4,
                "Severity Level",
                "Classification",
                vec![
                    FieldOption::new("critical", "Critical - Immediate Action Required"),
                    FieldOption::new("high", "High - Prompt Action Required"),
                    FieldOption::new("medium", "Medium - Action Required"),
                    FieldOption::new("low", "Low - Monitoring Required"),
                ],
            ),
            with_help(
                textarea("hfield-5", 5, "Hazard Description", "Details"),
                "Provide detailed description of the hazard",
            ),
            with_help(
                textarea("hfield-6", 6, "Potential Consequences", "Details"),
                "What could happen if this hazard is not addressed?",
            ),
            optional(with_help(
                textarea(
                    "hfield-7",
                    7,
                    "Suggested Corrective Actions",
                    "Recommendations",
                ),
                "Your recommendations for addressing this hazard",
            )),
        ],
        scoring_rules: None,
        last_modified: seed_time(10, 0),
        modified_by: "Safety Manager - John Smith".to_string(),
    }
}

pub fn asap() -> FormTemplate {
    FormTemplate {
        id: "ASAP-TEMPLATE-001".to_string(),
        name: "ASAP Report Form".to_string(),
        form_type: FormType::Asap,
        description: Some("Aviation Safety Action Program reporting".to_string()),
        fields: vec![
            date("afield-1", 1, "Event Date", "Event Details"),
            with_help(
                text("afield-2", 2, "Event Time", "Event Details"),
                "Local time (HHMM format)",
            ),
            text("afield-3", 3, "Aircraft Registration", "Event Details"),
            with_help(
                text("afield-4", 4, "Location", "Event Details"),
                "Airport code or location where event occurred",
            ),
            select(
                "afield-5",
                5,
                "Event Category",
                "Classification",
                vec![
                    FieldOption::new("procedure", "Procedural Deviation"),
                    FieldOption::new("regulation", "Regulatory Deviation"),
                    FieldOption::new("communication", "Communication Issue"),
                    FieldOption::new("navigation", "Navigation Error"),
                    FieldOption::new("maintenance", "Maintenance Related"),
                    FieldOption::new("weather", "Weather Related"),
                    FieldOption::new("atc", "ATC Related"),
                    FieldOption::new("other", "Other"),
                ],
            ),
            with_help(
                textarea("afield-6", 6, "Event Description", "Narrative"),
                "Describe what happened in detail",
            ),
            with_help(
                textarea("afield-7", 7, "Contributing Factors", "Narrative"),
                "What factors contributed to this event?",
            ),
            with_help(
                textarea("afield-8", 8, "Actions Taken", "Narrative"),
                "What actions were taken during or after the event?",
            ),
            optional(with_help(
                textarea(
                    "afield-9",
                    9,
                    "Suggestions for Prevention",
                    "Recommendations",
                ),
                "How can similar events be prevented in the future?",
            )),
        ],
        scoring_rules: None,
        last_modified: seed_time(11, 0),
        modified_by: "Safety Manager - John Smith".to_string(),
    }
}

pub fn waiver() -> FormTemplate {
    FormTemplate {
        id: "WAIVER-TEMPLATE-001".to_string(),
        name: "Waiver Request Form".to_string(),
        form_type: FormType::Waiver,
        description: Some("Request operational waivers and exemptions".to_string()),
        fields: vec![
            text("wfield-1", 1, "Requester Name", "Request Information"),
            FieldDraft::new("Requester Email", FieldControl::Email)
                .with_category("Request Information")
                .into_field("wfield-2", 2),
            select(
                "wfield-3",
                3,
                "Waiver Type",
                "Classification",
                vec![
                    FieldOption::new("operational", "Operational Procedure"),
                    FieldOption::new("training", "Training Requirement"),
                    FieldOption::new("currency", "Currency Requirement"),
                    FieldOption::new("equipment", "Equipment Requirement"),
                    FieldOption::new("scheduling", "Scheduling/Rest Requirement"),
                    FieldOption::new("other", "Other"),
                ],
            ),
            select(
                "wfield-4",
                4,
                "Urgency Level",
                "Classification",
                vec![
                    FieldOption::new("routine", "Routine (7+ days)"),
                    FieldOption::new("expedited", "Expedited (3-7 days)"),
                    FieldOption::new("urgent", "Urgent (1-2 days)"),
                    FieldOption::new("emergency", "Emergency (Immediate)"),
                ],
            ),
            with_help(
                textarea("wfield-5", 5, "Regulation/Procedure Being Waived", "Details"),
                "Specify the regulation, SOP, or procedure",
            ),
            with_help(
                textarea("wfield-6", 6, "Reason for Waiver", "Details"),
                "Explain why this waiver is necessary",
            ),
            with_help(
                text("wfield-7", 7, "Duration of Waiver", "Details"),
                "How long should this waiver be effective?",
            ),
            with_help(
                textarea("wfield-8", 8, "Risk Mitigation Plan", "Safety"),
                "How will risks be mitigated during the waiver period?",
            ),
            optional(with_help(
                textarea("wfield-9", 9, "Alternative Actions Considered", "Safety"),
                "What alternatives were considered?",
            )),
        ],
        scoring_rules: None,
        last_modified: seed_time(12, 0),
        modified_by: "Safety Manager - John Smith".to_string(),
    }
}

pub fn audit() -> FormTemplate {
    FormTemplate {
        id: "AUDIT-TEMPLATE-001".to_string(),
        name: "Internal Audit Form".to_string(),
        form_type: FormType::Audit,
        description: Some("Safety management system internal audits".to_string()),
        fields: vec![
            date("aufield-1", 1, "Audit Date", "Audit Information"),
            text("aufield-2", 2, "Lead Auditor", "Audit Information"),
            optional(with_help(
                textarea("aufield-3", 3, "Audit Team Members", "Audit Information"),
                "List additional audit team members",
            )),
            select(
                "aufield-4",
                4,
                "Audit Type",
                "Classification",
                vec![
                    FieldOption::new("sms", "Safety Management System"),
                    FieldOption::new("operational", "Operational Procedures"),
                    FieldOption::new("maintenance", "Maintenance Procedures"),
                    FieldOption::new("training", "Training Program"),
                    FieldOption::new("documentation", "Documentation Review"),
                    FieldOption::new("compliance", "Regulatory Compliance"),
                    FieldOption::new("special", "Special Audit"),
                ],
            ),
            text("aufield-5", 5, "Department/Area Audited", "Classification"),
            with_help(
                textarea("aufield-6", 6, "Audit Scope", "Details"),
                "Define the scope and objectives of this audit",
            ),
            with_help(
                textarea("aufield-7", 7, "Standards/References", "Details"),
                "List applicable regulations, standards, and procedures",
            ),
            with_help(
                textarea("aufield-8", 8, "Findings Summary", "Results"),
                "Summarize audit findings",
            ),
            with_help(
                textarea("aufield-9", 9, "Observations", "Results"),
                "Detailed observations and evidence",
            ),
            optional(with_help(
                textarea("aufield-10", 10, "Non-Conformances", "Results"),
                "List any non-conformances identified",
            )),
            with_help(
                textarea("aufield-11", 11, "Recommendations", "Results"),
                "Recommendations for improvement",
            ),
            select(
                "aufield-12",
                12,
                "Overall Compliance Rating",
                "Results",
                vec![
                    FieldOption::new("excellent", "Excellent - Full Compliance"),
                    FieldOption::new("satisfactory", "Satisfactory - Minor Issues"),
                    FieldOption::new("needs-improvement", "Needs Improvement - Moderate Issues"),
                    FieldOption::new("unsatisfactory", "Unsatisfactory - Major Issues"),
                ],
            ),
        ],
        scoring_rules: None,
        last_modified: seed_time(13, 0),
        modified_by: "Safety Manager - John Smith".to_string(),
    }
}

/// All six seeded templates, in registry order
pub fn all() -> Vec<FormTemplate> {
    vec![frat(), grat(), hazard(), asap(), waiver(), audit()]
}
