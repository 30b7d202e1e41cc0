//! Form template and form type models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};
use crate::models::{FormField, ScoringRules};

/// The six form kinds managed by the template engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormType {
    #[serde(rename = "FRAT")]
    Frat,
    #[serde(rename = "GRAT")]
    Grat,
    Hazard,
    #[serde(rename = "ASAP")]
    Asap,
    Waiver,
    Audit,
}

impl FormType {
    /// All form types, in registry order
    pub const ALL: [FormType; 6] = [
        FormType::Frat,
        FormType::Grat,
        FormType::Hazard,
        FormType::Asap,
        FormType::Waiver,
        FormType::Audit,
    ];

    /// Wire name, as used in export documents and filenames
    pub fn name(&self) -> &'static str {
        match self {
            FormType::Frat => "FRAT",
            FormType::Grat => "GRAT",
            FormType::Hazard => "Hazard",
            FormType::Asap => "ASAP",
            FormType::Waiver => "Waiver",
            FormType::Audit => "Audit",
        }
    }

    /// Only the two risk assessment tools carry scoring rules
    pub fn has_scoring(&self) -> bool {
        matches!(self, FormType::Frat | FormType::Grat)
    }

    pub fn description(&self) -> &'static str {
        match self {
            FormType::Frat => "Flight Risk Assessment Tool",
            FormType::Grat => "Ground Risk Assessment Tool",
            FormType::Hazard => "Hazard Report Form",
            FormType::Asap => "ASAP Report Form",
            FormType::Waiver => "Waiver Request Form",
            FormType::Audit => "Internal Audit Form",
        }
    }
}

impl std::fmt::Display for FormType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FormType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormError::TemplateNotFound {
                name: s.to_string(),
            })
    }
}

/// The field/option/scoring definition for one form type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTemplate {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub form_type: FormType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fields in display order; `order` values are dense 1..N
    pub fields: Vec<FormField>,

    /// Present only for FRAT/GRAT
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_rules: Option<ScoringRules>,

    /// Version token for optimistic concurrency; stamped on every save
    pub last_modified: DateTime<Utc>,

    pub modified_by: String,
}

impl FormTemplate {
    pub fn field(&self, field_id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn position(&self, field_id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == field_id)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Rewrite `order` values to match the current field sequence
    pub fn renumber(&mut self) {
        for (idx, field) in self.fields.iter_mut().enumerate() {
            field.order = idx as u32 + 1;
        }
    }

    /// Record who changed the template, and when
    pub fn stamp(&mut self, modified_by: impl Into<String>) {
        self.last_modified = Utc::now();
        self.modified_by = modified_by.into();
    }

    /// Structural validation of the whole template: every field passes
    /// field validation, field ids are unique, orders are dense 1..N,
    /// and scoring rules appear only where the form type supports them
    pub fn validate(&self) -> FormResult<()> {
        for (i, field) in self.fields.iter().enumerate() {
            field.validate()?;
            if self.fields[..i].iter().any(|f| f.id == field.id) {
                return Err(FormError::InvalidStructure(format!(
                    "duplicate field id '{}'",
                    field.id
                )));
            }
        }

        let mut orders: Vec<u32> = self.fields.iter().map(|f| f.order).collect();
        orders.sort_unstable();
        if orders
            .iter()
            .enumerate()
            .any(|(idx, &order)| order != idx as u32 + 1)
        {
            return Err(FormError::InvalidStructure(format!(
                "field orders are not dense 1..{}",
                self.fields.len()
            )));
        }

        if let Some(rules) = &self.scoring_rules {
            if !self.form_type.has_scoring() {
                return Err(FormError::ScoringNotSupported {
                    form_type: self.form_type,
                });
            }
            rules.validate()?;
        }

        Ok(())
    }
}
