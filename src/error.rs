//! Error taxonomy for the template engine
//!
//! Every failure here is a recoverable validation problem surfaced to the
//! caller; none of these abort the process.

use chrono::{DateTime, Utc};

use crate::models::FormType;

/// Result type for all template engine operations
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while authoring, scoring, or exchanging templates
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("field label is required")]
    MissingLabel,

    #[error("field '{field}' requires at least one option")]
    MissingOptions { field: String },

    #[error("field '{field}' has duplicate option value '{value}'")]
    DuplicateOptionValue { field: String, value: String },

    #[error("scoring thresholds must be strictly increasing (low < medium < high < critical)")]
    InvalidThresholds,

    #[error("{form_type} forms do not support scoring")]
    ScoringNotSupported { form_type: FormType },

    #[error("no template registered for form type '{name}'")]
    TemplateNotFound { name: String },

    #[error("field not found: {field_id}")]
    FieldNotFound { field_id: String },

    #[error("option value '{value}' not found on field '{field_id}'")]
    OptionNotFound { field_id: String, value: String },

    #[error("template structure is invalid: {0}")]
    InvalidStructure(String),

    #[error("role '{role}' is not permitted to author templates")]
    RoleDenied { role: String },

    #[error("template was modified at {actual} but caller read it at {expected}")]
    StaleWrite {
        expected: DateTime<Utc>,
        actual: DateTime<Utc>,
    },

    #[error("malformed template document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}
