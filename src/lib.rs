// Riskforms - Risk-assessment form template engine
// Template authoring, scoring, and interchange for flight department safety forms

pub mod access;
pub mod error;
pub mod export;
pub mod models;
pub mod scoring;
pub mod store;

pub use error::{FormError, FormResult};

// Re-export commonly used types
pub use access::Actor;
pub use models::{
    FieldControl, FieldDraft, FieldOption, FormField, FormTemplate, FormType, RiskLevel,
    ScoringRules,
};
pub use scoring::{classify, max_score, score_submission, ScoredSubmission};
pub use store::{Direction, Editor, TemplateStore};
