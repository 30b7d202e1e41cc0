pub mod field;
pub mod scoring;
pub mod template;

pub use field::{FieldControl, FieldDraft, FieldOption, FormField};
pub use scoring::{RiskLevel, ScoringRules};
pub use template::{FormTemplate, FormType};
