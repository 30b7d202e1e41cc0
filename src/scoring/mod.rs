pub mod engine;

pub use engine::{classify, max_score, score_submission, FieldContribution, ScoredSubmission};
