//! Application handlers.
//!
//! Command handlers that turn request documents into engine runs.

mod assess_judgments;
mod evaluate_decision;
mod judgment_input;

pub use assess_judgments::{AssessJudgmentsCommand, AssessJudgmentsHandler, AssessJudgmentsResult};
pub use evaluate_decision::{
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult, QualitativeScaleInput,
};
pub use judgment_input::{pairwise, JudgmentInput};
