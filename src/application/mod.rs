//! Application layer - Commands and Handlers.
//!
//! This layer maps labelled request documents onto domain operations.

pub mod handlers;

pub use handlers::{
    AssessJudgmentsCommand, AssessJudgmentsHandler, AssessJudgmentsResult,
    EvaluateDecisionCommand, EvaluateDecisionHandler, EvaluateDecisionResult, JudgmentInput,
    QualitativeScaleInput,
};
