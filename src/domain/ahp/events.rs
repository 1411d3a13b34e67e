//! AHP run reports.
//!
//! Published when a run completes. They carry summarized, labelled results
//! rather than the raw matrices, so a collaborator can display them directly.

use serde::{Deserialize, Serialize};

use super::{ConsistencyReport, QualitativeScale, RankedAlternative};
use crate::domain::foundation::{RunId, Timestamp};

/// A criterion with its derived weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub criterion: String,
    pub weight: f64,
}

/// An alternative with its score, in decision-matrix row order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeScore {
    pub alternative: String,
    pub score: f64,
}

/// Published when a full decision has been evaluated and ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionEvaluated {
    /// Unique identifier of this run.
    pub run_id: RunId,
    /// Criterion weights from the criteria judgments.
    pub criteria_weights: Vec<CriterionWeight>,
    /// Consistency of the criteria judgments.
    pub consistency: ConsistencyReport,
    /// Label weights used for qualitative criteria.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub qualitative_scales: Vec<QualitativeScale>,
    /// Scores in alternative declaration order.
    pub scores: Vec<AlternativeScore>,
    /// Alternatives from best to worst.
    pub ranking: Vec<RankedAlternative>,
    /// The best alternative (None if tied for first).
    pub best_alternative: Option<String>,
    /// When the run completed.
    pub computed_at: Timestamp,
}

/// Published when a single set of judgments has been assessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentsAssessed {
    pub run_id: RunId,
    pub weights: Vec<CriterionWeight>,
    pub consistency: ConsistencyReport,
    /// True when the consistency ratio is below the threshold.
    pub acceptable: bool,
    pub threshold: f64,
    pub computed_at: Timestamp,
}
