//! AHP Module - The Analytic Hierarchy Process.
//!
//! Turns pairwise judgments between criteria into weights, checks that the
//! judgments are consistent enough to trust, and scores alternatives
//! against the weighted criteria.
//!
//! # Components
//!
//! - `JudgmentMatrixValidator` - Unit diagonal and reciprocity checks
//! - `PriorityVectorComputer` - Column normalization then row means
//! - `ConsistencyChecker` - Saaty consistency ratio against the random index
//! - `DecisionMatrixNormalizer` - Column proportions with cost inversion
//! - `AhpEngine` - Runs the steps in order and ranks the alternatives
//! - `PairwiseJudgments`, `QualitativeScale`, `DecisionTable` - Labelled inputs
//!
//! # Design Philosophy
//!
//! All computations are pure. Inputs are borrowed and every derived matrix
//! is a fresh allocation, so a caller's data is never modified.

mod consistency;
mod decision_matrix;
mod decision_table;
mod engine;
mod events;
mod judgment_matrix;
mod priority_vector;
mod qualitative;
mod ranking;
mod saaty_scale;
mod validator;

pub use consistency::{
    ConsistencyChecker, ConsistencyRatio, ConsistencyReport, CONSISTENCY_THRESHOLD, MAX_ORDER,
    MIN_ORDER, RANDOM_INDEX,
};
pub use decision_matrix::{CriterionCharacteristic, DecisionMatrixNormalizer, Monotonicity};
pub use decision_table::{CellValue, Criterion, CriterionKind, DecisionTable, DecisionTableBuilder};
pub use engine::{AhpEngine, AhpOutcome, AhpRequest, AhpRun, RunState, WeightedJudgments};
pub use events::{AlternativeScore, CriterionWeight, DecisionEvaluated, JudgmentsAssessed};
pub use judgment_matrix::{pair_count, Judgment, JudgmentMatrix, PairwiseJudgments};
pub use priority_vector::{PriorityVector, PriorityVectorComputer};
pub use qualitative::{LabelWeight, QualitativeScale};
pub use ranking::{RankBand, RankedAlternative, Ranking, ResultVector};
pub use saaty_scale::{SaatyValue, MAX_INTENSITY};
pub use validator::{CheckOutcome, JudgmentMatrixValidator};

pub(crate) use judgment_matrix::check_labels;
