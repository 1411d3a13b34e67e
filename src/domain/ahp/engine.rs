//! AHP Engine - Orchestrates validation, weighting, consistency and ranking.
//!
//! A run moves through a fixed sequence of states. Any failure ends the run
//! in `Rejected` and no partial result is returned.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{
    ConsistencyChecker, ConsistencyReport, DecisionMatrixNormalizer, JudgmentMatrix,
    JudgmentMatrixValidator, Monotonicity, PriorityVector, PriorityVectorComputer, ResultVector,
    CONSISTENCY_THRESHOLD,
};
use crate::domain::foundation::{AhpError, Matrix, StateMachine, StructuralError};

/// Lifecycle of a single engine run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Init,
    ValidatedJudgment,
    PriorityComputed,
    ConsistencyChecked,
    DecisionNormalized,
    Ranked,
    Rejected,
}

impl StateMachine for RunState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RunState::*;
        matches!(
            (self, target),
            (Init, ValidatedJudgment)
                | (ValidatedJudgment, PriorityComputed)
                | (PriorityComputed, ConsistencyChecked)
                | (ConsistencyChecked, DecisionNormalized)
                | (DecisionNormalized, Ranked)
                | (Init, Rejected)
                | (ValidatedJudgment, Rejected)
                | (PriorityComputed, Rejected)
                | (ConsistencyChecked, Rejected)
                | (DecisionNormalized, Rejected)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RunState::*;
        match self {
            Init => vec![ValidatedJudgment, Rejected],
            ValidatedJudgment => vec![PriorityComputed, Rejected],
            PriorityComputed => vec![ConsistencyChecked, Rejected],
            ConsistencyChecked => vec![DecisionNormalized, Rejected],
            DecisionNormalized => vec![Ranked, Rejected],
            Ranked | Rejected => vec![],
        }
    }
}

/// Inputs for one run, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpRequest {
    /// Pairwise comparisons between criteria.
    pub judgment_matrix: Matrix,
    /// Alternatives × criteria raw values.
    pub decision_matrix: Matrix,
    /// One direction per criterion.
    pub monotonicity: Vec<Monotonicity>,
}

/// A judgment matrix with its accepted weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedJudgments {
    pub matrix: JudgmentMatrix,
    pub priority: PriorityVector,
    pub consistency: ConsistencyReport,
}

/// Artifacts of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AhpOutcome {
    pub priority: PriorityVector,
    pub consistency: ConsistencyReport,
    pub normalized_decision: Matrix,
    pub scores: ResultVector,
}

/// A finished run: the states it visited and its result.
#[derive(Debug, Clone, PartialEq)]
pub struct AhpRun {
    history: Vec<RunState>,
    result: Result<AhpOutcome, AhpError>,
}

impl AhpRun {
    /// Returns the final state (`Ranked` or `Rejected`).
    pub fn state(&self) -> RunState {
        self.history.last().copied().unwrap_or(RunState::Init)
    }

    /// Returns every state visited, starting with `Init`.
    pub fn history(&self) -> &[RunState] {
        &self.history
    }

    /// Returns true if the run reached the given state at any point.
    pub fn visited(&self, state: RunState) -> bool {
        self.history.contains(&state)
    }

    /// Returns the outcome of a successful run.
    pub fn outcome(&self) -> Option<&AhpOutcome> {
        self.result.as_ref().ok()
    }

    /// Returns the rejection of a failed run.
    pub fn rejection(&self) -> Option<&AhpError> {
        self.result.as_ref().err()
    }

    /// Consumes the run, returning its result.
    pub fn into_result(self) -> Result<AhpOutcome, AhpError> {
        self.result
    }
}

/// Records state changes for one run.
struct Progress {
    history: Vec<RunState>,
}

impl Progress {
    fn new() -> Self {
        Self {
            history: vec![RunState::Init],
        }
    }

    fn current(&self) -> RunState {
        self.history.last().copied().unwrap_or(RunState::Init)
    }

    fn advance(&mut self, next: RunState) {
        debug_assert!(
            self.current().can_transition_to(&next),
            "illegal run transition {:?} -> {:?}",
            self.current(),
            next
        );
        debug!("AHP run {:?} -> {:?}", self.current(), next);
        self.history.push(next);
    }
}

/// Runs the Analytic Hierarchy Process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AhpEngine {
    validator: JudgmentMatrixValidator,
    consistency_threshold: f64,
}

impl Default for AhpEngine {
    fn default() -> Self {
        Self::new(JudgmentMatrixValidator::new(), CONSISTENCY_THRESHOLD)
    }
}

impl AhpEngine {
    /// Creates an engine with a validator and a consistency threshold (percent).
    pub fn new(validator: JudgmentMatrixValidator, consistency_threshold: f64) -> Self {
        Self {
            validator,
            consistency_threshold,
        }
    }

    /// Returns the structural validator in use.
    pub fn validator(&self) -> &JudgmentMatrixValidator {
        &self.validator
    }

    /// Returns the consistency threshold in percent.
    pub fn consistency_threshold(&self) -> f64 {
        self.consistency_threshold
    }

    /// Runs the full procedure and returns the scores or the rejection.
    pub fn run(&self, request: &AhpRequest) -> Result<AhpOutcome, AhpError> {
        self.evaluate(request).into_result()
    }

    /// Runs the full procedure, keeping the visited states.
    ///
    /// # Sequence
    /// 1. Diagonal, reciprocity and positive-entry checks
    /// 2. Criterion count within the consistency table
    /// 3. Priority vector
    /// 4. Consistency ratio, rejected at or above the threshold
    /// 5. Decision columns against the criterion count
    /// 6. Decision matrix normalization, which checks the monotonicity length
    ///    and every cell
    /// 7. `scores = normalized · priority`
    pub fn evaluate(&self, request: &AhpRequest) -> AhpRun {
        let mut progress = Progress::new();
        let result = self.execute(request, &mut progress);

        match &result {
            Ok(outcome) => info!(
                "AHP run ranked {} alternatives (CR {})",
                outcome.scores.len(),
                outcome.consistency.ratio
            ),
            Err(error) => {
                warn!(
                    "AHP run rejected at {:?} [{}]: {}",
                    progress.current(),
                    error.code(),
                    error
                );
                progress.advance(RunState::Rejected);
            }
        }

        AhpRun {
            history: progress.history,
            result,
        }
    }

    /// Validates a judgment matrix and derives its weights without applying
    /// the consistency threshold.
    pub fn assess(&self, matrix: &Matrix) -> Result<WeightedJudgments, AhpError> {
        let judgment = self.validate(matrix, &mut Progress::new())?;
        let priority = PriorityVectorComputer::compute(judgment.as_matrix())?;
        let consistency = ConsistencyChecker::report(judgment.as_matrix(), &priority)?;
        Ok(WeightedJudgments {
            matrix: judgment,
            priority,
            consistency,
        })
    }

    /// Validates a judgment matrix, derives its weights and rejects it when
    /// the consistency ratio is not below the threshold.
    ///
    /// `subject` names what was judged in the rejection message.
    pub fn weigh(&self, subject: &str, matrix: &Matrix) -> Result<WeightedJudgments, AhpError> {
        self.weigh_tracked(subject, matrix, &mut Progress::new())
    }

    fn weigh_tracked(
        &self,
        subject: &str,
        matrix: &Matrix,
        progress: &mut Progress,
    ) -> Result<WeightedJudgments, AhpError> {
        let judgment = self.validate(matrix, progress)?;

        let priority = PriorityVectorComputer::compute(judgment.as_matrix())?;
        progress.advance(RunState::PriorityComputed);

        let consistency = ConsistencyChecker::report(judgment.as_matrix(), &priority)?;
        if !consistency.ratio.is_acceptable(self.consistency_threshold) {
            return Err(AhpError::inconsistent(
                subject,
                consistency.ratio.value(),
                self.consistency_threshold,
            ));
        }
        progress.advance(RunState::ConsistencyChecked);

        Ok(WeightedJudgments {
            matrix: judgment,
            priority,
            consistency,
        })
    }

    fn validate(&self, matrix: &Matrix, progress: &mut Progress) -> Result<JudgmentMatrix, AhpError> {
        let judgment = self.validator.validate(matrix.clone())?;

        let order = judgment.order();
        ConsistencyChecker::check_order(order)?;
        if order < 2 {
            return Err(StructuralError::Degenerate { order }.into());
        }
        progress.advance(RunState::ValidatedJudgment);
        Ok(judgment)
    }

    fn execute(&self, request: &AhpRequest, progress: &mut Progress) -> Result<AhpOutcome, AhpError> {
        let decision = &request.decision_matrix;
        let criteria = request.judgment_matrix.rows();

        let weighted = self.weigh_tracked("criteria", &request.judgment_matrix, progress)?;

        if decision.cols() != criteria {
            return Err(StructuralError::DimensionMismatch {
                criteria,
                columns: decision.cols(),
            }
            .into());
        }

        let normalized = DecisionMatrixNormalizer::normalize(decision, &request.monotonicity)?;
        progress.advance(RunState::DecisionNormalized);

        let scores = normalized.mul_vector(weighted.priority.weights())?;
        progress.advance(RunState::Ranked);

        Ok(AhpOutcome {
            priority: weighted.priority,
            consistency: weighted.consistency,
            normalized_decision: normalized,
            scores: ResultVector::from_scores(scores),
        })
    }
}
