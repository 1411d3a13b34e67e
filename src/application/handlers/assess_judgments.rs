//! AssessJudgmentsHandler - Command handler for checking one set of judgments.
//!
//! Reports weights and consistency without rejecting on a high ratio, so a
//! user can see how far off the judgments are before revising them.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::judgment_input::{pairwise, JudgmentInput};
use crate::domain::ahp::{AhpEngine, CriterionWeight, JudgmentsAssessed, WeightedJudgments};
use crate::domain::foundation::{AhpError, RunId, Timestamp};

/// Command to assess pairwise judgments between items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessJudgmentsCommand {
    pub items: Vec<String>,
    pub judgments: Vec<JudgmentInput>,
}

/// Result of an assessment.
#[derive(Debug, Clone)]
pub struct AssessJudgmentsResult {
    pub weighted: WeightedJudgments,
    pub event: JudgmentsAssessed,
}

/// Handler for assessing judgments.
pub struct AssessJudgmentsHandler {
    engine: AhpEngine,
}

impl AssessJudgmentsHandler {
    pub fn new(engine: AhpEngine) -> Self {
        Self { engine }
    }

    pub fn handle(&self, cmd: AssessJudgmentsCommand) -> Result<AssessJudgmentsResult, AhpError> {
        let matrix = pairwise(&cmd.items, &cmd.judgments).build()?;
        let weighted = self.engine.assess(&matrix)?;

        let threshold = self.engine.consistency_threshold();
        let acceptable = weighted.consistency.ratio.is_acceptable(threshold);

        let event = JudgmentsAssessed {
            run_id: RunId::new(),
            weights: cmd
                .items
                .iter()
                .zip(weighted.priority.weights())
                .map(|(criterion, &weight)| CriterionWeight {
                    criterion: criterion.clone(),
                    weight,
                })
                .collect(),
            consistency: weighted.consistency.clone(),
            acceptable,
            threshold,
            computed_at: Timestamp::now(),
        };

        info!(
            run_id = %event.run_id,
            ratio = %weighted.consistency.ratio,
            acceptable,
            "Judgments assessed"
        );

        Ok(AssessJudgmentsResult { weighted, event })
    }
}
