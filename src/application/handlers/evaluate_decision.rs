//! EvaluateDecisionHandler - Command handler for full AHP evaluations.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

use super::judgment_input::{pairwise, JudgmentInput};
use crate::domain::ahp::{
    AhpEngine, AhpOutcome, AhpRequest, AlternativeScore, CellValue, Criterion, CriterionWeight,
    DecisionEvaluated, DecisionTable, QualitativeScale, Ranking,
};
use crate::domain::foundation::{AhpError, RunId, Timestamp};

/// Value labels of one qualitative criterion and the judgments between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeScaleInput {
    pub criterion: String,
    pub values: Vec<String>,
    #[serde(default)]
    pub judgments: Vec<JudgmentInput>,
}

/// Command to evaluate a decision.
///
/// `cells` maps alternative -> criterion -> value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateDecisionCommand {
    pub alternatives: Vec<String>,
    pub criteria: Vec<Criterion>,
    pub criteria_judgments: Vec<JudgmentInput>,
    #[serde(default)]
    pub qualitative_scales: Vec<QualitativeScaleInput>,
    pub cells: HashMap<String, HashMap<String, CellValue>>,
}

impl EvaluateDecisionCommand {
    fn decision_table(&self) -> DecisionTable {
        let mut builder = DecisionTable::builder()
            .alternatives(self.alternatives.clone())
            .criteria(self.criteria.clone());

        for (alternative, row) in &self.cells {
            for (criterion, value) in row {
                builder = builder.cell(alternative.clone(), criterion.clone(), value.clone());
            }
        }
        builder.build()
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone)]
pub struct EvaluateDecisionResult {
    pub outcome: AhpOutcome,
    pub event: DecisionEvaluated,
}

/// Handler for evaluating decisions.
pub struct EvaluateDecisionHandler {
    engine: AhpEngine,
}

impl EvaluateDecisionHandler {
    pub fn new(engine: AhpEngine) -> Self {
        Self { engine }
    }

    pub fn handle(&self, cmd: EvaluateDecisionCommand) -> Result<EvaluateDecisionResult, AhpError> {
        let run_id = RunId::new();

        // 1. Weigh the values of each qualitative criterion
        let table = cmd.decision_table();
        table.check_scale_targets(cmd.qualitative_scales.iter().map(|s| s.criterion.as_str()))?;
        let scales = cmd
            .qualitative_scales
            .iter()
            .map(|input| {
                let judgments = pairwise(&input.values, &input.judgments);
                QualitativeScale::derive(input.criterion.clone(), &judgments, &self.engine)
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!(run_id = %run_id, scales = scales.len(), "Derived qualitative scales");

        // 2. Resolve the table into a decision matrix
        let (decision_matrix, monotonicity) = table.to_decision_matrix(&scales)?;

        // 3. Build the criteria judgment matrix and run the engine
        let criterion_names: Vec<String> = cmd.criteria.iter().map(|c| c.name.clone()).collect();
        let judgment_matrix = pairwise(&criterion_names, &cmd.criteria_judgments).build()?;

        let outcome = self.engine.run(&AhpRequest {
            judgment_matrix,
            decision_matrix,
            monotonicity,
        })?;

        // 4. Label and rank the scores
        let ranking = Ranking::from_scores(&cmd.alternatives, &outcome.scores)?;

        let event = DecisionEvaluated {
            run_id,
            criteria_weights: criterion_names
                .iter()
                .zip(outcome.priority.weights())
                .map(|(criterion, &weight)| CriterionWeight {
                    criterion: criterion.clone(),
                    weight,
                })
                .collect(),
            consistency: outcome.consistency.clone(),
            qualitative_scales: scales,
            scores: cmd
                .alternatives
                .iter()
                .zip(outcome.scores.scores())
                .map(|(alternative, &score)| AlternativeScore {
                    alternative: alternative.clone(),
                    score,
                })
                .collect(),
            best_alternative: ranking.best().map(|r| r.alternative.clone()),
            ranking: ranking.entries().to_vec(),
            computed_at: Timestamp::now(),
        };

        info!(
            run_id = %run_id,
            best = ?event.best_alternative,
            "Decision evaluated"
        );

        Ok(EvaluateDecisionResult { outcome, event })
    }
}
