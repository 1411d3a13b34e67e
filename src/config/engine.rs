//! Engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::{AhpEngine, JudgmentMatrixValidator, CONSISTENCY_THRESHOLD};

/// Numeric acceptance settings for AHP runs
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Consistency ratio (percent) at or above which judgments are rejected
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Allowed deviation between a[i][j] and 1/a[j][i]; 0 is exact
    #[serde(default)]
    pub reciprocity_tolerance: f64,
}

impl EngineConfig {
    /// Build an engine from these settings
    pub fn build_engine(&self) -> AhpEngine {
        AhpEngine::new(
            JudgmentMatrixValidator::with_tolerance(self.reciprocity_tolerance),
            self.consistency_threshold,
        )
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let threshold = self.consistency_threshold;
        if !(threshold > 0.0 && threshold <= 100.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(threshold));
        }

        let tolerance = self.reciprocity_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ValidationError::InvalidReciprocityTolerance(tolerance));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            reciprocity_tolerance: 0.0,
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}
