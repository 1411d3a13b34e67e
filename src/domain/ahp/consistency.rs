//! Consistency Checker - Saaty's consistency ratio for judgment matrices.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PriorityVector;
use crate::domain::foundation::{AhpError, Matrix, StructuralError};

/// Saaty's random index, indexed by `order - 1`.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.9, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Smallest matrix order covered by the random-index table.
pub const MIN_ORDER: usize = 1;

/// Largest matrix order covered by the random-index table.
pub const MAX_ORDER: usize = RANDOM_INDEX.len();

/// Judgments with a ratio at or above this percentage are inconsistent.
pub const CONSISTENCY_THRESHOLD: f64 = 10.0;

/// Consistency ratio as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsistencyRatio(f64);

impl ConsistencyRatio {
    /// A perfectly consistent set of judgments.
    pub const ZERO: Self = Self(0.0);

    /// Wraps a percentage value.
    pub fn new(percent: f64) -> Self {
        Self(percent)
    }

    /// Returns the percentage value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the ratio is strictly below `threshold`.
    pub fn is_acceptable(&self, threshold: f64) -> bool {
        self.0 < threshold
    }
}

impl fmt::Display for ConsistencyRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

/// Every intermediate of the consistency test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub order: usize,
    pub lambda_max: f64,
    pub consistency_index: f64,
    pub random_index: f64,
    pub ratio: ConsistencyRatio,
}

/// Saaty consistency test.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Looks up the random index for a matrix of the given order.
    pub fn random_index(order: usize) -> Result<f64, AhpError> {
        Self::check_order(order)?;
        Ok(RANDOM_INDEX[order - 1])
    }

    /// Rejects orders outside the random-index table.
    pub fn check_order(order: usize) -> Result<(), AhpError> {
        if (MIN_ORDER..=MAX_ORDER).contains(&order) {
            Ok(())
        } else {
            Err(AhpError::DomainLimit {
                actual: order,
                min: MIN_ORDER,
                max: MAX_ORDER,
            })
        }
    }

    /// Computes the consistency ratio (percentage) of a judgment matrix.
    pub fn consistency_ratio(
        matrix: &Matrix,
        priority: &PriorityVector,
    ) -> Result<ConsistencyRatio, AhpError> {
        Ok(Self::report(matrix, priority)?.ratio)
    }

    /// Runs the consistency test and returns all intermediates.
    ///
    /// # Algorithm
    /// 1. Weight column i of a copy of the matrix by `priority[i]`
    /// 2. Sum each weighted row, divide by the row's own weight (lambda vector)
    /// 3. `lambda_max` = mean of the lambda vector
    /// 4. `CI = (lambda_max - n) / (n - 1)`
    /// 5. `CR = CI / RI(n) * 100`
    ///
    /// # Edge Cases
    /// - n = 2: RI is 0 and any reciprocal 2×2 matrix is consistent, CR = 0
    /// - n = 1: degenerate, rejected
    /// - n = 0 or n > 15: outside the random-index table, rejected
    pub fn report(
        matrix: &Matrix,
        priority: &PriorityVector,
    ) -> Result<ConsistencyReport, AhpError> {
        if !matrix.is_square() {
            return Err(StructuralError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            }
            .into());
        }

        let n = matrix.rows();
        let random_index = Self::random_index(n)?;
        if n < 2 {
            return Err(StructuralError::Degenerate { order: n }.into());
        }
        if priority.len() != n {
            return Err(StructuralError::PriorityLength {
                expected: n,
                actual: priority.len(),
            }
            .into());
        }
        let weights = priority.weights();
        if let Some(index) = weights.iter().position(|&w| w == 0.0) {
            return Err(StructuralError::ZeroWeight { index }.into());
        }

        let mut weighted = matrix.clone();
        for (col, &weight) in weights.iter().enumerate() {
            weighted.map_column(col, |entry| entry * weight);
        }

        let lambda_max = weighted
            .row_sums()
            .iter()
            .zip(weights)
            .map(|(sum, weight)| sum / weight)
            .sum::<f64>()
            / n as f64;

        let order = n as f64;
        let consistency_index = (lambda_max - order) / (order - 1.0);
        let ratio = if random_index == 0.0 {
            ConsistencyRatio::ZERO
        } else {
            ConsistencyRatio::new(consistency_index / random_index * 100.0)
        };

        Ok(ConsistencyReport {
            order: n,
            lambda_max,
            consistency_index,
            random_index,
            ratio,
        })
    }
}
