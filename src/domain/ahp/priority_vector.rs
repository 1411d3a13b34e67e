//! Priority Vector - Weight extraction from a judgment matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Matrix, StructuralError};

/// Normalized weights, one per compared item, summing to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityVector(Vec<f64>);

impl PriorityVector {
    /// Wraps precomputed weights.
    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    /// Returns the weights in matrix order.
    pub fn weights(&self) -> &[f64] {
        &self.0
    }

    /// Returns the weight at `index`.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sum of all weights (1 up to rounding).
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Consumes the vector, returning the weights.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// Derives priority vectors by the column-normalize-then-average method.
pub struct PriorityVectorComputer;

impl PriorityVectorComputer {
    /// Computes the priority vector of a square matrix.
    ///
    /// # Algorithm
    /// 1. Divide each entry by its column sum (columns then sum to 1)
    /// 2. Average each row of the normalized matrix
    ///
    /// This approximates the principal eigenvector closely enough for
    /// judgment matrices on the Saaty scale.
    ///
    /// # Errors
    /// - Empty or non-square matrix
    /// - A column summing to zero
    pub fn compute(matrix: &Matrix) -> Result<PriorityVector, StructuralError> {
        if matrix.is_empty() {
            return Err(StructuralError::EmptyMatrix);
        }
        if !matrix.is_square() {
            return Err(StructuralError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let column_sums = matrix.column_sums();
        if let Some(column) = column_sums.iter().position(|&sum| sum == 0.0) {
            return Err(StructuralError::ZeroColumnSum { column });
        }

        let n = matrix.cols() as f64;
        let weights = matrix
            .row_iter()
            .map(|row| {
                row.iter()
                    .zip(&column_sums)
                    .map(|(entry, sum)| entry / sum)
                    .sum::<f64>()
                    / n
            })
            .collect();

        Ok(PriorityVector(weights))
    }
}
