//! Decision Matrix Normalizer - Column proportions with cost inversion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Matrix, StructuralError, ValidationError};

/// Direction of a criterion: whether higher raw values are desirable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum Monotonicity {
    /// Higher is better (+1).
    #[default]
    Profit = 1,
    /// Higher is worse (-1).
    Cost = -1,
}

impl Monotonicity {
    /// Creates a Monotonicity from +1 or -1.
    pub fn try_from_i8(value: i8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Monotonicity::Profit),
            -1 => Ok(Monotonicity::Cost),
            _ => Err(ValidationError::invalid_format(
                "monotonicity",
                format!("expected 1 or -1, got {}", value),
            )),
        }
    }

    /// Returns +1 or -1.
    pub fn value(&self) -> i8 {
        *self as i8
    }

    /// Returns true for cost-type criteria.
    pub fn is_cost(&self) -> bool {
        matches!(self, Monotonicity::Cost)
    }
}

impl TryFrom<i8> for Monotonicity {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::try_from_i8(value)
    }
}

impl From<Monotonicity> for i8 {
    fn from(value: Monotonicity) -> Self {
        value.value()
    }
}

/// How a criterion's raw values relate to the decision maker's preference,
/// as chosen when the criterion is declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionCharacteristic {
    #[default]
    HigherIsBetter,
    HigherIsWorse,
    NotApplicable,
}

impl CriterionCharacteristic {
    /// Maps to a monotonicity; only "higher is worse" is cost-type.
    pub fn monotonicity(&self) -> Monotonicity {
        match self {
            CriterionCharacteristic::HigherIsWorse => Monotonicity::Cost,
            CriterionCharacteristic::HigherIsBetter | CriterionCharacteristic::NotApplicable => {
                Monotonicity::Profit
            }
        }
    }
}

/// Turns raw decision matrices into comparable column proportions.
pub struct DecisionMatrixNormalizer;

impl DecisionMatrixNormalizer {
    /// Normalizes a decision matrix (alternatives × criteria).
    ///
    /// # Algorithm
    /// 1. On a copy, replace every entry of a cost column by its reciprocal
    /// 2. Divide every entry by its column sum
    ///
    /// # Errors
    /// - Empty matrix
    /// - Monotonicity list length differs from the column count
    /// - Negative, NaN or infinite entries
    /// - A cost entry whose reciprocal is not finite (zero or subnormal)
    /// - A column summing to zero or overflowing
    pub fn normalize(
        matrix: &Matrix,
        monotonicity: &[Monotonicity],
    ) -> Result<Matrix, StructuralError> {
        if matrix.is_empty() {
            return Err(StructuralError::EmptyMatrix);
        }
        if monotonicity.len() != matrix.cols() {
            return Err(StructuralError::MonotonicityMismatch {
                expected: matrix.cols(),
                actual: monotonicity.len(),
            });
        }

        for (row, values) in matrix.row_iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    return Err(StructuralError::InvalidEntry { row, col, value });
                }
                if value == 0.0 && monotonicity[col].is_cost() {
                    return Err(StructuralError::NonInvertible { row, col });
                }
            }
        }

        let mut working = matrix.clone();
        for (col, direction) in monotonicity.iter().enumerate() {
            if direction.is_cost() {
                working.map_column(col, |value| 1.0 / value);
            }
        }
        for (row, values) in working.row_iter().enumerate() {
            if let Some(col) = values.iter().position(|value| !value.is_finite()) {
                return Err(StructuralError::NonInvertible { row, col });
            }
        }

        let column_sums = working.column_sums();
        for (col, &sum) in column_sums.iter().enumerate() {
            if sum == 0.0 {
                return Err(StructuralError::ZeroColumnSum { column: col });
            }
            if !sum.is_finite() {
                return Err(StructuralError::UnboundedColumnSum { column: col });
            }
            working.map_column(col, |value| value / sum);
        }

        Ok(working)
    }
}
