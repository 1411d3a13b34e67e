//! Judgment Matrix Validator - Diagonal and reciprocity checks.

use serde::{Deserialize, Serialize};

use super::JudgmentMatrix;
use crate::domain::foundation::{Matrix, StructuralError, ACCEPTED_STATUS, REJECTED_STATUS};

/// Verdict of a single structural check: a message and a status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub message: String,
    pub status: u16,
}

impl CheckOutcome {
    /// The passing verdict, `("OK", 200)`.
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
            status: ACCEPTED_STATUS,
        }
    }

    /// A failing verdict carrying the violation's description.
    pub fn rejected(error: &StructuralError) -> Self {
        Self {
            message: error.to_string(),
            status: REJECTED_STATUS,
        }
    }

    /// Returns true if the check passed.
    pub fn is_ok(&self) -> bool {
        self.status == ACCEPTED_STATUS
    }
}

impl From<Result<(), StructuralError>> for CheckOutcome {
    fn from(result: Result<(), StructuralError>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(error) => Self::rejected(&error),
        }
    }
}

/// Structural checks for pairwise-comparison matrices.
///
/// Reciprocity compares `a[i][j]` against `1/a[j][i]` within `tolerance`.
/// The default tolerance of zero is exact equality on the stored floats.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JudgmentMatrixValidator {
    tolerance: f64,
}

impl JudgmentMatrixValidator {
    /// Creates a validator using exact reciprocity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator accepting reciprocity errors up to `tolerance`.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    /// Returns the reciprocity tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Checks squareness and `a[i][j] == 1/a[j][i]` over the upper triangle.
    pub fn check_reciprocity(&self, matrix: &Matrix) -> CheckOutcome {
        self.validate_reciprocity(matrix).into()
    }

    /// Checks that the diagonal is made of the single value 1.
    pub fn check_diagonal(&self, matrix: &Matrix) -> CheckOutcome {
        self.validate_diagonal(matrix).into()
    }

    /// Typed form of [`check_reciprocity`](Self::check_reciprocity).
    ///
    /// Reports the first violating pair in row-major order.
    pub fn validate_reciprocity(&self, matrix: &Matrix) -> Result<(), StructuralError> {
        if !matrix.is_square() {
            return Err(StructuralError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let n = matrix.rows();
        for i in 0..n {
            for j in (i + 1)..n {
                let deviation = (matrix[(i, j)] - 1.0 / matrix[(j, i)]).abs();
                // written as a negation so NaN fails
                if !(deviation <= self.tolerance) {
                    return Err(StructuralError::Reciprocity { i, j });
                }
            }
        }
        Ok(())
    }

    /// Typed form of [`check_diagonal`](Self::check_diagonal).
    pub fn validate_diagonal(&self, matrix: &Matrix) -> Result<(), StructuralError> {
        let diagonal = matrix.diagonal();
        let mut distinct: Vec<f64> = Vec::new();
        for value in diagonal {
            if !distinct.contains(&value) {
                distinct.push(value);
            }
        }

        match distinct.as_slice() {
            [single] if *single == 1.0 => Ok(()),
            _ => Err(StructuralError::Diagonal),
        }
    }

    /// Checks that every judgment is finite and strictly positive.
    ///
    /// Reports the first offending entry in row-major order.
    pub fn validate_entries(&self, matrix: &Matrix) -> Result<(), StructuralError> {
        for (i, row) in matrix.row_iter().enumerate() {
            if let Some(j) = row.iter().position(|&value| !(value.is_finite() && value > 0.0)) {
                return Err(StructuralError::NonPositiveJudgment {
                    i,
                    j,
                    value: row[j],
                });
            }
        }
        Ok(())
    }

    /// Runs the diagonal, reciprocity and entry checks in that order, then
    /// seals the matrix.
    pub fn validate(&self, matrix: Matrix) -> Result<JudgmentMatrix, StructuralError> {
        self.validate_diagonal(&matrix)?;
        self.validate_reciprocity(&matrix)?;
        self.validate_entries(&matrix)?;
        Ok(JudgmentMatrix::from_validated(matrix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<f64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn saaty_3x3() -> Matrix {
        matrix(vec![
            vec![1.0, 5.0, 9.0],
            vec![1.0 / 5.0, 1.0, 5.0],
            vec![1.0 / 9.0, 1.0 / 5.0, 1.0],
        ])
    }

    #[test]
    fn valid_matrix_passes_both_checks() {
        let validator = JudgmentMatrixValidator::new();
        let m = saaty_3x3();

        assert_eq!(validator.check_reciprocity(&m), CheckOutcome::ok());
        assert_eq!(validator.check_diagonal(&m), CheckOutcome::ok());
        assert_eq!(CheckOutcome::ok().message, "OK");
        assert_eq!(CheckOutcome::ok().status, 200);
    }

    #[test]
    fn non_square_fails_reciprocity() {
        let m = matrix(vec![vec![1.0, 2.0, 3.0], vec![0.5, 1.0, 4.0]]);
        let outcome = JudgmentMatrixValidator::new().check_reciprocity(&m);

        assert_eq!(outcome.status, 400);
        assert_eq!(outcome.message, "The matrix is not square (2x3)");
    }

    #[test]
    fn broken_pair_is_named() {
        let m = matrix(vec![
            vec![1.0, 5.0, 9.0],
            vec![1.0 / 5.0, 1.0, 5.0],
            vec![1.0 / 9.0, 1.0 / 4.0, 1.0],
        ]);
        let outcome = JudgmentMatrixValidator::new().check_reciprocity(&m);

        assert!(!outcome.is_ok());
        assert_eq!(
            outcome.message,
            "Reciprocity failure: element a12 must be equal to 1/a21"
        );
    }

    #[test]
    fn reciprocity_is_exact_by_default() {
        let m = matrix(vec![vec![1.0, 3.0], vec![0.3333, 1.0]]);

        assert!(!JudgmentMatrixValidator::new().check_reciprocity(&m).is_ok());
        assert!(JudgmentMatrixValidator::with_tolerance(1e-3)
            .check_reciprocity(&m)
            .is_ok());
    }

    #[test]
    fn nan_never_passes_reciprocity() {
        let m = matrix(vec![vec![1.0, f64::NAN], vec![f64::NAN, 1.0]]);
        let validator = JudgmentMatrixValidator::with_tolerance(1.0);
        assert!(!validator.check_reciprocity(&m).is_ok());
    }

    #[test]
    fn diagonal_with_other_value_fails() {
        let m = matrix(vec![vec![1.0, 2.0], vec![0.5, 2.0]]);
        let outcome = JudgmentMatrixValidator::new().check_diagonal(&m);

        assert_eq!(outcome.status, 400);
        assert_eq!(
            outcome.message,
            "The diagonal of the judgment matrix must be composed only of the element 1"
        );
    }

    #[test]
    fn uniform_diagonal_not_one_fails() {
        let m = matrix(vec![vec![2.0, 1.0], vec![1.0, 2.0]]);
        assert!(!JudgmentMatrixValidator::new().check_diagonal(&m).is_ok());
    }

    #[test]
    fn empty_matrix_fails_diagonal() {
        let m = Matrix::from_rows(vec![]).unwrap();
        let validator = JudgmentMatrixValidator::new();

        assert!(validator.check_reciprocity(&m).is_ok());
        assert!(!validator.check_diagonal(&m).is_ok());
    }

    #[test]
    fn validate_checks_diagonal_first() {
        let m = matrix(vec![vec![2.0, 7.0], vec![7.0, 1.0]]);
        assert_eq!(
            JudgmentMatrixValidator::new().validate(m),
            Err(StructuralError::Diagonal)
        );
    }

    #[test]
    fn negative_reciprocal_pair_is_rejected() {
        // diagonal and reciprocity both hold, yet the weights would go negative
        let m = matrix(vec![vec![1.0, -2.0], vec![-0.5, 1.0]]);
        let validator = JudgmentMatrixValidator::new();

        assert!(validator.check_diagonal(&m).is_ok());
        assert!(validator.check_reciprocity(&m).is_ok());
        assert_eq!(
            validator.validate(m),
            Err(StructuralError::NonPositiveJudgment {
                i: 0,
                j: 1,
                value: -2.0
            })
        );
    }

    #[test]
    fn validate_seals_valid_matrix() {
        let judgment = JudgmentMatrixValidator::new().validate(saaty_3x3()).unwrap();
        assert_eq!(judgment.order(), 3);
        assert_eq!(judgment.as_matrix(), &saaty_3x3());
    }

    #[test]
    fn checks_leave_matrix_untouched() {
        let m = saaty_3x3();
        let before = m.clone();
        let validator = JudgmentMatrixValidator::new();
        validator.check_diagonal(&m);
        validator.check_reciprocity(&m);
        assert_eq!(m, before);
    }
}
