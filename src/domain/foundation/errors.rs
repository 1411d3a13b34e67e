//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Status attached to every rejected check, mirroring a client-side input error.
pub const REJECTED_STATUS: u16 = 400;

/// Status attached to a passing check.
pub const ACCEPTED_STATUS: u16 = 200;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' contains the duplicate value '{value}'")]
    Duplicate { field: String, value: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate value validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Shape and content problems in judgment or decision matrices.
///
/// These are detected before any numeric work and are always fatal to a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StructuralError {
    #[error("Row {row} has {actual} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("The matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("The matrix is empty")]
    EmptyMatrix,

    #[error("The diagonal of the judgment matrix must be composed only of the element 1")]
    Diagonal,

    #[error("Reciprocity failure: element a{i}{j} must be equal to 1/a{j}{i}")]
    Reciprocity { i: usize, j: usize },

    #[error("Judgment a{i}{j} must be a finite, positive number, got {value}")]
    NonPositiveJudgment { i: usize, j: usize, value: f64 },

    #[error("A {order}x{order} judgment matrix has no defined consistency ratio")]
    Degenerate { order: usize },

    #[error("Priority vector has {actual} weights but the matrix has order {expected}")]
    PriorityLength { expected: usize, actual: usize },

    #[error("Priority weight {index} is zero")]
    ZeroWeight { index: usize },

    #[error("Monotonicity list has {actual} entries but the decision matrix has {expected} criteria")]
    MonotonicityMismatch { expected: usize, actual: usize },

    #[error("The judgment matrix covers {criteria} criteria but the decision matrix has {columns} columns")]
    DimensionMismatch { criteria: usize, columns: usize },

    #[error("Entry ({row}, {col}) must be a finite, non-negative number, got {value}")]
    InvalidEntry { row: usize, col: usize, value: f64 },

    #[error("Entry ({row}, {col}) of a cost criterion has no finite reciprocal")]
    NonInvertible { row: usize, col: usize },

    #[error("Column {column} sums to zero and cannot be normalized")]
    ZeroColumnSum { column: usize },

    #[error("Column {column} sums past the largest finite number and cannot be normalized")]
    UnboundedColumnSum { column: usize },

    #[error("No judgment was given comparing '{first}' with '{second}'")]
    MissingJudgment { first: String, second: String },

    #[error("'{label}' cannot be compared with itself")]
    SelfComparison { label: String },

    #[error("'{label}' is not one of the compared items")]
    UnknownItem { label: String },

    #[error("No value was given for alternative '{alternative}' on criterion '{criterion}'")]
    MissingCell {
        alternative: String,
        criterion: String,
    },

    #[error("Criterion '{criterion}' expects a {expected} value for alternative '{alternative}'")]
    CellKindMismatch {
        alternative: String,
        criterion: String,
        expected: &'static str,
    },

    #[error("Expected {expected} alternative labels for the scores, got {actual}")]
    LabelMismatch { expected: usize, actual: usize },

    #[error("Qualitative criterion '{criterion}' has no weighted scale")]
    MissingScale { criterion: String },

    #[error("A scale was given for '{criterion}', which is not a qualitative criterion")]
    UnexpectedScale { criterion: String },

    #[error("Qualitative criterion '{criterion}' has more than one scale")]
    DuplicateScale { criterion: String },

    #[error("Criterion '{criterion}' has no weight for the value '{label}'")]
    UnknownLabel { criterion: String, label: String },
}

/// Every way an AHP run can be rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(
        "The consistency test rejected the judgments for {subject}. \
         The consistency ratio must be below {threshold}%, found {ratio}%"
    )]
    Inconsistent {
        subject: String,
        ratio: f64,
        threshold: f64,
    },

    #[error("Judgment matrices support between {min} and {max} criteria, got {actual}")]
    DomainLimit { actual: usize, min: usize, max: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl AhpError {
    /// Creates a consistency rejection.
    pub fn inconsistent(subject: impl Into<String>, ratio: f64, threshold: f64) -> Self {
        AhpError::Inconsistent {
            subject: subject.into(),
            ratio,
            threshold,
        }
    }

    /// Returns the stable code for this error category.
    pub fn code(&self) -> ErrorCode {
        match self {
            AhpError::Structural(_) => ErrorCode::StructuralError,
            AhpError::Inconsistent { .. } => ErrorCode::ConsistencyError,
            AhpError::DomainLimit { .. } => ErrorCode::DomainLimit,
            AhpError::Validation(_) => ErrorCode::ValidationFailed,
        }
    }

    /// Returns the status reported alongside the message.
    ///
    /// Every rejection is a deterministic input-quality problem.
    pub fn status(&self) -> u16 {
        REJECTED_STATUS
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    StructuralError,
    ConsistencyError,
    DomainLimit,
    ValidationFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::StructuralError => "STRUCTURAL_ERROR",
            ErrorCode::ConsistencyError => "CONSISTENCY_ERROR",
            ErrorCode::DomainLimit => "DOMAIN_LIMIT",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
        };
        write!(f, "{}", s)
    }
}
