//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Consistency threshold must be in (0, 100], got {0}")]
    InvalidConsistencyThreshold(f64),

    #[error("Reciprocity tolerance must be finite and non-negative, got {0}")]
    InvalidReciprocityTolerance(f64),

    #[error("Log filter cannot be empty")]
    EmptyLogLevel,
}
