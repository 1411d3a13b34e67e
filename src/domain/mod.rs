//! Domain layer containing the decision algorithm and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (matrix, IDs, timestamps, errors, state machine)
//! - `ahp` - Analytic Hierarchy Process: validation, weighting, consistency, ranking

pub mod ahp;
pub mod foundation;
