//! Foundation module - Shared domain primitives.
//!
//! Contains the matrix value type, identifiers, timestamps, the state
//! machine trait and the error taxonomy used by every AHP component.

mod errors;
mod ids;
mod matrix;
mod state_machine;
mod timestamp;

pub use errors::{
    AhpError, ErrorCode, StructuralError, ValidationError, ACCEPTED_STATUS, REJECTED_STATUS,
};
pub use ids::RunId;
pub use matrix::Matrix;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
