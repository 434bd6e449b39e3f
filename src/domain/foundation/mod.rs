//! Foundation module - shared domain primitives.
//!
//! Error types and the state machine trait used across the domain.

mod errors;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use state_machine::StateMachine;
