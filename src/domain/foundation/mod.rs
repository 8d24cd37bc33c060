//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the state machine trait used across
//! the document, quality and generation modules.

mod errors;
mod state_machine;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
