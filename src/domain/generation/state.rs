//! Pipeline state machine.
//!
//! Defines the lifecycle states of one pipeline invocation and the only
//! transitions allowed between them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The lifecycle state of a pipeline invocation.
///
/// - `Generating`: waiting on the text generator
/// - `Parsing`: turning raw output into a document
/// - `Auditing`: running the quality gate
/// - `Retrying`: building a repair prompt for the next attempt
/// - `Approved`: terminal, a document passed every rule
/// - `Exhausted`: terminal, budget spent, best attempt returned with a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    #[default]
    Generating,
    Parsing,
    Auditing,
    Retrying,
    Approved,
    Exhausted,
}

impl StateMachine for PipelineState {
    fn valid_transitions(&self) -> Vec<Self> {
        use PipelineState::*;
        match self {
            // A generator failure skips parsing and goes to the retry decision.
            Generating => vec![Parsing, Retrying, Exhausted],
            // A schema error is treated like a failed audit.
            Parsing => vec![Auditing, Retrying, Exhausted],
            Auditing => vec![Approved, Retrying, Exhausted],
            Retrying => vec![Generating],
            Approved => vec![],
            Exhausted => vec![],
        }
    }
}
