//! Definition error types.

use crate::machine::InvalidTransition;
use thiserror::Error;

/// Errors that can occur when building a machine kind from a definition
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The state list declares no states
    #[error("No states defined. Declare at least one state")]
    NoStates,

    /// The same state appears more than once in the state list
    #[error("State '{0}' is declared more than once")]
    DuplicateState(String),

    /// The JSON document could not be parsed
    #[error("Definition parsing failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A transition entry refers to an unknown state or action
    #[error(transparent)]
    Transition(#[from] InvalidTransition),
}
