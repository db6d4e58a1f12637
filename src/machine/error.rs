//! The error raised by transition configuration and dispatch.

use thiserror::Error;

/// Errors raised when configuring or taking a transition.
///
/// A single kind with one variant per cause, so callers can match on the
/// cause while still handling every failure through one type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTransition {
    #[error("State {state} is not in the list of states (transition source)")]
    UnknownFromState { state: String },

    #[error("State {state} is not in the list of states (transition target)")]
    UnknownToState { state: String },

    #[error("Action '{name}' is not a registered callable")]
    NotCallable { name: String },

    #[error("Attempted transition from '{current}' to '{target}' is not registered in the state machine")]
    NotRegistered { current: String, target: String },
}
