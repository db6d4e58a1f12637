//! Core State trait for state identifiers.
//!
//! A state is an opaque identifier for one discrete condition of a host
//! object. The machine only compares states for equality and reports their
//! names; it never interprets them.

use std::fmt::Debug;

/// Trait for state identifiers.
///
/// Implemented for `String` and `&'static str` so plain string states work
/// out of the box, and for any enum declared through [`state_enum!`].
///
/// # Required Traits
///
/// - `Clone`: the machine snapshots the host's current state during dispatch
/// - `PartialEq`: transitions match on state equality
/// - `Debug`: states must be debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use ingreatstate::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum TicketState {
///     Open,
///     Closed,
/// }
///
/// impl State for TicketState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(TicketState::Open.name(), "Open");
/// assert_eq!("in progress".name(), "in progress");
/// ```
///
/// [`state_enum!`]: crate::state_enum
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Get the state's name for display, logging and error messages.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}
