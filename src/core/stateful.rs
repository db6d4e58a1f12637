//! The host contract for objects driven by a state machine.

use super::state::State;

/// Capability every host object driven by a [`StateMachine`] implements.
///
/// Where the state lives is up to the host: a field, a database row, a
/// remote record. The machine only ever reads it through `current_state`
/// and writes it through `set_state`.
///
/// # Example
///
/// ```rust
/// use ingreatstate::core::Stateful;
///
/// struct Door {
///     state: &'static str,
/// }
///
/// impl Stateful for Door {
///     type State = &'static str;
///
///     fn current_state(&self) -> Self::State {
///         self.state
///     }
///
///     fn set_state(&mut self, state: Self::State) {
///         self.state = state;
///     }
/// }
///
/// let mut door = Door { state: "closed" };
/// door.set_state("open");
/// assert_eq!(door.current_state(), "open");
/// ```
///
/// [`StateMachine`]: crate::machine::StateMachine
pub trait Stateful {
    /// Identifier type of the host's states.
    type State: State;

    /// Returns the present state. Must be free of side effects.
    fn current_state(&self) -> Self::State;

    /// Persists a new state.
    ///
    /// The machine only passes states it has validated against the
    /// machine's allowed states, so implementations must not fail.
    fn set_state(&mut self, state: Self::State);
}
