//! Transition records and their validated builder-style configuration.

use crate::core::{AllowedStates, State, Stateful};
use crate::machine::actions::{ActionTable, TransitionAction};
use crate::machine::error::InvalidTransition;
use std::fmt;
use std::sync::Arc;

/// A transition from an optional source state to a target state, with the
/// side effect to run when it is taken.
///
/// Records are created by [`StateMachine::add_transition`] and configured in
/// place. Every configuration method returns the same record so calls chain:
///
/// ```rust
/// # use ingreatstate::core::{AllowedStates, Stateful};
/// # use ingreatstate::machine::{InvalidTransition, MachineKind, StateMachine};
/// # struct Issue { state: &'static str, log: Vec<String> }
/// # impl Stateful for Issue {
/// #     type State = &'static str;
/// #     fn current_state(&self) -> Self::State { self.state }
/// #     fn set_state(&mut self, state: Self::State) { self.state = state; }
/// # }
/// # fn main() -> Result<(), InvalidTransition> {
/// # let kind = MachineKind::<Issue>::new(AllowedStates::new(["open", "closed"]).unwrap());
/// # let mut machine = StateMachine::new(Issue { state: "open", log: Vec::new() }, &kind)?;
/// machine
///     .add_transition()
///     .from("open")?
///     .to("closed")?
///     .actions(|issue: &mut Issue| issue.log.push("open->closed".into()));
/// # Ok(())
/// # }
/// ```
///
/// A `from` of `None` is a wildcard that matches any current state. A record
/// whose target was never set never matches.
///
/// [`StateMachine::add_transition`]: crate::machine::StateMachine::add_transition
pub struct TransitionRecord<H: Stateful> {
    from: Option<H::State>,
    to: Option<H::State>,
    action: Option<TransitionAction<H>>,
    allowed_states: Arc<AllowedStates<H::State>>,
    action_table: Arc<ActionTable<H>>,
}

impl<H: Stateful> TransitionRecord<H> {
    /// Create an empty record validating against `allowed_states`.
    pub fn new(
        allowed_states: Arc<AllowedStates<H::State>>,
        action_table: Arc<ActionTable<H>>,
    ) -> Self {
        Self {
            from: None,
            to: None,
            action: None,
            allowed_states,
            action_table,
        }
    }

    /// Set the source state. `None` makes the record a wildcard.
    pub fn from(
        &mut self,
        state: impl Into<Option<H::State>>,
    ) -> Result<&mut Self, InvalidTransition> {
        let state = state.into();
        if let Some(state) = &state {
            if !self.allowed_states.contains(state) {
                return Err(InvalidTransition::UnknownFromState {
                    state: state.name().to_string(),
                });
            }
        }

        self.from = state;
        Ok(self)
    }

    /// Set the target state.
    pub fn to(&mut self, state: H::State) -> Result<&mut Self, InvalidTransition> {
        if !self.allowed_states.contains(&state) {
            return Err(InvalidTransition::UnknownToState {
                state: state.name().to_string(),
            });
        }

        self.to = Some(state);
        Ok(self)
    }

    /// Set the side effect run against the host when this record matches.
    pub fn actions<F>(&mut self, action: F) -> &mut Self
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Set the side effect to the callable registered under `name` in the
    /// machine's action table.
    pub fn named_action(&mut self, name: &str) -> Result<&mut Self, InvalidTransition> {
        let action = self
            .action_table
            .get(name)
            .ok_or_else(|| InvalidTransition::NotCallable {
                name: name.to_string(),
            })?;

        self.action = Some(Arc::clone(action));
        Ok(self)
    }

    pub fn from_state(&self) -> Option<&H::State> {
        self.from.as_ref()
    }

    pub fn to_state(&self) -> Option<&H::State> {
        self.to.as_ref()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Check whether this record applies to a move from `current` to `target` (pure).
    pub fn matches(&self, current: &H::State, target: &H::State) -> bool {
        if self.to.as_ref() != Some(target) {
            return false;
        }

        self.from.as_ref().is_none_or(|from| from == current)
    }

    /// Run the side effect, if one was configured.
    pub(crate) fn run(&self, owner: &mut H) {
        if let Some(action) = &self.action {
            action(owner);
        }
    }
}

impl<H: Stateful> fmt::Debug for TransitionRecord<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRecord")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}
