//! State machine that dispatches registered transitions against its owner.

use crate::core::{AllowedStates, State, Stateful};
use crate::machine::actions::ActionTable;
use crate::machine::error::InvalidTransition;
use crate::machine::kind::MachineKind;
use crate::machine::transition::TransitionRecord;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Transition registry bound to one host object.
///
/// The machine holds no state of its own: every call to
/// [`transition_to`](Self::transition_to) reads the owner's current state and
/// re-evaluates the whole transition table.
pub struct StateMachine<H: Stateful> {
    owner: H,
    transitions: Vec<TransitionRecord<H>>,
    allowed_states: Arc<AllowedStates<H::State>>,
    action_table: Arc<ActionTable<H>>,
}

impl<H: Stateful> StateMachine<H> {
    /// Bind a machine of the given kind to `owner`.
    ///
    /// The kind's registration function runs exactly once, here. Any error it
    /// returns aborts construction.
    pub fn new(owner: H, kind: &MachineKind<H>) -> Result<Self, InvalidTransition> {
        let mut machine = Self {
            owner,
            transitions: Vec::new(),
            allowed_states: Arc::clone(kind.shared_states()),
            action_table: Arc::clone(kind.shared_actions()),
        };

        kind.register_transitions(&mut machine)?;
        Ok(machine)
    }

    /// Append a new, empty transition and return it for configuration.
    pub fn add_transition(&mut self) -> &mut TransitionRecord<H> {
        self.transitions.push(TransitionRecord::new(
            Arc::clone(&self.allowed_states),
            Arc::clone(&self.action_table),
        ));

        let index = self.transitions.len() - 1;
        trace!(index, "Transition added");
        &mut self.transitions[index]
    }

    /// Move the owner to `target`.
    ///
    /// Runs the action of every registered transition matching the owner's
    /// current state and `target`, in registration order, then commits
    /// `target` on the owner once. When nothing matches the owner is left
    /// untouched.
    pub fn transition_to(&mut self, target: H::State) -> Result<(), InvalidTransition> {
        let current = self.owner.current_state();
        let mut matched = 0usize;

        for transition in self
            .transitions
            .iter()
            .filter(|t| t.matches(&current, &target))
        {
            transition.run(&mut self.owner);
            matched += 1;
        }

        if matched == 0 {
            return Err(InvalidTransition::NotRegistered {
                current: current.name().to_string(),
                target: target.name().to_string(),
            });
        }

        debug!(
            from = current.name(),
            to = target.name(),
            actions = matched,
            "Transition committed"
        );
        self.owner.set_state(target);
        Ok(())
    }

    /// Check whether `transition_to(target)` would succeed right now (pure).
    pub fn can_transition_to(&self, target: &H::State) -> bool {
        let current = self.owner.current_state();
        self.transitions.iter().any(|t| t.matches(&current, target))
    }

    /// The legal states fixed at construction.
    pub fn states(&self) -> &AllowedStates<H::State> {
        &self.allowed_states
    }

    /// Registered transitions in registration order.
    pub fn transitions(&self) -> &[TransitionRecord<H>] {
        &self.transitions
    }

    pub fn owner(&self) -> &H {
        &self.owner
    }

    /// Release the owner, dropping the transition table.
    pub fn into_owner(self) -> H {
        self.owner
    }
}

impl<H: Stateful + fmt::Debug> fmt::Debug for StateMachine<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("owner", &self.owner)
            .field("transitions", &self.transitions)
            .field("allowed_states", &self.allowed_states)
            .finish()
    }
}
