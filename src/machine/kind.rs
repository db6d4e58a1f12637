//! Machine kinds: the fixed states and transition table shared by every
//! machine of one family.

use crate::core::{AllowedStates, Stateful};
use crate::machine::actions::ActionTable;
use crate::machine::engine::StateMachine;
use crate::machine::error::InvalidTransition;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Function that populates a freshly constructed machine via
/// [`StateMachine::add_transition`].
pub type Registration<H> =
    Arc<dyn Fn(&mut StateMachine<H>) -> Result<(), InvalidTransition> + Send + Sync>;

/// Configuration for a family of machines.
///
/// Holds the allowed states, the registration function run once for every
/// machine built from it, and the table of named actions.
///
/// # Example
///
/// ```rust
/// use ingreatstate::core::{AllowedStates, Stateful};
/// use ingreatstate::machine::{MachineKind, StateMachine};
///
/// struct Issue {
///     state: &'static str,
/// }
///
/// impl Stateful for Issue {
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
/// let states = AllowedStates::new(["open", "closed"]).unwrap();
/// let kind = MachineKind::<Issue>::new(states).register(|machine| {
///     machine.add_transition().from("open")?.to("closed")?;
///     Ok(())
/// });
///
/// let mut machine = StateMachine::new(Issue { state: "open" }, &kind).unwrap();
/// machine.transition_to("closed").unwrap();
/// assert_eq!(machine.owner().state, "closed");
/// ```
pub struct MachineKind<H: Stateful> {
    states: Arc<AllowedStates<H::State>>,
    actions: Arc<ActionTable<H>>,
    registration: Option<Registration<H>>,
}

impl<H: Stateful> MachineKind<H> {
    /// Create a kind with no transitions and an empty action table.
    pub fn new(states: AllowedStates<H::State>) -> Self {
        Self {
            states: Arc::new(states),
            actions: Arc::new(ActionTable::new()),
            registration: None,
        }
    }

    /// Set the registration function, replacing any previous one.
    pub fn register<F>(mut self, registration: F) -> Self
    where
        F: Fn(&mut StateMachine<H>) -> Result<(), InvalidTransition> + Send + Sync + 'static,
    {
        self.registration = Some(Arc::new(registration));
        self
    }

    /// Attach the table used to resolve named actions.
    pub fn with_actions(mut self, actions: ActionTable<H>) -> Self {
        self.actions = Arc::new(actions);
        self
    }

    pub fn states(&self) -> &AllowedStates<H::State> {
        &self.states
    }

    pub fn actions(&self) -> &ActionTable<H> {
        &self.actions
    }

    pub(crate) fn shared_states(&self) -> &Arc<AllowedStates<H::State>> {
        &self.states
    }

    pub(crate) fn shared_actions(&self) -> &Arc<ActionTable<H>> {
        &self.actions
    }

    pub(crate) fn register_transitions(
        &self,
        machine: &mut StateMachine<H>,
    ) -> Result<(), InvalidTransition> {
        let Some(registration) = &self.registration else {
            return Ok(());
        };

        registration(&mut *machine)?;
        trace!(
            transitions = machine.transitions().len(),
            "Transitions registered"
        );
        Ok(())
    }
}

impl<H: Stateful> Clone for MachineKind<H> {
    fn clone(&self) -> Self {
        Self {
            states: Arc::clone(&self.states),
            actions: Arc::clone(&self.actions),
            registration: self.registration.clone(),
        }
    }
}

impl<H: Stateful> fmt::Debug for MachineKind<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineKind")
            .field("states", &self.states)
            .field("actions", &self.actions)
            .field("has_registration", &self.registration.is_some())
            .finish()
    }
}
