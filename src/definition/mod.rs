//! Declarative machine definitions.
//!
//! A definition describes a machine kind as data: the state list and the
//! transitions, with actions referenced by name. Names are resolved against
//! an [`ActionTable`] when the definition is turned into a [`MachineKind`].
//!
//! ```json
//! {
//!   "states": ["open", "closed", "in progress"],
//!   "transitions": [
//!     { "from": "in progress", "to": "closed", "action": "close" },
//!     { "from": "open", "to": "in progress" },
//!     { "to": "closed", "action": "cleanup" }
//!   ]
//! }
//! ```
//!
//! `from` is optional (absent means any state). `action` is optional; an
//! entry without one only permits the move.

use crate::core::{AllowedStates, State, Stateful};
use crate::machine::{ActionTable, InvalidTransition, MachineKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::DefinitionError;

/// One transition entry of a definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionDefinition<S> {
    /// Source state; `None` matches any current state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<S>,

    /// Target state
    pub to: S,

    /// Name of the action in the kind's action table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// Serializable description of a machine kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineDefinition<S> {
    /// Legal states in declaration order
    pub states: Vec<S>,

    /// Transitions in registration order
    #[serde(default = "Vec::new")]
    pub transitions: Vec<TransitionDefinition<S>>,
}

impl<S: State + DeserializeOwned> MachineDefinition<S> {
    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S: State + 'static> MachineDefinition<S> {
    /// Validate the definition and build a machine kind from it.
    ///
    /// Every state and action name is checked here, so machines built from
    /// the returned kind cannot fail registration.
    pub fn into_kind<H>(self, actions: ActionTable<H>) -> Result<MachineKind<H>, DefinitionError>
    where
        H: Stateful<State = S>,
    {
        let states = AllowedStates::new(self.states)?;
        for entry in &self.transitions {
            validate_entry(entry, &states, &actions)?;
        }

        let transitions = self.transitions;
        Ok(MachineKind::new(states)
            .with_actions(actions)
            .register(move |machine| {
                for entry in &transitions {
                    let record = machine.add_transition();
                    record.from(entry.from.clone())?.to(entry.to.clone())?;
                    if let Some(name) = &entry.action {
                        record.named_action(name)?;
                    }
                }
                Ok(())
            }))
    }
}

fn validate_entry<S: State, H>(
    entry: &TransitionDefinition<S>,
    states: &AllowedStates<S>,
    actions: &ActionTable<H>,
) -> Result<(), InvalidTransition> {
    if let Some(from) = &entry.from {
        if !states.contains(from) {
            return Err(InvalidTransition::UnknownFromState {
                state: from.name().to_string(),
            });
        }
    }

    if !states.contains(&entry.to) {
        return Err(InvalidTransition::UnknownToState {
            state: entry.to.name().to_string(),
        });
    }

    match &entry.action {
        Some(name) if !actions.contains(name) => Err(InvalidTransition::NotCallable {
            name: name.clone(),
        }),
        _ => Ok(()),
    }
}
