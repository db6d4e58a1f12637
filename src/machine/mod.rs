//! Transition registry and dispatch.
//!
//! # Key Concepts
//!
//! - **TransitionRecord**: optional source, required target, side effect
//! - **StateMachine**: ordered registry bound to one host, dispatches
//!   `transition_to` by running every matching action and committing once
//! - **MachineKind**: the states and registration function shared by a
//!   family of machines
//! - **ActionTable**: callables addressable by name
//!
//! # Example
//!
//! ```rust
//! use ingreatstate::core::{AllowedStates, Stateful};
//! use ingreatstate::machine::{InvalidTransition, MachineKind, StateMachine};
//!
//! struct Issue {
//!     state: &'static str,
//!     log: Vec<String>,
//! }
//!
//! impl Stateful for Issue {
//!     type State = &'static str;
//!
//!     fn current_state(&self) -> Self::State {
//!         self.state
//!     }
//!
//!     fn set_state(&mut self, state: Self::State) {
//!         self.state = state;
//!     }
//! }
//!
//! let states = AllowedStates::new(["open", "closed", "in progress"]).unwrap();
//! let kind = MachineKind::<Issue>::new(states).register(|machine| {
//!     machine
//!         .add_transition()
//!         .from("in progress")?
//!         .to("closed")?
//!         .actions(|issue: &mut Issue| issue.log.push("in progress->closed".into()));
//!     machine
//!         .add_transition()
//!         .to("closed")?
//!         .actions(|issue: &mut Issue| issue.log.push("any->closed".into()));
//!     Ok(())
//! });
//!
//! let issue = Issue { state: "in progress", log: Vec::new() };
//! let mut machine = StateMachine::new(issue, &kind).unwrap();
//!
//! machine.transition_to("closed").unwrap();
//! assert_eq!(machine.owner().log, vec!["in progress->closed", "any->closed"]);
//!
//! let rejected = machine.transition_to("open");
//! assert!(matches!(rejected, Err(InvalidTransition::NotRegistered { .. })));
//! assert_eq!(machine.owner().state, "closed");
//! ```

mod actions;
mod engine;
mod error;
mod kind;
mod transition;

pub use actions::{ActionTable, TransitionAction};
pub use engine::StateMachine;
pub use error::InvalidTransition;
pub use kind::{MachineKind, Registration};
pub use transition::TransitionRecord;
