//! InGreatState: a small finite state machine helper
//!
//! A host object declares a fixed set of states and a list of guarded
//! transitions. Each transition carries a side effect that runs when the
//! transition is taken. All state lives on the host; the machine is a
//! dispatcher over a fixed table.
//!
//! # Core Concepts
//!
//! - **State**: opaque identifiers via the `State` trait (strings or enums)
//! - **Stateful**: the contract a host implements to be driven by a machine
//! - **TransitionRecord**: optional source, required target, side effect
//! - **StateMachine**: runs every matching transition, then commits once
//! - **MachineKind**: states and registration shared by a family of machines
//! - **MachineDefinition**: the same, described as JSON
//!
//! # Example
//!
//! ```rust
//! use ingreatstate::core::{AllowedStates, Stateful};
//! use ingreatstate::machine::{MachineKind, StateMachine};
//! use ingreatstate::state_enum;
//!
//! state_enum! {
//!     enum DoorState {
//!         Open = "open",
//!         Closed = "closed",
//!     }
//! }
//!
//! struct Door {
//!     state: DoorState,
//!     slams: usize,
//! }
//!
//! impl Stateful for Door {
//!     type State = DoorState;
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
//! let states = AllowedStates::new(DoorState::all()).unwrap();
//! let kind = MachineKind::<Door>::new(states).register(|machine| {
//!     machine
//!         .add_transition()
//!         .from(DoorState::Open)?
//!         .to(DoorState::Closed)?
//!         .actions(|door: &mut Door| door.slams += 1);
//!     machine.add_transition().to(DoorState::Open)?;
//!     Ok(())
//! });
//!
//! let mut machine = StateMachine::new(Door { state: DoorState::Open, slams: 0 }, &kind).unwrap();
//! machine.transition_to(DoorState::Closed).unwrap();
//! machine.transition_to(DoorState::Open).unwrap();
//!
//! assert_eq!(machine.owner().state, DoorState::Open);
//! assert_eq!(machine.owner().slams, 1);
//! assert!(machine.transition_to(DoorState::Open).is_ok());
//! ```

mod macros;

pub mod core;
pub mod definition;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{AllowedStates, State, Stateful};
pub use definition::{DefinitionError, MachineDefinition, TransitionDefinition};
pub use machine::{ActionTable, InvalidTransition, MachineKind, StateMachine, TransitionRecord};
