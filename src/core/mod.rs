//! Core state types.
//!
//! This module contains the leaf types every machine is built from:
//! - State identifiers via the `State` trait
//! - The host contract via the `Stateful` trait
//! - The fixed list of legal states via `AllowedStates`

mod state;
mod stateful;
mod states;

pub use state::State;
pub use stateful::Stateful;
pub use states::AllowedStates;
