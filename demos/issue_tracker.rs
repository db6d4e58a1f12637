//! Issue Tracker
//!
//! This example drives an issue through its lifecycle.
//!
//! Key concepts:
//! - Host object implementing `Stateful`
//! - A `MachineKind` registering specific and wildcard transitions
//! - Every matching action runs, then the state is committed once
//! - Unregistered moves are rejected with `InvalidTransition`
//!
//! Run with: RUST_LOG=debug cargo run --example issue_tracker

use ingreatstate::core::{AllowedStates, Stateful};
use ingreatstate::machine::{InvalidTransition, MachineKind, StateMachine};
use ingreatstate::state_enum;

state_enum! {
    enum IssueState {
        Open = "open",
        InProgress = "in progress",
        Closed = "closed",
    }
}

struct Issue {
    id: u64,
    state: IssueState,
    audit: Vec<String>,
}

impl Stateful for Issue {
    type State = IssueState;

    fn current_state(&self) -> Self::State {
        self.state
    }

    fn set_state(&mut self, state: Self::State) {
        self.state = state;
    }
}

fn issue_kind() -> Result<MachineKind<Issue>, Box<dyn std::error::Error>> {
    let states = AllowedStates::new(IssueState::all())?;
    Ok(MachineKind::<Issue>::new(states).register(|machine| {
        machine
            .add_transition()
            .from(IssueState::Open)?
            .to(IssueState::InProgress)?
            .actions(|issue: &mut Issue| {
                issue.audit.push(format!("#{} picked up", issue.id));
            });

        machine
            .add_transition()
            .from(IssueState::InProgress)?
            .to(IssueState::Closed)?
            .actions(|issue: &mut Issue| {
                issue.audit.push(format!("#{} resolved", issue.id));
            });

        machine
            .add_transition()
            .to(IssueState::Closed)?
            .actions(|issue: &mut Issue| {
                issue.audit.push(format!("#{} closed", issue.id));
            });

        Ok(())
    }))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Issue Tracker Example ===\n");

    let kind = issue_kind()?;
    let issue = Issue {
        id: 42,
        state: IssueState::Open,
        audit: Vec::new(),
    };
    let mut machine = StateMachine::new(issue, &kind)?;

    for target in [IssueState::Open, IssueState::InProgress, IssueState::Closed] {
        match machine.transition_to(target) {
            Ok(()) => println!("-> {:?}", machine.owner().state),
            Err(err @ InvalidTransition::NotRegistered { .. }) => println!("rejected: {err}"),
            Err(err) => return Err(err.into()),
        }
    }

    println!("\nAudit trail:");
    for entry in &machine.owner().audit {
        println!("  {entry}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
