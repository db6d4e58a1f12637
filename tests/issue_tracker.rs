//! End-to-end tests driving an issue tracker host through a machine kind.

use ingreatstate::core::{AllowedStates, Stateful};
use ingreatstate::machine::{InvalidTransition, MachineKind, StateMachine, TransitionRecord};
use ingreatstate::state_enum;

state_enum! {
    enum IssueState {
        Open = "open",
        Closed = "closed",
        InProgress = "in progress",
    }
}

#[derive(Debug)]
struct Issue {
    state: IssueState,
    states_log: Vec<String>,
    commits: Vec<IssueState>,
}

impl Issue {
    fn new(state: IssueState) -> Self {
        Self {
            state,
            states_log: Vec::new(),
            commits: Vec::new(),
        }
    }
}

impl Stateful for Issue {
    type State = IssueState;

    fn current_state(&self) -> Self::State {
        self.state
    }

    fn set_state(&mut self, state: Self::State) {
        self.state = state;
        self.commits.push(state);
    }
}

fn issue_state_machine() -> MachineKind<Issue> {
    let states = AllowedStates::new(IssueState::all()).unwrap();
    MachineKind::<Issue>::new(states).register(|machine| {
        machine
            .add_transition()
            .from(IssueState::InProgress)?
            .to(IssueState::Closed)?
            .actions(|issue: &mut Issue| issue.states_log.push("in progress->closed".into()));

        machine
            .add_transition()
            .from(IssueState::Open)?
            .to(IssueState::InProgress)?
            .actions(|issue: &mut Issue| issue.states_log.push("open->in progress".into()));

        machine
            .add_transition()
            .to(IssueState::Closed)?
            .actions(|issue: &mut Issue| issue.states_log.push("any->closed".into()));

        Ok(())
    })
}

fn machine_in(state: IssueState) -> StateMachine<Issue> {
    StateMachine::new(Issue::new(state), &issue_state_machine()).unwrap()
}

#[test]
fn add_transition_returns_tail_record() {
    let mut machine = machine_in(IssueState::InProgress);

    let tr: *const TransitionRecord<Issue> = machine
        .add_transition()
        .from(IssueState::Open)
        .unwrap()
        .to(IssueState::Closed)
        .unwrap()
        .actions(|issue: &mut Issue| issue.states_log.push("open->closed".into()));

    let tail = machine.transitions().last().unwrap();
    assert!(std::ptr::eq(tail, tr));
    assert_eq!(tail.from_state(), Some(&IssueState::Open));
    assert_eq!(tail.to_state(), Some(&IssueState::Closed));
}

#[test]
fn transition_to_unregistered_target_fails() {
    let mut machine = machine_in(IssueState::Open);

    let result = machine.transition_to(IssueState::Open);

    assert!(matches!(result, Err(InvalidTransition::NotRegistered { .. })));
    assert_eq!(machine.owner().state, IssueState::Open);
    assert!(machine.owner().commits.is_empty());
}

#[test]
fn transition_to_registered_target_runs_all_matches() {
    let mut machine = machine_in(IssueState::InProgress);

    machine.transition_to(IssueState::Closed).unwrap();

    let issue = machine.owner();
    assert_eq!(issue.state, IssueState::Closed);
    assert_eq!(issue.states_log, vec!["in progress->closed", "any->closed"]);
    assert_eq!(issue.commits, vec![IssueState::Closed]);
}

#[test]
fn full_lifecycle() {
    let mut machine = machine_in(IssueState::Open);

    machine.transition_to(IssueState::InProgress).unwrap();
    machine.transition_to(IssueState::Closed).unwrap();

    let issue = machine.into_owner();
    assert_eq!(
        issue.states_log,
        vec!["open->in progress", "in progress->closed", "any->closed"]
    );
    assert_eq!(issue.commits, vec![IssueState::InProgress, IssueState::Closed]);
}

#[test]
fn closed_issue_cannot_reopen() {
    let mut machine = machine_in(IssueState::Closed);

    let open = machine.transition_to(IssueState::Open);
    let in_progress = machine.transition_to(IssueState::InProgress);

    assert!(open.is_err());
    assert!(in_progress.is_err());
    assert_eq!(machine.owner().state, IssueState::Closed);
}

#[test]
fn error_messages_name_the_cause() {
    let mut machine = machine_in(IssueState::Open);

    let err = machine.transition_to(IssueState::Open).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Attempted transition from 'open' to 'open' is not registered in the state machine"
    );
}

#[test]
fn transitions_added_after_construction_take_part_in_dispatch() {
    let mut machine = machine_in(IssueState::Closed);
    machine
        .add_transition()
        .from(IssueState::Closed)
        .unwrap()
        .to(IssueState::Open)
        .unwrap()
        .actions(|issue: &mut Issue| issue.states_log.push("closed->open".into()));

    machine.transition_to(IssueState::Open).unwrap();

    assert_eq!(machine.owner().state, IssueState::Open);
    assert_eq!(machine.owner().states_log, vec!["closed->open"]);
}
