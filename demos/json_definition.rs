//! JSON Machine Definition
//!
//! This example loads a machine kind from a JSON document and resolves its
//! actions by name.
//!
//! Key concepts:
//! - `MachineDefinition` parsed with serde_json
//! - `ActionTable` mapping action names to callables
//! - Validation of states and action names at load time
//!
//! Run with: RUST_LOG=debug cargo run --example json_definition

use ingreatstate::core::Stateful;
use ingreatstate::definition::MachineDefinition;
use ingreatstate::machine::{ActionTable, StateMachine};

const ORDER_MACHINE: &str = r#"{
    "states": ["pending", "paid", "shipped", "cancelled"],
    "transitions": [
        { "from": "pending", "to": "paid", "action": "charge" },
        { "from": "paid", "to": "shipped", "action": "ship" },
        { "from": "pending", "to": "cancelled" },
        { "to": "cancelled", "action": "notify" }
    ]
}"#;

#[derive(Debug)]
struct Order {
    state: String,
    events: Vec<&'static str>,
}

impl Stateful for Order {
    type State = String;

    fn current_state(&self) -> Self::State {
        self.state.clone()
    }

    fn set_state(&mut self, state: Self::State) {
        self.state = state;
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== JSON Definition Example ===\n");

    let actions = ActionTable::new()
        .with("charge", |order: &mut Order| order.events.push("card charged"))
        .with("ship", |order: &mut Order| order.events.push("parcel handed over"))
        .with("notify", |order: &mut Order| order.events.push("customer notified"));

    let kind = MachineDefinition::<String>::from_json(ORDER_MACHINE)?.into_kind(actions)?;
    println!("Loaded kind with states {:?}", kind.states().as_slice());

    let order = Order {
        state: "pending".to_string(),
        events: Vec::new(),
    };
    let mut machine = StateMachine::new(order, &kind)?;

    machine.transition_to("paid".to_string())?;
    machine.transition_to("shipped".to_string())?;

    if let Err(err) = machine.transition_to("paid".to_string()) {
        println!("rejected: {err}");
    }

    machine.transition_to("cancelled".to_string())?;

    println!("Final order: {:?}", machine.owner());
    println!("\n=== Example Complete ===");
    Ok(())
}
