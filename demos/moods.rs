//! Moods
//!
//! This demo walks a small mood machine through direct and event-driven
//! transitions, then navigates its history.
//!
//! Run with: cargo run --example moods

use statebook::{fsm_config, StateMachine};

fn main() {
    println!("=== Moods Example ===\n");

    let config = fsm_config! {
        initial: normal;
        normal { study => busy },
        busy { get_tired => sleeping, get_hungry => hungry },
        hungry { eat => normal },
        sleeping { get_hungry => hungry, get_up => normal },
    }
    .expect("mood configuration is valid");

    let mut machine = StateMachine::new(config).expect("configuration was validated");
    println!("Initial state: {}", machine.state());
    println!("Available events: {:?}", machine.events());

    match machine.change_state("busy") {
        Ok(state) => println!("change_state(busy) -> {state}"),
        Err(e) => println!("change_state(busy) failed: {e}"),
    }
    match machine.trigger("get_hungry") {
        Ok(state) => println!("trigger(get_hungry) -> {state}"),
        Err(e) => println!("trigger(get_hungry) failed: {e}"),
    }
    match machine.trigger("study") {
        Ok(state) => println!("trigger(study) -> {state}"),
        Err(e) => println!("trigger(study) failed: {e}"),
    }

    println!("\nStates reacting to get_hungry: {:?}", machine.states(Some("get_hungry")));
    println!("Path so far: {:?}", machine.history().get_path());

    println!("\nundo() -> {} (now {})", machine.undo(), machine.state());
    println!("undo() -> {} (now {})", machine.undo(), machine.state());
    println!("undo() -> {} (now {})", machine.undo(), machine.state());
    println!("redo() -> {} (now {})", machine.redo(), machine.state());

    println!("\nreset() -> {}", machine.reset().state());
    machine.clear_history();
    println!("after clear_history: undo() -> {}", machine.undo());

    println!("\n=== Example Complete ===");
}
