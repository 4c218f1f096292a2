//! Telephone Line State Machine
//!
//! Drives a telephone line through a call with enter/exit hooks and a
//! transition action, logging each step through `tracing`.
//!
//! Run with: RUST_LOG=debug cargo run --example telephone

use switchyard::{state_enum, StateMachine};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Line {
        OnHook,
        Ringing,
        Connected,
        OffHook,
    }
}

state_enum! {
    enum Call {
        PickedUp,
        CallDialed,
        CallConnected,
        HungUp,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Telephone Line State Machine ===\n");

    let mut machine = StateMachine::with_history(Line::OnHook);

    machine
        .configure(Line::OnHook)
        .permit(Call::PickedUp, Line::OffHook)
        .permit(Call::HungUp, Line::OnHook)
        .on_exit(|| println!("  [exit]  receiver lifted"));

    machine
        .configure(Line::OffHook)
        .permit(Call::CallDialed, Line::Ringing)
        .permit(Call::HungUp, Line::OnHook)
        .on_enter(|| println!("  [enter] dial tone"));

    machine
        .configure(Line::Ringing)
        .permit(Call::CallConnected, Line::Connected)
        .permit(Call::HungUp, Line::OnHook);

    machine
        .configure(Line::Connected)
        .permit(Call::HungUp, Line::OnHook)
        .on_enter(|| println!("  [enter] call connected"))
        .on_exit(|| println!("  [exit]  call ended"));

    machine
        .configure(Line::OnHook)
        .on_enter(|| println!("  [enter] line idle"));

    let script = [
        Call::HungUp,
        Call::CallDialed,
        Call::PickedUp,
        Call::CallDialed,
        Call::CallConnected,
        Call::HungUp,
    ];

    for call in script {
        println!("{} fired in {}", call.name(), machine.state().name());
        if !machine.can_fire(&call) {
            println!("  (not permitted, ignored)");
        }
        machine.fire_with(call, || println!("  [action] {}", call.name()));
    }

    println!("\nFinal state: {}", machine.state().name());

    if let Some(history) = machine.history() {
        let path: Vec<_> = history.get_path().iter().map(|s| s.name()).collect();
        println!("Path: {}", path.join(" -> "));
    }

    println!("\n=== Example Complete ===");
}
