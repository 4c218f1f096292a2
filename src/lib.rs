//! Switchyard: a small synchronous state machine
//!
//! States and triggers are plain value types. Transitions and enter/exit hooks
//! are declared per state through a fluent configuration handle, and the
//! machine is driven by firing triggers one at a time.
//!
//! # Core Concepts
//!
//! - **State / Trigger**: any `Clone + Eq + Hash + Debug` value
//! - **Transition**: a configured `(state, trigger) -> next state` pair
//! - **Hooks**: per-state enter and exit callbacks, skipped on self-loops
//! - **Transition action**: an optional callback supplied when firing
//!
//! Firing a trigger that is not permitted from the current state does nothing.
//!
//! # Example
//!
//! ```rust
//! use switchyard::{state_enum, StateMachine};
//! use std::sync::{Arc, Mutex};
//!
//! state_enum! {
//!     enum Line { OnHook, OffHook }
//! }
//!
//! state_enum! {
//!     enum Event { PickedUp, HungUp }
//! }
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let (exit_log, enter_log) = (Arc::clone(&log), Arc::clone(&log));
//!
//! let mut machine = StateMachine::new(Line::OnHook);
//! machine
//!     .configure(Line::OnHook)
//!     .permit(Event::PickedUp, Line::OffHook)
//!     .on_exit(move || exit_log.lock().unwrap().push("exit"));
//! machine
//!     .configure(Line::OffHook)
//!     .permit(Event::HungUp, Line::OnHook)
//!     .on_enter(move || enter_log.lock().unwrap().push("enter"));
//!
//! let action_log = Arc::clone(&log);
//! machine.fire_with(Event::PickedUp, move || action_log.lock().unwrap().push("action"));
//!
//! assert_eq!(machine.state(), &Line::OffHook);
//! assert_eq!(*log.lock().unwrap(), vec!["exit", "action", "enter"]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::Configuration;
pub use crate::core::{State, StateHistory, TransitionRecord, TransitionTable, Trigger};
pub use machine::{FireError, Hook, StateMachine};
