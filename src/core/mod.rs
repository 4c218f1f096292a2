//! Core value types for the state machine.
//!
//! - State and trigger bounds via the `State` and `Trigger` traits
//! - The `(state, trigger) -> state` transition table
//! - Transition history records

mod history;
mod state;
mod table;

pub use history::{StateHistory, TransitionRecord};
pub use state::{State, Trigger};
pub use table::TransitionTable;
