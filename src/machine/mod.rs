//! The state machine and its firing algorithm.
//!
//! Firing a permitted trigger runs one straight-line sequence:
//!
//! 1. exit hook of the current state (only if the state changes)
//! 2. the fire-time transition action
//! 3. current state update (and history record, when enabled)
//! 4. enter hook of the new state (only if the state changed)
//!
//! Unpermitted triggers are ignored by `fire` and reported by `try_fire`.

mod error;
#[allow(clippy::module_inception)]
mod machine;

pub use error::FireError;
pub use machine::{Hook, StateMachine};
