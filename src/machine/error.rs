//! Errors reported by the strict firing API.

use thiserror::Error;

/// Why a trigger could not be fired from the current state.
///
/// Only [`StateMachine::try_fire`](crate::StateMachine::try_fire) and
/// [`StateMachine::try_fire_with`](crate::StateMachine::try_fire_with) return
/// this; `fire` ignores unpermitted triggers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FireError {
    #[error("State '{state}' has no transitions configured")]
    StateNotConfigured { state: String },

    #[error("Trigger '{trigger}' is not permitted in state '{state}'")]
    TriggerNotPermitted { state: String, trigger: String },
}
