//! State machine that fires triggers against a transition table.

use crate::builder::Configuration;
use crate::core::{State, StateHistory, TransitionRecord, TransitionTable, Trigger};
use crate::machine::error::FireError;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// Enter or exit hook bound to a state.
pub type Hook = Box<dyn FnMut() + Send + 'static>;

/// Synchronous state machine over states `S` and triggers `T`.
///
/// Transitions and hooks are declared through [`configure`](Self::configure),
/// at any point in the machine's life, and triggers are fired one at a time.
///
/// # Example
///
/// ```rust
/// use switchyard::StateMachine;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Light { Off, On }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Switch { Flip }
///
/// let mut machine = StateMachine::new(Light::Off);
/// machine.configure(Light::Off).permit(Switch::Flip, Light::On);
/// machine.configure(Light::On).permit(Switch::Flip, Light::Off);
///
/// machine.fire(Switch::Flip);
/// assert_eq!(machine.state(), &Light::On);
/// ```
pub struct StateMachine<S: State, T: Trigger> {
    current: S,
    transitions: TransitionTable<S, T>,
    on_enter: HashMap<S, Hook>,
    on_exit: HashMap<S, Hook>,
    history: Option<StateHistory<S, T>>,
}

impl<S: State, T: Trigger> StateMachine<S, T> {
    /// Create a machine in `initial`.
    ///
    /// `initial` does not need to appear in any transition.
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            transitions: TransitionTable::new(),
            on_enter: HashMap::new(),
            on_exit: HashMap::new(),
            history: None,
        }
    }

    /// Create a machine in `initial` that records every fired transition.
    pub fn with_history(initial: S) -> Self {
        Self {
            history: Some(StateHistory::new()),
            ..Self::new(initial)
        }
    }

    /// Get current state
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Check whether the machine is currently in `state`
    pub fn is_in(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Get the transition table
    pub fn transitions(&self) -> &TransitionTable<S, T> {
        &self.transitions
    }

    /// Get recorded history, `None` unless built with [`with_history`](Self::with_history)
    pub fn history(&self) -> Option<&StateHistory<S, T>> {
        self.history.as_ref()
    }

    /// Drop every recorded transition. Recording continues afterwards.
    ///
    /// Does nothing on machines built without history.
    pub fn clear_history(&mut self) {
        if let Some(history) = self.history.as_mut() {
            history.clear();
        }
    }

    /// Start configuring `state`.
    ///
    /// Every call writes straight into this machine, so configuring the same
    /// state twice accumulates transitions and overwrites hooks.
    pub fn configure(&mut self, state: S) -> Configuration<'_, S, T> {
        Configuration::new(self, state)
    }

    /// Whether `trigger` is permitted from the current state.
    pub fn can_fire(&self, trigger: &T) -> bool {
        self.transitions.destination(&self.current, trigger).is_some()
    }

    /// Triggers permitted from the current state, in no particular order.
    pub fn permitted_triggers(&self) -> Vec<&T> {
        self.transitions.triggers(&self.current).collect()
    }

    /// Fire `trigger`, ignoring it if it is not permitted.
    pub fn fire(&mut self, trigger: T) {
        self.fire_with(trigger, || {});
    }

    /// Fire `trigger`, running `action` between the exit and enter hooks.
    ///
    /// When the trigger is not permitted nothing happens: the state stays put
    /// and neither the hooks nor `action` run. `action` runs on every permitted
    /// fire, self-loops included, while hooks only run when the state changes.
    pub fn fire_with<F>(&mut self, trigger: T, action: F)
    where
        F: FnOnce(),
    {
        match self.resolve(&trigger) {
            Ok(next) => {
                let next = next.clone();
                self.transition(trigger, next, action);
            }
            Err(err) => {
                trace!(error = %err, "Ignoring trigger");
            }
        }
    }

    /// Fire `trigger`, returning an error if it is not permitted.
    pub fn try_fire(&mut self, trigger: T) -> Result<(), FireError> {
        self.try_fire_with(trigger, || {})
    }

    /// Like [`fire_with`](Self::fire_with), but reports unpermitted triggers.
    pub fn try_fire_with<F>(&mut self, trigger: T, action: F) -> Result<(), FireError>
    where
        F: FnOnce(),
    {
        let next = self.resolve(&trigger)?.clone();
        self.transition(trigger, next, action);
        Ok(())
    }

    pub(crate) fn permit(&mut self, from: S, trigger: T, to: S) {
        trace!(from = ?from, trigger = ?trigger, to = ?to, "Permitting transition");
        self.transitions.permit(from, trigger, to);
    }

    pub(crate) fn set_enter_hook(&mut self, state: S, hook: Hook) {
        trace!(state = ?state, "Registering enter hook");
        self.on_enter.insert(state, hook);
    }

    pub(crate) fn set_exit_hook(&mut self, state: S, hook: Hook) {
        trace!(state = ?state, "Registering exit hook");
        self.on_exit.insert(state, hook);
    }

    fn resolve(&self, trigger: &T) -> Result<&S, FireError> {
        if !self.transitions.is_configured(&self.current) {
            return Err(FireError::StateNotConfigured {
                state: format!("{:?}", self.current),
            });
        }

        self.transitions
            .destination(&self.current, trigger)
            .ok_or_else(|| FireError::TriggerNotPermitted {
                state: format!("{:?}", self.current),
                trigger: format!("{trigger:?}"),
            })
    }

    // Exit hook, action, state update, enter hook. A panic in any step leaves
    // the machine exactly as far along as it got.
    fn transition<F>(&mut self, trigger: T, next: S, action: F)
    where
        F: FnOnce(),
    {
        let changes_state = next != self.current;

        if changes_state {
            if let Some(on_exit) = self.on_exit.get_mut(&self.current) {
                on_exit();
            }
        }

        action();

        let from = std::mem::replace(&mut self.current, next);
        debug!(
            from = ?from,
            trigger = ?trigger,
            to = ?self.current,
            self_loop = !changes_state,
            "Fired transition"
        );

        if let Some(history) = self.history.as_mut() {
            history.push(TransitionRecord {
                from,
                trigger,
                to: self.current.clone(),
                timestamp: Utc::now(),
            });
        }

        if changes_state {
            if let Some(on_enter) = self.on_enter.get_mut(&self.current) {
                on_enter();
            }
        }
    }
}

impl<S: State, T: Trigger> fmt::Debug for StateMachine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("transitions", &self.transitions)
            .field("enter_hooks", &self.on_enter.keys().collect::<Vec<_>>())
            .field("exit_hooks", &self.on_exit.keys().collect::<Vec<_>>())
            .field("history", &self.history.as_ref().map(StateHistory::len))
            .finish()
    }
}
