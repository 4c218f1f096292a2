//! Fluent configuration of a single state.

use crate::core::{State, Trigger};
use crate::machine::StateMachine;

/// Handle for configuring one state of a [`StateMachine`].
///
/// Obtained from [`StateMachine::configure`]. Nothing is buffered: each call
/// writes into the machine immediately, and the last registration for a slot
/// wins no matter which handle made it.
///
/// # Example
///
/// ```rust
/// use switchyard::StateMachine;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let exits = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&exits);
///
/// let mut machine = StateMachine::new("locked");
/// machine
///     .configure("locked")
///     .permit("coin", "unlocked")
///     .on_exit(move || {
///         counter.fetch_add(1, Ordering::SeqCst);
///     });
///
/// machine.fire("coin");
/// assert_eq!(machine.state(), &"unlocked");
/// assert_eq!(exits.load(Ordering::SeqCst), 1);
/// ```
pub struct Configuration<'m, S: State, T: Trigger> {
    machine: &'m mut StateMachine<S, T>,
    state: S,
}

impl<'m, S: State, T: Trigger> Configuration<'m, S, T> {
    pub(crate) fn new(machine: &'m mut StateMachine<S, T>, state: S) -> Self {
        Self { machine, state }
    }

    /// The state being configured.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Permit `trigger` in this state, leading to `next`.
    ///
    /// `next` may be this same state; firing such a self-loop runs the
    /// transition action but neither hook.
    pub fn permit(self, trigger: T, next: S) -> Self {
        self.machine.permit(self.state.clone(), trigger, next);
        self
    }

    /// Run `action` whenever the machine enters this state from another one.
    pub fn on_enter<F>(self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.machine.set_enter_hook(self.state.clone(), Box::new(action));
        self
    }

    /// Run `action` whenever the machine leaves this state for another one.
    pub fn on_exit<F>(self, action: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.machine.set_exit_hook(self.state.clone(), Box::new(action));
        self
    }
}
