//! Transition table: `(state, trigger) -> next state`.

use super::state::{State, Trigger};
use std::collections::HashMap;

/// Mapping from each configured state to its permitted triggers and their
/// destinations.
///
/// A trigger is permitted in a state iff the state has an entry and that entry
/// maps the trigger. Entries are created by the first [`permit`](Self::permit)
/// for a state and never removed.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, T: Trigger> {
    entries: HashMap<S, HashMap<T, S>>,
}

impl<S: State, T: Trigger> Default for TransitionTable<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> TransitionTable<S, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Permit `trigger` in `from`, leading to `to`.
    ///
    /// Overwrites any earlier destination for the same pair and returns it.
    pub fn permit(&mut self, from: S, trigger: T, to: S) -> Option<S> {
        self.entries.entry(from).or_default().insert(trigger, to)
    }

    /// Destination for `trigger` fired in `from`, if permitted.
    pub fn destination(&self, from: &S, trigger: &T) -> Option<&S> {
        self.entries.get(from).and_then(|triggers| triggers.get(trigger))
    }

    /// Whether `state` has any transitions configured.
    pub fn is_configured(&self, state: &S) -> bool {
        self.entries.contains_key(state)
    }

    /// Triggers permitted from `state`, in no particular order.
    pub fn triggers<'a>(&'a self, state: &S) -> impl Iterator<Item = &'a T> + 'a {
        self.entries
            .get(state)
            .into_iter()
            .flat_map(|triggers| triggers.keys())
    }

    /// Number of configured `(state, trigger)` pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Whether no transitions are configured at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
