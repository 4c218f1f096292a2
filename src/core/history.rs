//! Transition history tracking.
//!
//! Machines created with [`StateMachine::with_history`](crate::StateMachine::with_history)
//! append one record per permitted fire, self-loops included.

use super::state::{State, Trigger};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use switchyard::core::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "idle",
///     trigger: "start",
///     to: "running",
///     timestamp: Utc::now(),
/// };
/// assert!(!record.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionRecord<S: State, T: Trigger> {
    /// The state being left
    pub from: S,
    /// The trigger that was fired
    pub trigger: T,
    /// The state being entered
    pub to: S,
    /// When the current state was updated
    pub timestamp: DateTime<Utc>,
}

impl<S: State, T: Trigger> TransitionRecord<S, T> {
    /// Whether the transition led back into the state it came from.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of fired transitions.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.push(TransitionRecord {
///     from: "start",
///     trigger: "go",
///     to: "middle",
///     timestamp: Utc::now(),
/// });
/// history.push(TransitionRecord {
///     from: "middle",
///     trigger: "go",
///     to: "end",
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec![&"start", &"middle", &"end"]);
/// ```
#[derive(Clone, Debug)]
pub struct StateHistory<S: State, T: Trigger> {
    transitions: Vec<TransitionRecord<S, T>>,
}

impl<S: State, T: Trigger> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, T: Trigger> StateHistory<S, T> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a record.
    pub fn push(&mut self, record: TransitionRecord<S, T>) {
        self.transitions.push(record);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first record followed by the `to`
    /// state of every record. Empty when nothing has been recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|record| &record.to));
        path
    }

    /// Time between the first and last record, `None` if empty.
    ///
    /// Clamped to zero if the wall clock went backwards between the two.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        Some(
            last.timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .unwrap_or(Duration::ZERO),
        )
    }

    /// All records, oldest first.
    pub fn transitions(&self) -> &[TransitionRecord<S, T>] {
        &self.transitions
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
