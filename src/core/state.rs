//! Bounds for state and trigger values.
//!
//! Any value type that can be cloned, compared, hashed and debug-printed can
//! act as a state or a trigger. Both traits are blanket-implemented, so callers
//! bring their own enums (or strings, integers, tuples) without extra glue.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the next state is copied out of the transition table
/// - `Eq` + `Hash`: states key the transition table and hook maps
/// - `Debug`: states are named in log events and errors
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// fn assert_state<S: State>(_: &S) {}
/// assert_state(&Door::Open);
/// assert_state(&"any string works too");
/// ```
pub trait State: Clone + Eq + Hash + Debug {}

impl<S> State for S where S: Clone + Eq + Hash + Debug {}

/// Trait for triggers fired at a state machine.
///
/// Same requirements as [`State`]; the two are kept apart so signatures say
/// which role a type parameter plays.
pub trait Trigger: Clone + Eq + Hash + Debug {}

impl<T> Trigger for T where T: Clone + Eq + Hash + Debug {}
