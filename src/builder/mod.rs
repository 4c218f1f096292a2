//! Builder API for declaring transitions and hooks.
//!
//! [`Configuration`] is a handle onto one state of a machine; the
//! [`state_enum!`](crate::state_enum) macro declares state and trigger enums
//! with the bounds the machine needs.

mod configuration;
pub mod macros;

pub use configuration::Configuration;
