//! Counter model
//!
//! Life totals, the active player and the preferences that travel with them.
//! Everything here is pure: no host services, no rendering.

pub mod input;
pub mod state;

pub use input::{CounterKey, apply_key};
pub use state::{CounterState, Player};
