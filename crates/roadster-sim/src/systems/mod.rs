//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World`. They own no state; all
//! per-car state lives in components.

pub mod arrival;
pub mod control;
pub mod movement;
pub mod snapshot;
