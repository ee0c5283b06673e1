//! Autopilot for roadster cars.
//!
//! Implements the bearing-pursuit control law with its forward/reverse
//! hysteresis, and the gain profile it is tuned by.

pub mod gains;
pub mod pursuit;

pub use gains::PursuitGains;
pub use pursuit::{decide, decide_with, PursuitController, PursuitMemory};
pub use roadster_core as core;

#[cfg(test)]
mod tests;
