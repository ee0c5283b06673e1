//! Simulation engine for roadster.
//!
//! Advances cars with the bicycle-model integrator, extracts sensor
//! readings, owns the hecs world of independent cars, and produces
//! `SimSnapshot`s for a display.

pub mod dynamics;
pub mod engine;
pub mod sensor;
pub mod systems;
pub mod world_setup;

pub use dynamics::step;
pub use engine::{SimConfig, SimulationEngine};
pub use roadster_core as core;
pub use sensor::observe;
