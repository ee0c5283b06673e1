//! Commands sent from the surrounding application to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::components::CarId;

/// All possible operator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Car management ---
    /// Move a car's pursuit point.
    SetTarget { car: CarId, x: f32, y: f32 },
    /// Place a car's pursuit point at a random spot inside the world.
    RandomizeTarget { car: CarId },
    /// Put a car back at the world centre at rest.
    ResetCar { car: CarId },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
