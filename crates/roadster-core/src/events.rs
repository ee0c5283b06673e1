//! Events emitted by the simulation for UI and log feedback.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::CarId;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A car came within arrival distance of its target.
    TargetReached { car: CarId, target: Vec2 },
    /// A car's pursuit point moved.
    TargetMoved { car: CarId, target: Vec2 },
    /// A car was put back at its start pose.
    CarReset { car: CarId },
    /// A control source failed; the car kept its previous input this tick.
    ControlFault { car: CarId, message: String },
}
