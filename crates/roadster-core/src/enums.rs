//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which way the autopilot is currently driving toward its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveDirection {
    /// Pursue with the nose toward the target.
    #[default]
    Forward,
    /// Back toward a target that fell behind the car.
    Reverse,
}

/// Where a car's per-tick control input comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlMode {
    /// Polled axis snapshot injected by the surrounding application.
    Human,
    /// Local pursuit controller.
    #[default]
    Autopilot,
    /// Pursuit controller running in another process over UDP.
    Remote,
}

/// Simulation run state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    Paused,
}

impl DriveDirection {
    /// +1 for forward, -1 for reverse.
    pub fn sign(self) -> f32 {
        match self {
            DriveDirection::Forward => 1.0,
            DriveDirection::Reverse => -1.0,
        }
    }
}

impl ControlMode {
    /// Parse a mode name as written in configuration (`autopilot`, `remote`, `human`).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "human" | "manual" => Some(ControlMode::Human),
            "autopilot" | "ai" | "local" => Some(ControlMode::Autopilot),
            "remote" => Some(ControlMode::Remote),
            _ => None,
        }
    }
}
