//! Simulation snapshot, the complete visible state handed to a display each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::CarId;
use crate::enums::GamePhase;
use crate::events::SimEvent;
use crate::types::{ControlInput, SimTime};

/// Complete simulation state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Cars ordered by id.
    pub cars: Vec<CarView>,
    pub events: Vec<SimEvent>,
}

/// One car's pose, as a renderer needs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarView {
    pub car: CarId,
    pub position: Vec2,
    /// Heading (radians).
    pub direction: f32,
    pub velocity: f32,
    pub front_wheel_angle: f32,
    pub length: f32,
    pub width: f32,
    pub target: Vec2,
    pub target_radius: f32,
    pub distance_to_target: f32,
    /// Input applied on this tick.
    pub input: ControlInput,
}

impl SimSnapshot {
    pub fn car(&self, car: CarId) -> Option<&CarView> {
        self.cars.iter().find(|view| view.car == car)
    }
}
