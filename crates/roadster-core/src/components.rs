//! ECS components for hecs car entities.
//!
//! Components are plain data. The physics lives in the sim crate's
//! dynamics module, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::ControlInput;

/// Identifies a car within one simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CarId(pub u32);

/// Body dimensions. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarGeometry {
    pub length: f32,
    pub width: f32,
    /// Half the distance between front and rear axle contact points.
    pub half_wheel_base: f32,
}

/// Handling constants. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarTuning {
    /// Throttle gain.
    pub acceleration: f32,
    /// Steering angle change per tick at full turn axis.
    pub turning_rate: f32,
    /// Maximum steering angle magnitude at zero speed.
    pub turning_span: f32,
    pub rolling_resistance: f32,
    pub breaking_resistance: f32,
}

/// The physical record for one car.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Body centre in world units.
    pub position: Vec2,
    /// Heading of the body centreline (radians).
    pub direction: f32,
    /// Signed forward speed along the heading (negative = reverse).
    pub velocity: f32,
    /// Steering angle relative to the body heading. Persists across ticks.
    pub front_wheel_angle: f32,
    /// Pursuit point the car is steering toward.
    pub target: Vec2,
    pub geometry: CarGeometry,
    pub tuning: CarTuning,
}

/// The control input that was applied to a car on its latest tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedInput(pub ControlInput);

impl CarGeometry {
    /// Body of the given width with the standard length ratio and wheel base.
    pub fn from_width(width: f32) -> Self {
        let length = CAR_LENGTH_PER_WIDTH * width;
        Self {
            length,
            width,
            half_wheel_base: HALF_WHEEL_BASE_RATIO * length,
        }
    }
}

impl Default for CarGeometry {
    fn default() -> Self {
        Self::from_width(CAR_WIDTH)
    }
}

impl Default for CarTuning {
    fn default() -> Self {
        Self {
            acceleration: CAR_ACCELERATION,
            turning_rate: CAR_TURNING_RATE,
            turning_span: CAR_TURNING_SPAN,
            rolling_resistance: CAR_ROLLING_RESISTANCE,
            breaking_resistance: CAR_BREAKING_RESISTANCE,
        }
    }
}

impl VehicleState {
    /// A default car at rest at `position`, heading 0, pursuing `target`.
    pub fn new(position: Vec2, target: Vec2) -> Self {
        Self::with_build(position, target, CarGeometry::default(), CarTuning::default())
    }

    /// A car at rest with explicit geometry and tuning.
    pub fn with_build(position: Vec2, target: Vec2, geometry: CarGeometry, tuning: CarTuning) -> Self {
        Self {
            position,
            direction: 0.0,
            velocity: 0.0,
            front_wheel_angle: 0.0,
            target,
            geometry,
            tuning,
        }
    }

    /// Zero the kinematics and put the car back at `position`.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.direction = 0.0;
        self.velocity = 0.0;
        self.front_wheel_angle = 0.0;
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }
}
