//! Fundamental control, observation, and time types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{AXIS_MAX, AXIS_SCALE, DT};

/// One tick of driver command: two signed 16-bit axes.
///
/// Produced by whichever control source is active and consumed by the
/// dynamics integrator. Wire size is fixed at 4 bytes (see `wire`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlInput {
    /// Positive = throttle forward, negative = reverse/brake.
    pub acceleration_axis: i16,
    /// Positive = steer toward a positive wheel angle.
    pub turn_axis: i16,
}

/// Observation sent toward a controller each tick.
///
/// `delta_x`/`delta_y` are the raw target-minus-car vector; the consumer
/// derives distance and bearing itself. Wire size is fixed at 24 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorData {
    pub delta_x: f32,
    pub delta_y: f32,
    /// Body heading (radians).
    pub heading_direction: f32,
    /// Signed forward speed.
    pub velocity: f32,
    /// Tick counter of the sending simulation.
    pub time: u64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl ControlInput {
    /// No throttle, no steering.
    pub const ZERO: ControlInput = ControlInput {
        acceleration_axis: 0,
        turn_axis: 0,
    };

    pub fn new(acceleration_axis: i16, turn_axis: i16) -> Self {
        Self {
            acceleration_axis,
            turn_axis,
        }
    }

    /// Build an input from normalised factors in [-1, 1].
    pub fn from_factors(acceleration: f32, turn: f32) -> Self {
        Self::new(axis_from_factor(acceleration), axis_from_factor(turn))
    }

    /// Acceleration axis mapped onto [-1, 1).
    pub fn acceleration(&self) -> f32 {
        self.acceleration_axis as f32 / AXIS_SCALE
    }

    /// Turn axis mapped onto [-1, 1).
    pub fn turn(&self) -> f32 {
        self.turn_axis as f32 / AXIS_SCALE
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Scale a normalised factor to a full-scale axis value.
///
/// Rounds to nearest; out-of-range values saturate and NaN maps to 0.
pub fn axis_from_factor(factor: f32) -> i16 {
    (AXIS_MAX as f32 * factor).round() as i16
}

impl SensorData {
    /// Target-minus-car vector.
    pub fn delta(&self) -> Vec2 {
        Vec2::new(self.delta_x, self.delta_y)
    }

    /// Straight-line distance to the target.
    pub fn distance(&self) -> f32 {
        (self.delta_x * self.delta_x + self.delta_y * self.delta_y).sqrt()
    }

    /// Whether every float field is finite.
    pub fn is_finite(&self) -> bool {
        self.delta_x.is_finite()
            && self.delta_y.is_finite()
            && self.heading_direction.is_finite()
            && self.velocity.is_finite()
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
