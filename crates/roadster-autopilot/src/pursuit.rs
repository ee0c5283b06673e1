//! Bearing-pursuit control law.
//!
//! A reactive pure-pursuit controller with a reverse-manoeuvring mode for
//! targets that fall behind the car's turning circle. The only state it
//! keeps between calls is the drive direction, held in an explicit
//! `PursuitMemory` owned by the caller (one per car/controller pairing).

use std::f32::consts::{PI, TAU};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use roadster_core::control::ControlSource;
use roadster_core::enums::DriveDirection;
use roadster_core::error::ControlError;
use roadster_core::types::{ControlInput, SensorData};

use crate::gains::PursuitGains;

/// Controller memory that survives across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PursuitMemory {
    pub direction: DriveDirection,
}

/// Everything the law derives from one sensor reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bearing {
    /// World angle of the car-to-target vector.
    pub angle_to_target: f32,
    /// Heading error, wrapped once into (-π, π].
    pub angle_delta: f32,
    pub distance: f32,
    /// Cosine of the heading error.
    pub dot: f32,
}

/// A pursuit controller for one car: gains plus its own memory.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PursuitController {
    pub gains: PursuitGains,
    pub memory: PursuitMemory,
}

/// Run the law with the default gains.
pub fn decide(sensor: &SensorData, memory: &mut PursuitMemory) -> ControlInput {
    decide_with(sensor, memory, &PursuitGains::default())
}

/// Run the law for one reading, updating `memory`'s drive direction.
///
/// Returns a zero input once within `arrival_distance`, and for readings
/// that carry non-finite values or a heading outside (-π, π]. The drive direction only changes while
/// the car is still seeking.
pub fn decide_with(
    sensor: &SensorData,
    memory: &mut PursuitMemory,
    gains: &PursuitGains,
) -> ControlInput {
    if !sensor.is_finite() {
        return ControlInput::ZERO;
    }

    let bearing = bearing(sensor);
    if bearing.distance <= gains.arrival_distance {
        return ControlInput::ZERO;
    }

    // Headings outside (-π, π] can leave the single wrap out of range.
    if bearing.angle_delta.abs() > PI {
        debug!(
            heading = sensor.heading_direction,
            angle_delta = bearing.angle_delta,
            "heading out of range, ignoring reading"
        );
        return ControlInput::ZERO;
    }

    debug_assert!(bearing.dot.is_nan() || bearing.dot.abs() < 1.00001);

    let acceleration_factor = gains.acceleration_factor(bearing.distance, sensor.velocity);
    let turn_factor = gains.turn_factor(bearing.angle_delta.abs());

    let next = next_direction(memory.direction, bearing.dot, gains);
    if next != memory.direction {
        debug!(
            from = ?memory.direction,
            to = ?next,
            dot = bearing.dot,
            distance = bearing.distance,
            "pursuit drive direction switched"
        );
        memory.direction = next;
    }

    let sign = memory.direction.sign();
    let steer_side = if bearing.angle_delta > 0.0 { 1.0 } else { -1.0 };
    ControlInput::from_factors(
        acceleration_factor * sign,
        turn_factor * sign * steer_side,
    )
}

/// Polar form of a reading: bearing error, distance and its cosine.
///
/// `dot` is NaN when the distance is zero; `decide_with` never reads it then.
pub fn bearing(sensor: &SensorData) -> Bearing {
    let angle_to_target = sensor.delta_y.atan2(sensor.delta_x);
    let angle_delta = wrap_once(angle_to_target - sensor.heading_direction);

    let heading = Vec2::from_angle(sensor.heading_direction);
    let distance = sensor.distance();
    let dot = sensor.delta().dot(heading) / distance;

    Bearing {
        angle_to_target,
        angle_delta,
        distance,
        dot,
    }
}

/// Hysteresis switch between forward and reverse pursuit.
///
/// Forward flips to reverse only once the target is almost directly behind;
/// reverse flips back only once it is well ahead.
pub fn next_direction(current: DriveDirection, dot: f32, gains: &PursuitGains) -> DriveDirection {
    match current {
        DriveDirection::Forward if dot < gains.reverse_enter_dot => DriveDirection::Reverse,
        DriveDirection::Reverse if dot > gains.forward_enter_dot => DriveDirection::Forward,
        unchanged => unchanged,
    }
}

/// Single-step wrap into (-π, π]. Inputs are differences of two angles
/// already inside (-π, π], so one correction is enough.
fn wrap_once(angle: f32) -> f32 {
    if angle > PI {
        angle - TAU
    } else if angle < -PI {
        angle + TAU
    } else {
        angle
    }
}

impl PursuitController {
    pub fn new(gains: PursuitGains) -> Self {
        Self {
            gains,
            memory: PursuitMemory::default(),
        }
    }

    pub fn direction(&self) -> DriveDirection {
        self.memory.direction
    }

    /// One step of the law against this controller's own memory.
    pub fn steer(&mut self, sensor: &SensorData) -> ControlInput {
        decide_with(sensor, &mut self.memory, &self.gains)
    }
}

impl ControlSource for PursuitController {
    fn decide(&mut self, sensor: &SensorData) -> Result<ControlInput, ControlError> {
        Ok(self.steer(sensor))
    }
}
