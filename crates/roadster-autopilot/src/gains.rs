//! Tunable thresholds of the pursuit law.
//!
//! Consolidates every constant the control law reads so a controller can be
//! retuned without touching the law itself.

use serde::{Deserialize, Serialize};

use roadster_core::constants::*;

/// Gain profile for one pursuit controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PursuitGains {
    /// Distance at or below which the controller outputs zero.
    pub arrival_distance: f32,
    /// Braking starts once distance < this * velocity.
    pub braking_distance_per_speed: f32,
    /// Scale of the cubic braking ease.
    pub braking_ease_gain: f32,
    /// Bearing error (radians) above which steering is at full authority.
    pub turn_ease_threshold: f32,
    /// Scale of the cubic steering ease.
    pub turn_ease_gain: f32,
    /// Forward -> reverse when the bearing cosine falls below this.
    pub reverse_enter_dot: f32,
    /// Reverse -> forward when the bearing cosine rises above this.
    pub forward_enter_dot: f32,
}

impl Default for PursuitGains {
    fn default() -> Self {
        Self {
            arrival_distance: ARRIVAL_DISTANCE,
            braking_distance_per_speed: BRAKING_DISTANCE_PER_SPEED,
            braking_ease_gain: BRAKING_EASE_GAIN,
            turn_ease_threshold: TURN_EASE_THRESHOLD,
            turn_ease_gain: TURN_EASE_GAIN,
            reverse_enter_dot: REVERSE_ENTER_DOT,
            forward_enter_dot: FORWARD_ENTER_DOT,
        }
    }
}

impl PursuitGains {
    /// Cubic braking ease: 1 when far, (d / (k*v))^3 * gain when closing fast.
    pub fn acceleration_factor(&self, distance: f32, velocity: f32) -> f32 {
        let braking_distance = self.braking_distance_per_speed * velocity;
        if distance < braking_distance {
            let ratio = distance / braking_distance;
            ratio * ratio * ratio * self.braking_ease_gain
        } else {
            1.0
        }
    }

    /// Cubic steering ease: reduced authority when nearly aligned.
    pub fn turn_factor(&self, abs_angle_delta: f32) -> f32 {
        if abs_angle_delta < self.turn_ease_threshold {
            let ratio = abs_angle_delta / self.turn_ease_threshold;
            ratio * ratio * ratio * self.turn_ease_gain
        } else {
            1.0
        }
    }
}
