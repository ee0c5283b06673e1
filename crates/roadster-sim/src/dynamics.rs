//! Bicycle-model dynamics integrator.
//!
//! Advances one car by one fixed tick. Order per tick: throttle, steering
//! (increment, clamp, then self-centring), resistance, then the two-axle
//! kinematic step. The ordering determines the trajectory and must not change.

use glam::Vec2;

use roadster_core::components::{CarTuning, VehicleState};
use roadster_core::constants::*;
use roadster_core::types::ControlInput;

/// Next state of `state` under `input`. Geometry and tuning are copied through.
pub fn step(state: &VehicleState, input: ControlInput) -> VehicleState {
    let tuning = &state.tuning;
    let mut next = *state;

    // 1. Throttle
    next.velocity = throttled_velocity(tuning, state.velocity, input);

    // 2. Steering, limited by the speed right after throttle
    next.front_wheel_angle += tuning.turning_rate * input.turn();
    let span = effective_turning_span(tuning, next.velocity);
    next.front_wheel_angle = next.front_wheel_angle.clamp(-span, span);
    if input.turn_axis.unsigned_abs() < STEERING_DEADBAND as u16 {
        next.front_wheel_angle *= STEERING_CENTERING_DECAY;
    }

    // 3-4. Resistance, no clamp: tuning keeps it well below 1
    let resistance = resistance(tuning, &mut next.velocity, next.front_wheel_angle, input);
    next.velocity *= 1.0 - resistance;

    // 5. Kinematics
    let (position, direction) = advance_axles(
        state.position,
        state.direction,
        next.front_wheel_angle,
        next.velocity,
        state.geometry.half_wheel_base,
    );
    next.position = position;
    next.direction = direction;

    next
}

/// Velocity after the throttle phase, the speed the steering clamp is
/// measured against. Throttle is forward-only; reverse comes from the
/// impulse in the resistance phase.
///
/// So `|front_wheel_angle| <= effective_turning_span(throttled_velocity(..))`
/// holds after every step. Against the end-of-tick velocity it can be
/// exceeded slightly while reversing, since the reverse impulse speeds the
/// car up after the clamp.
pub fn throttled_velocity(tuning: &CarTuning, velocity: f32, input: ControlInput) -> f32 {
    if input.acceleration_axis > 0 {
        velocity + tuning.acceleration * input.acceleration()
    } else {
        velocity
    }
}

/// Steering span left at `velocity`, floored at zero (full lockout at speed).
pub fn effective_turning_span(tuning: &CarTuning, velocity: f32) -> f32 {
    (tuning.turning_span - (velocity * STEERING_SPEED_FACTOR).abs()).max(0.0)
}

/// Total velocity fraction to bleed this tick. Applies the reverse impulse
/// to `velocity` directly.
fn resistance(tuning: &CarTuning, velocity: &mut f32, front_wheel_angle: f32, input: ControlInput) -> f32 {
    let mut total = tuning.rolling_resistance;

    let reverse = input.acceleration_axis < 0;
    let breaking = (reverse && *velocity > 0.0) || (!reverse && *velocity < 0.0);
    if breaking {
        total += tuning.breaking_resistance;
    }
    if reverse {
        *velocity -= REVERSE_IMPULSE_FACTOR * tuning.acceleration;
    }

    // Cornering scrub
    total + CORNERING_SCRUB * front_wheel_angle.abs()
}

/// Move the rear axle along the body heading and the front axle along the
/// steered heading, both by `velocity`; the body follows the two contact points.
fn advance_axles(
    center: Vec2,
    direction: f32,
    front_wheel_angle: f32,
    velocity: f32,
    half_wheel_base: f32,
) -> (Vec2, f32) {
    let heading = Vec2::from_angle(direction);
    let steered = Vec2::from_angle(direction + front_wheel_angle);

    let offset = heading * half_wheel_base;
    let rear = center - offset;
    let front = center + offset;

    let new_front = front + steered * velocity;
    let new_rear = rear + heading * velocity;

    let axis = new_front - new_rear;
    ((new_front + new_rear) * 0.5, axis.y.atan2(axis.x))
}
