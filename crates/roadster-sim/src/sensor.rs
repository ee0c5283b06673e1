//! Sensor extraction: the compact observation a controller sees.

use roadster_core::components::VehicleState;
use roadster_core::types::SensorData;

/// Reading of `state` relative to its own target, stamped with `tick`.
pub fn observe(state: &VehicleState, tick: u64) -> SensorData {
    let delta = state.target - state.position;
    SensorData {
        delta_x: delta.x,
        delta_y: delta.y,
        heading_direction: state.direction,
        velocity: state.velocity,
        time: tick,
    }
}
