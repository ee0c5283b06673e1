//! Movement system: integrate every car by one tick.

use hecs::World;

use roadster_core::components::{AppliedInput, VehicleState};

use crate::dynamics::step;

/// Apply each car's chosen input to its state.
pub fn run(world: &mut World) {
    for (_entity, (state, applied)) in world.query_mut::<(&mut VehicleState, &AppliedInput)>() {
        *state = step(state, applied.0);
    }
}
