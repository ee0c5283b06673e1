//! Arrival system: detect cars reaching their target, optionally retarget.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use roadster_core::components::{CarId, VehicleState};
use roadster_core::events::SimEvent;

use crate::world_setup::{random_target, Arrival};

/// Emit `TargetReached` once per target, when a car comes within
/// `arrival_distance`. With `retarget` set, the car is given a fresh random
/// target straight away.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    world_size: Vec2,
    arrival_distance: f32,
    retarget: bool,
    events: &mut Vec<SimEvent>,
) {
    for (_entity, (id, state, arrival)) in
        world.query_mut::<(&CarId, &mut VehicleState, &mut Arrival)>()
    {
        if arrival.reached || state.distance_to_target() > arrival_distance {
            continue;
        }

        arrival.reached = true;
        events.push(SimEvent::TargetReached {
            car: *id,
            target: state.target,
        });

        if retarget {
            state.target = random_target(rng, world_size);
            arrival.reached = false;
            events.push(SimEvent::TargetMoved {
                car: *id,
                target: state.target,
            });
        }
    }
}
