//! Entity spawn factories for setting up the simulation world.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use roadster_core::components::{AppliedInput, CarId, VehicleState};

/// Whether a car has reached its current target. Cleared when the target moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Arrival {
    pub reached: bool,
}

/// Centre of a world of the given size: where cars start and reset to.
pub fn start_position(world_size: Vec2) -> Vec2 {
    world_size * 0.5
}

/// Uniformly random point inside the world.
pub fn random_target(rng: &mut ChaCha8Rng, world_size: Vec2) -> Vec2 {
    Vec2::new(
        rng.gen::<f32>() * world_size.x,
        rng.gen::<f32>() * world_size.y,
    )
}

/// Spawn a car entity with its control source and an initial zero input.
pub fn spawn_car<S: hecs::Component>(
    world: &mut World,
    id: CarId,
    state: VehicleState,
    source: S,
) -> hecs::Entity {
    world.spawn((id, state, source, AppliedInput::default(), Arrival::default()))
}
