//! Snapshot builder: reads the world and produces a `SimSnapshot`.

use hecs::World;

use roadster_core::components::{AppliedInput, CarId, VehicleState};
use roadster_core::constants::TARGET_RADIUS;
use roadster_core::enums::GamePhase;
use roadster_core::events::SimEvent;
use roadster_core::state::{CarView, SimSnapshot};
use roadster_core::types::SimTime;

/// Build the snapshot for the current tick. Cars are ordered by id.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    let mut cars: Vec<CarView> = world
        .query::<(&CarId, &VehicleState, &AppliedInput)>()
        .iter()
        .map(|(_entity, (id, state, applied))| CarView {
            car: *id,
            position: state.position,
            direction: state.direction,
            velocity: state.velocity,
            front_wheel_angle: state.front_wheel_angle,
            length: state.geometry.length,
            width: state.geometry.width,
            target: state.target,
            target_radius: TARGET_RADIUS,
            distance_to_target: state.distance_to_target(),
            input: applied.0,
        })
        .collect();
    cars.sort_by_key(|view| view.car);

    SimSnapshot {
        time: *time,
        phase,
        cars,
        events,
    }
}
