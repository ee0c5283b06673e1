//! Control system: sensor extraction, then one decision per car.
//!
//! A failing control source does not stop the tick. The car re-applies the
//! input it used last tick and a `ControlFault` event is recorded.

use hecs::World;
use tracing::warn;

use roadster_core::components::{AppliedInput, CarId, VehicleState};
use roadster_core::control::ControlSource;
use roadster_core::events::SimEvent;

use crate::sensor::observe;

/// Ask every car's control source for this tick's input.
pub fn run<S>(world: &mut World, current_tick: u64, events: &mut Vec<SimEvent>)
where
    S: ControlSource + hecs::Component,
{
    for (_entity, (id, state, source, applied)) in
        world.query_mut::<(&CarId, &VehicleState, &mut S, &mut AppliedInput)>()
    {
        let sensor = observe(state, current_tick);
        match source.decide(&sensor) {
            Ok(input) => applied.0 = input,
            Err(err) => {
                warn!(car = id.0, tick = current_tick, error = %err, "control source failed, keeping last input");
                events.push(SimEvent::ControlFault {
                    car: *id,
                    message: err.to_string(),
                });
            }
        }
    }
}
