//! Simulation engine, the per-process tick driver.
//!
//! `SimulationEngine` owns the hecs world of cars, processes operator
//! commands, runs control, movement and arrival in strict order, and
//! produces `SimSnapshot`s. Completely headless, so runs are deterministic
//! and testable. Each car carries its own control source of type `S`;
//! nothing is shared between cars.

use std::collections::{BTreeMap, VecDeque};
use std::marker::PhantomData;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use roadster_core::commands::SimCommand;
use roadster_core::components::{CarId, VehicleState};
use roadster_core::constants::{ARRIVAL_DISTANCE, WORLD_HEIGHT, WORLD_WIDTH};
use roadster_core::control::ControlSource;
use roadster_core::enums::GamePhase;
use roadster_core::events::SimEvent;
use roadster_core::state::SimSnapshot;
use roadster_core::types::SimTime;

use crate::systems;
use crate::world_setup::{self, Arrival};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for target placement. Same seed = same run.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// World extent; cars start at its centre.
    pub world_size: Vec2,
    /// Draw a new random target whenever a car reaches its current one.
    pub retarget_on_arrival: bool,
    /// Distance at which a car counts as arrived. Keep equal to the
    /// autopilot's `PursuitGains::arrival_distance`, or cars stop seeking
    /// without ever reporting arrival.
    pub arrival_distance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            world_size: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            retarget_on_arrival: false,
            arrival_distance: ARRIVAL_DISTANCE,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine<S> {
    world: World,
    cars: BTreeMap<CarId, hecs::Entity>,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    world_size: Vec2,
    retarget_on_arrival: bool,
    arrival_distance: f32,
    rng: ChaCha8Rng,
    next_car_id: u32,
    command_queue: VecDeque<SimCommand>,
    events: Vec<SimEvent>,
    _source: PhantomData<fn() -> S>,
}

impl<S> SimulationEngine<S>
where
    S: ControlSource + hecs::Component,
{
    /// Create a new, empty simulation with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            cars: BTreeMap::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            world_size: config.world_size,
            retarget_on_arrival: config.retarget_on_arrival,
            arrival_distance: config.arrival_distance,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_car_id: 0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            _source: PhantomData,
        }
    }

    /// Spawn a default car at the world centre pursuing a random target.
    pub fn spawn_car(&mut self, source: S) -> CarId {
        let target = world_setup::random_target(&mut self.rng, self.world_size);
        let state = VehicleState::new(world_setup::start_position(self.world_size), target);
        self.spawn_car_with(state, source)
    }

    /// Spawn a car in an explicit starting state.
    pub fn spawn_car_with(&mut self, state: VehicleState, source: S) -> CarId {
        let id = CarId(self.next_car_id);
        self.next_car_id += 1;
        let entity = world_setup::spawn_car(&mut self.world, id, state, source);
        self.cars.insert(id, entity);
        info!(car = id.0, x = state.position.x, y = state.position.y, "car spawned");
        id
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Ids of all cars, in spawn order.
    pub fn car_ids(&self) -> Vec<CarId> {
        self.cars.keys().copied().collect()
    }

    /// Copy of a car's current state.
    pub fn car(&self, id: CarId) -> Option<VehicleState> {
        let entity = *self.cars.get(&id)?;
        self.world.get::<&VehicleState>(entity).ok().map(|state| *state)
    }

    /// Run `f` against a car's control source, e.g. to inject a fresh
    /// human-input snapshot before the next tick.
    pub fn with_source<R>(&mut self, id: CarId, f: impl FnOnce(&mut S) -> R) -> Option<R> {
        let entity = *self.cars.get(&id)?;
        let mut source = self.world.get::<&mut S>(entity).ok()?;
        Some(f(&mut *source))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SetTarget { car, x, y } => {
                self.move_target(car, Vec2::new(x, y));
            }
            SimCommand::RandomizeTarget { car } => {
                let target = world_setup::random_target(&mut self.rng, self.world_size);
                self.move_target(car, target);
            }
            SimCommand::ResetCar { car } => {
                let start = world_setup::start_position(self.world_size);
                let Some(&entity) = self.cars.get(&car) else {
                    return;
                };
                if let Ok((state, arrival)) = self
                    .world
                    .query_one_mut::<(&mut VehicleState, &mut Arrival)>(entity)
                {
                    state.reset(start);
                    arrival.reached = false;
                    self.events.push(SimEvent::CarReset { car });
                }
            }
            SimCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            SimCommand::Pause => {
                if self.phase == GamePhase::Running {
                    self.phase = GamePhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Running;
                }
            }
        }
    }

    fn move_target(&mut self, car: CarId, target: Vec2) {
        let Some(&entity) = self.cars.get(&car) else {
            return;
        };
        if let Ok((state, arrival)) = self
            .world
            .query_one_mut::<(&mut VehicleState, &mut Arrival)>(entity)
        {
            state.target = target;
            arrival.reached = false;
            self.events.push(SimEvent::TargetMoved { car, target });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Sensor extraction + control decision
        systems::control::run::<S>(&mut self.world, self.time.tick, &mut self.events);
        // 2. Dynamics integration
        systems::movement::run(&mut self.world);
        // 3. Arrival detection / retargeting
        systems::arrival::run(
            &mut self.world,
            &mut self.rng,
            self.world_size,
            self.arrival_distance,
            self.retarget_on_arrival,
            &mut self.events,
        );
    }
}
