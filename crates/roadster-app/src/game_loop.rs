//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is built by the caller and moved into the thread, so failures
//! to open a control channel surface before the loop starts. Commands arrive
//! via an `mpsc` channel. Snapshots are stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::info;

use roadster_core::constants::{TICK_RATE, TICK_REPORT_INTERVAL};
use roadster_core::events::SimEvent;
use roadster_core::state::SimSnapshot;
use roadster_sim::engine::SimulationEngine;

use crate::pilot::Pilot;
use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread and register its command sender in
/// `app_state`. With a `tick_limit` the loop ends on its own after that many
/// running ticks.
pub fn spawn_game_loop(
    engine: SimulationEngine<Pilot>,
    app_state: &AppState,
    tick_limit: Option<u64>,
) -> io::Result<JoinHandle<()>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::clone(&app_state.latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("roadster-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot, tick_limit);
        })?;

    if let Ok(mut tx) = app_state.command_tx.lock() {
        *tx = Some(cmd_tx);
    }
    Ok(handle)
}

/// The game loop. Runs until Shutdown, channel disconnect, or the tick limit.
fn run_game_loop(
    mut engine: SimulationEngine<Pilot>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
    tick_limit: Option<u64>,
) {
    let mut next_tick_time = Instant::now();
    let mut report = TickReport::new();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if !apply_command(&mut engine, command) {
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();
        log_events(&snapshot);
        report.record(snapshot.time.tick);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if tick_limit.is_some_and(|limit| engine.time().tick >= limit) {
            info!(tick = engine.time().tick, "tick limit reached");
            return;
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

/// Apply one loop command. Returns false when the loop should stop.
fn apply_command(engine: &mut SimulationEngine<Pilot>, command: GameLoopCommand) -> bool {
    match command {
        GameLoopCommand::Sim(cmd) => engine.queue_command(cmd),
        GameLoopCommand::SetHumanAxes { car, axes } => {
            engine.with_source(car, |pilot| pilot.set_axes(axes));
        }
        GameLoopCommand::Shutdown => return false,
    }
    true
}

fn log_events(snapshot: &SimSnapshot) {
    for event in &snapshot.events {
        match event {
            SimEvent::TargetReached { car, target } => {
                info!(car = car.0, tick = snapshot.time.tick, x = target.x, y = target.y, "target reached");
            }
            SimEvent::TargetMoved { car, target } => {
                info!(car = car.0, x = target.x, y = target.y, "new target");
            }
            SimEvent::CarReset { car } => info!(car = car.0, "car reset"),
            // Already logged by the control system.
            SimEvent::ControlFault { .. } => {}
        }
    }
}

/// Achieved tick rate, logged every `TICK_REPORT_INTERVAL` ticks.
struct TickReport {
    window_start: Instant,
    ticks: u64,
}

impl TickReport {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            ticks: 0,
        }
    }

    /// Count one loop iteration. Returns the rate when a report was logged.
    fn record(&mut self, sim_tick: u64) -> Option<f64> {
        self.ticks += 1;
        if self.ticks < TICK_REPORT_INTERVAL {
            return None;
        }
        let elapsed = self.window_start.elapsed().as_secs_f64();
        let rate = if elapsed > 0.0 {
            self.ticks as f64 / elapsed
        } else {
            f64::INFINITY
        };
        info!(tick = sim_tick, rate, "ticks per second");
        self.window_start = Instant::now();
        self.ticks = 0;
        Some(rate)
    }
}
