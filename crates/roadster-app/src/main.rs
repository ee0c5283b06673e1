//! Vehicle process: simulates one car driven by a human, the local
//! autopilot, or a remote controller, and prints the final snapshot as JSON.

use tracing::info;

use roadster_app::config::AppConfig;
use roadster_app::game_loop::spawn_game_loop;
use roadster_app::pilot::Pilot;
use roadster_app::state::AppState;
use roadster_sim::engine::{SimConfig, SimulationEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    roadster_app::init_tracing();

    let config = AppConfig::from_env()?;
    info!(mode = ?config.mode, seed = config.seed, ticks = ?config.ticks, "starting roadster");

    let pilot = Pilot::for_mode(config.mode, &config.net)?;
    let mut engine = SimulationEngine::new(SimConfig {
        seed: config.seed,
        retarget_on_arrival: config.retarget_on_arrival,
        ..Default::default()
    });
    engine.spawn_car(pilot);

    let app_state = AppState::new();
    let handle = spawn_game_loop(engine, &app_state, config.ticks)?;
    if handle.join().is_err() {
        return Err("game loop thread panicked".into());
    }

    if let Some(snapshot) = app_state.snapshot() {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}
