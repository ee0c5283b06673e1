//! Roadster vehicle and controller processes.
//!
//! Wires the simulation, the autopilot and the remote control channel
//! together behind a fixed-rate game loop thread.

pub mod config;
pub mod game_loop;
pub mod pilot;
pub mod state;

pub use roadster_core as core;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "roadster=info,roadster_app=info,roadster_sim=info,roadster_net=info,roadster_controller=info";

/// Install the fmt subscriber. Call once, from `main`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();
}
