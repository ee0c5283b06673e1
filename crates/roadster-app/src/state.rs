//! State shared between the process front end and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use roadster_core::commands::SimCommand;
use roadster_core::components::CarId;
use roadster_core::state::SimSnapshot;

use crate::pilot::HumanAxes;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Forward to the simulation engine.
    Sim(SimCommand),
    /// New key snapshot for a human-driven car.
    SetHumanAxes { car: CarId, axes: HumanAxes },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles to a running game loop.
///
/// `command_tx` is `None` until the loop has been spawned. The latest
/// snapshot is shared with the loop thread, which replaces it every tick.
pub struct AppState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. False when no loop is listening.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        guard.as_ref().is_some_and(|tx| tx.send(command).is_ok())
    }

    /// Most recent snapshot published by the loop.
    pub fn snapshot(&self) -> Option<SimSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }
}
