//! Remote control channel for roadster.
//!
//! A vehicle process sends one `SensorData` datagram per tick to a controller
//! process and polls for the `ControlInput` reply without blocking. When no
//! reply is queued the last received input is reused. The controller process
//! runs the pursuit law on every datagram it receives and answers the sender.

pub mod client;
pub mod config;
pub mod error;
pub mod server;

pub use client::RemoteClient;
pub use config::NetConfig;
pub use error::NetError;
pub use server::ControllerServer;
