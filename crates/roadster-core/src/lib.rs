//! Core types and definitions for the roadster vehicle simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! vehicle components, control and sensor values, their wire codec,
//! commands, snapshots, events, and constants.
//! It has no dependency on sockets, threads, or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod control;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
pub mod wire;
