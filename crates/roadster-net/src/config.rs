//! Endpoint configuration read from the environment.

use std::env;

use roadster_core::constants::DEFAULT_CONTROLLER_PORT;

pub const CONTROLLER_ADDR_VAR: &str = "ROADSTER_CONTROLLER_ADDR";
pub const LISTEN_ADDR_VAR: &str = "ROADSTER_LISTEN_ADDR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetConfig {
    /// host:port the vehicle process sends sensor data to.
    pub controller_addr: String,
    /// Address the controller process binds.
    pub listen_addr: String,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            controller_addr: format!("127.0.0.1:{DEFAULT_CONTROLLER_PORT}"),
            listen_addr: format!("0.0.0.0:{DEFAULT_CONTROLLER_PORT}"),
        }
    }
}

impl NetConfig {
    /// Defaults overridden by any of the `ROADSTER_*_ADDR` variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            controller_addr: lookup(CONTROLLER_ADDR_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.controller_addr),
            listen_addr: lookup(LISTEN_ADDR_VAR)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.listen_addr),
        }
    }
}
