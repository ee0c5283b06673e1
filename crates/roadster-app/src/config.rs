//! Process configuration from `ROADSTER_*` environment variables.

use std::env;
use std::num::ParseIntError;

use thiserror::Error;

use roadster_core::enums::ControlMode;
use roadster_net::NetConfig;

pub const CONTROL_MODE_VAR: &str = "ROADSTER_CONTROL_MODE";
pub const SEED_VAR: &str = "ROADSTER_SEED";
pub const TICKS_VAR: &str = "ROADSTER_TICKS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: unknown control mode {value:?} (expected autopilot, remote or human)")]
    InvalidMode { var: &'static str, value: String },
    #[error("{var}: {value:?} is not a non-negative integer")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Who drives the car.
    pub mode: ControlMode,
    /// Seed for target placement.
    pub seed: u64,
    /// Stop after this many ticks; run until shut down when `None`.
    pub ticks: Option<u64>,
    /// Pick a fresh random target whenever the car arrives.
    pub retarget_on_arrival: bool,
    pub net: NetConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: ControlMode::default(),
            seed: 42,
            ticks: None,
            retarget_on_arrival: true,
            net: NetConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unset or blank variables
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self {
            net: NetConfig::from_lookup(&lookup),
            ..Self::default()
        };

        if let Some(value) = get(CONTROL_MODE_VAR) {
            config.mode = ControlMode::parse(&value).ok_or(ConfigError::InvalidMode {
                var: CONTROL_MODE_VAR,
                value,
            })?;
        }
        if let Some(value) = get(SEED_VAR) {
            config.seed = parse_u64(SEED_VAR, value)?;
        }
        if let Some(value) = get(TICKS_VAR) {
            config.ticks = Some(parse_u64(TICKS_VAR, value)?);
        }

        Ok(config)
    }
}

fn parse_u64(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidNumber { var, value, source })
}
