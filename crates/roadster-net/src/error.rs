//! Socket-layer errors for the remote control channel.

use std::io;

use thiserror::Error;

use roadster_core::error::{ControlError, WireError};

#[derive(Debug, Error)]
pub enum NetError {
    #[error("socket error: {0}")]
    Io(#[from] io::Error),
    /// The configured host:port did not resolve to any address.
    #[error("{addr} did not resolve to a socket address")]
    Resolve { addr: String },
    #[error(transparent)]
    Wire(#[from] WireError),
}

impl From<NetError> for ControlError {
    fn from(err: NetError) -> Self {
        match err {
            NetError::Io(err) => ControlError::Transport(err),
            NetError::Resolve { addr } => ControlError::Transport(io::Error::new(
                io::ErrorKind::AddrNotAvailable,
                format!("{addr} did not resolve to a socket address"),
            )),
            NetError::Wire(err) => ControlError::Wire(err),
        }
    }
}
