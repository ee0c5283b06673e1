//! Error types shared by every control source.

use thiserror::Error;

/// A datagram that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WireError {
    #[error("{kind} packet must be {expected} bytes, got {actual}")]
    Length {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Why a control source could not produce an input this tick.
#[derive(Debug, Error)]
pub enum ControlError {
    /// Socket-layer send or receive failed.
    #[error("transport failure: {0}")]
    Transport(#[from] std::io::Error),
    #[error("malformed packet: {0}")]
    Wire(#[from] WireError),
}
