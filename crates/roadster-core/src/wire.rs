//! Fixed-layout datagram codec for the remote control channel.
//!
//! Every field is written at a fixed byte offset in little-endian order, so
//! the layout never depends on host struct packing.
//!
//! ```text
//! ControlInput (4 bytes)   SensorData (24 bytes)
//! 0..2  acceleration_axis  0..4   delta_x
//! 2..4  turn_axis          4..8   delta_y
//!                          8..12  heading_direction
//!                          12..16 velocity
//!                          16..24 time
//! ```

use crate::error::WireError;
use crate::types::{ControlInput, SensorData};

/// Encoded size of a `ControlInput`.
pub const CONTROL_INPUT_LEN: usize = 4;

/// Encoded size of a `SensorData`: four f32 fields and a u64 tick.
pub const SENSOR_DATA_LEN: usize = 24;

impl ControlInput {
    pub fn to_bytes(&self) -> [u8; CONTROL_INPUT_LEN] {
        let mut buf = [0u8; CONTROL_INPUT_LEN];
        buf[0..2].copy_from_slice(&self.acceleration_axis.to_le_bytes());
        buf[2..4].copy_from_slice(&self.turn_axis.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, WireError> {
        let buf: &[u8; CONTROL_INPUT_LEN] = exact(buf, "control input")?;
        Ok(Self {
            acceleration_axis: i16::from_le_bytes([buf[0], buf[1]]),
            turn_axis: i16::from_le_bytes([buf[2], buf[3]]),
        })
    }
}

impl SensorData {
    pub fn to_bytes(&self) -> [u8; SENSOR_DATA_LEN] {
        let mut buf = [0u8; SENSOR_DATA_LEN];
        buf[0..4].copy_from_slice(&self.delta_x.to_le_bytes());
        buf[4..8].copy_from_slice(&self.delta_y.to_le_bytes());
        buf[8..12].copy_from_slice(&self.heading_direction.to_le_bytes());
        buf[12..16].copy_from_slice(&self.velocity.to_le_bytes());
        buf[16..24].copy_from_slice(&self.time.to_le_bytes());
        buf
    }

    pub fn from_bytes(buf: &[u8]) -> Result<Self, WireError> {
        let buf: &[u8; SENSOR_DATA_LEN] = exact(buf, "sensor data")?;
        let mut time = [0u8; 8];
        time.copy_from_slice(&buf[16..24]);
        Ok(Self {
            delta_x: read_f32(buf, 0),
            delta_y: read_f32(buf, 4),
            heading_direction: read_f32(buf, 8),
            velocity: read_f32(buf, 12),
            time: u64::from_le_bytes(time),
        })
    }
}

/// View `buf` as exactly `N` bytes or report the size mismatch.
fn exact<'a, const N: usize>(buf: &'a [u8], kind: &'static str) -> Result<&'a [u8; N], WireError> {
    buf.try_into().map_err(|_| WireError::Length {
        kind,
        expected: N,
        actual: buf.len(),
    })
}

fn read_f32(buf: &[u8], offset: usize) -> f32 {
    f32::from_le_bytes([buf[offset], buf[offset + 1], buf[offset + 2], buf[offset + 3]])
}
