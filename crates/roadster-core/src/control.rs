//! The capability every per-tick control input source provides.

use crate::error::ControlError;
use crate::types::{ControlInput, SensorData};

/// Maps one sensor reading to one control input.
///
/// Called exactly once per car per tick. Implementations own whatever memory
/// they need between calls; nothing is shared across cars.
pub trait ControlSource {
    fn decide(&mut self, sensor: &SensorData) -> Result<ControlInput, ControlError>;
}

impl<S: ControlSource + ?Sized> ControlSource for Box<S> {
    fn decide(&mut self, sensor: &SensorData) -> Result<ControlInput, ControlError> {
        (**self).decide(sensor)
    }
}

/// A source that always answers with the same input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedInput(pub ControlInput);

impl ControlSource for FixedInput {
    fn decide(&mut self, _sensor: &SensorData) -> Result<ControlInput, ControlError> {
        Ok(self.0)
    }
}
