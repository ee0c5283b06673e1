//! Who drives a car: a human, the local autopilot, or a remote controller.

use serde::{Deserialize, Serialize};

use roadster_autopilot::PursuitController;
use roadster_core::constants::AXIS_MAX;
use roadster_core::control::ControlSource;
use roadster_core::enums::ControlMode;
use roadster_core::error::ControlError;
use roadster_core::types::{ControlInput, SensorData};
use roadster_net::{NetConfig, NetError, RemoteClient};

/// Snapshot of the driving keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanAxes {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub brake: bool,
}

impl HumanAxes {
    /// Full-scale axes for the held keys. Down or brake beats up; opposite
    /// steering keys cancel.
    pub fn to_input(self) -> ControlInput {
        let acceleration_axis = if self.down || self.brake {
            i16::MIN
        } else if self.up {
            AXIS_MAX
        } else {
            0
        };
        let turn_axis = match (self.left, self.right) {
            (true, false) => i16::MIN,
            (false, true) => AXIS_MAX,
            _ => 0,
        };
        ControlInput::new(acceleration_axis, turn_axis)
    }
}

pub enum Pilot {
    /// Applies whatever key snapshot was last injected.
    Human(HumanAxes),
    Autopilot(PursuitController),
    Remote(RemoteClient),
}

impl Pilot {
    pub fn for_mode(mode: ControlMode, net: &NetConfig) -> Result<Self, NetError> {
        Ok(match mode {
            ControlMode::Human => Pilot::Human(HumanAxes::default()),
            ControlMode::Autopilot => Pilot::Autopilot(PursuitController::default()),
            ControlMode::Remote => Pilot::Remote(RemoteClient::connect(&net.controller_addr)?),
        })
    }

    pub fn mode(&self) -> ControlMode {
        match self {
            Pilot::Human(_) => ControlMode::Human,
            Pilot::Autopilot(_) => ControlMode::Autopilot,
            Pilot::Remote(_) => ControlMode::Remote,
        }
    }

    /// Replace the key snapshot. Returns false for non-human pilots.
    pub fn set_axes(&mut self, axes: HumanAxes) -> bool {
        match self {
            Pilot::Human(current) => {
                *current = axes;
                true
            }
            _ => false,
        }
    }
}

impl ControlSource for Pilot {
    fn decide(&mut self, sensor: &SensorData) -> Result<ControlInput, ControlError> {
        match self {
            Pilot::Human(axes) => Ok(axes.to_input()),
            Pilot::Autopilot(controller) => controller.decide(sensor),
            Pilot::Remote(client) => client.decide(sensor),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;

    use super::*;

    fn reading() -> SensorData {
        SensorData {
            delta_x: 0.0,
            delta_y: -184.0,
            heading_direction: 0.0,
            velocity: 0.0,
            time: 0,
        }
    }

    #[test]
    fn test_no_keys_is_zero_input() {
        assert!(HumanAxes::default().to_input().is_zero());
    }

    #[test]
    fn test_keys_map_to_full_scale() {
        let up_left = HumanAxes {
            up: true,
            left: true,
            ..Default::default()
        };
        assert_eq!(up_left.to_input(), ControlInput::new(AXIS_MAX, i16::MIN));

        let down_right = HumanAxes {
            down: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(down_right.to_input(), ControlInput::new(i16::MIN, AXIS_MAX));
    }

    #[test]
    fn test_brake_beats_throttle_and_steering_cancels() {
        let axes = HumanAxes {
            up: true,
            brake: true,
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(axes.to_input(), ControlInput::new(i16::MIN, 0));
    }

    #[test]
    fn test_human_pilot_uses_injected_axes() {
        let mut pilot = Pilot::Human(HumanAxes::default());
        assert!(pilot.decide(&reading()).unwrap().is_zero());

        assert!(pilot.set_axes(HumanAxes {
            up: true,
            ..Default::default()
        }));
        assert_eq!(pilot.decide(&reading()).unwrap(), ControlInput::new(AXIS_MAX, 0));
    }

    #[test]
    fn test_autopilot_ignores_axes() {
        let mut pilot = Pilot::for_mode(ControlMode::Autopilot, &NetConfig::default()).unwrap();
        assert_eq!(pilot.mode(), ControlMode::Autopilot);
        assert!(!pilot.set_axes(HumanAxes::default()));

        let input = pilot.decide(&reading()).unwrap();
        assert!(input.acceleration_axis > 0);
        assert!(input.turn_axis < 0);
    }

    #[test]
    fn test_remote_pilot_sends_sensor_data() {
        let controller = UdpSocket::bind("127.0.0.1:0").unwrap();
        let net = NetConfig {
            controller_addr: controller.local_addr().unwrap().to_string(),
            ..Default::default()
        };
        let mut pilot = Pilot::for_mode(ControlMode::Remote, &net).unwrap();
        assert_eq!(pilot.mode(), ControlMode::Remote);

        // Nothing has come back yet: stale zero input.
        assert!(pilot.decide(&reading()).unwrap().is_zero());

        controller
            .set_read_timeout(Some(std::time::Duration::from_secs(1)))
            .unwrap();
        let mut buf = [0u8; 64];
        let (len, _) = controller.recv_from(&mut buf).unwrap();
        assert_eq!(SensorData::from_bytes(&buf[..len]).unwrap(), reading());
    }
}
