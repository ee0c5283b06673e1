#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use approx::assert_relative_eq;

    use roadster_core::constants::AXIS_MAX;
    use roadster_core::control::ControlSource;
    use roadster_core::enums::DriveDirection;
    use roadster_core::types::{ControlInput, SensorData};

    use crate::gains::PursuitGains;
    use crate::pursuit::{bearing, decide, next_direction, PursuitController, PursuitMemory};

    /// Reading for a car heading along +x with the target at `angle` and `distance`.
    fn reading_at(angle: f32, distance: f32, velocity: f32) -> SensorData {
        SensorData {
            delta_x: distance * angle.cos(),
            delta_y: distance * angle.sin(),
            heading_direction: 0.0,
            velocity,
            time: 0,
        }
    }

    /// Reading whose bearing cosine is `dot`, target on the positive-angle side.
    fn reading_with_dot(dot: f32) -> SensorData {
        reading_at(dot.acos(), 500.0, 0.0)
    }

    fn reverse_memory() -> PursuitMemory {
        PursuitMemory {
            direction: DriveDirection::Reverse,
        }
    }

    // ---- Arrival ----

    #[test]
    fn test_arrival_returns_exact_zero() {
        for distance in [0.0, 0.5, 5.0, 9.99] {
            for angle in [0.0, 1.0, -2.5, PI] {
                let mut memory = PursuitMemory::default();
                let input = decide(&reading_at(angle, distance, 3.0), &mut memory);
                assert_eq!(input, ControlInput::ZERO, "distance {distance}, angle {angle}");
            }
        }
        // Exactly on the gate
        let input = decide(&reading_at(0.0, 10.0, 0.0), &mut PursuitMemory::default());
        assert_eq!(input, ControlInput::ZERO);
    }

    #[test]
    fn test_zero_distance_is_defined() {
        let mut memory = reverse_memory();
        let sensor = SensorData {
            heading_direction: 1.0,
            velocity: -2.0,
            ..Default::default()
        };
        assert_eq!(decide(&sensor, &mut memory), ControlInput::ZERO);
        assert_eq!(memory.direction, DriveDirection::Reverse);
    }

    #[test]
    fn test_arrival_never_switches_direction() {
        // Target directly behind but inside the arrival gate
        let mut memory = PursuitMemory::default();
        decide(&reading_at(PI, 8.0, 0.0), &mut memory);
        assert_eq!(memory.direction, DriveDirection::Forward);
    }

    #[test]
    fn test_non_finite_reading_returns_zero() {
        let mut memory = PursuitMemory::default();
        let mut sensor = reading_at(0.3, 400.0, 1.0);
        sensor.delta_x = f32::NAN;
        assert_eq!(decide(&sensor, &mut memory), ControlInput::ZERO);
        sensor.delta_x = 1.0;
        sensor.heading_direction = f32::INFINITY;
        assert_eq!(decide(&sensor, &mut memory), ControlInput::ZERO);
    }

    #[test]
    fn test_out_of_range_heading_returns_zero() {
        let mut memory = PursuitMemory::default();
        // Raw delta -10 rad wraps once to about -3.72, still outside (-π, π].
        let mut sensor = reading_at(0.0, 400.0, 0.0);
        sensor.heading_direction = 10.0;
        assert_eq!(decide(&sensor, &mut memory), ControlInput::ZERO);

        // Target behind an out-of-range heading must not flip the mode either.
        let mut behind = reading_at(PI, 400.0, 0.0);
        behind.heading_direction = 7.0;
        assert_eq!(decide(&behind, &mut memory), ControlInput::ZERO);
        assert_eq!(memory.direction, DriveDirection::Forward);
    }

    // ---- Hysteresis ----

    #[test]
    fn test_forward_mode_holds_inside_band() {
        let mut memory = PursuitMemory::default();
        let dots = [-0.5, 0.9, -0.5, 0.2, -0.79, 0.9, -0.5, 0.0];
        for _ in 0..10 {
            for dot in dots {
                decide(&reading_with_dot(dot), &mut memory);
                assert_eq!(memory.direction, DriveDirection::Forward, "dot {dot}");
            }
        }
    }

    #[test]
    fn test_target_behind_switches_to_reverse() {
        let mut memory = PursuitMemory::default();
        let input = decide(&reading_with_dot(-0.85), &mut memory);
        assert_eq!(memory.direction, DriveDirection::Reverse);
        assert!(input.acceleration_axis < 0);
    }

    #[test]
    fn test_reverse_mode_needs_target_well_ahead() {
        let mut memory = reverse_memory();
        for dot in [-0.9, 0.0, 0.3, 0.49] {
            decide(&reading_with_dot(dot), &mut memory);
            assert_eq!(memory.direction, DriveDirection::Reverse, "dot {dot}");
        }
        decide(&reading_with_dot(0.55), &mut memory);
        assert_eq!(memory.direction, DriveDirection::Forward);
    }

    #[test]
    fn test_next_direction_thresholds() {
        let gains = PursuitGains::default();
        assert_eq!(
            next_direction(DriveDirection::Forward, -0.8, &gains),
            DriveDirection::Forward
        );
        assert_eq!(
            next_direction(DriveDirection::Forward, -0.81, &gains),
            DriveDirection::Reverse
        );
        assert_eq!(
            next_direction(DriveDirection::Reverse, 0.5, &gains),
            DriveDirection::Reverse
        );
        assert_eq!(
            next_direction(DriveDirection::Reverse, 0.51, &gains),
            DriveDirection::Forward
        );
    }

    // ---- Output shaping ----

    #[test]
    fn test_first_call_of_upward_target() {
        // Car at (512, 384) heading 0, target at (512, 200)
        let sensor = SensorData {
            delta_x: 0.0,
            delta_y: -184.0,
            heading_direction: 0.0,
            velocity: 0.0,
            time: 0,
        };
        let b = bearing(&sensor);
        assert_relative_eq!(b.angle_delta, -PI / 2.0);
        assert_relative_eq!(b.dot, 0.0, epsilon = 1e-6);

        let mut memory = PursuitMemory::default();
        let input = decide(&sensor, &mut memory);
        assert_eq!(input.acceleration_axis, AXIS_MAX);
        // (2/3)^3 * 0.9 of full scale, steering toward negative angles
        assert_eq!(input.turn_axis, -8738);
    }

    #[test]
    fn test_full_steering_authority_past_threshold() {
        let mut memory = PursuitMemory::default();
        // 0.76π off target: past 135° but dot ≈ -0.73 keeps forward mode
        let input = decide(&reading_at(0.76 * PI, 500.0, 0.0), &mut memory);
        assert_eq!(memory.direction, DriveDirection::Forward);
        assert_eq!(input.turn_axis, AXIS_MAX);
    }

    #[test]
    fn test_braking_ease_when_closing_fast() {
        let mut memory = PursuitMemory::default();
        // distance 500 < 200 * 5 -> (0.5)^3 * 0.5 = 0.0625 of full throttle
        let input = decide(&reading_at(0.0, 500.0, 5.0), &mut memory);
        assert_eq!(input.acceleration_axis, 2048);

        let gains = PursuitGains::default();
        assert_eq!(gains.acceleration_factor(500.0, 2.0), 1.0);
        assert_eq!(gains.acceleration_factor(500.0, -5.0), 1.0);
        assert_eq!(gains.acceleration_factor(500.0, 0.0), 1.0);
    }

    #[test]
    fn test_aligned_target_gets_no_steering() {
        let mut memory = PursuitMemory::default();
        let input = decide(&reading_at(0.0, 300.0, 0.0), &mut memory);
        assert_eq!(input.turn_axis, 0);
        assert_eq!(input.acceleration_axis, AXIS_MAX);
    }

    #[test]
    fn test_reverse_mode_flips_both_axes() {
        let sensor = reading_at(1.5, 300.0, 0.0);
        let forward = decide(&sensor, &mut PursuitMemory::default());
        let mut memory = reverse_memory();
        let reverse = decide(&sensor, &mut memory);
        assert_eq!(memory.direction, DriveDirection::Reverse);
        assert_eq!(reverse.acceleration_axis, -forward.acceleration_axis);
        assert_eq!(reverse.turn_axis, -forward.turn_axis);
        assert!(forward.turn_axis > 0);
    }

    #[test]
    fn test_bearing_of_rotated_heading() {
        // Heading 0.5 rad, target at 1.2 rad: error 0.7 rad either way it is computed.
        let sensor = SensorData {
            delta_x: 300.0 * 1.2f32.cos(),
            delta_y: 300.0 * 1.2f32.sin(),
            heading_direction: 0.5,
            velocity: 0.0,
            time: 0,
        };
        let b = bearing(&sensor);
        assert_relative_eq!(b.distance, 300.0, epsilon = 1e-3);
        assert_relative_eq!(b.angle_to_target, 1.2, epsilon = 1e-5);
        assert_relative_eq!(b.angle_delta, 0.7, epsilon = 1e-5);
        assert_relative_eq!(b.dot, 0.7f32.cos(), epsilon = 1e-5);
    }

    #[test]
    fn test_angle_wraps_once_across_pi() {
        // Heading 3.0 rad, target at -3.0 rad: raw delta -6.0 wraps to ~+0.283
        let sensor = SensorData {
            delta_x: 200.0 * (-3.0f32).cos(),
            delta_y: 200.0 * (-3.0f32).sin(),
            heading_direction: 3.0,
            velocity: 0.0,
            time: 0,
        };
        let b = bearing(&sensor);
        assert_relative_eq!(b.angle_delta, 2.0 * PI - 6.0, epsilon = 1e-5);
        let input = decide(&sensor, &mut PursuitMemory::default());
        assert!(input.turn_axis > 0);
    }

    // ---- Controller instances ----

    #[test]
    fn test_controllers_keep_separate_memory() {
        let mut a = PursuitController::default();
        let mut b = PursuitController::default();
        a.decide(&reading_with_dot(-0.95)).unwrap();
        b.decide(&reading_with_dot(0.3)).unwrap();
        assert_eq!(a.direction(), DriveDirection::Reverse);
        assert_eq!(b.direction(), DriveDirection::Forward);
    }

    #[test]
    fn test_custom_gains_move_arrival_gate() {
        let gains = PursuitGains {
            arrival_distance: 50.0,
            ..Default::default()
        };
        let mut controller = PursuitController::new(gains);
        assert_eq!(controller.steer(&reading_at(1.0, 40.0, 0.0)), ControlInput::ZERO);
        assert_ne!(controller.steer(&reading_at(1.0, 60.0, 0.0)), ControlInput::ZERO);
    }
}
