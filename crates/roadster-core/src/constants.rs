//! Simulation constants and tuning parameters.

use std::f32::consts::PI;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World ---

/// World width in world units (pixels).
pub const WORLD_WIDTH: f32 = 1024.0;

/// World height in world units (pixels). +y points down.
pub const WORLD_HEIGHT: f32 = 768.0;

/// Display radius of a pursuit target.
pub const TARGET_RADIUS: f32 = 20.0;

// --- Control axes ---

/// Divisor that maps an axis value onto [-1, 1).
pub const AXIS_SCALE: f32 = 32768.0;

/// Full-scale positive axis command.
pub const AXIS_MAX: i16 = 0x7fff;

// --- Default car ---

/// Default body width.
pub const CAR_WIDTH: f32 = 48.0;

/// Body length as a multiple of width.
pub const CAR_LENGTH_PER_WIDTH: f32 = 2.0;

/// Half the axle-to-axle distance as a fraction of body length.
pub const HALF_WHEEL_BASE_RATIO: f32 = 0.485;

/// Throttle gain (velocity added per tick at full forward axis).
pub const CAR_ACCELERATION: f32 = 0.2;

/// Steering angle added per tick at full turn axis (radians).
pub const CAR_TURNING_RATE: f32 = 0.02;

/// Maximum steering angle at standstill (radians).
pub const CAR_TURNING_SPAN: f32 = 1.1;

/// Velocity fraction lost per tick while rolling.
pub const CAR_ROLLING_RESISTANCE: f32 = 0.005;

/// Extra velocity fraction lost per tick while braking.
pub const CAR_BREAKING_RESISTANCE: f32 = 0.045;

// --- Dynamics ---

/// Steering span lost per unit of speed.
pub const STEERING_SPEED_FACTOR: f32 = 0.07;

/// Turn axis magnitude below which steering self-centres.
pub const STEERING_DEADBAND: i16 = 15;

/// Self-centring decay applied to the wheel angle inside the deadband.
pub const STEERING_CENTERING_DECAY: f32 = 0.9;

/// Reverse impulse as a fraction of `acceleration`.
pub const REVERSE_IMPULSE_FACTOR: f32 = 0.45;

/// Resistance added per radian of wheel angle.
pub const CORNERING_SCRUB: f32 = 0.002;

// --- Pursuit ---

/// Distance at or below which the autopilot stops seeking.
pub const ARRIVAL_DISTANCE: f32 = 10.0;

/// Braking starts when distance < this * velocity.
pub const BRAKING_DISTANCE_PER_SPEED: f32 = 200.0;

/// Scale of the cubic braking ease.
pub const BRAKING_EASE_GAIN: f32 = 0.5;

/// Bearing error above which full steering authority is used (135°).
pub const TURN_EASE_THRESHOLD: f32 = 0.75 * PI;

/// Scale of the cubic steering ease.
pub const TURN_EASE_GAIN: f32 = 0.9;

/// Forward mode switches to reverse when the bearing cosine drops below this.
pub const REVERSE_ENTER_DOT: f32 = -0.8;

/// Reverse mode switches back to forward when the bearing cosine exceeds this.
pub const FORWARD_ENTER_DOT: f32 = 0.5;

// --- Remote control channel ---

/// Well-known controller port.
pub const DEFAULT_CONTROLLER_PORT: u16 = 9001;

/// Receive buffer size for both endpoints (larger than either packet).
pub const RECV_BUFFER_LEN: usize = 32;

/// Controller memory for a vehicle address is dropped after this long without a reading.
pub const CONTROLLER_CLIENT_IDLE_SECS: u64 = 30;

/// Most vehicle addresses a controller keeps memory for at once.
pub const MAX_CONTROLLER_CLIENTS: usize = 256;

// --- Reporting ---

/// The game loop reports its achieved tick rate every this many ticks.
pub const TICK_REPORT_INTERVAL: u64 = 256;
