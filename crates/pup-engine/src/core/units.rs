//! World units and fixed simulation constants.
//!
//! All physics runs in pixel space. `METERS` converts from meters to pixels,
//! so gameplay numbers can be written in meters and read naturally.

/// Pixels per meter.
pub const METERS: f64 = 100.0;

/// Downward gravitational acceleration in pixels/s².
pub const GRAVITY: f64 = 9.81 * METERS;

/// Side length of one level tile in pixels.
pub const TILE_SIZE: f64 = 0.25 * METERS;

/// Target frame rate of the loop driver.
pub const FRAMERATE: u32 = 60;

/// Default viewport size in pixels.
pub const SCREEN_WIDTH: f64 = 1280.0;
pub const SCREEN_HEIGHT: f64 = 720.0;

/// Player tuning.
pub const PLAYER_MASS: f64 = 35.0;
pub const PLAYER_RUN_SPEED: f64 = 4.0 * METERS;
pub const PLAYER_JUMP_HEIGHT: f64 = 1.5 * METERS;
pub const PLAYER_WIDTH: f64 = 1.15 * METERS;
pub const PLAYER_HEIGHT: f64 = 0.74 * METERS;

/// Vertical speed (physics-up negative) beyond which a grounded pose
/// switches to the fall animation.
pub const FALL_THRESHOLD: f64 = -0.5 * METERS;
