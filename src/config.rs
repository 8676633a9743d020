//! Compile-time constants.
//!
//! These are the only configuration surface. Nothing is read from the
//! environment or from disk.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use glam::Vec3;

/// Window title.
pub const WINDOW_TITLE: &str = "3D Particle Simulator";
/// Window width in logical pixels.
pub const WINDOW_WIDTH: u32 = 800;
/// Window height in logical pixels.
pub const WINDOW_HEIGHT: u32 = 600;

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 45.0;
/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clip plane distance.
pub const Z_FAR: f32 = 1000.0;

/// Number of simulated particles.
pub const NUM_PARTICLES: usize = 1000;
/// Downward acceleration, subtracted from `vy` every tick.
pub const GRAVITY: f32 = 0.01;
/// Half-size of the bounding cube. Particles bounce off `±BOUNDS` on every axis.
pub const BOUNDS: f32 = 50.0;
/// Initial velocity components are drawn from `[-MAX_SPEED, MAX_SPEED]`.
pub const MAX_SPEED: f32 = 1.0;

/// Camera translation per key press, in world units.
pub const MOVE_STEP: f32 = 10.0;
/// Camera rotation per key press, in radians.
pub const TURN_STEP: f32 = 0.1;
/// Where the camera starts.
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 120.0);

/// Background color (linear RGB).
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

/// Pause after each frame. Work time is not subtracted, so the real frame
/// period is this plus however long the frame took.
pub const FRAME_DELAY: Duration = Duration::from_millis(16);
/// Span the FPS readout is averaged over.
pub const FPS_WINDOW: Duration = Duration::from_millis(500);
/// How many frames between FPS refreshes in the window title.
pub const TITLE_REFRESH_FRAMES: u64 = 60;

/// Seed derived from the wall clock at second resolution.
///
/// Two launches within the same second get the same particle cloud.
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
