//! # particle-box
//!
//! A small real-time 3D particle simulation. A fixed number of point masses
//! fall under constant gravity inside a cube and bounce off its walls. Each
//! one is drawn as a shaded cube with outlined edges, and a keyboard-driven
//! camera flies around the scene.
//!
//! ## Quick Start
//!
//! ```ignore
//! fn main() -> Result<(), particle_box::SimulationError> {
//!     particle_box::run(particle_box::config::wall_clock_seed())
//! }
//! ```
//!
//! ## Controls
//!
//! | Key | Effect |
//! |-----|--------|
//! | `W` / `S` | Move along world -Z / +Z |
//! | `A` / `D` | Move along world -X / +X |
//! | `Up` / `Down` | Pitch up / down |
//! | `Left` / `Right` | Yaw left / right |
//!
//! Movement is locked to the world axes, it does not follow the camera's
//! heading.
//!
//! ## Headless use
//!
//! The simulation state lives in [`Scene`], which needs no window or GPU:
//!
//! ```
//! use particle_box::prelude::*;
//!
//! let mut scene = Scene::new(42);
//! scene.advance([KeyCode::W, KeyCode::Left]);
//! assert_eq!(scene.camera.position.z, 110.0);
//! ```

mod app;
pub mod camera;
pub mod config;
mod error;
pub mod fps;
mod gpu;
pub mod input;
pub mod mesh;
pub mod particles;
pub mod scene;

pub use app::run;
pub use camera::{build_projection, Camera, CameraAction, Frustum};
pub use error::{GpuError, SimulationError};
pub use glam::{Mat4, Vec3};
pub use input::KeyCode;
pub use particles::{Particle, ParticleSystem};
pub use scene::Scene;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use particle_box::prelude::*;
/// ```
pub mod prelude {
    pub use crate::camera::{build_projection, Camera, CameraAction, Frustum};
    pub use crate::input::KeyCode;
    pub use crate::particles::{Particle, ParticleSystem};
    pub use crate::scene::Scene;
    pub use crate::{Mat4, Vec3};
}
