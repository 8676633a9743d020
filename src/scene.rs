//! Everything that changes from frame to frame.

use glam::Mat4;

use crate::camera::Camera;
use crate::config::NUM_PARTICLES;
use crate::input::KeyCode;
use crate::particles::ParticleSystem;

/// The simulation state: particles plus the viewer.
///
/// The camera and the particles never influence each other; the scene only
/// sequences them.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub particles: ParticleSystem,
    pub camera: Camera,
}

impl Scene {
    /// Seed `NUM_PARTICLES` particles from `seed` and place the camera at
    /// its starting pose.
    pub fn new(seed: u64) -> Self {
        Self::with_particles(ParticleSystem::seeded(NUM_PARTICLES, seed))
    }

    /// Build a scene around an existing particle system.
    pub fn with_particles(particles: ParticleSystem) -> Self {
        Self {
            particles,
            camera: Camera::new(),
        }
    }

    /// Run one frame: apply this frame's key presses to the camera in order,
    /// then step every particle once.
    pub fn advance<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = KeyCode>,
    {
        for key in keys {
            self.camera.apply_key(key);
        }
        self.particles.step();
    }

    /// Combined projection and view matrix for the given aspect ratio.
    pub fn view_proj(&self, aspect_ratio: f32) -> Mat4 {
        self.camera.projection(aspect_ratio).to_matrix() * self.camera.view_matrix()
    }
}
