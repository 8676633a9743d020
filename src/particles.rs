//! The particle system: seeding and per-tick integration.
//!
//! Every particle falls under constant gravity and bounces off the walls of
//! the bounding cube. Integration is explicit Euler with a fixed timestep of
//! one frame, so the motion speed is tied to the frame rate.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::{BOUNDS, GRAVITY, MAX_SPEED};

/// A single point mass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    /// Position in world units.
    pub position: Vec3,
    /// Velocity in world units per tick.
    pub velocity: Vec3,
}

impl Particle {
    /// Create a particle with the given position and velocity.
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    /// Draw a random particle: position in `[-BOUNDS, BOUNDS]^3`, velocity in
    /// `[-MAX_SPEED, MAX_SPEED]^3`. Both ranges are inclusive.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let position = Vec3::new(
            rng.gen_range(-BOUNDS..=BOUNDS),
            rng.gen_range(-BOUNDS..=BOUNDS),
            rng.gen_range(-BOUNDS..=BOUNDS),
        );
        let velocity = Vec3::new(
            rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            rng.gen_range(-MAX_SPEED..=MAX_SPEED),
            rng.gen_range(-MAX_SPEED..=MAX_SPEED),
        );
        Self { position, velocity }
    }

    /// Advance by one tick.
    ///
    /// Gravity is applied to `vy`, then the position is integrated. Any
    /// axis that ends up outside `[-bounds, bounds]` has its velocity
    /// negated. The position itself is left where it is.
    #[inline]
    pub fn step(&mut self, gravity: f32, bounds: f32) {
        self.velocity.y -= gravity;
        self.position += self.velocity;

        for axis in 0..3 {
            let p = self.position[axis];
            if p < -bounds || p > bounds {
                self.velocity[axis] = -self.velocity[axis];
            }
        }
    }
}

/// A fixed-size collection of particles.
///
/// The length is set at construction and never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Create `count` particles drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut system = Self {
            particles: vec![Particle::default(); count],
        };
        system.initialize(rng);
        system
    }

    /// Create `count` particles from a `SmallRng` seeded with `seed`.
    ///
    /// The same seed always gives the same cloud.
    pub fn seeded(count: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::new(count, &mut rng)
    }

    /// Wrap an existing set of particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Re-populate every particle with fresh random state.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for particle in &mut self.particles {
            *particle = Particle::random(rng);
        }
    }

    /// Advance every particle by one tick.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.step(GRAVITY, BOUNDS);
        }
    }

    /// Read-only view of the particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
