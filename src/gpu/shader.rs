use bytemuck::{Pod, Zeroable};

use crate::particles::Particle;

pub const SHADER_SOURCE: &str = include_str!("cube.wgsl");

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
}

/// Per-instance data: where to draw one cube.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
}

impl From<&Particle> for ParticleInstance {
    fn from(particle: &Particle) -> Self {
        Self {
            position: particle.position.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_shader_validates() {
        let module = naga::front::wgsl::parse_str(SHADER_SOURCE)
            .map_err(|e| e.emit_to_string(SHADER_SOURCE))
            .expect("cube.wgsl should parse");

        let mut validator = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::all(),
        );
        validator
            .validate(&module)
            .expect("cube.wgsl should validate");
    }

    #[test]
    fn test_shader_entry_points() {
        for entry in ["fn vs_fill", "fn vs_edge", "fn fs_main"] {
            assert!(SHADER_SOURCE.contains(entry), "missing {entry}");
        }
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 12);
        assert_eq!(std::mem::size_of::<Uniforms>(), 64);

        let particle = Particle::new(Vec3::new(1.0, -2.0, 3.5), Vec3::ONE);
        assert_eq!(ParticleInstance::from(&particle).position, [1.0, -2.0, 3.5]);
    }
}
