//! Unit cube geometry.
//!
//! The cube is centred on the origin with half-size 0.5. Faces are listed as
//! quads, each wound counter-clockwise when seen from outside, so back-face
//! culling with `FrontFace::Ccw` keeps exactly the visible faces.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

const S: f32 = 0.5;

/// One face of the cube: four corners and the outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    pub corners: [Vec3; 4],
    pub normal: Vec3,
}

/// Front, back, left, right, top, bottom.
pub const CUBE_FACES: [Face; 6] = [
    // Front (+Z)
    Face {
        corners: [
            Vec3::new(-S, -S, S),
            Vec3::new(S, -S, S),
            Vec3::new(S, S, S),
            Vec3::new(-S, S, S),
        ],
        normal: Vec3::Z,
    },
    // Back (-Z)
    Face {
        corners: [
            Vec3::new(S, -S, -S),
            Vec3::new(-S, -S, -S),
            Vec3::new(-S, S, -S),
            Vec3::new(S, S, -S),
        ],
        normal: Vec3::NEG_Z,
    },
    // Left (-X)
    Face {
        corners: [
            Vec3::new(-S, -S, -S),
            Vec3::new(-S, -S, S),
            Vec3::new(-S, S, S),
            Vec3::new(-S, S, -S),
        ],
        normal: Vec3::NEG_X,
    },
    // Right (+X)
    Face {
        corners: [
            Vec3::new(S, -S, S),
            Vec3::new(S, -S, -S),
            Vec3::new(S, S, -S),
            Vec3::new(S, S, S),
        ],
        normal: Vec3::X,
    },
    // Top (+Y)
    Face {
        corners: [
            Vec3::new(-S, S, S),
            Vec3::new(S, S, S),
            Vec3::new(S, S, -S),
            Vec3::new(-S, S, -S),
        ],
        normal: Vec3::Y,
    },
    // Bottom (-Y)
    Face {
        corners: [
            Vec3::new(-S, -S, -S),
            Vec3::new(S, -S, -S),
            Vec3::new(S, -S, S),
            Vec3::new(-S, -S, S),
        ],
        normal: Vec3::NEG_Y,
    },
];

/// Vertex layout for the filled cube.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Four vertices per face, in [`CUBE_FACES`] order.
pub fn cube_vertices() -> Vec<CubeVertex> {
    CUBE_FACES
        .iter()
        .flat_map(|face| {
            face.corners.map(|corner| CubeVertex {
                position: corner.to_array(),
                normal: face.normal.to_array(),
            })
        })
        .collect()
}

/// Triangle list indices into [`cube_vertices`]. Quad `a b c d` becomes
/// `a b c` and `a c d`, which keeps the winding.
pub fn cube_indices() -> Vec<u16> {
    (0..CUBE_FACES.len() as u16)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect()
}

/// The 12 cube edges as a line list (two vertices per edge).
pub fn cube_edges() -> Vec<[f32; 3]> {
    let v000 = Vec3::new(-S, -S, -S);
    let v001 = Vec3::new(-S, -S, S);
    let v010 = Vec3::new(-S, S, -S);
    let v011 = Vec3::new(-S, S, S);
    let v100 = Vec3::new(S, -S, -S);
    let v101 = Vec3::new(S, -S, S);
    let v110 = Vec3::new(S, S, -S);
    let v111 = Vec3::new(S, S, S);

    let lines = [
        // Bottom
        (v000, v100),
        (v100, v101),
        (v101, v001),
        (v001, v000),
        // Top
        (v010, v110),
        (v110, v111),
        (v111, v011),
        (v011, v010),
        // Vertical
        (v000, v010),
        (v100, v110),
        (v101, v111),
        (v001, v011),
    ];

    lines
        .iter()
        .flat_map(|(a, b)| [a.to_array(), b.to_array()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faces_wind_ccw_from_outside() {
        for face in &CUBE_FACES {
            let [a, b, c, d] = face.corners;
            let n1 = (b - a).cross(c - a);
            let n2 = (c - a).cross(d - a);
            assert!(n1.normalize().abs_diff_eq(face.normal, 1e-6), "{face:?}");
            assert!(n2.normalize().abs_diff_eq(face.normal, 1e-6), "{face:?}");
        }
    }

    #[test]
    fn test_faces_lie_on_their_plane() {
        for face in &CUBE_FACES {
            for corner in face.corners {
                assert_eq!(corner.dot(face.normal), S);
            }
        }
    }

    #[test]
    fn test_buffer_sizes() {
        assert_eq!(cube_vertices().len(), 24);
        assert_eq!(cube_indices().len(), 36);
        assert_eq!(cube_edges().len(), 24);
        assert!(cube_indices().iter().all(|&i| i < 24));
    }

    #[test]
    fn test_triangles_keep_winding() {
        let vertices = cube_vertices();
        for tri in cube_indices().chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vec3::from(vertices[i as usize].position));
            let normal = Vec3::from(vertices[tri[0] as usize].normal);
            assert!((b - a).cross(c - a).dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_edges_have_unit_length() {
        for pair in cube_edges().chunks(2) {
            let len = (Vec3::from(pair[1]) - Vec3::from(pair[0])).length();
            assert!((len - 1.0).abs() < 1e-6);
        }
    }
}
