//! Free-fly camera and the view/projection transforms.

use glam::{Mat4, Vec3, Vec4};

use crate::config::{CAMERA_START, FOV_DEGREES, MOVE_STEP, TURN_STEP, Z_FAR, Z_NEAR};
use crate::input::KeyCode;

/// A discrete camera command, produced by one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    LookUp,
    LookDown,
    LookLeft,
    LookRight,
}

impl CameraAction {
    /// Map a key to its camera action. Unbound keys give `None`.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::W => Some(CameraAction::Forward),
            KeyCode::S => Some(CameraAction::Backward),
            KeyCode::A => Some(CameraAction::StrafeLeft),
            KeyCode::D => Some(CameraAction::StrafeRight),
            KeyCode::Up => Some(CameraAction::LookUp),
            KeyCode::Down => Some(CameraAction::LookDown),
            KeyCode::Left => Some(CameraAction::LookLeft),
            KeyCode::Right => Some(CameraAction::LookRight),
            _ => None,
        }
    }
}

/// Viewer pose.
///
/// Yaw and pitch are plain accumulators in radians with no wrapping or
/// clamping. Movement is locked to the world X and Z axes regardless of
/// which way the camera faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space position.
    pub position: Vec3,
    /// Rotation about the world Y axis, in radians.
    pub yaw: f32,
    /// Rotation about the camera's local X axis, in radians.
    pub pitch: f32,
}

impl Camera {
    /// Create a camera at the starting pose.
    pub fn new() -> Self {
        Self {
            position: CAMERA_START,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Apply one camera action.
    pub fn apply(&mut self, action: CameraAction) {
        match action {
            CameraAction::Forward => self.position.z -= MOVE_STEP,
            CameraAction::Backward => self.position.z += MOVE_STEP,
            CameraAction::StrafeLeft => self.position.x -= MOVE_STEP,
            CameraAction::StrafeRight => self.position.x += MOVE_STEP,
            CameraAction::LookUp => self.pitch += TURN_STEP,
            CameraAction::LookDown => self.pitch -= TURN_STEP,
            CameraAction::LookLeft => self.yaw += TURN_STEP,
            CameraAction::LookRight => self.yaw -= TURN_STEP,
        }
    }

    /// Apply the action bound to `key`, if there is one.
    pub fn apply_key(&mut self, key: KeyCode) {
        if let Some(action) = CameraAction::from_key(key) {
            self.apply(action);
        }
    }

    /// World-to-view transform: pitch, then yaw, then the inverse translation.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(-self.pitch)
            * Mat4::from_rotation_y(-self.yaw)
            * Mat4::from_translation(-self.position)
    }

    /// Frustum for the configured field of view and clip planes.
    pub fn projection(&self, aspect_ratio: f32) -> Frustum {
        build_projection(aspect_ratio, FOV_DEGREES, Z_NEAR, Z_FAR)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Perspective frustum bounds at the near plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    /// Perspective matrix for these bounds.
    ///
    /// Right-handed, looking down -Z, with depth mapped to `0..1` as wgpu
    /// expects. Off-center bounds are supported.
    pub fn to_matrix(&self) -> Mat4 {
        let Frustum {
            left: l,
            right: r,
            bottom: b,
            top: t,
            near: n,
            far: f,
        } = *self;

        Mat4::from_cols(
            Vec4::new(2.0 * n / (r - l), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (t - b), 0.0, 0.0),
            Vec4::new((r + l) / (r - l), (t + b) / (t - b), f / (n - f), -1.0),
            Vec4::new(0.0, 0.0, n * f / (n - f), 0.0),
        )
    }
}

/// Symmetric perspective frustum from a vertical field of view.
///
/// The half-height at the near plane is `near * tan(fov / 2)` and the
/// half-width is that times `aspect_ratio`.
pub fn build_projection(aspect_ratio: f32, fov_degrees: f32, near: f32, far: f32) -> Frustum {
    let half_height = near * (fov_degrees.to_radians() / 2.0).tan();
    let half_width = half_height * aspect_ratio;

    Frustum {
        left: -half_width,
        right: half_width,
        bottom: -half_height,
        top: half_height,
        near,
        far,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pose() {
        let camera = Camera::new();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 120.0));
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_key_bindings() {
        let cases = [
            (KeyCode::W, Vec3::new(0.0, 0.0, 110.0), 0.0, 0.0),
            (KeyCode::S, Vec3::new(0.0, 0.0, 130.0), 0.0, 0.0),
            (KeyCode::A, Vec3::new(-10.0, 0.0, 120.0), 0.0, 0.0),
            (KeyCode::D, Vec3::new(10.0, 0.0, 120.0), 0.0, 0.0),
            (KeyCode::Up, CAMERA_START, 0.0, 0.1),
            (KeyCode::Down, CAMERA_START, 0.0, -0.1),
            (KeyCode::Left, CAMERA_START, 0.1, 0.0),
            (KeyCode::Right, CAMERA_START, -0.1, 0.0),
        ];

        for (key, position, yaw, pitch) in cases {
            let mut camera = Camera::new();
            camera.apply_key(key);
            assert_eq!(camera.position, position, "{key:?}");
            assert_eq!(camera.yaw, yaw, "{key:?}");
            assert_eq!(camera.pitch, pitch, "{key:?}");
        }
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        use winit::keyboard::KeyCode as WinitKeyCode;

        for winit_key in [WinitKeyCode::KeyQ, WinitKeyCode::Space, WinitKeyCode::Escape] {
            let key = KeyCode::from(winit_key);
            assert_eq!(CameraAction::from_key(key), None);

            let mut camera = Camera::new();
            camera.apply_key(key);
            assert_eq!(camera, Camera::new());
        }

        for key in [KeyCode::Other(0), KeyCode::Other(42)] {
            let mut camera = Camera::new();
            camera.apply_key(key);
            assert_eq!(camera, Camera::new());
        }
    }

    #[test]
    fn test_inverse_pairs_restore_pose() {
        let mut camera = Camera::new();
        let start = camera;

        for (a, b) in [
            (KeyCode::W, KeyCode::S),
            (KeyCode::A, KeyCode::D),
        ] {
            camera.apply_key(a);
            camera.apply_key(b);
            assert_eq!(camera, start);
        }
    }

    #[test]
    fn test_pitch_accumulates_without_clamp() {
        let mut camera = Camera::new();
        for _ in 0..4 {
            camera.apply(CameraAction::LookUp);
        }
        assert!((camera.pitch - 0.4).abs() < 1e-6);

        for _ in 0..100 {
            camera.apply(CameraAction::LookLeft);
        }
        assert!(camera.yaw > std::f32::consts::TAU);
    }

    #[test]
    fn test_translation_ignores_yaw() {
        let mut camera = Camera::new();
        camera.yaw = 1.0;
        camera.apply(CameraAction::Forward);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 110.0));
    }

    #[test]
    fn test_projection_is_symmetric() {
        for aspect in [0.5, 1.0, 4.0 / 3.0, 16.0 / 9.0, 3.0] {
            for fov in [1.0, 30.0, 45.0, 90.0, 170.0] {
                let f = build_projection(aspect, fov, 0.1, 1000.0);
                assert_eq!(f.left, -f.right);
                assert_eq!(f.bottom, -f.top);
                assert!(f.right > 0.0 && f.top > 0.0);
            }
        }
    }

    #[test]
    fn test_projection_half_extents() {
        let f = build_projection(2.0, 90.0, 1.0, 100.0);
        assert!((f.top - 1.0).abs() < 1e-6);
        assert!((f.right - 2.0).abs() < 1e-6);
        assert_eq!(f.near, 1.0);
        assert_eq!(f.far, 100.0);
    }

    #[test]
    fn test_frustum_matrix_matches_perspective() {
        let aspect = 800.0 / 600.0;
        let frustum = build_projection(aspect, 45.0, 0.1, 1000.0);
        let expected = Mat4::perspective_rh(45.0_f32.to_radians(), aspect, 0.1, 1000.0);
        assert!(frustum.to_matrix().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn test_frustum_maps_near_and_far_planes() {
        let m = build_projection(1.0, 60.0, 0.5, 50.0).to_matrix();

        let near = m * Vec4::new(0.0, 0.0, -0.5, 1.0);
        let far = m * Vec4::new(0.0, 0.0, -50.0, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_view_moves_camera_to_origin() {
        let mut camera = Camera::new();
        camera.position = Vec3::new(3.0, -7.0, 42.0);
        camera.yaw = 0.7;
        camera.pitch = -0.3;

        let eye = camera.view_matrix().transform_point3(camera.position);
        assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-4));
    }

    #[test]
    fn test_view_at_start_looks_down_negative_z() {
        let camera = Camera::new();
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -120.0), 1e-4));
    }

    #[test]
    fn test_look_left_shifts_scene_right() {
        let mut camera = Camera::new();
        camera.apply(CameraAction::LookLeft);
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.x > 0.0);
        assert!(origin.z < 0.0);
    }

    #[test]
    fn test_look_up_shifts_scene_down() {
        let mut camera = Camera::new();
        camera.apply(CameraAction::LookUp);
        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(origin.y < 0.0);
    }

    #[test]
    fn test_large_angles_stay_finite() {
        let mut camera = Camera::new();
        camera.yaw = 1.0e4;
        camera.pitch = -3.0e3;
        let view = camera.view_matrix();
        assert!(view.is_finite());
        assert!((view.determinant() - 1.0).abs() < 1e-3);
    }
}
