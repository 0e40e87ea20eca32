//! First-person camera controller

use artemis_core::{LensSink, OrientationSink, Transform};
use glam::{Mat4, Quat, Vec3};

use crate::locomotion::Basis;

use super::CameraConfig;

/// Camera controller
///
/// Owns the entity transform (yaw lives in its rotation) and the camera
/// pivot pitch. Pitch is in degrees with positive values looking down.
#[derive(Debug, Clone)]
pub struct CameraController {
    /// Configuration
    pub config: CameraConfig,
    /// Entity transform; only ever rotated about the vertical axis
    body: Transform,
    /// Accumulated yaw in degrees (positive turns right)
    yaw: f32,
    /// Pivot pitch in degrees (positive looks down)
    pitch: f32,
    /// Lens field of view in degrees
    fov: f32,
}

impl CameraController {
    /// Create a camera controller with the given lens field of view
    pub fn new(config: CameraConfig, fov: f32) -> Self {
        Self {
            config,
            body: Transform::default(),
            yaw: 0.0,
            pitch: 0.0,
            fov,
        }
    }

    /// Place the camera at the character's eye position
    pub fn follow(&mut self, eye_position: Vec3) {
        self.body.position = eye_position + Vec3::Y * self.config.eye_height_offset;
    }

    /// Get the camera's current world position
    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// Accumulated yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pivot pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Lens field of view in degrees
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// The entity transform (position plus yaw only)
    pub fn body_transform(&self) -> Transform {
        self.body
    }

    /// Horizontal basis used to turn move input into world directions
    pub fn basis(&self) -> Basis {
        Basis {
            forward: self.body.forward(),
            right: self.body.right(),
        }
    }

    /// Combined yaw and pitch rotation
    pub fn rotation(&self) -> Quat {
        self.body.rotation * Quat::from_rotation_x(-self.pitch.to_radians())
    }

    /// Get the camera's forward direction
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.body.position, self.forward(), Vec3::Y)
    }

    /// Get a projection matrix for the current field of view
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.fov.to_radians(),
            aspect_ratio,
            self.config.near_plane,
            self.config.far_plane,
        )
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraConfig::default(), 90.0)
    }
}

impl OrientationSink for CameraController {
    fn apply_yaw(&mut self, degrees: f32) {
        if degrees.is_finite() && degrees != 0.0 {
            self.yaw += degrees;
            self.body.rotate_yaw_degrees(degrees);
        }
    }

    fn set_pitch(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.pitch = degrees;
        }
    }
}

impl LensSink for CameraController {
    fn set_field_of_view(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.fov = degrees;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_basis_faces_negative_z() {
        let camera = CameraController::default();
        let basis = camera.basis();
        assert!((basis.forward - Vec3::NEG_Z).length() < 1e-5);
        assert!((basis.right - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_positive_yaw_turns_right() {
        let mut camera = CameraController::default();
        camera.apply_yaw(90.0);

        assert_eq!(camera.yaw(), 90.0);
        let basis = camera.basis();
        assert!((basis.forward - Vec3::X).length() < 1e-4);
        assert!((basis.right - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_pitch_does_not_tilt_basis() {
        let mut camera = CameraController::default();
        camera.set_pitch(45.0);

        assert!(camera.basis().forward.y.abs() < 1e-6);
        // Positive pitch looks down.
        assert!(camera.forward().y < -0.5);
    }

    #[test]
    fn test_follow_applies_offset() {
        let config = CameraConfig {
            eye_height_offset: 0.2,
            ..Default::default()
        };
        let mut camera = CameraController::new(config, 90.0);
        camera.follow(Vec3::new(1.0, 1.6, 2.0));
        assert!((camera.position() - Vec3::new(1.0, 1.8, 2.0)).length() < 1e-5);
    }

    #[test]
    fn test_view_matrix_looks_along_forward() {
        let mut camera = CameraController::default();
        camera.follow(Vec3::new(0.0, 1.7, 0.0));
        camera.apply_yaw(90.0);

        let ahead = camera.position() + camera.forward() * 3.0;
        let in_view = camera.view_matrix().transform_point3(ahead);
        assert!((in_view - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-4);
        assert_eq!(camera.body_transform().position, camera.position());
    }

    #[test]
    fn test_projection_uses_lens_fov() {
        let mut camera = CameraController::default();
        let narrow = camera.projection_matrix(16.0 / 9.0);
        camera.set_field_of_view(120.0);
        let wide = camera.projection_matrix(16.0 / 9.0);

        // A wider lens shrinks the vertical scale term.
        assert!(wide.y_axis.y < narrow.y_axis.y);
    }

    #[test]
    fn test_lens_ignores_non_finite() {
        let mut camera = CameraController::default();
        camera.set_field_of_view(95.0);
        camera.set_field_of_view(f32::NAN);
        assert_eq!(camera.fov(), 95.0);
    }
}
