//! Perspective camera looking down -Z

use crate::config::StarfieldConfig;
use crate::math::{Mat4, Vec3};

/// Perspective camera with a cached projection matrix
///
/// Call [`PerspectiveCamera::update_projection_matrix`] after changing
/// `aspect`, `fov_degrees`, `near` or `far`.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_degrees,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Camera built from starfield settings, placed at `camera_depth` on +Z
    pub fn from_config(config: &StarfieldConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.fov_degrees, aspect, config.near, config.far);
        camera.position = Vec3::new(0.0, 0.0, config.camera_depth);
        camera
    }

    /// Recompute the projection from the current parameters
    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    /// Change the aspect ratio and refresh the projection
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.update_projection_matrix();
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World-to-camera transform (the camera never rotates)
    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation(Vec3::new(-self.position.x, -self.position.y, -self.position.z))
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection.mul(&self.view_matrix())
    }
}
