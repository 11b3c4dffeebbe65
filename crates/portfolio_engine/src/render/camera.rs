//! # Shared Camera
//!
//! The single perspective camera every portfolio section is viewed through.
//! While a transition is in flight only the scene manager (through its camera
//! animator) writes to it; everyone else reads.

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// 3D perspective camera
///
/// Uses a right-handed Y-up coordinate system, looking down -Z in view space.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera looking at the origin
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view angle in degrees
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Point the camera at a world-space location, keeping the current up vector
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Only logs changes larger than 0.01 to keep resize drags quiet.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Set the aspect ratio from a viewport size; zero-height viewports are ignored
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if height == 0 {
            log::debug!("Ignoring zero-height viewport {}x{}", width, height);
            return;
        }
        self.set_aspect_ratio(width as f32 / height as f32);
    }

    /// World-to-camera transformation
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Perspective projection
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined projection × view
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for Camera {
    /// Landing camera: 75 degree FOV at (0, 0, 5) looking at the origin,
    /// clipping between 0.1 and 100.
    fn default() -> Self {
        Self::perspective(Vec3::new(0.0, 0.0, 5.0), 75.0, 16.0 / 9.0, 0.1, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_viewport_sets_aspect() {
        let mut camera = Camera::default();
        camera.set_viewport(1920, 1080);
        assert_relative_eq!(camera.aspect, 16.0 / 9.0);

        camera.set_viewport(800, 0);
        assert_relative_eq!(camera.aspect, 16.0 / 9.0);
    }

    #[test]
    fn test_view_projection_keeps_target_centered() {
        let camera = Camera::default();
        let clip = camera.view_projection_matrix() * nalgebra::Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-5);
    }
}
