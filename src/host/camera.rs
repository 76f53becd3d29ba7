use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Look-at camera defined by eye position, target, and up vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl Camera {
    /// Camera at `eye` looking at `target`.
    #[must_use]
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    /// Build the world-to-view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

impl Default for Camera {
    /// Looking down -Z at the origin from 50 units away.
    fn default() -> Self {
        Self::from(&CameraOptions::default())
    }
}

impl From<&CameraOptions> for Camera {
    fn from(opts: &CameraOptions) -> Self {
        Self {
            eye: Vec3::from_array(opts.eye),
            target: Vec3::from_array(opts.target),
            up: Vec3::from_array(opts.up),
        }
    }
}
