use super::constants::{
    CAMERA_REST_Z, CAMERA_SWAY_X, CAMERA_SWAY_Y, CLOUD_ROTATION_FACTOR, GLOBE_ROTATION_STEP,
    STAR_ROTATION_FACTOR,
};
use glam::Vec3;
use std::f32::consts::PI;

/// Per-layer yaw angles for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerAngles {
    pub globe: f32,
    pub clouds: f32,
    pub stars: f32,
}

/// Rotation accumulator for the globe scene.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrbitMotion {
    rotation: f32,
}

impl OrbitMotion {
    #[cfg(test)]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn advance(&mut self) -> LayerAngles {
        self.rotation += GLOBE_ROTATION_STEP;
        self.angles()
    }

    pub fn angles(&self) -> LayerAngles {
        LayerAngles {
            globe: self.rotation,
            clouds: self.rotation * CLOUD_ROTATION_FACTOR,
            stars: self.rotation * STAR_ROTATION_FACTOR,
        }
    }
}

/// Camera eye for a page scroll fraction in [0, 1]. One full page scroll is one
/// period of the horizontal sway.
pub fn camera_eye(scroll_fraction: f32) -> Vec3 {
    let f = if scroll_fraction.is_finite() {
        scroll_fraction.clamp(0.0, 1.0)
    } else {
        0.0
    };
    Vec3::new(
        (f * PI * 2.0).sin() * CAMERA_SWAY_X,
        (f * PI).cos() * CAMERA_SWAY_Y,
        CAMERA_REST_Z,
    )
}
