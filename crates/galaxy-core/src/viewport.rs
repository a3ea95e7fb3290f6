//! Visible-extent math for keeping objects inside the camera frustum.

use crate::camera::Camera;
use crate::config::FieldConfig;
use crate::constants::MIN_CAMERA_DISTANCE;

/// Half-width of the visible region at world depth `z`.
///
/// The camera-to-depth distance is floored at [`MIN_CAMERA_DISTANCE`] so a
/// depth at or behind the camera plane still yields a small positive extent.
#[inline]
pub fn half_width_at(camera: &Camera, z: f32) -> f32 {
    let distance = (camera.position.z - z).max(MIN_CAMERA_DISTANCE);
    let height = 2.0 * (camera.fovy_radians * 0.5).tan() * distance;
    height * camera.aspect * 0.5
}

/// Largest horizontal offset an object at depth `z` may reach.
#[inline]
pub fn max_travel(camera: &Camera, config: &FieldConfig, z: f32) -> f32 {
    (half_width_at(camera, z) - config.viewport_margin).max(config.min_travel)
}
