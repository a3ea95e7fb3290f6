//! Per-object randomized trajectory descriptors.
//!
//! Parameters are drawn once at startup and again on every viewport change.
//! Reseeding moves every object, so it is only done where a visual jump is
//! acceptable and is always followed by a fresh mapper update.

use crate::camera::Camera;
use crate::config::FieldConfig;
use crate::constants::*;
use crate::pool::FieldObject;
use crate::viewport::max_travel;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    /// +1 sweeps left to right, -1 right to left.
    pub direction: f32,
    /// Inset applied to both sweep ends; same sign as `direction`.
    pub jitter: f32,
    pub phase: f32,
    pub speed: f32,
    pub spin_rate_x: f32,
    pub spin_rate_y: f32,
    pub float_amplitude: f32,
    pub float_frequency: f32,
}

/// Even stacking slots travel +1, odd slots -1.
#[inline]
pub fn direction_for(stack_index: usize) -> f32 {
    if stack_index % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[inline]
fn draw<R: Rng + ?Sized>(rng: &mut R, (base, span): (f32, f32)) -> f32 {
    base + rng.gen::<f32>() * span
}

/// Draw one [`MotionParams`] per object, index-aligned with `objects`.
///
/// Jitter scales with the travel available at each object's depth, so the
/// result depends on the current camera aspect.
pub fn seed_motion<R: Rng + ?Sized>(
    objects: &[FieldObject],
    camera: &Camera,
    config: &FieldConfig,
    rng: &mut R,
) -> Vec<MotionParams> {
    let count = objects.len().max(1) as f32;
    objects
        .iter()
        .enumerate()
        .map(|(index, obj)| {
            let travel = max_travel(camera, config, obj.depth());
            let direction = direction_for(obj.stack_index());
            // Jitter always points inward so both sweep ends stay within travel
            let raw =
                (rng.gen::<f32>() - 0.5) * (JITTER_TRAVEL_FRACTION * travel).min(JITTER_MAX);
            let jitter = direction * raw.abs();
            let phase = (rng.gen::<f32>() * PHASE_RANDOM_SPAN
                + index as f32 / (count * PHASE_STAGGER_DIVISOR))
                .min(PHASE_MAX);
            MotionParams {
                direction,
                jitter,
                phase,
                speed: draw(rng, SPEED_RANGE),
                spin_rate_x: draw(rng, SPIN_RANGE),
                spin_rate_y: draw(rng, SPIN_RANGE),
                float_amplitude: draw(rng, FLOAT_AMPLITUDE_RANGE),
                float_frequency: draw(rng, FLOAT_FREQUENCY_RANGE),
            }
        })
        .collect()
}
