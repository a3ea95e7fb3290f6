//! Scroll progress mapper.
//!
//! Maps the single global progress scalar onto every object's position,
//! rotation and edge opacity. For fixed motion parameters the output is a pure
//! function of progress, so re-running it after a resize reproduces the same
//! frame. Nothing here allocates; it only reads parameters and writes the
//! objects' extrinsic fields.

use crate::constants::{ACTIVE_LOCAL_MAX, ACTIVE_LOCAL_MIN, FILL_OPACITY, FLOAT_INDEX_PHASE};
use crate::easing::{clamp01, ease_out, lerp};
use crate::motion::MotionParams;
use crate::pool::FieldObject;
use crate::viewport::max_travel;
use crate::world::AnimationWorld;
use std::f32::consts::TAU;

/// Sweep endpoints `(start_x, end_x)` for the given travel half-width.
#[inline]
pub fn sweep_endpoints(params: &MotionParams, travel: f32) -> (f32, f32) {
    let start_x = -params.direction * travel + params.jitter;
    let end_x = params.direction * travel - params.jitter;
    (start_x, end_x)
}

/// Object-local progress: begins once eased global progress passes `phase`
/// and completes a full sweep over a window of `speed`.
#[inline]
pub fn local_progress(eased_global: f32, params: &MotionParams) -> f32 {
    let raw = clamp01((eased_global - params.phase) / params.speed);
    ease_out(raw)
}

#[inline]
pub fn is_active(local: f32) -> bool {
    local > ACTIVE_LOCAL_MIN && local < ACTIVE_LOCAL_MAX
}

/// Apply `global_progress` to every object in the world.
pub fn update(world: &mut AnimationWorld, global_progress: f32) {
    let progress = clamp01(global_progress);
    world.progress = progress;
    let eased = ease_out(progress);
    let AnimationWorld {
        camera,
        config,
        objects,
        params,
        ..
    } = world;
    for (i, (obj, p)) in objects.iter_mut().zip(params.iter()).enumerate() {
        let travel = max_travel(camera, config, obj.depth());
        let (start_x, end_x) = sweep_endpoints(p, travel);
        let local = local_progress(eased, p);

        let float_phase = (local * p.float_frequency + i as f32 * FLOAT_INDEX_PHASE) * TAU;
        obj.position.x = lerp(start_x, end_x, local);
        obj.position.y = obj.baseline_y() + float_phase.sin() * p.float_amplitude;
        obj.position.z = obj.depth();

        let spin_base = local * TAU;
        obj.rotation.x = spin_base * p.spin_rate_x;
        obj.rotation.y = spin_base * p.spin_rate_y;

        obj.edge_opacity = if is_active(local) {
            config.active_edge_opacity
        } else {
            config.idle_edge_opacity
        };
        obj.fill_opacity = FILL_OPACITY;
    }
}

/// Snap every object to its sweep start without touching y, rotation or
/// opacity. Used after reseeding so no object renders at a stale x.
pub fn apply_start_positions(world: &mut AnimationWorld) {
    let AnimationWorld {
        camera,
        config,
        objects,
        params,
        ..
    } = world;
    for (obj, p) in objects.iter_mut().zip(params.iter()) {
        let travel = max_travel(camera, config, obj.depth());
        obj.position.x = sweep_endpoints(p, travel).0;
    }
}

/// Sweep start x for one object at the world's current viewport.
pub fn start_x(world: &AnimationWorld, index: usize) -> Option<f32> {
    let obj: &FieldObject = world.objects.get(index)?;
    let p = world.params.get(index)?;
    let travel = max_travel(&world.camera, &world.config, obj.depth());
    Some(sweep_endpoints(p, travel).0)
}

/// Move the camera down the stack in step with progress.
pub fn follow_camera(world: &mut AnimationWorld) {
    world.camera.position.y = -world.config.stack_height() * world.progress;
}
