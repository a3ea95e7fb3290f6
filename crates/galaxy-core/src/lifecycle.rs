//! Lifecycle controller.
//!
//! Owns the [`AnimationWorld`] and the random source, and sequences the three
//! ways state changes: startup, viewport resize and the per-frame loop.
//! Motion parameters are only ever regenerated by `initialize` and
//! `on_resize`, and both finish with a mapper update so the next draw never
//! shows a stale position.

use crate::camera::Camera;
use crate::config::{ConfigError, FieldConfig};
use crate::mapper;
use crate::motion::seed_motion;
use crate::pool::build_pool;
use crate::scroll::ProgressSource;
use crate::world::AnimationWorld;
use rand::Rng;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
    Animating,
    /// Transient: held only while `on_resize` runs, which always leaves the
    /// controller in `Animating`.
    Resizing,
    TornDown,
}

/// Draw-call seam implemented by the renderer.
pub trait RenderBackend {
    fn draw(&mut self, world: &AnimationWorld) -> anyhow::Result<()>;
}

/// Cancellation flag for the frame loop. Clones share the same flag.
#[derive(Clone, Debug)]
pub struct LoopHandle(Rc<Cell<bool>>);

impl LoopHandle {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
    pub fn cancel(&self) {
        self.0.set(false);
    }
    pub fn is_running(&self) -> bool {
        self.0.get()
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub struct FieldController<R: Rng> {
    world: AnimationWorld,
    rng: R,
    phase: Phase,
    handle: LoopHandle,
    frames: u64,
}

impl<R: Rng> FieldController<R> {
    pub fn new(config: FieldConfig, aspect: f32, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = AnimationWorld::new(config, Camera::new(aspect), Vec::new(), Vec::new());
        Ok(Self {
            world,
            rng,
            phase: Phase::Uninitialized,
            handle: LoopHandle::new(),
            frames: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn world(&self) -> &AnimationWorld {
        &self.world
    }

    pub fn loop_handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Build the pool, seed motion, snap to start positions and apply the
    /// source's current progress. Without a source the field starts at 0.
    pub fn initialize(&mut self, source: Option<&dyn ProgressSource>) {
        if self.phase != Phase::Uninitialized {
            log::warn!("[field] initialize called in {:?}; ignoring", self.phase);
            return;
        }
        let objects = build_pool(&self.world.config, &mut self.rng);
        self.world.params = seed_motion(
            &objects,
            &self.world.camera,
            &self.world.config,
            &mut self.rng,
        );
        self.world.objects = objects;
        mapper::apply_start_positions(&mut self.world);
        let progress = match source {
            Some(s) => s.progress(),
            None => {
                log::info!("[field] no progress source bound; starting at 0");
                0.0
            }
        };
        self.apply(progress);
        self.phase = Phase::Ready;
        log::info!(
            "[field] ready: objects={} device={:?} aspect={:.3} progress={:.3}",
            self.world.len(),
            self.world.config.device,
            self.world.camera.aspect,
            progress
        );
    }

    /// Scroll-driven update.
    pub fn on_progress(&mut self, progress: f32) {
        match self.phase {
            Phase::Uninitialized | Phase::TornDown => {}
            _ => {
                self.apply(progress);
                self.phase = Phase::Animating;
            }
        }
    }

    /// Viewport change: new aspect, fresh motion parameters, start positions,
    /// then re-apply the last progress.
    pub fn on_resize(&mut self, aspect: f32) {
        match self.phase {
            Phase::TornDown => return,
            Phase::Uninitialized => {
                self.world.camera.set_aspect(aspect);
                return;
            }
            _ => {}
        }
        self.phase = Phase::Resizing;
        self.world.camera.set_aspect(aspect);
        self.world.params = seed_motion(
            &self.world.objects,
            &self.world.camera,
            &self.world.config,
            &mut self.rng,
        );
        mapper::apply_start_positions(&mut self.world);
        let progress = self.world.progress;
        self.apply(progress);
        self.phase = Phase::Animating;
        log::debug!(
            "[resize] aspect={:.3} reseeded {} objects at progress {:.3}",
            self.world.camera.aspect,
            self.world.len(),
            progress
        );
    }

    /// One animation frame: continuous Z spin, then a single draw.
    /// Returns `false` once the loop has been cancelled.
    pub fn frame(&mut self, backend: Option<&mut dyn RenderBackend>) -> bool {
        if !self.handle.is_running() || self.phase == Phase::TornDown {
            return false;
        }
        let spin = self.world.config.spin_per_frame;
        for obj in &mut self.world.objects {
            obj.rotation.z += spin;
        }
        if let Some(b) = backend {
            if let Err(e) = b.draw(&self.world) {
                log::error!("[gpu] draw error: {:?}", e);
            }
        }
        self.frames += 1;
        true
    }

    /// Page is being hidden. A page kept in the back/forward cache
    /// (`persisted`) comes back live, so only a real unload tears down.
    pub fn on_page_hide(&mut self, persisted: bool) {
        if persisted {
            log::info!("[field] page cached; keeping the loop alive");
            return;
        }
        self.teardown();
    }

    pub fn teardown(&mut self) {
        self.handle.cancel();
        self.phase = Phase::TornDown;
        log::info!("[field] torn down after {} frames", self.frames);
    }

    fn apply(&mut self, progress: f32) {
        mapper::update(&mut self.world, progress);
        mapper::follow_camera(&mut self.world);
    }
}
