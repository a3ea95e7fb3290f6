//! Scroll coupling: raw page progress and the scrub smoothing applied to it.

use crate::constants::SCRUB_SNAP_EPSILON;
use crate::easing::clamp01;

/// Anything that can report the current global progress in \[0, 1\].
pub trait ProgressSource {
    fn progress(&self) -> f32;
}

/// Raw progress of a page scrolled `offset` pixels, where `content_height` is
/// the full document height and `viewport_height` the visible height.
/// A page that cannot scroll reports 0.
pub fn page_progress(offset: f64, content_height: f64, viewport_height: f64) -> f32 {
    let extent = content_height - viewport_height;
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    clamp01((offset / extent) as f32)
}

/// Smooths raw scroll progress toward its target.
///
/// The applied value chases the raw target with an exponential time constant
/// so that it closes almost all of the gap within `scrub_seconds`. A scrub of
/// zero applies targets immediately.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    target: f32,
    current: f32,
    scrub_seconds: f32,
    pending: bool,
}

impl ScrollTracker {
    pub fn new(scrub_seconds: f32, initial: f32) -> Self {
        let initial = clamp01(initial);
        Self {
            target: initial,
            current: initial,
            scrub_seconds: scrub_seconds.max(0.0),
            pending: false,
        }
    }

    /// Feed a new raw target. Cheap; may be called from every scroll event.
    pub fn set_target(&mut self, raw: f32) {
        let raw = clamp01(raw);
        if raw != self.target {
            self.target = raw;
            self.pending = true;
        }
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advance by `dt_sec`. Returns the applied progress when it changed
    /// this frame, `None` once settled.
    pub fn advance(&mut self, dt_sec: f32) -> Option<f32> {
        if !self.pending {
            return None;
        }
        let gap = self.target - self.current;
        if self.scrub_seconds <= 0.0 || gap.abs() < SCRUB_SNAP_EPSILON {
            self.current = self.target;
            self.pending = false;
            return Some(self.current);
        }
        // ~98% of the gap closes within scrub_seconds
        let tau = self.scrub_seconds / 4.0;
        let alpha = 1.0 - (-dt_sec.max(0.0) / tau).exp();
        self.current += gap * alpha;
        if (self.target - self.current).abs() < SCRUB_SNAP_EPSILON {
            self.current = self.target;
            self.pending = false;
        }
        Some(self.current)
    }

    /// Jump straight to the target, skipping the scrub.
    pub fn settle(&mut self) -> f32 {
        self.current = self.target;
        self.pending = false;
        self.current
    }
}

impl ProgressSource for ScrollTracker {
    fn progress(&self) -> f32 {
        self.current
    }
}

impl ProgressSource for f32 {
    fn progress(&self) -> f32 {
        clamp01(*self)
    }
}
