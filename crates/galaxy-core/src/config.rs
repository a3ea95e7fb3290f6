//! Device-class driven configuration for the motion field.
//!
//! The device class is read once at startup. Everything derived from it
//! (object count, tessellation density, pixel ratio cap) stays fixed for the
//! lifetime of the page; only the camera aspect changes on resize.

use crate::constants::*;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Compact,
}

impl DeviceClass {
    /// Classify from a logical viewport width in CSS pixels.
    pub fn from_viewport_width(width_px: f64) -> Self {
        if width_px <= COMPACT_MAX_WIDTH_PX {
            DeviceClass::Compact
        } else {
            DeviceClass::Desktop
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("object count must be at least 1")]
    NoObjects,
    #[error("vertical spacing must be positive, got {0}")]
    NonPositiveSpacing(f32),
    #[error("torus tessellation needs at least 3 segments per axis, got {radial}x{tubular}")]
    DegenerateTessellation { radial: u32, tubular: u32 },
    #[error("minimum travel must be positive, got {0}")]
    NonPositiveTravel(f32),
    #[error("viewport margin must not be negative, got {0}")]
    NegativeMargin(f32),
    #[error("idle edge opacity {idle} must be above zero and below active opacity {active}")]
    OpacityOrder { idle: f32, active: f32 },
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub device: DeviceClass,
    pub object_count: usize,
    pub vertical_spacing: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    pub max_pixel_ratio: f64,
    pub viewport_margin: f32,
    pub min_travel: f32,
    pub depth_spread: f32,
    pub active_edge_opacity: f32,
    pub idle_edge_opacity: f32,
    pub spin_per_frame: f32,
    pub scrub_seconds: f32,
}

impl FieldConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        let compact = device == DeviceClass::Compact;
        Self {
            device,
            object_count: if compact {
                COMPACT_OBJECT_COUNT
            } else {
                DESKTOP_OBJECT_COUNT
            },
            vertical_spacing: if compact {
                COMPACT_VERTICAL_SPACING
            } else {
                DESKTOP_VERTICAL_SPACING
            },
            radial_segments: if compact {
                COMPACT_RADIAL_SEGMENTS
            } else {
                DESKTOP_RADIAL_SEGMENTS
            },
            tubular_segments: if compact {
                COMPACT_TUBULAR_SEGMENTS
            } else {
                DESKTOP_TUBULAR_SEGMENTS
            },
            max_pixel_ratio: if compact {
                COMPACT_MAX_PIXEL_RATIO
            } else {
                DESKTOP_MAX_PIXEL_RATIO
            },
            viewport_margin: VIEWPORT_MARGIN,
            min_travel: MIN_TRAVEL,
            depth_spread: DEPTH_SPREAD,
            active_edge_opacity: ACTIVE_EDGE_OPACITY,
            idle_edge_opacity: IDLE_EDGE_OPACITY,
            spin_per_frame: SPIN_Z_PER_FRAME,
            scrub_seconds: SCRUB_SECONDS,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.object_count == 0 {
            return Err(ConfigError::NoObjects);
        }
        if !(self.vertical_spacing > 0.0) {
            return Err(ConfigError::NonPositiveSpacing(self.vertical_spacing));
        }
        if self.radial_segments < 3 || self.tubular_segments < 3 {
            return Err(ConfigError::DegenerateTessellation {
                radial: self.radial_segments,
                tubular: self.tubular_segments,
            });
        }
        if !(self.min_travel > 0.0) {
            return Err(ConfigError::NonPositiveTravel(self.min_travel));
        }
        if self.viewport_margin < 0.0 {
            return Err(ConfigError::NegativeMargin(self.viewport_margin));
        }
        if !(self.idle_edge_opacity > 0.0 && self.idle_edge_opacity < self.active_edge_opacity) {
            return Err(ConfigError::OpacityOrder {
                idle: self.idle_edge_opacity,
                active: self.active_edge_opacity,
            });
        }
        Ok(())
    }

    /// Total vertical extent the camera travels over a full scroll.
    pub fn stack_height(&self) -> f32 {
        self.object_count as f32 * self.vertical_spacing
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::for_device(DeviceClass::Desktop)
    }
}
