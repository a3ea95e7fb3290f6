//! The fixed set of animated objects.
//!
//! Each [`FieldObject`] carries intrinsic state chosen once at creation
//! (shape, edge style, depth, stacking index, baseline) and extrinsic state the
//! mapper and frame loop rewrite on every update. Depth is never written after
//! creation; the position's z always reads back the creation depth.

use crate::config::FieldConfig;
use crate::constants::{ACCENT_EDGE_RGB, FILL_OPACITY, TORUS_VARIANTS, WHITE_EDGE_RGB};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorusShape {
    pub radius: f32,
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
}

/// Edge colour class, alternating by creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStyle {
    White,
    Accent,
}

impl EdgeStyle {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 1 {
            EdgeStyle::Accent
        } else {
            EdgeStyle::White
        }
    }

    pub fn rgb(self) -> [f32; 3] {
        match self {
            EdgeStyle::White => WHITE_EDGE_RGB,
            EdgeStyle::Accent => ACCENT_EDGE_RGB,
        }
    }
}

/// Torus size variants at the configured tessellation, indexed by variant.
pub fn torus_variants(config: &FieldConfig) -> Vec<TorusShape> {
    TORUS_VARIANTS
        .iter()
        .map(|&(radius, tube)| TorusShape {
            radius,
            tube,
            radial_segments: config.radial_segments,
            tubular_segments: config.tubular_segments,
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct FieldObject {
    variant: usize,
    shape: TorusShape,
    style: EdgeStyle,
    depth: f32,
    stack_index: usize,
    baseline_y: f32,

    pub(crate) position: Vec3,
    pub(crate) rotation: Vec3,
    pub(crate) edge_opacity: f32,
    pub(crate) fill_opacity: f32,
}

impl FieldObject {
    pub fn new(
        stack_index: usize,
        variant: usize,
        shape: TorusShape,
        depth: f32,
        vertical_spacing: f32,
    ) -> Self {
        let baseline_y = -(stack_index as f32) * vertical_spacing;
        Self {
            variant,
            shape,
            style: EdgeStyle::for_index(stack_index),
            depth,
            stack_index,
            baseline_y,
            position: Vec3::new(0.0, baseline_y, depth),
            rotation: Vec3::ZERO,
            edge_opacity: 0.0,
            fill_opacity: FILL_OPACITY,
        }
    }

    /// Set the starting orientation; only meaningful before the first update.
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn variant(&self) -> usize {
        self.variant
    }
    pub fn shape(&self) -> &TorusShape {
        &self.shape
    }
    pub fn style(&self) -> EdgeStyle {
        self.style
    }
    pub fn depth(&self) -> f32 {
        self.depth
    }
    pub fn stack_index(&self) -> usize {
        self.stack_index
    }
    pub fn baseline_y(&self) -> f32 {
        self.baseline_y
    }
    pub fn position(&self) -> Vec3 {
        self.position
    }
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }
    pub fn edge_opacity(&self) -> f32 {
        self.edge_opacity
    }
    pub fn fill_opacity(&self) -> f32 {
        self.fill_opacity
    }
}

/// Create the pool: one object per stacking slot, cycling shape variants,
/// with a random depth and starting orientation.
pub fn build_pool<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Vec<FieldObject> {
    let variants = torus_variants(config);
    (0..config.object_count)
        .map(|i| {
            let variant = i % variants.len();
            let depth = (rng.gen::<f32>() - 0.5) * config.depth_spread;
            let rotation = Vec3::new(
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
                rng.gen::<f32>() * PI,
            );
            FieldObject::new(i, variant, variants[variant], depth, config.vertical_spacing)
                .with_rotation(rotation)
        })
        .collect()
}
