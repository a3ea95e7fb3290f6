//! Edge line lists for the outlined tori.

use crate::pool::TorusShape;
use std::f32::consts::TAU;

/// Line-list vertices (pairs) for a torus lying in the XY plane.
///
/// Emits the tessellation grid: one segment along the ring and one around the
/// tube per grid cell, `2 * radial * tubular` segments in total. Quad
/// diagonals are omitted since an outline never shows them.
pub fn torus_edges(shape: &TorusShape) -> Vec<[f32; 3]> {
    let radial = shape.radial_segments.max(3);
    let tubular = shape.tubular_segments.max(3);
    let point = |j: u32, i: u32| -> [f32; 3] {
        let u = (i % tubular) as f32 / tubular as f32 * TAU;
        let v = (j % radial) as f32 / radial as f32 * TAU;
        let ring = shape.radius + shape.tube * v.cos();
        [ring * u.cos(), ring * u.sin(), shape.tube * v.sin()]
    };
    let mut out = Vec::with_capacity((radial * tubular * 4) as usize);
    for j in 0..radial {
        for i in 0..tubular {
            let p = point(j, i);
            out.push(p);
            out.push(point(j, i + 1));
            out.push(p);
            out.push(point(j + 1, i));
        }
    }
    out
}
