use galaxy_core::geometry::torus_edges;
use galaxy_core::{AnimationWorld, TorusShape};
use glam::{EulerRot, Mat4, Quat};
use std::ops::Range;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
}

/// Per-object instance: model matrix columns plus edge colour, with the
/// edge opacity carried in alpha.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// All variant edge meshes concatenated into one line list, with the vertex
/// range of each variant.
pub struct EdgeMesh {
    pub vertices: Vec<[f32; 3]>,
    pub ranges: Vec<Range<u32>>,
}

pub fn build_edge_mesh(variants: &[TorusShape]) -> EdgeMesh {
    let mut vertices = Vec::new();
    let mut ranges = Vec::with_capacity(variants.len());
    for shape in variants {
        let start = vertices.len() as u32;
        vertices.extend(torus_edges(shape));
        ranges.push(start..vertices.len() as u32);
    }
    EdgeMesh { vertices, ranges }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Model matrix with Euler rotation applied X, then Y, then Z.
#[inline]
pub fn model_matrix(position: glam::Vec3, rotation: glam::Vec3) -> Mat4 {
    let q = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
    Mat4::from_rotation_translation(q, position)
}

/// Pack the world's extrinsic state into `out`, one entry per object.
pub fn pack_instances(world: &AnimationWorld, out: &mut Vec<InstanceData>) {
    out.clear();
    out.extend(world.objects.iter().map(|obj| {
        let rgb = obj.style().rgb();
        InstanceData {
            model: model_matrix(obj.position(), obj.rotation()).to_cols_array_2d(),
            color: [
                srgb_to_linear(rgb[0]),
                srgb_to_linear(rgb[1]),
                srgb_to_linear(rgb[2]),
                obj.edge_opacity(),
            ],
        }
    }));
}

pub fn uniforms_for(world: &AnimationWorld) -> Uniforms {
    Uniforms {
        view_proj: world.camera.view_proj().to_cols_array_2d(),
    }
}
