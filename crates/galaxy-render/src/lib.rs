//! Outline renderer for the motion field.
//!
//! Every shape variant's edge line list lives in one vertex buffer; each frame
//! uploads one instance per object (model matrix, edge colour, edge opacity)
//! and issues one draw per object into a single render pass. Fill geometry is
//! never drawn: objects are outline-only.

use galaxy_core::{AnimationWorld, RenderBackend, TorusShape};
use std::ops::Range;
use wgpu::util::DeviceExt;

mod helpers;
mod instances;

pub use instances::{
    build_edge_mesh, model_matrix, pack_instances, uniforms_for, EdgeMesh, InstanceData, Uniforms,
};

pub static OUTLINE_WGSL: &str = include_str!("../shaders/outline.wgsl");

pub struct OutlineRenderer<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    edge_vb: wgpu::Buffer,
    mesh_ranges: Vec<Range<u32>>,
    instance_vb: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<InstanceData>,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> OutlineRenderer<'a> {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
        variants: &[TorusShape],
        object_capacity: usize,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("outline_shader"),
            source: wgpu::ShaderSource::Wgsl(OUTLINE_WGSL.into()),
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("outline_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = helpers::uniform_layout(&device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("outline_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("outline_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_line_pipeline(&device, &pipeline_layout, &shader, format);

        let mesh = build_edge_mesh(variants);
        let edge_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("outline_edges"),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = helpers::instance_buffer(&device, object_capacity);
        log::info!(
            "[gpu] ready: {}x{} {:?}, {} edge vertices across {} variants",
            width,
            height,
            format,
            mesh.vertices.len(),
            mesh.ranges.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            edge_vb,
            mesh_ranges: mesh.ranges,
            instance_vb,
            instance_capacity: object_capacity.max(1),
            instances: Vec::with_capacity(object_capacity),
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width != self.width || height != self.height {
            self.resize(width, height);
        }
    }

    fn render(&mut self, world: &AnimationWorld) -> Result<(), wgpu::SurfaceError> {
        pack_instances(world, &mut self.instances);
        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len();
            self.instance_vb = helpers::instance_buffer(&self.device, self.instance_capacity);
        }
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms_for(world)),
        );
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&self.instances));

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("outline_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("outline_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.edge_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            for (i, obj) in world.objects.iter().enumerate() {
                let Some(range) = self.mesh_ranges.get(obj.variant()) else {
                    continue;
                };
                let i = i as u32;
                rpass.draw(range.clone(), i..i + 1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> RenderBackend for OutlineRenderer<'a> {
    fn draw(&mut self, world: &AnimationWorld) -> anyhow::Result<()> {
        match self.render(world) {
            Ok(()) => Ok(()),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.surface.configure(&self.device, &self.config);
                Ok(())
            }
            Err(wgpu::SurfaceError::Timeout) => Ok(()),
            Err(e) => Err(anyhow::anyhow!("surface error: {:?}", e)),
        }
    }
}
