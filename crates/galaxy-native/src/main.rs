use std::sync::Arc;
use std::time::Instant;

use galaxy_core::{
    page_progress, torus_variants, Camera, DeviceClass, FieldConfig, FieldController,
    ProgressSource, ScrollTracker,
};
use galaxy_render::OutlineRenderer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

// Virtual page the wheel scrolls through, in viewport heights
const PAGE_SCREENS: f64 = 8.0;
const WHEEL_LINE_PX: f64 = 60.0;

/// Scroll position over a virtual document sized relative to the window.
struct VirtualPage {
    offset_px: f64,
    viewport_px: f64,
}

impl VirtualPage {
    fn content_px(&self) -> f64 {
        self.viewport_px * PAGE_SCREENS
    }

    fn scroll_by(&mut self, delta_px: f64) {
        let max = (self.content_px() - self.viewport_px).max(0.0);
        self.offset_px = (self.offset_px + delta_px).clamp(0.0, max);
    }

    fn jump_to(&mut self, fraction: f64) {
        let max = (self.content_px() - self.viewport_px).max(0.0);
        self.offset_px = max * fraction.clamp(0.0, 1.0);
    }

    /// Keep the same progress when the viewport height changes.
    fn set_viewport(&mut self, viewport_px: f64) {
        let fraction = self.progress() as f64;
        self.viewport_px = viewport_px.max(1.0);
        self.jump_to(fraction);
    }

    fn progress(&self) -> f32 {
        page_progress(self.offset_px, self.content_px(), self.viewport_px)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Galaxy field (native)")
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .build(&event_loop)?,
    );

    let scale = window.scale_factor();
    let size = window.inner_size();
    let logical = size.to_logical::<f64>(scale);
    let device = DeviceClass::from_viewport_width(logical.width);
    let config = FieldConfig::for_device(device);
    let variants = torus_variants(&config);
    let object_count = config.object_count;

    let mut page = VirtualPage {
        offset_px: 0.0,
        viewport_px: logical.height,
    };
    let mut tracker = ScrollTracker::new(config.scrub_seconds, page.progress());
    let mut controller = FieldController::new(
        config,
        Camera::aspect_from_size(size.width, size.height),
        StdRng::from_entropy(),
    )?;
    controller.initialize(Some(&tracker as &dyn ProgressSource));

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(Arc::clone(&window))?;
    let mut renderer = pollster::block_on(OutlineRenderer::new(
        &instance,
        surface,
        size.width,
        size.height,
        &variants,
        object_count,
    ))?;
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(new_size) => {
                renderer.resize(new_size.width, new_size.height);
                page.set_viewport(new_size.to_logical::<f64>(window.scale_factor()).height);
                tracker.set_target(page.progress());
                controller.on_resize(Camera::aspect_from_size(new_size.width, new_size.height));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -(y as f64) * WHEEL_LINE_PX,
                    MouseScrollDelta::PixelDelta(p) => -p.y,
                };
                page.scroll_by(px);
                tracker.set_target(page.progress());
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                match logical_key {
                    Key::Named(NamedKey::Home) => page.jump_to(0.0),
                    Key::Named(NamedKey::End) => page.jump_to(1.0),
                    Key::Named(NamedKey::PageDown) => page.scroll_by(page.viewport_px),
                    Key::Named(NamedKey::PageUp) => page.scroll_by(-page.viewport_px),
                    Key::Named(NamedKey::Escape) => {
                        controller.teardown();
                        elwt.exit();
                        return;
                    }
                    _ => return,
                }
                tracker.set_target(page.progress());
            }
            WindowEvent::CloseRequested => {
                controller.teardown();
                elwt.exit();
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt_sec = (now - last_frame).as_secs_f32();
            last_frame = now;
            if let Some(progress) = tracker.advance(dt_sec) {
                controller.on_progress(progress);
            }
            if controller.frame(Some(&mut renderer)) {
                window.request_redraw();
            } else {
                elwt.exit();
            }
        }
        _ => {}
    })?;
    Ok(())
}
