use crate::dom;
use crate::events::SharedController;
use galaxy_core::{LoopHandle, RenderBackend, ScrollTracker, TorusShape};
use galaxy_render::OutlineRenderer;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: SharedController,
    pub tracker: Rc<RefCell<ScrollTracker>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<OutlineRenderer<'static>>,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One animation frame. Returns `false` once the loop is cancelled.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Scroll-driven update, at most once per frame
        let applied = self.tracker.borrow_mut().advance(dt_sec);
        if let Some(progress) = applied {
            self.controller.borrow_mut().on_progress(progress);
            dom::set_progress_bar(&self.document, progress);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
        }
        let backend = self.gpu.as_mut().map(|g| g as &mut dyn RenderBackend);
        self.controller.borrow_mut().frame(backend)
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    variants: &[TorusShape],
    capacity: usize,
) -> Option<OutlineRenderer<'static>> {
    let instance = wgpu::Instance::default();
    let surface = match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
        Ok(s) => s,
        Err(e) => {
            log::error!("[gpu] surface error: {:?}", e);
            return None;
        }
    };
    match OutlineRenderer::new(
        &instance,
        surface,
        canvas.width(),
        canvas.height(),
        variants,
        capacity,
    )
    .await
    {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, handle: LoopHandle) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = frame_ctx.borrow_mut().frame();
        if !running || !handle.is_running() {
            log::info!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
