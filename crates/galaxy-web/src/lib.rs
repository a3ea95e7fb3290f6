#![cfg(target_arch = "wasm32")]
use galaxy_core::{
    torus_variants, Camera, DeviceClass, FieldConfig, FieldController, ProgressSource,
    ScrollTracker,
};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("galaxy-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[field] init already ran; ignoring");
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("webgl")
        .ok_or_else(|| anyhow::anyhow!("missing #webgl"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Device class is read once; only the aspect follows later resizes
    let device = if dom::is_compact_viewport(&window) {
        DeviceClass::Compact
    } else {
        DeviceClass::Desktop
    };
    let config = FieldConfig::for_device(device);
    let max_pixel_ratio = config.max_pixel_ratio;
    let scrub_seconds = config.scrub_seconds;
    let object_count = config.object_count;
    let variants = torus_variants(&config);

    let (width, height) = dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);
    let tracker = Rc::new(RefCell::new(ScrollTracker::new(
        scrub_seconds,
        dom::page_scroll_progress(&window),
    )));

    let mut controller = FieldController::new(
        config,
        Camera::aspect_from_size(width, height),
        StdRng::from_entropy(),
    )?;
    controller.initialize(Some(&*tracker.borrow() as &dyn ProgressSource));
    dom::set_progress_bar(&document, tracker.borrow().progress());
    let handle = controller.loop_handle();
    let controller = Rc::new(RefCell::new(controller));

    events::wire_scroll(&window, tracker.clone());
    events::wire_resize(
        &window,
        canvas.clone(),
        controller.clone(),
        tracker.clone(),
        max_pixel_ratio,
    );
    events::wire_teardown(&window, controller.clone());

    // A missing GPU leaves the field animating without a draw target
    let gpu = frame::init_gpu(&canvas, &variants, object_count).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        tracker,
        canvas,
        document,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx, handle);
    Ok(())
}
