use crate::dom;
use galaxy_core::{Camera, FieldController, ScrollTracker};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedController = Rc<RefCell<FieldController<StdRng>>>;

/// Feed every scroll event's raw progress into the tracker. The frame loop
/// applies it, so bursts of scroll events coalesce into one update per frame.
pub fn wire_scroll(window: &web::Window, tracker: Rc<RefCell<ScrollTracker>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            tracker.borrow_mut().set_target(dom::page_scroll_progress(&w));
        }
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::error!("[scroll] listener error: {:?}", e);
    }
    closure.forget();
}

/// Resize: resync the canvas, refresh the scroll target, then reseed the
/// field at the new aspect. Runs to completion before the next frame draws.
pub fn wire_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    controller: SharedController,
    tracker: Rc<RefCell<ScrollTracker>>,
    max_pixel_ratio: f64,
) {
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas, max_pixel_ratio);
        if let Some(win) = web::window() {
            tracker.borrow_mut().set_target(dom::page_scroll_progress(&win));
        }
        controller
            .borrow_mut()
            .on_resize(Camera::aspect_from_size(w, h));
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::error!("[resize] listener error: {:?}", e);
    }
    closure.forget();
}

/// Stop the frame loop when the page is unloaded. A page entering the
/// back/forward cache keeps its loop so it resumes on return.
pub fn wire_teardown(window: &web::Window, controller: SharedController) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        controller.borrow_mut().on_page_hide(ev.persisted());
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}
