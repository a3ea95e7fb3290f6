use galaxy_core::constants::COMPACT_MAX_WIDTH_PX;
use galaxy_core::page_progress;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Match the canvas backing store to its CSS size times the capped
/// device-pixel-ratio. Returns the new backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_pixel_ratio: f64) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(max_pixel_ratio);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

/// Compact-viewport media query, falling back to the inner width.
pub fn is_compact_viewport(window: &web::Window) -> bool {
    let query = format!("(max-width: {}px)", COMPACT_MAX_WIDTH_PX as u32);
    if let Some(mql) = window.match_media(&query).ok().flatten() {
        return mql.matches();
    }
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|w| w <= COMPACT_MAX_WIDTH_PX)
        .unwrap_or(false)
}

/// Raw scroll progress of the document.
pub fn page_scroll_progress(window: &web::Window) -> f32 {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let content = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport);
    page_progress(offset, content, viewport)
}

/// Scale the optional `#progress` bar horizontally.
pub fn set_progress_bar(document: &web::Document, progress: f32) {
    if let Some(el) = document.get_element_by_id("progress") {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html
                .style()
                .set_property("transform", &format!("scaleX({:.4})", progress));
        }
    }
}
