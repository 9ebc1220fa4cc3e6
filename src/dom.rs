use crate::constants::READY_STATE_LOADING;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (1.0, 1.0);
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as f32
    };
    (read(w.inner_width()), read(w.inner_height()))
}

/// Size the canvas backing store to the viewport and return the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (w, h) = viewport_size();
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

#[inline]
pub fn set_px(el: &web::HtmlElement, property: &str, value: f32) {
    _ = el.style().set_property(property, &format!("{value}px"));
}

/// `document.readyState` reports a fully parsed DOM.
#[inline]
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != READY_STATE_LOADING
}

/// Resolves once the DOM has been parsed.
pub async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if is_parsed(&document.ready_state()) {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let opts = web::AddEventListenerOptions::new();
        opts.set_once(true);
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &opts,
        );
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}
