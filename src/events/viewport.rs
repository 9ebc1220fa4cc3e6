use crate::dom;
use crate::listener::EventListener;
use portfolio_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_viewport_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    session: Rc<RefCell<Session>>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, "resize", move |_ev: web::Event| {
        if !session.borrow().is_mounted() {
            return;
        }
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        if let Err(e) = session.borrow_mut().on_resize(w, h) {
            log::warn!("[viewport] {}", e);
        }
    })
}
