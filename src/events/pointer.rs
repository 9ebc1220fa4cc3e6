use crate::dom;
use crate::listener::EventListener;
use portfolio_core::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer and keep the glow element centred on it.
///
/// The glow is optional; without it only the session's pointer position is
/// updated. CSS transitions on the element provide the easing.
pub fn wire_pointer_glow(
    window: &web::Window,
    session: Rc<RefCell<Session>>,
    glow: Option<web::HtmlElement>,
) -> anyhow::Result<EventListener> {
    EventListener::new(window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let origin = {
            let mut s = session.borrow_mut();
            if !s.on_pointer_move(ev.client_x() as f32, ev.client_y() as f32) {
                return;
            }
            s.glow_origin()
        };
        if let Some(el) = &glow {
            dom::set_px(el, "left", origin.x);
            dom::set_px(el, "top", origin.y);
        }
    })
}
