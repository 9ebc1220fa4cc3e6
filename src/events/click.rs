use crate::constants::PROJECT_LINK_TARGET;
use crate::listener::EventListener;
use portfolio_core::markup::PROJECT_CARD_CLASS;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The card's link, if the click landed inside a project card that has one.
fn clicked_project_href(ev: &web::Event) -> Option<String> {
    let target = ev.target()?.dyn_into::<web::Element>().ok()?;
    let card = target
        .closest(&format!(".{PROJECT_CARD_CLASS}"))
        .ok()
        .flatten()?;
    card.get_attribute("data-href")
}

/// One delegated listener on the page root handles every project card.
pub fn wire_project_clicks(root: &web::Element) -> anyhow::Result<EventListener> {
    EventListener::new(root, "click", move |ev: web::Event| {
        let Some(href) = clicked_project_href(&ev) else {
            return;
        };
        let Some(w) = web::window() else {
            return;
        };
        log::info!("[click] opening {}", href);
        if let Err(e) = w.open_with_url_and_target(&href, PROJECT_LINK_TARGET) {
            log::warn!("[click] window.open failed: {:?}", e);
        }
    })
}
