use crate::constants::{REVEALED_CLASS, REVEAL_THRESHOLD};
use portfolio_core::markup::REVEAL_CLASS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Adds the revealed class to each section the first time it scrolls into view.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

fn reveal_targets(document: &web::Document) -> Vec<web::Element> {
    let Ok(nodes) = document.query_selector_all(&format!(".{REVEAL_CLASS}")) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Reveal everything at once, for browsers without IntersectionObserver.
pub fn reveal_all(document: &web::Document) {
    for el in reveal_targets(document) {
        _ = el.class_list().add_1(REVEALED_CLASS);
    }
}

impl RevealObserver {
    pub fn observe(document: &web::Document) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        let targets = reveal_targets(document);
        log::info!("[reveal] observing {} sections", targets.len());
        for el in &targets {
            observer.observe(el);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(&self) {
        self.observer.disconnect();
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
