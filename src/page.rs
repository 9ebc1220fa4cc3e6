use portfolio_core::markup::{
    self, HERO_CONTENT_ID, HERO_HIDDEN_CLASSES, HERO_SHOWN_CLASSES, SKILL_BAR_CLASS,
};
use portfolio_core::Profile;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn render_into(root: &web::Element, profile: &Profile) {
    root.set_inner_html(&markup::render_page(profile));
}

/// Flip the page between its pre-load and loaded look: hero slides in and
/// the skill bars grow to their levels.
pub fn apply_loaded(document: &web::Document, loaded: bool) {
    // Force a layout so the freshly injected 0% widths are committed and the
    // width change below animates.
    if let Some(body) = document.body() {
        _ = body.offset_height();
    }
    if let Some(hero) = document.get_element_by_id(HERO_CONTENT_ID) {
        let cl = hero.class_list();
        let (add, remove) = if loaded {
            (HERO_SHOWN_CLASSES, HERO_HIDDEN_CLASSES)
        } else {
            (HERO_HIDDEN_CLASSES, HERO_SHOWN_CLASSES)
        };
        for c in remove {
            _ = cl.remove_1(c);
        }
        for c in add {
            _ = cl.add_1(c);
        }
    }

    let Ok(bars) = document.query_selector_all(&format!(".{SKILL_BAR_CLASS}")) else {
        return;
    };
    for i in 0..bars.length() {
        let Some(bar) = bars
            .get(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let level = bar
            .get_attribute("data-level")
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(0);
        _ = bar
            .style()
            .set_property("width", &markup::bar_width(level, loaded));
    }
}
