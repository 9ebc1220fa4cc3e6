// Host-side tests for the pure DOM helpers.
// The main crate is wasm-only, so we include the modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod dom {
    include!("../src/dom.rs");
}

use dom::is_parsed;

#[test]
fn only_loading_state_waits_for_dom_content_loaded() {
    assert!(!is_parsed("loading"));
    assert!(is_parsed("interactive"));
    assert!(is_parsed("complete"));
}

#[test]
fn manifest_requests_only_existing_web_sys_features() {
    // `Document::readyState` is a plain string in web-sys; there is no enum feature
    let manifest = include_str!("../Cargo.toml");
    assert!(!manifest.contains("\"DocumentReadyState\""));
    assert!(manifest.contains("\"Document\""));
}
