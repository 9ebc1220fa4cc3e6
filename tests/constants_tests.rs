// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use portfolio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_hooks_are_distinct() {
    let ids = [ROOT_ID, CANVAS_ID, GLOW_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(GLITCH_CLASS, REVEALED_CLASS);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert_eq!(PROJECT_LINK_TARGET, "_blank");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_constants_are_within_reasonable_bounds() {
    assert_eq!(PARTICLE_COUNT, 100);
    assert!(PARTICLE_MAX_SPEED > 0.0 && PARTICLE_MAX_SPEED < 1.0);
    assert!(PARTICLE_MAX_RADIUS > 0.0);
    assert!(GLITCH_ACTIVE_MS < GLITCH_PERIOD_MS);
    assert!(GLOW_RADIUS_PX > 0.0);
    assert!(PROJECT_STAGGER_MS >= SKILL_STAGGER_MS);
    assert_eq!(MAX_SKILL_LEVEL, 100);
}
