// Host-side tests for the glitch timing model.

use portfolio_core::GlitchCycle;
use std::time::Duration;

#[test]
fn glitch_is_on_for_200ms_of_every_5s_cycle() {
    let c = GlitchCycle::default();
    // Sample three full cycles after the first interval fires
    let start_ms = 5_000_u64;
    let end_ms = start_ms + 3 * 5_000;
    let active = (start_ms..end_ms)
        .filter(|ms| c.is_active_at(Duration::from_millis(*ms)))
        .count();
    assert_eq!(active, 3 * 200);
}

#[test]
fn glitch_window_edges() {
    let c = GlitchCycle::default();
    assert!(c.is_active_at(Duration::from_millis(5_000)));
    assert!(c.is_active_at(Duration::from_millis(5_199)));
    assert!(!c.is_active_at(Duration::from_millis(5_200)));
    assert!(!c.is_active_at(Duration::from_millis(9_999)));
    assert!(c.is_active_at(Duration::from_millis(10_000)));
    assert!(c.is_active_at(Duration::from_secs(3_600)));
}

#[test]
fn custom_cycle_timings() {
    let c = GlitchCycle {
        period_ms: 1_000,
        active_ms: 50,
    };
    assert!(!c.is_active_at(Duration::from_millis(40)));
    assert!(c.is_active_at(Duration::from_millis(1_040)));
    assert!(!c.is_active_at(Duration::from_millis(1_050)));
    assert!((c.duty() - 0.05).abs() < 1e-6);
}

#[test]
fn timer_durations_match_the_active_window() {
    for c in [
        GlitchCycle::default(),
        GlitchCycle { period_ms: 1_000, active_ms: 50 },
    ] {
        let period = c.period();
        let active = c.active();
        assert!(!c.is_active_at(period - Duration::from_millis(1)));
        assert!(c.is_active_at(period));
        assert!(c.is_active_at(period + active - Duration::from_millis(1)));
        assert!(!c.is_active_at(period + active));
        assert!(c.is_active_at(period * 2));
    }
}
