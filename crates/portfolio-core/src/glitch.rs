use crate::constants::{GLITCH_ACTIVE_MS, GLITCH_PERIOD_MS};
use std::time::Duration;

/// Timing of the title glitch: every `period` the flag turns on for `active`.
///
/// The first burst fires one full period after mount, matching a repeating
/// interval timer that schedules a shorter clearing timeout on each fire.
/// The browser timer reads `period()` and `active()`; `is_active_at` is the
/// same schedule as a pure function of elapsed time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlitchCycle {
    pub period_ms: u32,
    pub active_ms: u32,
}

impl Default for GlitchCycle {
    fn default() -> Self {
        Self {
            period_ms: GLITCH_PERIOD_MS,
            active_ms: GLITCH_ACTIVE_MS,
        }
    }
}

impl GlitchCycle {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms as u64)
    }

    pub fn active(&self) -> Duration {
        Duration::from_millis(self.active_ms as u64)
    }

    /// Whether the glitch flag is set `elapsed` after mount.
    pub fn is_active_at(&self, elapsed: Duration) -> bool {
        let ms = elapsed.as_millis();
        let period = self.period_ms.max(1) as u128;
        ms >= period && ms % period < self.active_ms as u128
    }

    /// Fraction of each cycle spent glitching.
    pub fn duty(&self) -> f32 {
        (self.active_ms.min(self.period_ms) as f32) / (self.period_ms.max(1) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cycle_is_five_seconds_with_short_burst() {
        let c = GlitchCycle::default();
        assert_eq!(c.period(), Duration::from_secs(5));
        assert_eq!(c.active(), Duration::from_millis(200));
        assert!((c.duty() - 0.04).abs() < 1e-6);
    }

    #[test]
    fn no_glitch_before_first_period() {
        let c = GlitchCycle::default();
        assert!(!c.is_active_at(Duration::ZERO));
        assert!(!c.is_active_at(Duration::from_millis(100)));
        assert!(!c.is_active_at(Duration::from_millis(4_999)));
    }
}
