//! Animated statistic counters.
//!
//! `CounterPanel` is the one-shot latch for the whole stats panel;
//! `CounterAnimation` is the per-counter eased value over wall-clock time.

use crate::api::config::CounterConfig;
use crate::extensions::easing::ease_out_cubic;

/// Parse a counter target the way `parseInt(s, 10)` does: skip leading
/// whitespace, accept one sign, then take the leading decimal digits.
/// Anything without a digit (including a missing attribute) is NaN.
pub fn parse_target(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return f64::NAN;
    }
    // Leading digits only; very long inputs saturate to infinity like JS.
    let value: f64 = digits[..end].parse().unwrap_or(f64::NAN);
    if negative { -value } else { value }
}

/// `Math.round`: halves round toward positive infinity.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// One counter's animation from 0 to `target`.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: f64,
    start_ms: f64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(target: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            target,
            start_ms,
            duration_ms,
        }
    }

    /// Normalized progress [0, 1] at timestamp `now_ms`. Timestamps before
    /// the start count as zero elapsed time.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed integer at `now_ms`: `round(target * ease_out_cubic(progress))`.
    /// NaN targets yield NaN.
    pub fn value_at(&self, now_ms: f64) -> f64 {
        round_half_up(ease_out_cubic(self.progress(now_ms)) * self.target)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// Page-level latch for the counter set. Activates exactly once; the
/// counters never re-animate even if the panel re-enters view.
#[derive(Debug, Clone)]
pub struct CounterPanel {
    duration_ms: f64,
    done: bool,
}

impl CounterPanel {
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            duration_ms: config.duration_ms,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Handle a visibility change of the panel. On the first intersecting
    /// event, returns one animation per target, all starting at `now_ms`.
    /// Returns `None` otherwise.
    pub fn on_visibility<I>(&mut self, is_intersecting: bool, now_ms: f64, targets: I) -> Option<Vec<CounterAnimation>>
    where
        I: IntoIterator<Item = f64>,
    {
        if self.done || !is_intersecting {
            return None;
        }
        self.done = true;
        log::debug!("counters activated at {:.1}ms", now_ms);
        Some(
            targets
                .into_iter()
                .map(|target| CounterAnimation::new(target, now_ms, self.duration_ms))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_like_parse_int() {
        assert_eq!(parse_target(Some("2500")), 2500.0);
        assert_eq!(parse_target(Some("  42px")), 42.0);
        assert_eq!(parse_target(Some("-7")), -7.0);
        assert_eq!(parse_target(Some("+9")), 9.0);
        assert_eq!(parse_target(Some("3.9")), 3.0);
        assert!(parse_target(Some("abc")).is_nan());
        assert!(parse_target(Some("")).is_nan());
        assert!(parse_target(Some("-")).is_nan());
        assert!(parse_target(None).is_nan());
    }

    #[test]
    fn math_round_semantics() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn starts_at_zero_and_ends_at_target() {
        let a = CounterAnimation::new(1234.0, 100.0, 1800.0);
        assert_eq!(a.value_at(100.0), 0.0);
        assert_eq!(a.value_at(1900.0), 1234.0);
        assert_eq!(a.value_at(5000.0), 1234.0);
        assert!(a.is_complete(1900.0));
        assert!(!a.is_complete(1899.0));
    }

    #[test]
    fn value_is_non_decreasing() {
        let a = CounterAnimation::new(98_765.0, 0.0, 1800.0);
        let mut last = a.value_at(0.0);
        for step in 1..=1800 {
            let v = a.value_at(step as f64);
            assert!(v >= last, "value went down at t={}: {} < {}", step, v, last);
            last = v;
        }
        assert_eq!(last, 98_765.0);
    }

    #[test]
    fn early_frame_timestamp_clamps_to_zero() {
        let a = CounterAnimation::new(500.0, 1000.0, 1800.0);
        assert_eq!(a.progress(990.0), 0.0);
        assert_eq!(a.value_at(990.0), 0.0);
    }

    #[test]
    fn midpoint_follows_cubic_out() {
        let a = CounterAnimation::new(1000.0, 0.0, 1800.0);
        assert_eq!(a.value_at(900.0), 875.0);
    }

    #[test]
    fn nan_target_animates_to_nan() {
        let a = CounterAnimation::new(parse_target(None), 0.0, 1800.0);
        assert!(a.value_at(900.0).is_nan());
        assert!(a.is_complete(1800.0));
    }

    #[test]
    fn panel_latches_once() {
        let mut panel = CounterPanel::new(&CounterConfig::default());
        assert!(panel.on_visibility(false, 0.0, [10.0]).is_none());
        assert!(!panel.is_done());

        let anims = panel.on_visibility(true, 50.0, [10.0, 20.0]).unwrap();
        assert_eq!(anims.len(), 2);
        assert_eq!(anims[0].value_at(1850.0), 10.0);
        assert_eq!(anims[1].value_at(1850.0), 20.0);
        assert_eq!(anims[1].value_at(50.0), 0.0);
        assert!(panel.is_done());

        assert!(panel.on_visibility(true, 900.0, [10.0, 20.0]).is_none());
    }
}
