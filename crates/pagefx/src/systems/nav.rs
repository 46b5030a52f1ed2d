//! Scroll-offset markers: the nav bar's `scrolled` state and the scroll hint.

/// A class marker that is present iff the scroll offset exceeds a threshold.
/// Purely a function of the current offset, so repeated events are idempotent.
#[derive(Debug, Clone, Copy)]
pub struct ScrollMarker {
    threshold: f64,
    active: bool,
}

impl ScrollMarker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Recompute from the current offset. Returns whether the marker should
    /// be present.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        self.active = scroll_y > self.threshold;
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_greater_than_threshold() {
        let mut nav = ScrollMarker::new(60.0);
        assert!(!nav.update(0.0));
        assert!(!nav.update(60.0));
        assert!(nav.update(60.5));
        assert!(!nav.update(10.0));
    }

    #[test]
    fn idempotent_under_repeated_offsets() {
        let mut hint = ScrollMarker::new(100.0);
        for _ in 0..3 {
            assert!(hint.update(250.0));
            assert!(hint.is_active());
        }
    }

    #[test]
    fn markers_are_independent() {
        let mut nav = ScrollMarker::new(60.0);
        let mut hint = ScrollMarker::new(100.0);
        let offset = 80.0;
        assert!(nav.update(offset));
        assert!(!hint.update(offset));
    }
}
