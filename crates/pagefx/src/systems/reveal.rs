//! Scroll-triggered reveal bookkeeping.

/// Tracks which elements are still waiting to be revealed.
///
/// `K` is whatever identifies an element to the caller (a DOM `Element` in the
/// browser, an index in tests). Reveal is monotonic: a key leaves the watch set
/// on its first intersection and never comes back.
#[derive(Debug, Clone)]
pub struct RevealSet<K> {
    watching: Vec<K>,
}

impl<K: PartialEq> RevealSet<K> {
    pub fn new() -> Self {
        Self {
            watching: Vec::new(),
        }
    }

    /// Start watching `key`. Duplicate keys are ignored.
    pub fn observe(&mut self, key: K) {
        if !self.watching.contains(&key) {
            self.watching.push(key);
        }
    }

    #[cfg(test)]
    fn is_watching(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    /// Number of elements not yet revealed.
    pub fn pending(&self) -> usize {
        self.watching.len()
    }

    /// Handle an intersection report. Returns the key when the caller should
    /// apply the visible marker and stop observing it; `None` when the element
    /// is not intersecting or was already revealed.
    pub fn on_intersection(&mut self, key: &K, is_intersecting: bool) -> Option<K> {
        if !is_intersecting {
            return None;
        }
        let index = self.watching.iter().position(|k| k == key)?;
        Some(self.watching.swap_remove(index))
    }
}

impl<K: PartialEq> Default for RevealSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_on_first_intersection() {
        let mut set = RevealSet::new();
        set.observe(1);
        set.observe(2);

        assert_eq!(set.on_intersection(&1, false), None);
        assert!(set.is_watching(&1));

        assert_eq!(set.on_intersection(&1, true), Some(1));
        assert!(!set.is_watching(&1));
        assert_eq!(set.on_intersection(&1, true), None);
        assert_eq!(set.pending(), 1);
    }

    #[test]
    fn leaving_view_does_not_unreveal() {
        let mut set = RevealSet::new();
        set.observe("hero");
        set.on_intersection(&"hero", true);
        assert_eq!(set.on_intersection(&"hero", false), None);
        assert_eq!(set.pending(), 0);
        assert!(!set.is_watching(&"hero"));
    }

    #[test]
    fn duplicate_observe_is_ignored() {
        let mut set = RevealSet::new();
        set.observe(5);
        set.observe(5);
        assert_eq!(set.pending(), 1);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut set: RevealSet<u32> = RevealSet::new();
        set.observe(1);
        assert_eq!(set.on_intersection(&9, true), None);
        assert_eq!(set.pending(), 1);
    }
}
