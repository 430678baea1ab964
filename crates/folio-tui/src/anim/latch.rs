//! One-shot reveal latch.

use std::time::{Duration, Instant};

/// Latches true the first time an observed ratio crosses the threshold.
///
/// Re-entry is deliberately ignored: once a section has revealed it never
/// returns to its hidden presentation, no matter how the viewport moves
/// afterwards. The reveal timestamp feeds entrance staggers.
#[derive(Debug, Clone, Copy)]
pub struct RevealLatch {
    threshold: f32,
    revealed: bool,
    revealed_at: Option<Instant>,
}

impl RevealLatch {
    /// An armed latch that fires when the ratio reaches `threshold`.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            revealed: false,
            revealed_at: None,
        }
    }

    /// A latch that starts revealed and fully settled, with no reveal
    /// timestamp. Used when animations are disabled.
    pub fn settled() -> Self {
        Self {
            threshold: 0.0,
            revealed: true,
            revealed_at: None,
        }
    }

    /// Records a visibility sample. Returns true only on the sample that
    /// fires the latch.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.revealed {
            return false;
        }
        if ratio >= self.threshold {
            self.revealed = true;
            self.revealed_at = Some(Instant::now());
            return true;
        }
        false
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Time since the latch fired, or None when it has not fired or when it
    /// was constructed settled.
    pub fn elapsed(&self) -> Option<Duration> {
        self.revealed_at.map(|at| at.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let latch = RevealLatch::new(0.2);
        assert!(!latch.is_revealed());
        assert!(latch.elapsed().is_none());
    }

    #[test]
    fn fires_at_threshold() {
        let mut latch = RevealLatch::new(0.2);

        assert!(!latch.observe(0.1));
        assert!(!latch.is_revealed());

        assert!(latch.observe(0.2));
        assert!(latch.is_revealed());
        assert!(latch.elapsed().is_some());
    }

    #[test]
    fn fires_only_once() {
        let mut latch = RevealLatch::new(0.1);

        assert!(latch.observe(0.5));

        // Leaving and re-entering the viewport must not re-fire or reset.
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.9));
        assert!(latch.is_revealed());
    }

    #[test]
    fn never_reverts_below_threshold() {
        let mut latch = RevealLatch::new(0.2);
        latch.observe(1.0);

        latch.observe(0.0);
        assert!(latch.is_revealed());
    }

    #[test]
    fn settled_latch_is_revealed_without_timestamp() {
        let latch = RevealLatch::settled();
        assert!(latch.is_revealed());
        assert!(latch.elapsed().is_none());
    }

    #[test]
    fn settled_latch_ignores_samples() {
        let mut latch = RevealLatch::settled();
        assert!(!latch.observe(1.0));
        assert!(latch.elapsed().is_none());
    }
}
