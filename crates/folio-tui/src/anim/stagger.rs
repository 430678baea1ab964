//! Pure elapsed-time helpers for entrance animations.
//!
//! `elapsed` is the time since a section's reveal latch fired; `None` means
//! the reveal is fully settled (animations disabled, or the section is not
//! animated) and everything shows at its final state.

use std::time::Duration;

/// How many of `total` staggered items are visible.
///
/// Item `i` appears `i * step` after the reveal; the first item shows
/// immediately.
pub fn visible_items(elapsed: Option<Duration>, step: Duration, total: usize) -> usize {
    let Some(elapsed) = elapsed else {
        return total;
    };
    if step.is_zero() {
        return total;
    }

    let shown = (elapsed.as_millis() / step.as_millis()) as usize + 1;
    shown.min(total)
}

/// Eased fill progress (0..=1) for a bar that starts `delay` after the
/// reveal and fills over `duration`.
pub fn bar_progress(elapsed: Option<Duration>, delay: Duration, duration: Duration) -> f32 {
    let Some(elapsed) = elapsed else {
        return 1.0;
    };
    let Some(active) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }

    let t = (active.as_secs_f32() / duration.as_secs_f32()).min(1.0);
    ease_out_cubic(t)
}

/// Whether a blinking marker is in its "on" phase.
pub fn blink_on(elapsed: Duration, period: Duration) -> bool {
    let half = period.as_millis() / 2;
    if half == 0 {
        return true;
    }
    (elapsed.as_millis() / half) % 2 == 0
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(100);

    #[test]
    fn first_item_shows_at_reveal() {
        assert_eq!(visible_items(Some(Duration::ZERO), STEP, 6), 1);
    }

    #[test]
    fn items_appear_one_step_apart() {
        assert_eq!(visible_items(Some(Duration::from_millis(99)), STEP, 6), 1);
        assert_eq!(visible_items(Some(Duration::from_millis(100)), STEP, 6), 2);
        assert_eq!(visible_items(Some(Duration::from_millis(250)), STEP, 6), 3);
    }

    #[test]
    fn visible_items_saturates_at_total() {
        assert_eq!(visible_items(Some(Duration::from_secs(60)), STEP, 6), 6);
    }

    #[test]
    fn settled_shows_everything() {
        assert_eq!(visible_items(None, STEP, 6), 6);
        assert_eq!(bar_progress(None, STEP, STEP), 1.0);
    }

    #[test]
    fn bar_is_empty_before_its_delay() {
        let progress = bar_progress(
            Some(Duration::from_millis(50)),
            Duration::from_millis(100),
            Duration::from_secs(1),
        );
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn bar_is_full_after_delay_plus_duration() {
        let progress = bar_progress(
            Some(Duration::from_millis(1100)),
            Duration::from_millis(100),
            Duration::from_secs(1),
        );
        assert!((progress - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn bar_fill_is_monotonic() {
        let delay = Duration::from_millis(100);
        let duration = Duration::from_secs(1);

        let mut last = 0.0f32;
        for ms in (0..1400).step_by(50) {
            let p = bar_progress(Some(Duration::from_millis(ms)), delay, duration);
            assert!(p >= last, "progress regressed at {ms}ms");
            assert!((0.0..=1.0).contains(&p));
            last = p;
        }
    }

    #[test]
    fn blink_toggles_each_half_period() {
        let period = Duration::from_millis(1000);
        assert!(blink_on(Duration::from_millis(0), period));
        assert!(blink_on(Duration::from_millis(499), period));
        assert!(!blink_on(Duration::from_millis(500), period));
        assert!(blink_on(Duration::from_millis(1000), period));
    }
}
