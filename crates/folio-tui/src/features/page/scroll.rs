//! Scroll state for the page document.

use std::time::{Duration, Instant};

/// Frames this close together count as one continuous scroll gesture.
const STREAK_WINDOW: Duration = Duration::from_millis(250);
/// Acceleration cap, in lines per frame.
const MAX_STEP: u16 = 4;

/// Where the viewport sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Pinned to an absolute line offset (clamped when the document or
    /// viewport shrinks).
    Anchored { offset: usize },
    /// Stuck to the end of the document across resizes.
    Bottom,
}

/// Scroll position plus the document length it is measured against.
#[derive(Debug)]
pub struct ScrollState {
    pub mode: ScrollMode,
    total_lines: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            mode: ScrollMode::Anchored { offset: 0 },
            total_lines: 0,
        }
    }

    /// Records the current document length. Offsets clamp against it lazily
    /// in [`ScrollState::offset`].
    pub fn update_line_count(&mut self, total: usize) {
        self.total_lines = total;
    }

    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// The effective offset for a viewport of the given height.
    pub fn offset(&self, viewport: usize) -> usize {
        let max = self.max_offset(viewport);
        match self.mode {
            ScrollMode::Anchored { offset } => offset.min(max),
            ScrollMode::Bottom => max,
        }
    }

    pub fn max_offset(&self, viewport: usize) -> usize {
        self.total_lines.saturating_sub(viewport)
    }

    pub fn scroll_up(&mut self, lines: usize, viewport: usize) {
        let current = self.offset(viewport);
        self.mode = ScrollMode::Anchored {
            offset: current.saturating_sub(lines),
        };
    }

    pub fn scroll_down(&mut self, lines: usize, viewport: usize) {
        let max = self.max_offset(viewport);
        let next = self.offset(viewport).saturating_add(lines);
        self.mode = if next >= max {
            ScrollMode::Bottom
        } else {
            ScrollMode::Anchored { offset: next }
        };
    }

    pub fn scroll_to_top(&mut self) {
        self.mode = ScrollMode::Anchored { offset: 0 };
    }

    pub fn scroll_to_bottom(&mut self) {
        self.mode = ScrollMode::Bottom;
    }

    /// Anchors the viewport so `line` is the top row.
    pub fn scroll_to_line(&mut self, line: usize) {
        self.mode = ScrollMode::Anchored { offset: line };
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Coalesces mouse wheel deltas between frames.
///
/// Rapid wheel events (especially trackpads) arrive in bursts; the
/// accumulator collapses each frame's burst into one scroll with streak
/// acceleration: the first frame moves one line, each consecutive scrolling
/// frame within the window one more, up to a cap.
#[derive(Debug, Default)]
pub struct ScrollAccumulator {
    pending: i32,
    streak: u16,
    last_take: Option<Instant>,
}

impl ScrollAccumulator {
    pub fn accumulate(&mut self, delta: i32) {
        self.pending += delta;
    }

    /// Takes the coalesced delta for this frame as a signed line count.
    pub fn take_delta(&mut self) -> i32 {
        if self.pending == 0 {
            return 0;
        }

        let direction = self.pending.signum();
        self.pending = 0;

        let fresh = self
            .last_take
            .is_none_or(|at| at.elapsed() > STREAK_WINDOW);
        if fresh {
            self.streak = 0;
        }
        self.streak = (self.streak + 1).min(MAX_STEP);
        self.last_take = Some(Instant::now());

        direction * i32::from(self.streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_clamps_to_document() {
        let mut scroll = ScrollState::new();
        scroll.update_line_count(100);

        scroll.scroll_to_line(500);
        assert_eq!(scroll.offset(20), 80);
    }

    #[test]
    fn scroll_up_anchors() {
        let mut scroll = ScrollState::new();
        scroll.update_line_count(100);
        scroll.scroll_to_bottom();

        scroll.scroll_up(5, 20);
        assert!(matches!(scroll.mode, ScrollMode::Anchored { offset: 75 }));
    }

    #[test]
    fn scroll_down_past_end_sticks_to_bottom() {
        let mut scroll = ScrollState::new();
        scroll.update_line_count(100);

        scroll.scroll_down(100, 20);
        assert!(matches!(scroll.mode, ScrollMode::Bottom));
        assert_eq!(scroll.offset(20), 80);
    }

    #[test]
    fn bottom_mode_tracks_resizes() {
        let mut scroll = ScrollState::new();
        scroll.update_line_count(100);
        scroll.scroll_to_bottom();

        assert_eq!(scroll.offset(20), 80);
        assert_eq!(scroll.offset(50), 50);
    }

    #[test]
    fn short_document_never_scrolls() {
        let mut scroll = ScrollState::new();
        scroll.update_line_count(10);

        scroll.scroll_down(5, 20);
        assert_eq!(scroll.offset(20), 0);
    }

    #[test]
    fn accumulator_first_frame_moves_one_line() {
        let mut acc = ScrollAccumulator::default();

        // A burst of wheel events within one frame coalesces to a single step.
        acc.accumulate(-1);
        acc.accumulate(-1);
        acc.accumulate(-1);

        assert_eq!(acc.take_delta(), -1);
        assert_eq!(acc.take_delta(), 0);
    }

    #[test]
    fn accumulator_accelerates_on_consecutive_frames() {
        let mut acc = ScrollAccumulator::default();

        acc.accumulate(1);
        assert_eq!(acc.take_delta(), 1);
        acc.accumulate(1);
        assert_eq!(acc.take_delta(), 2);
        acc.accumulate(1);
        assert_eq!(acc.take_delta(), 3);
        acc.accumulate(1);
        assert_eq!(acc.take_delta(), 4);
        // Capped.
        acc.accumulate(1);
        assert_eq!(acc.take_delta(), 4);
    }

    #[test]
    fn accumulator_respects_direction() {
        let mut acc = ScrollAccumulator::default();

        acc.accumulate(3);
        acc.accumulate(-5);
        assert_eq!(acc.take_delta(), -1);
    }
}
