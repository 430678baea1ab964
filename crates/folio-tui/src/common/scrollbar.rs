//! Custom scrollbar widget with stable thumb size.
//!
//! ratatui's built-in Scrollbar rounds the thumb start and end separately,
//! so the thumb visibly grows and shrinks while scrolling. This widget
//! computes one fixed thumb length for the whole document and only moves it.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

/// A scrollbar for the page document.
///
/// The thumb reaches exactly the bottom of the track at max scroll, and its
/// length never changes with the offset.
#[derive(Debug, Clone)]
pub struct PageScrollbar {
    /// Total lines in the document.
    total: usize,
    /// Visible lines.
    viewport: usize,
    /// Current offset from the top.
    offset: usize,
}

impl PageScrollbar {
    pub fn new(total: usize, viewport: usize, offset: usize) -> Self {
        Self {
            total,
            viewport,
            offset,
        }
    }

    /// The bar only appears when there is something to scroll.
    fn should_display(&self) -> bool {
        self.total > self.viewport
    }
}

impl Widget for PageScrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() {
            return;
        }

        let max_scroll = self.total.saturating_sub(self.viewport);
        let track_len = area.height as usize;
        let viewport_len = self.viewport.min(track_len);

        if track_len == 0 || max_scroll == 0 {
            return;
        }

        // Fixed thumb length: round(track * viewport / (total - 1 + viewport)).
        let denom = self.total.saturating_sub(1).saturating_add(viewport_len);
        let thumb_len = if denom > 0 {
            let numerator = track_len as u64 * viewport_len as u64;
            let rounded = (numerator + (denom as u64 / 2)) / denom as u64;
            (rounded as usize).clamp(1, track_len)
        } else {
            track_len
        };

        // The thumb travels the leftover track span linearly with the offset.
        let available = track_len.saturating_sub(thumb_len);
        let thumb_start = ((self.offset as u64 * available as u64) / max_scroll as u64) as usize;

        let x = area.x + area.width.saturating_sub(1);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let (symbol, style) = if idx >= thumb_start && idx < thumb_start + thumb_len {
                (THUMB_SYMBOL, Style::default().fg(Color::Gray))
            } else {
                (TRACK_SYMBOL, Style::default().fg(Color::DarkGray))
            };
            buf.set_string(x, y, symbol, style);
        }
    }
}
