//! Debug status line rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::TuiState;

use super::state::StatusLine;

/// One dim row: fps, document position, current section.
pub fn render_debug_status_line(
    status: &StatusLine,
    tui: &TuiState,
    frame: &mut Frame,
    area: Rect,
) {
    let viewport = tui.page.viewport_height;
    let offset = tui.page.scroll.offset(viewport);
    let total = tui.page.scroll.total_lines();
    let section = tui.page.layout.section_at(offset);

    let dim = Style::default().fg(Color::DarkGray);
    let line = Line::from(vec![
        Span::styled(format!("{:.1} fps", status.fps), dim),
        Span::styled("  │  ", dim),
        Span::styled(format!("line {offset}/{total}"), dim),
        Span::styled("  │  ", dim),
        Span::styled(section.title(), dim),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
