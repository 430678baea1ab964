//! Notice rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::wrap::wrap_text;

use super::state::{Notice, NoticeKind};

const NOTICE_WIDTH: u16 = 44;

/// Renders the newest notice as a floating box in the top-right corner.
pub fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let width = NOTICE_WIDTH.min(area.width.saturating_sub(2));
    if width < 8 || area.height < 5 {
        return;
    }

    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };

    let inner_width = width.saturating_sub(4) as usize;
    let body_rows = wrap_text(&notice.body, inner_width);
    let height = (body_rows.len() as u16 + 2).min(area.height.saturating_sub(2));

    let x = area.x + area.width.saturating_sub(width + 1);
    let popup = Rect::new(x, area.y + 1, width, height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", notice.title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let body: Vec<Line> = body_rows
        .into_iter()
        .map(|row| Line::from(format!(" {row}")))
        .collect();
    frame.render_widget(Paragraph::new(body).block(block), popup);
}
