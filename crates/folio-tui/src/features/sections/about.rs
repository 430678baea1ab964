//! About section.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use folio_content::{ABOUT_PARAGRAPHS, ABOUT_STATS, ABOUT_TITLE};

use crate::page::Reveal;
use crate::theme::Theme;

use super::{heading, push_wrapped};

pub fn lines(theme: &Theme, width: u16, reveal: Reveal) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = heading(theme, ABOUT_TITLE, reveal.revealed);

    for paragraph in ABOUT_PARAGRAPHS {
        push_wrapped(&mut lines, paragraph, width, reveal.revealed, Style::default());
        lines.push(Line::default());
    }

    if reveal.revealed {
        let mut spans = Vec::new();
        for (i, stat) in ABOUT_STATS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            spans.push(Span::styled(stat.value, theme.title()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(stat.label, theme.dim()));
        }
        lines.push(Line::from(spans));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::default());

    lines
}
