//! Education section with a staggered entry reveal.

use std::time::Duration;

use ratatui::text::Line;

use folio_content::{EDUCATION, EDUCATION_TITLE};

use crate::anim::stagger;
use crate::page::Reveal;
use crate::theme::Theme;

use super::{heading, push_wrapped};

/// Delay between consecutive entries after the reveal.
const ENTRY_STAGGER: Duration = Duration::from_millis(200);

pub fn lines(theme: &Theme, width: u16, reveal: Reveal) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = heading(theme, EDUCATION_TITLE, reveal.revealed);

    let shown = if reveal.revealed {
        stagger::visible_items(reveal.elapsed, ENTRY_STAGGER, EDUCATION.len())
    } else {
        0
    };

    for (i, entry) in EDUCATION.iter().enumerate() {
        let visible = i < shown;
        let header = format!("{}  ({})", entry.institution, entry.period);
        push_wrapped(&mut lines, &header, width, visible, theme.bold());
        push_wrapped(&mut lines, entry.degree, width, visible, theme.accent());
        push_wrapped(&mut lines, entry.description, width, visible, theme.dim());
        lines.push(Line::default());
    }

    lines
}
