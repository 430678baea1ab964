//! Contact section.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use folio_content::{CONTACT, CONTACT_HEADLINE, CONTACT_PITCH, CONTACT_SOCIALS, CONTACT_TITLE};

use crate::page::Reveal;
use crate::theme::Theme;

use super::{heading, push_wrapped};

pub fn lines(theme: &Theme, width: u16, reveal: Reveal) -> Vec<Line<'static>> {
    let width = width as usize;
    let revealed = reveal.revealed;
    let mut lines = heading(theme, CONTACT_TITLE, revealed);

    push_wrapped(&mut lines, CONTACT_HEADLINE, width, revealed, theme.bold());
    push_wrapped(&mut lines, CONTACT_PITCH, width, revealed, Style::default());
    lines.push(Line::default());

    let info = [
        ("Email", CONTACT.email),
        ("Location", CONTACT.location),
        ("Phone", CONTACT.phone),
    ];
    for (label, value) in info {
        if revealed {
            lines.push(Line::from(vec![
                Span::styled(format!("{label:<10}"), theme.dim()),
                Span::raw(value),
            ]));
        } else {
            lines.push(Line::default());
        }
    }
    lines.push(Line::default());

    let socials = CONTACT_SOCIALS
        .iter()
        .map(|link| link.label)
        .collect::<Vec<_>>()
        .join(" · ");
    push_wrapped(&mut lines, &socials, width, revealed, theme.accent());
    lines.push(Line::default());

    if revealed {
        lines.push(Line::from(vec![
            Span::styled("Press ", theme.dim()),
            Span::styled("m", theme.accent()),
            Span::styled(" to compose a message", theme.dim()),
        ]));
    } else {
        lines.push(Line::default());
    }
    lines.push(Line::default());

    lines
}
