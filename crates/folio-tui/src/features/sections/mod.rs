//! Section line builders.
//!
//! Each section turns static content plus its reveal snapshot into
//! pre-wrapped lines for the current content width. Builders are pure:
//! state in, `Vec<Line>` out.
//!
//! Invariant: a section's line count depends only on the width, never on
//! animation state. Hidden or still-staggering items render as blank rows
//! of the same height, so a reveal never reflows the page and the layout
//! extents stay valid between width changes.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::common::wrap::wrap_text;
use crate::theme::Theme;

pub mod about;
pub mod contact;
pub mod education;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

/// Shared section heading: blank row, title, rule, blank row.
///
/// The title dims while the section is hidden so the reader can still see
/// where they are; the row count never changes.
pub(crate) fn heading(theme: &Theme, title: &str, revealed: bool) -> Vec<Line<'static>> {
    let style = if revealed { theme.title() } else { theme.dim() };
    vec![
        Line::default(),
        Line::from(Span::styled(title.to_string(), style)),
        Line::from(Span::styled("─".repeat(title.width()), theme.dim())),
        Line::default(),
    ]
}

/// Wraps `text` and pushes one row per wrapped line, blank rows when the
/// content is not visible yet. This keeps hidden and revealed row counts
/// identical.
pub(crate) fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: usize,
    visible: bool,
    style: Style,
) {
    for row in wrap_text(text, width) {
        if visible {
            lines.push(Line::from(Span::styled(row, style)));
        } else {
            lines.push(Line::default());
        }
    }
}

/// The fixed vertical order of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Education,
    Skills,
    Projects,
    Contact,
    Footer,
}

impl SectionId {
    pub const COUNT: usize = 7;

    pub const ALL: [SectionId; SectionId::COUNT] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
        SectionId::Footer,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Short name for the status line and logs.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    /// Reveal threshold for observed sections.
    ///
    /// Home animates on startup and the footer is plain, so neither is
    /// observed.
    pub fn threshold(self) -> Option<f32> {
        match self {
            SectionId::About | SectionId::Skills | SectionId::Contact => Some(0.2),
            SectionId::Education | SectionId::Projects => Some(0.1),
            SectionId::Home | SectionId::Footer => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_section_in_order() {
        assert_eq!(SectionId::ALL.len(), SectionId::COUNT);
        for (idx, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), idx);
        }
    }

    #[test]
    fn only_interior_sections_are_observed() {
        assert!(SectionId::Home.threshold().is_none());
        assert!(SectionId::Footer.threshold().is_none());
        for id in [
            SectionId::About,
            SectionId::Education,
            SectionId::Skills,
            SectionId::Projects,
            SectionId::Contact,
        ] {
            assert!(id.threshold().is_some());
        }
    }
}
