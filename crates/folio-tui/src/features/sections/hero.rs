//! Home / hero section.
//!
//! The hero types its intro from startup rather than waiting on a
//! visibility trigger, so it takes a [`HeroView`] snapshot instead of a
//! reveal. Rows are reserved for the finished intro up front; the growing
//! prefix fills them without ever reflowing the page.

use ratatui::text::{Line, Span};

use folio_content::{CODE_SNIPPETS, HERO_LINKS, PROFILE};

use crate::common::wrap::wrap_text;
use crate::page::HeroState;
use crate::theme::Theme;

/// What the hero renders this frame.
pub struct HeroView<'a> {
    pub typed: &'a str,
    pub full: &'a str,
    pub typing: bool,
    pub blink: bool,
}

impl<'a> HeroView<'a> {
    pub fn of(hero: &'a HeroState) -> Self {
        Self {
            typed: hero.typed(),
            full: hero.source(),
            typing: hero.is_typing(),
            blink: hero.blink_on(),
        }
    }

    /// The finished view. Used for measuring.
    pub fn settled() -> HeroView<'static> {
        HeroView {
            typed: PROFILE.intro,
            full: PROFILE.intro,
            typing: false,
            blink: false,
        }
    }
}

pub fn lines(theme: &Theme, width: u16, view: &HeroView<'_>) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = vec![Line::default()];

    for row in wrap_text(PROFILE.greeting, width) {
        lines.push(Line::from(Span::styled(row, theme.bold())));
    }
    lines.push(Line::default());

    // The intro wraps one column short so the cursor marker always fits.
    let intro_width = width.saturating_sub(1);
    let reserved = wrap_text(view.full, intro_width).len();
    let typed_rows = wrap_text(view.typed, intro_width);
    let cursor_row = typed_rows.len().saturating_sub(1);
    let typed_count = typed_rows.len();
    for (i, row) in typed_rows.into_iter().enumerate() {
        let mut spans = vec![Span::raw(row)];
        if view.typing && i == cursor_row {
            // Blinking cursor marker; cosmetic, not part of the text.
            if view.blink {
                spans.push(Span::styled("|", theme.accent()));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }
    for _ in typed_count..reserved {
        lines.push(Line::default());
    }
    lines.push(Line::default());

    // Decorative floating code fragments.
    for row in wrap_text(&CODE_SNIPPETS.join("   "), width) {
        lines.push(Line::from(Span::styled(row, theme.dim())));
    }
    lines.push(Line::default());

    for row in wrap_text("[ Download Resume ]  [ Contact Me ]", width) {
        lines.push(Line::from(Span::styled(row, theme.accent())));
    }
    lines.push(Line::default());

    let links = HERO_LINKS
        .iter()
        .map(|link| link.label)
        .collect::<Vec<_>>()
        .join(" · ");
    for row in wrap_text(&links, width) {
        lines.push(Line::from(Span::styled(row, theme.accent())));
    }
    lines.push(Line::default());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_never_changes_the_row_count() {
        let theme = Theme::default();
        let settled = lines(&theme, 60, &HeroView::settled()).len();

        let empty = HeroView {
            typed: "",
            full: PROFILE.intro,
            typing: true,
            blink: true,
        };
        assert_eq!(lines(&theme, 60, &empty).len(), settled);

        let partial = HeroView {
            typed: &PROFILE.intro[..20],
            full: PROFILE.intro,
            typing: true,
            blink: false,
        };
        assert_eq!(lines(&theme, 60, &partial).len(), settled);
    }

    #[test]
    fn cursor_shows_only_while_typing() {
        let theme = Theme::default();
        let typing = HeroView {
            typed: "I'm",
            full: PROFILE.intro,
            typing: true,
            blink: true,
        };
        let rows = lines(&theme, 60, &typing);
        let all_text: String = rows.iter().map(|l| l.to_string()).collect();
        assert!(all_text.contains("I'm|"));

        let done = lines(&theme, 60, &HeroView::settled());
        let all_text: String = done.iter().map(|l| l.to_string()).collect();
        assert!(!all_text.contains('|'));
    }
}
