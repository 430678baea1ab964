//! Skills section: animated proficiency bars and summary cards.

use std::time::Duration;

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use folio_content::{SKILL_SUMMARY, SKILLS, SKILLS_TITLE};

use crate::anim::stagger;
use crate::page::Reveal;
use crate::theme::Theme;

use super::heading;

const BAR_WIDTH: usize = 24;
/// Delay between consecutive bars starting their fill.
const BAR_STAGGER: Duration = Duration::from_millis(100);
/// Time for one bar to fill from empty to its level.
const BAR_FILL: Duration = Duration::from_secs(1);
const CARD_STAGGER: Duration = Duration::from_millis(50);

pub fn lines(theme: &Theme, _width: u16, reveal: Reveal) -> Vec<Line<'static>> {
    let mut lines = heading(theme, SKILLS_TITLE, reveal.revealed);

    let name_width = SKILLS
        .iter()
        .map(|skill| skill.name.width())
        .max()
        .unwrap_or(0);

    // One row per skill, clipped on narrow terminals rather than wrapped.
    for (i, skill) in SKILLS.iter().enumerate() {
        if !reveal.revealed {
            lines.push(Line::default());
            continue;
        }

        let delay = BAR_STAGGER * i as u32;
        let progress = stagger::bar_progress(reveal.elapsed, delay, BAR_FILL);
        let fraction = progress * (f32::from(skill.level) / 100.0);
        let filled = ((fraction * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
        let percent = (progress * f32::from(skill.level)).round() as u8;

        lines.push(Line::from(vec![
            Span::raw(format!("{:name_width$}  ", skill.name)),
            Span::styled("█".repeat(filled), theme.accent()),
            Span::styled("░".repeat(BAR_WIDTH - filled), theme.dim()),
            Span::raw(format!(" {percent:>3}%  ")),
            Span::styled(skill.category, theme.dim()),
        ]));
    }
    lines.push(Line::default());

    let cards_shown = if reveal.revealed {
        stagger::visible_items(reveal.elapsed, CARD_STAGGER, SKILL_SUMMARY.len())
    } else {
        0
    };
    for (i, card) in SKILL_SUMMARY.iter().enumerate() {
        if i < cards_shown {
            lines.push(Line::from(vec![
                Span::styled("◆ ", theme.accent()),
                Span::styled(card.title, theme.bold()),
                Span::raw("  "),
                Span::styled(card.blurb, theme.dim()),
            ]));
        } else {
            lines.push(Line::default());
        }
    }
    lines.push(Line::default());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_is_independent_of_animation_state() {
        let theme = Theme::default();
        let settled = lines(&theme, 80, Reveal::settled()).len();
        assert_eq!(lines(&theme, 80, Reveal::hidden()).len(), settled);

        let filling = Reveal {
            revealed: true,
            elapsed: Some(Duration::from_millis(420)),
        };
        assert_eq!(lines(&theme, 80, filling).len(), settled);
    }

    #[test]
    fn settled_bars_show_their_full_level() {
        let theme = Theme::default();
        let rows = lines(&theme, 80, Reveal::settled());
        let text: String = rows.iter().map(std::string::ToString::to_string).collect();

        // HTML/CSS sits at 95, Express at 70.
        assert!(text.contains("95%"));
        assert!(text.contains("70%"));
    }

    #[test]
    fn bars_start_empty_at_the_reveal() {
        let theme = Theme::default();
        let at_reveal = Reveal {
            revealed: true,
            elapsed: Some(Duration::ZERO),
        };
        let rows = lines(&theme, 80, at_reveal);
        let text: String = rows.iter().map(std::string::ToString::to_string).collect();

        assert!(text.contains("0%"));
        assert!(!text.contains("95%"));
    }
}
