//! Projects section with a staggered card reveal.

use std::time::Duration;

use ratatui::style::Style;
use ratatui::text::Line;

use folio_content::{PROJECTS, PROJECTS_TITLE};

use crate::anim::stagger;
use crate::page::Reveal;
use crate::theme::Theme;

use super::{heading, push_wrapped};

/// Delay between consecutive project cards after the reveal.
const CARD_STAGGER: Duration = Duration::from_millis(100);

pub fn lines(theme: &Theme, width: u16, reveal: Reveal) -> Vec<Line<'static>> {
    let width = width as usize;
    let mut lines = heading(theme, PROJECTS_TITLE, reveal.revealed);

    let shown = if reveal.revealed {
        stagger::visible_items(reveal.elapsed, CARD_STAGGER, PROJECTS.len())
    } else {
        0
    };

    for (i, project) in PROJECTS.iter().enumerate() {
        let visible = i < shown;
        push_wrapped(&mut lines, project.title, width, visible, theme.bold());
        push_wrapped(
            &mut lines,
            project.description,
            width,
            visible,
            Style::default(),
        );
        push_wrapped(
            &mut lines,
            &project.tech.join(" · "),
            width,
            visible,
            theme.dim(),
        );
        let links = if project.demo_url.is_some() {
            "[code]  [demo]"
        } else {
            "[code]"
        };
        push_wrapped(&mut lines, links, width, visible, theme.accent());
        lines.push(Line::default());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line<'_>]) -> String {
        lines.iter().map(std::string::ToString::to_string).collect()
    }

    #[test]
    fn cards_stagger_in_order() {
        let theme = Theme::default();

        let early = Reveal {
            revealed: true,
            elapsed: Some(Duration::from_millis(50)),
        };
        let text = text_of(&lines(&theme, 80, early));
        assert!(text.contains("E-Commerce Platform"));
        assert!(!text.contains("Task Management App"));

        let text = text_of(&lines(&theme, 80, Reveal::settled()));
        assert!(text.contains("Blog Platform"));
    }

    #[test]
    fn demo_link_shows_only_where_one_exists() {
        let theme = Theme::default();
        let text = text_of(&lines(&theme, 80, Reveal::settled()));

        // Only the task app carries a demo link.
        assert_eq!(text.matches("[demo]").count(), 1);
        assert_eq!(text.matches("[code]").count(), PROJECTS.len());
    }

    #[test]
    fn stagger_never_changes_the_row_count() {
        let theme = Theme::default();
        let settled = lines(&theme, 64, Reveal::settled()).len();
        assert_eq!(lines(&theme, 64, Reveal::hidden()).len(), settled);
    }
}
