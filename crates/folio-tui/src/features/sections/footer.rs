//! Footer. Not observed and never animated.

use chrono::{Datelike, Local};
use ratatui::text::{Line, Span};

use folio_content::PROFILE;

use crate::theme::Theme;

pub fn lines(theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let year = Local::now().year();
    vec![
        Line::default(),
        Line::from(Span::styled("─".repeat(width as usize), theme.dim())),
        Line::from(Span::styled(
            format!("Made with ♥ by {}", PROFILE.full_name),
            theme.dim(),
        ))
        .centered(),
        Line::from(Span::styled(
            format!("© {year} All rights reserved."),
            theme.dim(),
        ))
        .centered(),
        Line::default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_has_a_fixed_height() {
        let theme = Theme::default();
        assert_eq!(lines(&theme, 40).len(), lines(&theme, 200).len());
    }

    #[test]
    fn footer_carries_the_current_year() {
        let theme = Theme::default();
        let text: String = lines(&theme, 80)
            .iter()
            .map(std::string::ToString::to_string)
            .collect();
        assert!(text.contains(&Local::now().year().to_string()));
    }
}
