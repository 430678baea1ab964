//! Accent-driven palette.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

/// Resolved colors derived from config.
///
/// Only the accent is configurable; the rest of the palette is fixed so the
/// page stays readable on both dark and light terminals.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
}

impl Theme {
    /// Parses an accent color name or hex value, falling back to cyan for
    /// anything ratatui does not recognize.
    pub fn from_accent(name: &str) -> Self {
        let accent = Color::from_str(name).unwrap_or(Color::Cyan);
        Self { accent }
    }

    /// Accent, bold. Section titles and highlights.
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Accent without emphasis.
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Secondary text.
    pub fn dim(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Primary emphasis independent of the accent.
    pub fn bold(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_color_parses() {
        let theme = Theme::from_accent("magenta");
        assert_eq!(theme.accent, Color::Magenta);
    }

    #[test]
    fn hex_color_parses() {
        let theme = Theme::from_accent("#5fd7ff");
        assert_eq!(theme.accent, Color::Rgb(0x5f, 0xd7, 0xff));
    }

    #[test]
    fn unknown_color_falls_back_to_cyan() {
        let theme = Theme::from_accent("not-a-color");
        assert_eq!(theme.accent, Color::Cyan);
    }
}
