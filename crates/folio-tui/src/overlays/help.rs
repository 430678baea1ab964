//! Help overlay: static key reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::state::TuiState;
use crate::theme::Theme;

const BINDINGS: &[(&str, &str)] = &[
    ("j/↓  k/↑", "scroll"),
    ("PgDn/Space  PgUp", "scroll a page"),
    ("g/Home  G/End", "jump to top / bottom"),
    ("1-7", "jump to a section"),
    ("c", "jump to contact"),
    ("m", "compose a message"),
    ("o", "browse links"),
    ("d", "toggle debug status"),
    ("q  Ctrl+C", "quit"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HelpState;

impl HelpState {
    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        let hints = [InputHint::new("Esc", "close")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Help",
                border_color: theme.accent,
                width: 46,
                height: BINDINGS.len() as u16 + 3,
                hints: &hints,
            },
        );

        let key_width = BINDINGS
            .iter()
            .map(|(keys, _)| keys.width())
            .max()
            .unwrap_or(0);
        for (i, (keys, action)) in BINDINGS.iter().enumerate() {
            let y = i as u16;
            if y >= layout.body.height {
                break;
            }
            let row = Rect::new(layout.body.x, layout.body.y + y, layout.body.width, 1);
            let pad = " ".repeat(key_width.saturating_sub(keys.width()));
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::raw(pad),
                    Span::styled(*keys, theme.accent()),
                    Span::raw("  "),
                    Span::raw(*action),
                ])),
                row,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use folio_core::config::Config;

    use super::*;
    use crate::overlays::OverlayTransition;

    #[test]
    fn any_close_key_dismisses_help() {
        let tui = TuiState::new(&Config::default());
        for code in [
            KeyCode::Esc,
            KeyCode::Enter,
            KeyCode::Char('q'),
            KeyCode::Char('?'),
        ] {
            let mut help = HelpState;
            let update = help.handle_key(&tui, KeyEvent::new(code, KeyModifiers::NONE));
            assert!(matches!(update.transition, OverlayTransition::Close));
        }

        let mut help = HelpState;
        let update = help.handle_key(
            &tui,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
        );
        assert!(matches!(update.transition, OverlayTransition::Stay));
    }
}
