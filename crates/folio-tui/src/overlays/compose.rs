//! Compose overlay: the contact form.
//!
//! Three fields with collective presence validation. Submission either
//! rejects with one generic error (leaving every field exactly as entered)
//! or clears the whole draft, closes, and hands the message to the delivery
//! sink. There is no partially-cleared state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{InputHint, InputLine, OverlayConfig, render_input_line, render_overlay};
use crate::common::text::{truncate_start_with_ellipsis, truncate_with_ellipsis};
use crate::effects::UiEffect;
use crate::mutations::{ContactMutation, NoticeMutation, StateMutation};
use crate::page::ContactDraft;
use crate::sink::OutboundMessage;
use crate::state::TuiState;
use crate::theme::Theme;

/// Rows of the message field shown at once.
const MESSAGE_ROWS: usize = 5;

/// Which form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Name,
    Email,
    Message,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Email,
            Focus::Email => Focus::Message,
            Focus::Message => Focus::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Name => Focus::Message,
            Focus::Email => Focus::Name,
            Focus::Message => Focus::Email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ComposeState {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: Focus,
}

impl ComposeState {
    /// Opens the form seeded from the saved draft.
    pub fn open(draft: &ContactDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.message.clone(),
            focus: Focus::Name,
        }
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.close_keeping_draft(),
            KeyCode::Char('c') if ctrl => self.close_keeping_draft(),
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                OverlayUpdate::stay()
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                // Enter advances from the single-line fields and breaks the
                // line inside the message.
                match self.focus {
                    Focus::Name => self.focus = Focus::Email,
                    Focus::Email => self.focus = Focus::Message,
                    Focus::Message => self.message.push('\n'),
                }
                OverlayUpdate::stay()
            }
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.focused_field_mut().push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// Inserts pasted text into the focused field. Single-line fields fold
    /// newlines into spaces.
    pub fn insert_text(&mut self, text: &str) {
        match self.focus {
            Focus::Message => self.message.push_str(text),
            Focus::Name | Focus::Email => {
                let field = self.focused_field_mut();
                for (i, part) in text.lines().enumerate() {
                    if i > 0 {
                        field.push(' ');
                    }
                    field.push_str(part);
                }
            }
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Name => &mut self.name,
            Focus::Email => &mut self.email,
            Focus::Message => &mut self.message,
        }
    }

    fn close_keeping_draft(&self) -> OverlayUpdate {
        OverlayUpdate::close().with_mutations(vec![StateMutation::Contact(
            ContactMutation::SaveDraft {
                name: self.name.clone(),
                email: self.email.clone(),
                message: self.message.clone(),
            },
        )])
    }

    fn submit(&self) -> OverlayUpdate {
        // Collective presence check; whitespace counts as content.
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return OverlayUpdate::stay().with_mutations(vec![StateMutation::Notice(
                NoticeMutation::ShowError {
                    title: "Error".into(),
                    body: "Please fill in all fields".into(),
                },
            )]);
        }

        let message = OutboundMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        };
        OverlayUpdate::close()
            .with_mutations(vec![
                StateMutation::Contact(ContactMutation::ClearDraft),
                StateMutation::Notice(NoticeMutation::ShowSuccess {
                    title: "Message sent!".into(),
                    body: "Thank you for reaching out. I'll get back to you soon!".into(),
                }),
            ])
            .with_ui_effects(vec![UiEffect::DeliverMessage { message }])
    }

    pub fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        render_compose(self, theme, frame, area);
    }
}

fn render_compose(state: &ComposeState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let hints = [
        InputHint::new("Tab", "next field"),
        InputHint::new("Ctrl+S", "send"),
        InputHint::new("Esc", "close"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Send a Message",
            border_color: theme.accent,
            width: 54,
            height: 14,
            hints: &hints,
        },
    );
    let body = layout.body;

    let row = |index: u16| -> Option<Rect> {
        (index < body.height).then(|| Rect::new(body.x, body.y + index, body.width, 1))
    };

    let label = |frame: &mut Frame, area: Rect, text: &str, focused: bool| {
        let style = if focused { theme.title() } else { theme.dim() };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(text.to_string(), style))), area);
    };

    if let Some(area) = row(0) {
        label(frame, area, "Name", state.focus == Focus::Name);
    }
    if let Some(area) = row(1) {
        render_input_line(
            frame,
            area,
            theme,
            &InputLine {
                value: &state.name,
                placeholder: Some("Your Name"),
                focused: state.focus == Focus::Name,
            },
        );
    }
    if let Some(area) = row(2) {
        label(frame, area, "Email", state.focus == Focus::Email);
    }
    if let Some(area) = row(3) {
        render_input_line(
            frame,
            area,
            theme,
            &InputLine {
                value: &state.email,
                placeholder: Some("Your Email"),
                focused: state.focus == Focus::Email,
            },
        );
    }
    if let Some(area) = row(4) {
        label(frame, area, "Message", state.focus == Focus::Message);
    }

    // The last rows of the message, cursor on the tail when focused.
    let message_focused = state.focus == Focus::Message;
    let rows: Vec<&str> = state.message.split('\n').collect();
    let skip = rows.len().saturating_sub(MESSAGE_ROWS);
    let visible = &rows[skip..];
    let max_width = body.width.saturating_sub(1) as usize;
    for index in 0..MESSAGE_ROWS {
        let Some(area) = row(5 + index as u16) else {
            break;
        };
        let Some(text) = visible.get(index) else {
            break;
        };
        let last = index == visible.len() - 1;
        let mut spans = Vec::new();
        if last && message_focused {
            spans.push(Span::raw(truncate_start_with_ellipsis(text, max_width)));
            spans.push(Span::styled("█", theme.accent()));
        } else {
            spans.push(Span::raw(truncate_with_ellipsis(text, max_width)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TuiState;
    use folio_core::config::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn tui() -> TuiState {
        TuiState::new(&Config::default())
    }

    fn filled() -> ComposeState {
        let mut compose = ComposeState::open(&ContactDraft::default());
        compose.name = "Ada".into();
        compose.email = "ada@example.com".into();
        compose.message = "Hello there".into();
        compose
    }

    #[test]
    fn open_seeds_fields_from_the_draft() {
        let draft = ContactDraft {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Saved text".into(),
        };
        let compose = ComposeState::open(&draft);
        assert_eq!(compose.name, "Ada");
        assert_eq!(compose.message, "Saved text");
        assert_eq!(compose.focus, Focus::Name);
    }

    #[test]
    fn typing_lands_in_the_focused_field() {
        let tui = tui();
        let mut compose = ComposeState::open(&ContactDraft::default());

        compose.handle_key(&tui, key(KeyCode::Char('A')));
        compose.handle_key(&tui, key(KeyCode::Tab));
        compose.handle_key(&tui, key(KeyCode::Char('b')));

        assert_eq!(compose.name, "A");
        assert_eq!(compose.email, "b");
    }

    #[test]
    fn enter_advances_until_the_message_then_breaks_lines() {
        let tui = tui();
        let mut compose = ComposeState::open(&ContactDraft::default());

        compose.handle_key(&tui, key(KeyCode::Enter));
        assert_eq!(compose.focus, Focus::Email);
        compose.handle_key(&tui, key(KeyCode::Enter));
        assert_eq!(compose.focus, Focus::Message);

        compose.handle_key(&tui, key(KeyCode::Char('h')));
        compose.handle_key(&tui, key(KeyCode::Enter));
        compose.handle_key(&tui, key(KeyCode::Char('i')));
        assert_eq!(compose.message, "h\ni");
    }

    #[test]
    fn shift_tab_cycles_backwards() {
        let tui = tui();
        let mut compose = ComposeState::open(&ContactDraft::default());

        compose.handle_key(&tui, key(KeyCode::BackTab));
        assert_eq!(compose.focus, Focus::Message);
    }

    #[test]
    fn esc_closes_and_saves_the_draft() {
        let tui = tui();
        let mut compose = filled();

        let update = compose.handle_key(&tui, key(KeyCode::Esc));

        assert!(matches!(
            update.transition,
            crate::overlays::OverlayTransition::Close
        ));
        assert!(matches!(
            update.mutations.as_slice(),
            [StateMutation::Contact(ContactMutation::SaveDraft { name, .. })] if name == "Ada"
        ));
        assert!(update.effects.is_empty());
    }

    #[test]
    fn submit_with_a_missing_field_rejects_and_keeps_input() {
        let tui = tui();
        let mut compose = filled();
        compose.email.clear();

        let update = compose.handle_key(&tui, ctrl_key('s'));

        assert!(matches!(
            update.transition,
            crate::overlays::OverlayTransition::Stay
        ));
        assert!(matches!(
            update.mutations.as_slice(),
            [StateMutation::Notice(NoticeMutation::ShowError { body, .. })]
                if body == "Please fill in all fields"
        ));
        assert!(update.effects.is_empty());
        // Fields stay exactly as entered.
        assert_eq!(compose.name, "Ada");
        assert_eq!(compose.message, "Hello there");
    }

    #[test]
    fn whitespace_counts_as_content() {
        let tui = tui();
        let mut compose = filled();
        compose.name = " ".into();

        let update = compose.handle_key(&tui, ctrl_key('s'));
        assert!(matches!(
            update.transition,
            crate::overlays::OverlayTransition::Close
        ));
    }

    #[test]
    fn submit_with_all_fields_clears_notifies_and_delivers() {
        let tui = tui();
        let mut compose = filled();

        let update = compose.handle_key(&tui, ctrl_key('s'));

        assert!(matches!(
            update.transition,
            crate::overlays::OverlayTransition::Close
        ));
        assert!(matches!(
            update.mutations.as_slice(),
            [
                StateMutation::Contact(ContactMutation::ClearDraft),
                StateMutation::Notice(NoticeMutation::ShowSuccess { .. }),
            ]
        ));
        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::DeliverMessage { message }] if message.email == "ada@example.com"
        ));
    }

    #[test]
    fn paste_into_a_single_line_field_folds_newlines() {
        let mut compose = ComposeState::open(&ContactDraft::default());
        compose.insert_text("Ada\nLovelace");
        assert_eq!(compose.name, "Ada Lovelace");

        compose.focus = Focus::Message;
        compose.insert_text("line one\nline two");
        assert_eq!(compose.message, "line one\nline two");
    }
}
