//! Links overlay: a filterable palette of every URL in the content.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem};
use unicode_width::UnicodeWidthStr;

use folio_content::{CONTACT_SOCIALS, PROJECTS};

use super::OverlayUpdate;
use super::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
};
use crate::effects::UiEffect;
use crate::state::TuiState;
use crate::theme::Theme;

/// One row of the palette.
#[derive(Debug, Clone)]
pub struct LinkEntry {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct LinksState {
    pub filter: String,
    pub selected: usize,
    entries: Vec<LinkEntry>,
}

impl LinksState {
    /// Collects every URL in the content: the contact socials plus project
    /// code and demo links.
    pub fn open() -> Self {
        let mut entries: Vec<LinkEntry> = CONTACT_SOCIALS
            .iter()
            .map(|link| LinkEntry {
                label: link.label.to_string(),
                url: link.url.to_string(),
            })
            .collect();
        for project in PROJECTS {
            entries.push(LinkEntry {
                label: format!("{} · code", project.title),
                url: project.code_url.to_string(),
            });
            if let Some(demo) = project.demo_url {
                entries.push(LinkEntry {
                    label: format!("{} · demo", project.title),
                    url: demo.to_string(),
                });
            }
        }

        Self {
            filter: String::new(),
            selected: 0,
            entries,
        }
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('c') if ctrl => OverlayUpdate::close(),
            KeyCode::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                let count = self.filtered().len();
                if count > 0 && self.selected < count - 1 {
                    self.selected += 1;
                }
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match self.filtered().get(self.selected) {
                Some(entry) => {
                    let url = entry.url.clone();
                    OverlayUpdate::close().with_ui_effects(vec![UiEffect::OpenBrowser { url }])
                }
                None => OverlayUpdate::close(),
            },
            KeyCode::Backspace => {
                self.filter.pop();
                self.clamp_selection();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.filter.push(c);
                self.clamp_selection();
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }

    /// Case-insensitive filter over labels and URLs.
    pub fn filtered(&self) -> Vec<&LinkEntry> {
        if self.filter.is_empty() {
            return self.entries.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| {
                entry.label.to_lowercase().contains(&needle)
                    || entry.url.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn clamp_selection(&mut self) {
        let count = self.filtered().len();
        if count == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(count - 1);
        }
    }

    pub fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        render_links(self, theme, frame, area);
    }
}

fn render_links(state: &LinksState, theme: &Theme, frame: &mut Frame, area: Rect) {
    let filtered = state.filtered();

    let width = area.width.saturating_sub(4).clamp(30, 56);
    let height = (filtered.len() as u16 + 5).max(8);

    let hints = [
        InputHint::new("↑↓", "navigate"),
        InputHint::new("Enter", "open"),
        InputHint::new("Esc", "close"),
    ];
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Links",
            border_color: theme.accent,
            width,
            height,
            hints: &hints,
        },
    );

    let filter_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
    render_input_line(
        frame,
        filter_area,
        theme,
        &InputLine {
            value: &state.filter,
            placeholder: Some("Filter links..."),
            focused: true,
        },
    );
    render_separator(frame, layout.body, 1);

    let list_area = Rect::new(
        layout.body.x,
        layout.body.y + 2,
        layout.body.width,
        layout.body.height.saturating_sub(2),
    );

    let items: Vec<ListItem> = if filtered.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "  No matching links",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        let label_width = filtered
            .iter()
            .map(|entry| entry.label.width())
            .max()
            .unwrap_or(0);

        filtered
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let is_selected = idx == state.selected;
                let marker = if is_selected { "▸ " } else { "  " };
                let label_style = if is_selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let url_style = if is_selected {
                    theme.accent()
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(marker, theme.accent()),
                    Span::styled(format!("{:label_width$}  ", entry.label), label_style),
                    Span::styled(entry.url.clone(), url_style),
                ]))
            })
            .collect()
    };

    frame.render_widget(List::new(items), list_area);
}
