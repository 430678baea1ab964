//! Shared rendering utilities for overlays.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::text::truncate_start_with_ellipsis;
use crate::theme::Theme;

/// Centers an overlay in the frame, shrinking to fit small terminals.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Container configuration for an overlay.
pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

/// Layout rectangles for an overlay.
pub struct OverlayLayout {
    pub popup: Rect,
    pub inner: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Renders the overlay container (clear, border, title, hint footer) and
/// returns its layout.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let popup = calculate_overlay_area(area, config.width, config.height);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color))
        .title(format!(" {} ", config.title))
        .title_style(
            Style::default()
                .fg(config.border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, popup);

    let inner = Rect::new(
        popup.x + 1,
        popup.y + 1,
        popup.width.saturating_sub(2),
        popup.height.saturating_sub(2),
    );

    if !config.hints.is_empty() {
        render_hints(frame, inner, config.hints, config.border_color);
    }

    let footer_height = u16::from(!config.hints.is_empty());
    let body_height = inner.height.saturating_sub(footer_height);
    let footer = Rect::new(inner.x, inner.y + body_height, inner.width, footer_height);
    let body = Rect::new(inner.x, inner.y, inner.width, body_height);

    OverlayLayout {
        popup,
        inner,
        body,
        footer,
    }
}

/// A key/action pair for the hint footer.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// A prompt-style input row: `> value█`.
///
/// `focused` controls the cursor; in a form with several inputs only the
/// focused one shows it.
pub struct InputLine<'a> {
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub focused: bool,
}

pub fn render_input_line(frame: &mut Frame, area: Rect, theme: &Theme, input: &InputLine<'_>) {
    let prompt = "> ";
    let max_text_width = area.width.saturating_sub(prompt.len() as u16 + 1) as usize;

    let show_placeholder = input.value.is_empty() && input.placeholder.is_some();
    let text = if show_placeholder {
        truncate_start_with_ellipsis(input.placeholder.unwrap_or(""), max_text_width)
    } else {
        // Keep the end of the value visible while typing.
        truncate_start_with_ellipsis(input.value, max_text_width)
    };

    let prompt_style = if input.focused {
        theme.accent()
    } else {
        theme.dim()
    };
    let mut spans = vec![Span::styled(prompt, prompt_style)];
    if show_placeholder {
        if input.focused {
            spans.push(Span::styled("█", theme.accent()));
        }
        spans.push(Span::styled(text, theme.dim()));
    } else {
        spans.push(Span::raw(text));
        if input.focused {
            spans.push(Span::styled("█", theme.accent()));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Renders the hint row at the bottom of the overlay.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    let hints_y = area.y + area.height.saturating_sub(1);
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

/// Renders a horizontal separator inside the body.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let separator = "─".repeat(area.width as usize);
    let separator_area = Rect::new(area.x, area.y + y_offset, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        separator_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_area_is_centered_and_clamped() {
        let frame = Rect::new(0, 0, 100, 40);
        let popup = calculate_overlay_area(frame, 54, 14);
        assert_eq!(popup.width, 54);
        assert_eq!(popup.x, 23);
        assert_eq!(popup.y, 13);

        let tiny = Rect::new(0, 0, 30, 8);
        let popup = calculate_overlay_area(tiny, 54, 14);
        assert!(popup.width <= 26);
        assert!(popup.height <= 6);
    }
}
