//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects
//!
//! The page document arrives pre-wrapped from the page feature, so the
//! Paragraph below never wraps; rendering only slices the visible window.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::scrollbar::PageScrollbar;
use crate::notice::render_notice;
use crate::overlays::OverlayExt;
use crate::page;
use crate::state::{AppState, TuiState};
use crate::statusline::render_debug_status_line;

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Height of the debug status line (when enabled).
const DEBUG_STATUS_HEIGHT: u16 = 1;

/// Horizontal page margin (padding on each side).
const PAGE_MARGIN: u16 = 1;

/// Width reserved for the scrollbar on the right side.
/// This keeps a gap between page content and the scrollbar.
const SCROLLBAR_WIDTH: u16 = 1;

/// Width the page document wraps at for a terminal of the given width.
pub fn page_content_width(width: u16) -> u16 {
    width.saturating_sub(PAGE_MARGIN * 2 + SCROLLBAR_WIDTH)
}

/// Rows available to the page document.
pub fn page_viewport_height(tui: &TuiState, height: u16) -> usize {
    let debug_status_height = if tui.show_debug_status {
        DEBUG_STATUS_HEIGHT
    } else {
        0
    };
    height.saturating_sub(STATUS_HEIGHT + debug_status_height) as usize
}

/// Renders the entire TUI to the frame.
///
/// This is a pure render function - it only reads state and draws to frame.
/// No mutations, no side effects.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let page_width = page_content_width(area.width);
    let page_height = page_viewport_height(state, area.height);

    let all_lines = page::build_page(state, page_width);
    let total_lines = all_lines.len();
    let scroll_offset = state.page.scroll.offset(page_height);

    let visible_lines: Vec<Line<'static>> = all_lines
        .into_iter()
        .skip(scroll_offset)
        .take(page_height)
        .collect();

    // Layout: page, status, [debug status]
    let constraints = if state.show_debug_status {
        vec![
            Constraint::Min(1),                      // Page
            Constraint::Length(STATUS_HEIGHT),       // Status line
            Constraint::Length(DEBUG_STATUS_HEIGHT), // Debug status line
        ]
    } else {
        vec![
            Constraint::Min(1),                // Page
            Constraint::Length(STATUS_HEIGHT), // Status line
        ]
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    // Page area with horizontal margins (also accounts for scrollbar)
    // NOTE: No .wrap() here - content is already wrapped at page_width.
    // Adding wrap would cause double-wrapping and visual artifacts
    let page = Paragraph::new(visible_lines).block(Block::default().borders(Borders::NONE));
    let page_area = Rect {
        x: chunks[0].x + PAGE_MARGIN,
        y: chunks[0].y,
        width: chunks[0]
            .width
            .saturating_sub(PAGE_MARGIN * 2 + SCROLLBAR_WIDTH),
        height: chunks[0].height,
    };
    frame.render_widget(page, page_area);

    frame.render_widget(
        PageScrollbar::new(total_lines, page_height, scroll_offset),
        chunks[0],
    );

    render_status_line(state, frame, chunks[1]);

    // Debug status line (when enabled)
    if state.show_debug_status {
        let status_line = state.status_line.snapshot();
        render_debug_status_line(&status_line, state, frame, chunks[2]);
    }

    // Toast in the top-right corner, above the page but below overlays
    if let Some(notice) = state.notices.latest() {
        render_notice(frame, area, notice);
    }

    // Render overlay (last, so it appears on top)
    app.overlay.render(&state.theme, frame, area);
}

/// Renders the status line: current section plus key hints.
fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let viewport = state.page.viewport_height;
    let offset = state.page.scroll.offset(viewport);
    let section = state.page.layout.section_at(offset);

    let line = Line::from(vec![
        Span::styled(section.title(), state.theme.accent()),
        Span::raw("  "),
        Span::styled(
            "1-7 sections · m message · o links · ? help · q quit",
            state.theme.dim(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
