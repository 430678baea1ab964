//! Page input handlers.
//!
//! Key bindings, mouse wheel coalescing, and the per-frame observation
//! pass that feeds visibility ratios into the reveal latches.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;
use crate::sections::SectionId;
use crate::state::TuiState;

use super::PageState;

/// Lines to scroll per mouse wheel tick.
const MOUSE_SCROLL_LINES: i32 = 1;

/// Handles a key aimed at the page (no overlay open).
pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let viewport = tui.page.viewport_height;

    match key.code {
        KeyCode::Char('c') if ctrl => quit(tui),
        KeyCode::Char('q') => quit(tui),
        KeyCode::Char('j') | KeyCode::Down => {
            tui.page.scroll.scroll_down(1, viewport);
            (vec![], None)
        }
        KeyCode::Char('k') | KeyCode::Up => {
            tui.page.scroll.scroll_up(1, viewport);
            (vec![], None)
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            tui.page.scroll.scroll_down(page_step(viewport), viewport);
            (vec![], None)
        }
        KeyCode::PageUp => {
            tui.page.scroll.scroll_up(page_step(viewport), viewport);
            (vec![], None)
        }
        KeyCode::Char('g') | KeyCode::Home => {
            tui.page.scroll.scroll_to_top();
            (vec![], None)
        }
        KeyCode::Char('G') | KeyCode::End => {
            tui.page.scroll.scroll_to_bottom();
            (vec![], None)
        }
        KeyCode::Char(c @ '1'..='7') => {
            let index = (c as usize) - ('1' as usize);
            jump_to(&mut tui.page, SectionId::ALL[index]);
            (vec![], None)
        }
        KeyCode::Char('c') => {
            jump_to(&mut tui.page, SectionId::Contact);
            (vec![], None)
        }
        KeyCode::Char('m') => (vec![], Some(OverlayRequest::Compose)),
        KeyCode::Char('o') => (vec![], Some(OverlayRequest::Links)),
        KeyCode::Char('?') => (vec![], Some(OverlayRequest::Help)),
        KeyCode::Char('d') => {
            tui.show_debug_status = !tui.show_debug_status;
            (vec![], None)
        }
        _ => (vec![], None),
    }
}

fn quit(tui: &mut TuiState) -> (Vec<UiEffect>, Option<OverlayRequest>) {
    // Release observations and pending animation steps before the loop stops.
    tui.page.teardown();
    (vec![UiEffect::Quit], None)
}

/// Page step leaves one row of overlap for orientation.
fn page_step(viewport: usize) -> usize {
    viewport.saturating_sub(1).max(1)
}

fn jump_to(page: &mut PageState, id: SectionId) {
    page.scroll.scroll_to_line(page.layout.start_of(id));
}

/// Handles mouse input on the page. Wheel deltas are only accumulated here;
/// they apply on the next frame pass.
pub fn handle_mouse(page: &mut PageState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            page.scroll_accumulator.accumulate(-MOUSE_SCROLL_LINES);
        }
        MouseEventKind::ScrollDown => {
            page.scroll_accumulator.accumulate(MOUSE_SCROLL_LINES);
        }
        _ => {}
    }
}

/// Applies the coalesced wheel delta for this frame.
pub fn apply_scroll_delta(page: &mut PageState) {
    let delta = page.scroll_accumulator.take_delta();
    if delta == 0 {
        return;
    }

    let lines = delta.unsigned_abs() as usize;
    if delta < 0 {
        page.scroll.scroll_up(lines, page.viewport_height);
    } else {
        page.scroll.scroll_down(lines, page.viewport_height);
    }
}

/// Feeds each observed section its visibility ratio for the current
/// viewport. Runs once per frame, after scrolling has settled.
pub fn observe_sections(page: &mut PageState) {
    let offset = page.scroll.offset(page.viewport_height);

    for id in SectionId::ALL {
        if id.threshold().is_none() {
            continue;
        }
        let Some(ratio) = page.layout.visible_ratio(id, offset, page.viewport_height) else {
            continue;
        };
        if page.observer.observe(id, ratio) {
            tracing::debug!(section = id.title(), "section revealed");
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::config::Config;

    use super::*;
    use crate::theme::Theme;

    fn page_with_viewport(viewport: usize) -> PageState {
        let mut page = PageState::new(&Config::default());
        page.viewport_height = viewport;
        page.ensure_layout(&Theme::default(), 80);
        page
    }

    #[test]
    fn wheel_deltas_apply_on_the_frame_pass() {
        let mut page = page_with_viewport(20);
        page.scroll.scroll_to_line(40);

        handle_mouse(
            &mut page,
            MouseEvent {
                kind: MouseEventKind::ScrollUp,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
        );
        // Nothing moves until the frame applies the delta.
        assert_eq!(page.scroll.offset(20), 40);

        apply_scroll_delta(&mut page);
        assert_eq!(page.scroll.offset(20), 39);
    }

    #[test]
    fn observation_fires_when_a_section_scrolls_in() {
        let mut page = page_with_viewport(20);
        assert!(!page.observer.reveal_of(SectionId::About).revealed);

        // Put the about section at the top of the viewport.
        page.scroll.scroll_to_line(page.layout.start_of(SectionId::About));
        observe_sections(&mut page);

        assert!(page.observer.reveal_of(SectionId::About).revealed);
    }

    #[test]
    fn observation_at_top_leaves_lower_sections_hidden() {
        let mut page = page_with_viewport(10);

        observe_sections(&mut page);

        assert!(!page.observer.reveal_of(SectionId::Contact).revealed);
        assert!(!page.observer.reveal_of(SectionId::Projects).revealed);
    }
}
