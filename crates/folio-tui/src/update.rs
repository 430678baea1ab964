//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::Instant;

use crossterm::event::{Event, KeyEventKind};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::mutations::StateMutation;
use crate::overlays::{
    self, ComposeState, HelpState, LinksState, Overlay, OverlayRequest, OverlayTransition,
};
use crate::state::{AppState, TuiState};
use crate::{page, render};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            let now = Instant::now();
            app.tui.page.hero.on_tick(now);
            app.tui.notices.expire(now);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::DeliveryDone { error } => {
            // The submit notice already went out; a failed handoff is only
            // worth a log line.
            if let Some(error) = error {
                tracing::warn!(%error, "message delivery failed");
            }
            vec![]
        }
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Contact(mutation) => tui.contact.apply(mutation),
            StateMutation::Notice(mutation) => tui.notices.apply(mutation),
        }
    }
}

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) -> Vec<UiEffect> {
    match update.transition {
        OverlayTransition::Stay => {}
        OverlayTransition::Close => {
            app.overlay = None;
        }
        OverlayTransition::Open(request) => {
            open_overlay_request(app, request);
        }
    }
    update.effects
}

fn open_overlay_request(app: &mut AppState, request: OverlayRequest) {
    match request {
        OverlayRequest::Compose => {
            app.overlay = Some(Overlay::Compose(ComposeState::open(&app.tui.contact)));
        }
        OverlayRequest::Links => {
            app.overlay = Some(Overlay::Links(LinksState::open()));
        }
        OverlayRequest::Help => {
            app.overlay = Some(Overlay::Help(HelpState::default()));
        }
    }
}

// ============================================================================
// Frame Handler (layout, delta coalescing, observation)
// ============================================================================

/// Handles per-frame state updates.
///
/// This consolidates the housekeeping that happens once per frame: layout
/// measurement, coalesced wheel scroll, and the observation pass at the
/// resulting offset.
fn handle_frame(tui: &mut TuiState, width: u16, height: u16) {
    tui.page.viewport_height = render::page_viewport_height(tui, height);

    let content_width = render::page_content_width(width);
    tui.page.ensure_layout(&tui.theme, content_width);

    page::apply_scroll_delta(&mut tui.page);

    // Observe after scrolling so ratios reflect what this frame shows.
    page::observe_sections(&mut tui.page);
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            page::handle_mouse(&mut app.tui.page, mouse);
            vec![]
        }
        Event::Paste(text) => {
            if let Some(Overlay::Compose(compose)) = app.overlay.as_mut() {
                compose.insert_text(&text);
            }
            vec![]
        }
        Event::Resize(_, _) => {
            // Layout re-measures on the next frame once the width changes.
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: crossterm::event::KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }

    // Try to dispatch to the active overlay
    if let Some(mut update) = overlays::handle_overlay_key(&app.tui, &mut app.overlay, key) {
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations));
        return apply_overlay_update(app, update);
    }

    // No overlay active - the page handles the key
    let (effects, overlay_request) = page::handle_key(&mut app.tui, key);
    if let Some(request) = overlay_request
        && app.overlay.is_none()
    {
        open_overlay_request(app, request);
    }

    effects
}
