//! Modal overlays.
//!
//! Overlays temporarily take over keyboard input. Each one is
//! self-contained: it owns its state, key handler, and render function.
//! Handlers see `&TuiState` read-only and return an [`OverlayUpdate`]
//! carrying the transition plus deferred mutations and effects; the reducer
//! applies those after the handler returns.

pub mod compose;
pub mod help;
pub mod links;
pub mod render_utils;

pub use compose::ComposeState;
use crossterm::event::KeyEvent;
pub use help::HelpState;
pub use links::LinksState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;
use crate::theme::Theme;

/// Requests to open an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRequest {
    Compose,
    Links,
    Help,
}

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
    Open(OverlayRequest),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self::new(OverlayTransition::Open(request))
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Compose(ComposeState),
    Links(LinksState),
    Help(HelpState),
}

impl Overlay {
    pub fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Compose(compose) => compose.render(theme, frame, area),
            Overlay::Links(links) => links.render(theme, frame, area),
            Overlay::Help(help) => help.render(theme, frame, area),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Compose(compose) => compose.handle_key(tui, key),
            Overlay::Links(links) => links.handle_key(tui, key),
            Overlay::Help(help) => help.handle_key(tui, key),
        }
    }
}

/// Routes a key press to the active overlay, if any.
pub fn handle_overlay_key(
    tui: &TuiState,
    overlay: &mut Option<Overlay>,
    key: KeyEvent,
) -> Option<OverlayUpdate> {
    overlay.as_mut().map(|overlay| overlay.handle_key(tui, key))
}

/// Convenience render helper for `Option<Overlay>`.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, theme: &Theme, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(theme, frame, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ContactDraft;

    #[test]
    fn every_overlay_variant_constructs() {
        let none: Option<Overlay> = None;
        assert!(none.is_none());

        let compose = ComposeState::open(&ContactDraft::default());
        let overlay: Option<Overlay> = Some(Overlay::Compose(compose));
        assert!(overlay.is_some());

        let links = LinksState::open();
        let overlay: Option<Overlay> = Some(Overlay::Links(links));
        assert!(overlay.is_some());

        let overlay: Option<Overlay> = Some(Overlay::Help(HelpState::default()));
        assert!(overlay.is_some());
    }
}
