//! Application state composition.
//!
//! State is split between `TuiState` (everything on the page) and
//! `Option<Overlay>`:
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── page: PageState         (scroll, layout, observation, hero)
//! │   ├── contact: ContactDraft   (compose draft kept across closes)
//! │   ├── notices: NoticeState    (transient toasts)
//! │   ├── status_line: StatusLineAccumulator
//! │   ├── theme: Theme
//! │   └── config: Config
//! └── overlay: Option<Overlay>    (modal overlays)
//! ```
//!
//! The split lets an overlay handler take `&mut self` and read `&TuiState`
//! at the same time without borrow conflicts.

use folio_core::config::Config;

use crate::notice::NoticeState;
use crate::overlays::Overlay;
use crate::page::{ContactDraft, PageState};
use crate::statusline::StatusLineAccumulator;
use crate::theme::Theme;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(&config),
            overlay: None,
        }
    }
}

/// Everything outside the overlays.
pub struct TuiState {
    pub should_quit: bool,
    pub page: PageState,
    pub contact: ContactDraft,
    pub notices: NoticeState,
    pub status_line: StatusLineAccumulator,
    pub show_debug_status: bool,
    pub theme: Theme,
    pub config: Config,
}

impl TuiState {
    pub fn new(config: &Config) -> Self {
        Self {
            should_quit: false,
            page: PageState::new(config),
            contact: ContactDraft::default(),
            notices: NoticeState::default(),
            status_line: StatusLineAccumulator::new(),
            show_debug_status: false,
            theme: Theme::from_accent(&config.accent),
            config: config.clone(),
        }
    }
}
