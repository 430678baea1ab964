//! The scrolling page document.
//!
//! Owns scroll state, the section layout extents, the reveal observer, and
//! the hero typewriter schedule. Input handlers for the page itself live in
//! `update`; the line assembly for rendering lives in `render`.

mod observer;
mod render;
mod scroll;
mod state;
mod update;

pub use observer::{Reveal, SectionObserver};
pub use render::{build_page, measure_sections};
pub use scroll::{ScrollAccumulator, ScrollMode, ScrollState};
pub use state::{ContactDraft, HeroState, PageLayout, PageState, SectionExtent};
pub use update::{apply_scroll_delta, handle_key, handle_mouse, observe_sections};
