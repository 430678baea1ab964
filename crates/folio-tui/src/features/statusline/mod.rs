//! Debug status line, toggled with `d`.
//!
//! Shows a frame-rate estimate and the document position. Off by default;
//! the regular status line at the bottom of the page is rendered by the
//! root renderer.

mod render;
mod state;

pub use render::render_debug_status_line;
pub use state::{StatusLine, StatusLineAccumulator};
