//! Feature slices for the TUI (state/update/render per slice).

pub mod notice;
pub mod page;
pub mod sections;
pub mod statusline;
