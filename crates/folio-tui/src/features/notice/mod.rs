//! Transient toast notices.
//!
//! Success and error share one presentation with different accents. Notices
//! expire on a timer and are never fatal; nothing in the app waits on one.

mod render;
mod state;

pub use render::render_notice;
pub use state::{NOTICE_TTL, Notice, NoticeKind, NoticeState};
