//! Animation primitives.
//!
//! Two small state machines and a handful of pure timing functions:
//! - [`RevealLatch`] flips once when a section scrolls far enough into view.
//! - [`Typewriter`] grows a displayed prefix one character per step.
//! - [`stagger`] maps elapsed-since-reveal to item visibility and bar fill.
//!
//! Nothing here touches the terminal; the page feature owns scheduling and
//! the sections consume these as plain values.

mod latch;
mod typewriter;

pub mod stagger;

pub use latch::RevealLatch;
pub use typewriter::Typewriter;
