//! Effects returned by the reducer for the runtime to execute.
//!
//! Effects are commands: the reducer decides what should happen and the
//! runtime makes it happen. Keeping side effects out of `update` is what
//! keeps the reducer testable.

use crate::sink::OutboundMessage;

/// A command for the runtime.
#[derive(Debug)]
pub enum UiEffect {
    /// Stop the event loop and leave the TUI.
    Quit,

    /// Open a URL in the system browser.
    OpenBrowser { url: String },

    /// Hand a validated contact message to the configured sink.
    DeliverMessage { message: OutboundMessage },
}
