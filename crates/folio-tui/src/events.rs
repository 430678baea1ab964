//! Events consumed by the reducer.

use crossterm::event::Event as CrosstermEvent;

/// Input to the reducer.
///
/// Everything that can change state flows through this enum, whether it
/// came from the terminal, the tick scheduler, or a background task posting
/// into the inbox.
#[derive(Debug)]
pub enum UiEvent {
    /// Terminal size, measured at the top of every loop iteration.
    Frame { width: u16, height: u16 },

    /// Fixed-cadence heartbeat. Drives animations, notice expiry, and
    /// render scheduling.
    Tick,

    /// Raw terminal input (keys, mouse, resize, paste).
    Terminal(CrosstermEvent),

    /// Outcome of a contact message handed to the sink.
    DeliveryDone { error: Option<String> },
}
