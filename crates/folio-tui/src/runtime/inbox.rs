//! Inbox channel types.
//!
//! Background work posts `UiEvent`s here; the runtime drains the inbox once
//! per loop iteration and feeds the events through the reducer like any
//! other input.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Creates the inbox channel pair.
pub fn channel() -> (UiEventSender, UiEventReceiver) {
    mpsc::unbounded_channel()
}
