//! State mutations requested by overlays.
//!
//! Overlays see `&TuiState` while handling keys, so they cannot write into
//! feature state directly. Instead they return mutations that the reducer
//! applies after the overlay settles its transition.

/// A deferred write against `TuiState`.
#[derive(Debug, Clone)]
pub enum StateMutation {
    Contact(ContactMutation),
    Notice(NoticeMutation),
}

/// Writes against the saved contact draft.
#[derive(Debug, Clone)]
pub enum ContactMutation {
    /// Replace the draft with the values currently in the compose form.
    SaveDraft {
        name: String,
        email: String,
        message: String,
    },
    /// Clear the draft after a successful submission.
    ClearDraft,
}

/// Writes against the notice stack.
#[derive(Debug, Clone)]
pub enum NoticeMutation {
    ShowSuccess { title: String, body: String },
    ShowError { title: String, body: String },
}
