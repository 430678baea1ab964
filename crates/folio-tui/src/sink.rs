//! Delivery seam for the contact form.
//!
//! The portfolio never transmits a message anywhere; delivery is a
//! collaborator injected into the runtime so a real transport could be
//! swapped in without touching the reducer. The default sink records the
//! message in the log and succeeds.

use anyhow::Result;

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Destination for validated submissions.
pub trait MessageSink: Send + Sync {
    fn deliver(&self, message: &OutboundMessage) -> Result<()>;
}

/// Default sink: logs the submission, delivers nowhere.
#[derive(Debug, Default)]
pub struct LogSink;

impl MessageSink for LogSink {
    fn deliver(&self, message: &OutboundMessage) -> Result<()> {
        tracing::info!(
            name = %message.name,
            email = %message.email,
            chars = message.message.chars().count(),
            "contact message recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_always_succeeds() {
        let sink = LogSink;
        let message = OutboundMessage {
            name: "Asha".to_string(),
            email: "a@b.com".to_string(),
            message: "Hi".to_string(),
        };

        assert!(sink.deliver(&message).is_ok());
    }
}
