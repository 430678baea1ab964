//! Notice state.

use std::time::{Duration, Instant};

use crate::mutations::NoticeMutation;

/// How long a notice stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One transient toast.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
    pub shown_at: Instant,
}

#[derive(Debug, Default)]
pub struct NoticeState {
    notices: Vec<Notice>,
}

impl NoticeState {
    pub fn push(&mut self, kind: NoticeKind, title: impl Into<String>, body: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            title: title.into(),
            body: body.into(),
            shown_at: Instant::now(),
        });
    }

    /// Drops notices past their TTL. Runs on Tick.
    pub fn expire(&mut self, now: Instant) {
        self.notices
            .retain(|notice| now.duration_since(notice.shown_at) < NOTICE_TTL);
    }

    /// The newest live notice. Only one renders at a time.
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn apply(&mut self, mutation: NoticeMutation) {
        match mutation {
            NoticeMutation::ShowSuccess { title, body } => {
                self.push(NoticeKind::Success, title, body);
            }
            NoticeMutation::ShowError { title, body } => {
                self.push(NoticeKind::Error, title, body);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_returns_the_newest_notice() {
        let mut notices = NoticeState::default();
        notices.push(NoticeKind::Error, "Error", "first");
        notices.push(NoticeKind::Success, "Message sent!", "second");

        let latest = notices.latest().unwrap();
        assert_eq!(latest.kind, NoticeKind::Success);
        assert_eq!(latest.body, "second");
    }

    #[test]
    fn notices_expire_after_their_ttl() {
        let mut notices = NoticeState::default();
        notices.push(NoticeKind::Success, "Message sent!", "body");

        let now = Instant::now();
        notices.expire(now);
        assert!(!notices.is_empty());

        notices.expire(now + NOTICE_TTL + Duration::from_millis(1));
        assert!(notices.is_empty());
    }

    #[test]
    fn mutations_map_to_kinds() {
        let mut notices = NoticeState::default();
        notices.apply(NoticeMutation::ShowError {
            title: "Error".into(),
            body: "Please fill in all fields".into(),
        });

        let latest = notices.latest().unwrap();
        assert_eq!(latest.kind, NoticeKind::Error);
        assert_eq!(latest.title, "Error");
    }
}
