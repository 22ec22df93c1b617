//! Transient per-field feedback bubbles.
//!
//! Notices are short-lived hints next to a field, separate from the
//! persistent valid/invalid presentation; the live filters use them to
//! tell the user why their keystroke vanished. At most one notice is
//! pending per field; posting again replaces it and restarts its expiry.
//! Expiry is polled with [`NoticeBoard::tick`] from the host's event loop;
//! nothing runs in the background.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Default lifetime of a notice.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_millis(2500);

/// Notice severity (affects host styling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A short-lived message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Field the notice hangs off.
    pub field: String,
    /// Message text.
    pub message: String,
    /// Severity level.
    pub level: NoticeLevel,
    /// How long to show the notice.
    pub duration: Duration,
}

impl Notice {
    /// Create an info notice.
    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(field, message, NoticeLevel::Info)
    }

    /// Create a success notice.
    pub fn success(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(field, message, NoticeLevel::Success)
    }

    /// Create a warning notice.
    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(field, message, NoticeLevel::Warning)
    }

    /// Create an error notice.
    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_level(field, message, NoticeLevel::Error)
    }

    /// Set a custom lifetime for this notice.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    fn with_level(field: impl Into<String>, message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            level,
            duration: DEFAULT_NOTICE_DURATION,
        }
    }
}

#[derive(Debug)]
struct Entry {
    notice: Notice,
    expires_at: Instant,
}

/// Pending notices, at most one per field.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    entries: Vec<Entry>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice, replacing any pending one for the same field and
    /// restarting its expiry.
    pub fn post(&mut self, notice: Notice) {
        self.post_at(notice, Instant::now());
    }

    /// Post with an explicit current time (tests, replays).
    pub fn post_at(&mut self, notice: Notice, now: Instant) {
        let expires_at = now + notice.duration;
        self.entries.retain(|entry| entry.notice.field != notice.field);
        self.entries.push(Entry { notice, expires_at });
    }

    /// Drop and return every notice that has expired by `now`.
    pub fn tick(&mut self, now: Instant) -> Vec<Notice> {
        let mut expired = Vec::new();
        self.entries.retain(|entry| {
            if entry.expires_at <= now {
                expired.push(entry.notice.clone());
                false
            } else {
                true
            }
        });
        expired
    }

    /// Pending notices in posting order.
    pub fn active(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter().map(|entry| &entry.notice)
    }

    /// The pending notice for a field, if any.
    pub fn get(&self, field: &str) -> Option<&Notice> {
        self.entries
            .iter()
            .find(|entry| entry.notice.field == field)
            .map(|entry| &entry.notice)
    }

    /// When the field's pending notice expires, if one is pending.
    pub fn expires_at(&self, field: &str) -> Option<Instant> {
        self.entries
            .iter()
            .find(|entry| entry.notice.field == field)
            .map(|entry| entry.expires_at)
    }

    /// Dismiss the pending notice for a field.
    pub fn dismiss(&mut self, field: &str) {
        self.entries.retain(|entry| entry.notice.field != field);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of pending notices.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_expires_in_order() {
        let start = Instant::now();
        let mut board = NoticeBoard::new();
        board.post_at(Notice::warning("phone", "digits only"), start);
        board.post_at(
            Notice::info("email", "checking").with_duration(Duration::from_secs(10)),
            start,
        );

        let expired = board.tick(start + Duration::from_secs(3));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].field, "phone");
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_repost_replaces_and_extends() {
        let start = Instant::now();
        let mut board = NoticeBoard::new();
        board.post_at(Notice::warning("name", "first"), start);
        board.post_at(
            Notice::warning("name", "second"),
            start + Duration::from_secs(2),
        );

        assert_eq!(board.len(), 1);
        assert_eq!(board.get("name").unwrap().message, "second");

        // The first notice's expiry no longer applies.
        assert!(board.tick(start + DEFAULT_NOTICE_DURATION).is_empty());
        let expired = board.tick(start + Duration::from_secs(2) + DEFAULT_NOTICE_DURATION);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].message, "second");
    }

    #[test]
    fn test_dismiss_drops_pending() {
        let mut board = NoticeBoard::new();
        board.post(Notice::error("ci", "bad"));
        board.dismiss("ci");
        assert!(board.is_empty());
    }
}
