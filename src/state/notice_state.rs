//! Transient notices shown in the status bar.

use std::time::{Duration, Instant};

const NOTICE_TTL: Duration = Duration::from_secs(5);

/// A short informational message that expires on its own.
#[derive(Debug, Clone, Default)]
pub struct NoticeState {
    current: Option<(String, Instant)>,
}

impl NoticeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message`, replacing any previous notice.
    pub fn show(&mut self, message: String) {
        tracing::info!(notice = %message, "notice");
        self.current = Some((message, Instant::now()));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Current notice, if one is showing.
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(message, _)| message.as_str())
    }

    /// Drops the notice once it is older than its time-to-live.
    pub fn expire(&mut self, now: Instant) {
        if let Some((_, shown_at)) = &self.current {
            if now.duration_since(*shown_at) >= NOTICE_TTL {
                self.current = None;
            }
        }
    }
}
