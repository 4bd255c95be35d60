//! Transient user notifications.

use chrono::{DateTime, Duration, Utc};

/// How long a notice stays visible.
pub const NOTICE_TTL_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown to the user for a few seconds.
///
/// Non-queuing: raising a new notice replaces whatever is currently shown.
/// Expiry is computed against a caller-supplied "now" so the shell decides
/// when to clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(text: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
            raised_at,
        }
    }

    pub fn error(text: impl Into<String>, raised_at: DateTime<Utc>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
            raised_at,
        }
    }

    /// Whether the notice has outlived its display window at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.raised_at) > Duration::seconds(NOTICE_TTL_SECS)
    }
}
