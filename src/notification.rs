//! Transient status messages
//!
//! The storefront shows at most one status message at a time. Arming a new
//! one replaces whatever is showing and restarts its time-to-live.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// How long a notification stays visible, in seconds
pub const NOTIFICATION_TTL_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-facing status message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[derive(Debug, Clone)]
struct Armed {
    notification: Notification,
    expires_at: DateTime<Utc>,
}

/// Single-slot holder for the current notification.
///
/// Last write wins; nothing is queued.
#[derive(Debug, Clone)]
pub struct NotificationSlot {
    current: Option<Armed>,
    ttl: Duration,
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(Duration::seconds(NOTIFICATION_TTL_SECS))
    }
}

impl NotificationSlot {
    pub fn new(ttl: Duration) -> Self {
        Self { current: None, ttl }
    }

    /// Arms `notification`, discarding any pending one
    pub fn set(&mut self, notification: Notification, now: DateTime<Utc>) {
        self.current = Some(Armed {
            notification,
            expires_at: now + self.ttl,
        });
    }

    /// The notification still within its time-to-live at `now`, if any
    pub fn visible(&self, now: DateTime<Utc>) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|armed| now < armed.expires_at)
            .map(|armed| &armed.notification)
    }

    /// Text of the visible notification, empty once expired
    pub fn text(&self, now: DateTime<Utc>) -> &str {
        self.visible(now).map_or("", |n| n.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn notification_expires_after_ttl() {
        let mut slot = NotificationSlot::default();
        slot.set(Notification::success("Laptop added to cart!"), t0());

        assert_eq!(slot.text(t0() + Duration::milliseconds(4_999)), "Laptop added to cart!");
        assert_eq!(slot.text(t0() + Duration::seconds(5)), "");
        assert!(slot.visible(t0() + Duration::seconds(6)).is_none());
    }

    #[test]
    fn newer_notification_replaces_and_restarts_clock() {
        let mut slot = NotificationSlot::default();
        slot.set(Notification::success("first"), t0());
        slot.set(Notification::error("second"), t0() + Duration::seconds(3));

        let shown = slot.visible(t0() + Duration::seconds(6)).unwrap();
        assert_eq!(shown.text, "second");
        assert!(shown.is_error());

        assert_eq!(slot.text(t0() + Duration::seconds(8)), "");
    }

    #[test]
    fn custom_ttl_is_honoured() {
        let mut slot = NotificationSlot::new(Duration::seconds(1));
        slot.set(Notification::success("quick"), t0());
        assert_eq!(slot.text(t0() + Duration::seconds(1)), "");
    }
}
