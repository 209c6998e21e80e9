//! Notification domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::NotificationId;
use super::status::NotificationKind;

/// A user notification.
///
/// Notifications are only ever marked read, never deleted in-session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
    pub read: bool,
}
