//! Notification store.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use clementine_core::{Notification, NotificationId, NotificationKind, UserId};

use crate::storage::{EntityKind, UserStorage};

/// Notifications for the active user.
///
/// Notifications are only ever appended and marked read - never deleted in a
/// session. Unlike orders there is no generator fallback on first
/// initialization; the dashboard's generated feed is a separate pure
/// projection.
pub struct NotificationStore {
    storage: UserStorage,
    current_user: Option<UserId>,
    notifications: Vec<Notification>,
}

impl NotificationStore {
    /// Create an uninitialized store over the given storage.
    #[must_use]
    pub fn new(storage: UserStorage) -> Self {
        Self {
            storage,
            current_user: None,
            notifications: Vec::new(),
        }
    }

    /// Load notifications for `user_id`, unless already initialized for it.
    pub fn initialize_user_data(&mut self, user_id: &UserId) {
        if self.current_user.as_ref() == Some(user_id) {
            return;
        }
        self.notifications = self.storage.load(EntityKind::Notifications, user_id);
        self.current_user = Some(user_id.clone());
        tracing::debug!(
            user = %user_id,
            notifications = self.notifications.len(),
            "notifications initialized"
        );
    }

    fn persist(&self) {
        if let Some(user) = &self.current_user {
            self.storage
                .save(EntityKind::Notifications, user, &self.notifications);
        }
    }

    /// Append a new unread notification, newest first.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> NotificationId {
        let id = NotificationId::new(format!("ntf-{}", Uuid::new_v4()));
        self.notifications.insert(
            0,
            Notification {
                id: id.clone(),
                kind,
                title: title.into(),
                message: message.into(),
                occurred_at: now,
                read: false,
            },
        );
        self.persist();
        id
    }

    /// Mark one notification read. Returns whether it was found.
    pub fn mark_read(&mut self, id: &NotificationId) -> bool {
        let Some(notification) = self.notifications.iter_mut().find(|n| &n.id == id) else {
            return false;
        };
        if !notification.read {
            notification.read = true;
            self.persist();
        }
        true
    }

    /// Mark every notification read.
    pub fn mark_all_read(&mut self) {
        let mut changed = false;
        for notification in &mut self.notifications {
            changed |= !notification.read;
            notification.read = true;
        }
        if changed {
            self.persist();
        }
    }

    /// Count of unread notifications.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// All notifications, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}
