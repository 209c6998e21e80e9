//! Account dashboard projection.

use chrono::{DateTime, Utc};

use clementine_core::{Notification, Order, PaymentMethod, SavedAddress, SpendingPoint, UserId};

use crate::generators;
use crate::stores::{OrderStore, ProfileStore};

/// How many recent orders the dashboard shows.
const RECENT_ORDERS: usize = 3;
/// How many generated notifications the dashboard previews.
const NOTIFICATION_PREVIEW: usize = 5;

/// Everything the account dashboard renders.
///
/// A read-only projection: spending analytics and the notification preview
/// are recomputed from the user's seed on every build, the rest is cloned
/// from current store state. Building a dashboard never mutates or persists
/// anything.
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Twelve months of spending, oldest first.
    pub spending: Vec<SpendingPoint>,
    /// Generated notification feed preview, newest first.
    pub notifications: Vec<Notification>,
    /// Most recent orders, newest first.
    pub recent_orders: Vec<Order>,
    pub default_address: Option<SavedAddress>,
    pub default_payment_method: Option<PaymentMethod>,
}

/// Build the dashboard for the active user.
#[must_use]
pub fn build(
    user_id: &UserId,
    orders: &OrderStore,
    profile: &ProfileStore,
    now: DateTime<Utc>,
) -> Dashboard {
    let mut notifications = generators::notifications(user_id, now);
    notifications.truncate(NOTIFICATION_PREVIEW);

    Dashboard {
        spending: generators::spending_analytics(user_id, now.date_naive()),
        notifications,
        recent_orders: orders.orders().iter().take(RECENT_ORDERS).cloned().collect(),
        default_address: profile.default_address().cloned(),
        default_payment_method: profile.default_payment_method().cloned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::identity::user_id;
    use crate::storage::{MemoryStore, UserStorage};

    use super::*;

    fn now() -> DateTime<Utc> {
        "2026-08-01T09:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_dashboard_shape() {
        let storage = UserStorage::new(Arc::new(MemoryStore::default()));
        let user = user_id("ada@example.com");

        let mut orders = OrderStore::new(storage.clone());
        orders.initialize_user_data(&user, "Ada Lovelace");
        let mut profile = ProfileStore::new(storage);
        profile.initialize_user_data(&user, "Ada Lovelace");

        let dashboard = build(&user, &orders, &profile, now());

        assert_eq!(dashboard.spending.len(), 12);
        assert!(dashboard.notifications.len() <= NOTIFICATION_PREVIEW);
        assert_eq!(dashboard.recent_orders.len(), RECENT_ORDERS);
        assert!(dashboard.default_address.is_some());
        assert!(dashboard.default_payment_method.is_some());
    }

    #[test]
    fn test_dashboard_is_pure_projection() {
        let storage = UserStorage::new(Arc::new(MemoryStore::default()));
        let user = user_id("grace@example.com");

        let mut orders = OrderStore::new(storage.clone());
        orders.initialize_user_data(&user, "Grace Hopper");
        let mut profile = ProfileStore::new(storage);
        profile.initialize_user_data(&user, "Grace Hopper");

        let first = build(&user, &orders, &profile, now());
        let second = build(&user, &orders, &profile, now());
        assert_eq!(first.spending, second.spending);
        assert_eq!(first.notifications, second.notifications);
    }
}
