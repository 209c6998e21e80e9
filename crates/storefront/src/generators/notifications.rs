//! Notification feed generation.

use chrono::{DateTime, Duration, Utc};
use clementine_core::{Notification, NotificationId, NotificationKind, UserId};

use crate::identity::{seed_for, to_base36};
use crate::seeded;

const NOTIFICATION_STRIDE: u64 = 32_452_843;

const KINDS: &[NotificationKind] = &[
    NotificationKind::Order,
    NotificationKind::Promo,
    NotificationKind::System,
];

/// Message pools per kind, as `(title, message)` pairs.
const ORDER_MESSAGES: &[(&str, &str)] = &[
    ("Order confirmed", "We've received your order and are getting it ready."),
    ("Order shipped", "Your package is on its way. Track it from your orders page."),
    ("Out for delivery", "Your package is out for delivery and should arrive today."),
    ("Order delivered", "Your package was delivered. Enjoy!"),
];

const PROMO_MESSAGES: &[(&str, &str)] = &[
    ("Weekend sale", "Up to 40% off across Home & Garden this weekend only."),
    ("Free shipping unlocked", "Orders over $50 ship free for the rest of the month."),
    ("New arrivals", "Fresh picks just landed in Electronics. Be the first to browse."),
    ("Loyalty reward", "You've earned a reward. Apply it at checkout on your next order."),
];

const SYSTEM_MESSAGES: &[(&str, &str)] = &[
    ("Password updated", "Your account password was changed successfully."),
    ("New sign-in", "A new sign-in to your account was detected from a new device."),
    ("Profile saved", "Your profile changes have been saved."),
    ("Privacy policy update", "We've updated our privacy policy. Review what's changed."),
];

/// Synthesize a user's notification feed.
///
/// 3-10 notifications spread over the trailing week (0-167 hours before
/// `now`), roughly 70% already read, newest first.
#[must_use]
pub fn notifications(user_id: &UserId, now: DateTime<Utc>) -> Vec<Notification> {
    let seed = seed_for(user_id).wrapping_add(NOTIFICATION_STRIDE);
    let count = seeded::range(seed, 3, 10);

    let mut feed: Vec<Notification> = (0..count)
        .map(|index| {
            let base = seed.wrapping_add((index + 1) * 101);
            let kind = *seeded::pick(base, KINDS);
            let pool = match kind {
                NotificationKind::Order => ORDER_MESSAGES,
                NotificationKind::Promo => PROMO_MESSAGES,
                NotificationKind::System => SYSTEM_MESSAGES,
            };
            let (title, message) = seeded::pick(base + 1, pool);

            #[allow(clippy::cast_possible_wrap)]
            let hours_ago = seeded::range(base + 2, 0, 167) as i64;

            Notification {
                id: NotificationId::new(format!("ntf-{}", to_base36(base))),
                kind,
                title: (*title).to_string(),
                message: (*message).to_string(),
                occurred_at: now - Duration::hours(hours_ago),
                read: seeded::chance(base + 3, 0.7),
            }
        })
        .collect();

    feed.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    feed
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::identity::user_id;

    fn now() -> DateTime<Utc> {
        "2026-08-01T09:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_stable() {
        let user = user_id("ada@example.com");
        assert_eq!(notifications(&user, now()), notifications(&user, now()));
    }

    #[test]
    fn test_count_in_range() {
        for email in ["a@x.com", "b@x.com", "c@x.com"] {
            let count = notifications(&user_id(email), now()).len();
            assert!((3..=10).contains(&count), "{email}: {count}");
        }
    }

    #[test]
    fn test_sorted_newest_first() {
        let feed = notifications(&user_id("grace@example.com"), now());
        for pair in feed.windows(2) {
            assert!(pair.first().unwrap().occurred_at >= pair.last().unwrap().occurred_at);
        }
    }

    #[test]
    fn test_recency_within_week() {
        let now = now();
        for n in notifications(&user_id("alan@example.com"), now) {
            let age = now - n.occurred_at;
            assert!(age >= Duration::zero() && age <= Duration::hours(167));
        }
    }

    #[test]
    fn test_read_bias() {
        // Across many users, reads should clearly dominate unreads.
        let mut read = 0usize;
        let mut total = 0usize;
        for index in 0..20 {
            let user = user_id(&format!("user{index}@example.com"));
            for n in notifications(&user, now()) {
                total += 1;
                if n.read {
                    read += 1;
                }
            }
        }
        assert!(read * 2 > total, "{read}/{total}");
    }
}
