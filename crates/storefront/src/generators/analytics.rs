//! Monthly spending analytics generation.

use chrono::{Datelike, NaiveDate};
use clementine_core::{Money, SpendingPoint, UserId};

use crate::identity::seed_for;
use crate::seeded;

const ANALYTICS_STRIDE: u64 = 15_485_863;

const MONTH_NAMES: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Base monthly spend band, in cents.
const BASE_CENTS: (u64, u64) = (12_000, 68_000);

/// Twelve monthly spending points for the trailing year ending at `today`'s
/// month.
///
/// Amounts are seeded per `(user, month offset)`. The two most recent months
/// carry fixed seasonal boosts (x1.8 and x1.5) to simulate holiday spending
/// spikes. Recomputed on every call; nothing is persisted.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss, clippy::indexing_slicing)]
pub fn spending_analytics(user_id: &UserId, today: NaiveDate) -> Vec<SpendingPoint> {
    let seed = seed_for(user_id).wrapping_add(ANALYTICS_STRIDE);

    (0..12)
        .map(|offset| {
            // offset 0 is eleven months ago, offset 11 is the current month.
            let months_back = 11 - offset;
            let month0 = (i64::from(today.month0()) - months_back).rem_euclid(12) as usize;

            let base = seeded::range(seed.wrapping_add(offset as u64 * 37), BASE_CENTS.0, BASE_CENTS.1);
            // Integer scaling keeps amounts at exactly two decimals.
            let cents = match offset {
                11 => base * 9 / 5,
                10 => base * 3 / 2,
                _ => base,
            };

            SpendingPoint {
                month: MONTH_NAMES[month0].to_string(),
                amount: Money::from_cents(cents as i64),
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::identity::user_id;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 15).unwrap()
    }

    #[test]
    fn test_exactly_twelve_points() {
        let points = spending_analytics(&user_id("ada@example.com"), today());
        assert_eq!(points.len(), 12);
    }

    #[test]
    fn test_stable() {
        let user = user_id("ada@example.com");
        assert_eq!(
            spending_analytics(&user, today()),
            spending_analytics(&user, today())
        );
    }

    #[test]
    fn test_window_ends_at_current_month() {
        let points = spending_analytics(&user_id("ada@example.com"), today());
        assert_eq!(points[11].month, "Aug");
        assert_eq!(points[10].month, "Jul");
        assert_eq!(points[0].month, "Sep");
    }

    #[test]
    fn test_window_wraps_year_boundary() {
        let january = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let points = spending_analytics(&user_id("ada@example.com"), january);
        assert_eq!(points[11].month, "Jan");
        assert_eq!(points[0].month, "Feb");
    }

    #[test]
    fn test_recent_months_boosted() {
        // The boosted months must exceed the base band's ceiling at least
        // when their base draw is high; verify against the unboosted bound.
        let points = spending_analytics(&user_id("grace@example.com"), today());
        for (index, point) in points.iter().enumerate() {
            let ceiling = match index {
                11 => BASE_CENTS.1 * 9 / 5,
                10 => BASE_CENTS.1 * 3 / 2,
                _ => BASE_CENTS.1,
            };
            assert!(point.amount <= Money::from_cents(ceiling as i64));
            assert!(point.amount >= Money::from_cents(BASE_CENTS.0 as i64));
        }
    }
}
