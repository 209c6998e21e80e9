//! Synthetic order history generation.

use chrono::{Days, NaiveDate};
use clementine_core::{Order, OrderId, OrderItem, OrderStatus, ProductId, UserId};

use crate::catalog::{ADDRESS_POOL, CATALOG, price_for};
use crate::identity::{seed_for, to_base36};
use crate::seeded;

/// Stride separating one order's seed block from the next.
const ORDER_STRIDE: u64 = 7_919;
/// Stride separating line items within one order's block.
const ITEM_STRIDE: u64 = 53;

/// Status pool, weighted toward `Delivered` the way a months-old order
/// history actually looks.
const STATUS_POOL: &[OrderStatus] = &[
    OrderStatus::Delivered,
    OrderStatus::Delivered,
    OrderStatus::Delivered,
    OrderStatus::Delivered,
    OrderStatus::Delivered,
    OrderStatus::Delivered,
    OrderStatus::Shipped,
    OrderStatus::Shipped,
    OrderStatus::Processing,
    OrderStatus::Cancelled,
];

/// Synthesize a user's order history.
///
/// Derives 10-25 orders from the user's seed, each with 1-3 catalog items,
/// an age of up to 179 days before `today`, a status skewed toward
/// `Delivered`, and a shipping address from the fixed pool. Orders are
/// returned newest first. Order numbers are `NX` plus the zero-padded
/// `seed + index`, so they are stable per user and unique within a history.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn orders(user_id: &UserId, today: NaiveDate) -> Vec<Order> {
    let seed = seed_for(user_id);
    let count = seeded::range(seed, 10, 25);

    let mut orders: Vec<Order> = (0..count)
        .map(|index| {
            let base = seed.wrapping_add(index.wrapping_mul(ORDER_STRIDE));

            let item_count = seeded::range(base + 1, 1, 3);
            let items: Vec<OrderItem> = (0..item_count)
                .map(|line| {
                    let item_seed = base.wrapping_add(10 + line.wrapping_mul(ITEM_STRIDE));
                    let entry = seeded::pick(item_seed, CATALOG);
                    OrderItem {
                        id: ProductId::new(format!("prod-{}", to_base36(item_seed))),
                        name: entry.name.to_string(),
                        price: price_for(item_seed + 1, entry),
                        quantity: seeded::range(item_seed + 2, 1, 3) as u32,
                        image: entry.image.to_string(),
                    }
                })
                .collect();

            let age_days = seeded::range(base + 2, 0, 179);
            let placed_at = today
                .checked_sub_days(Days::new(age_days))
                .unwrap_or(today);

            let address = seeded::pick(base + 3, ADDRESS_POOL);

            Order {
                id: OrderId::new(format!("ord-{}", to_base36(seed.wrapping_add(index)))),
                order_number: format!("NX{:08}", seed.wrapping_add(index)),
                placed_at,
                total: Order::total_of(&items),
                status: *seeded::pick(base + 4, STATUS_POOL),
                items,
                shipping_address: format!(
                    "{}, {}, {} {}",
                    address.street, address.city, address.state, address.zip_code
                ),
            }
        })
        .collect();

    orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
    orders
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::identity::user_id;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()
    }

    #[test]
    fn test_orders_are_stable() {
        let user = user_id("ada@example.com");
        assert_eq!(orders(&user, today()), orders(&user, today()));
    }

    #[test]
    fn test_order_count_in_range() {
        for email in ["ada@example.com", "grace@example.com", "alan@example.com"] {
            let count = orders(&user_id(email), today()).len();
            assert!((10..=25).contains(&count), "{email}: {count}");
        }
    }

    #[test]
    fn test_orders_sorted_newest_first() {
        let history = orders(&user_id("ada@example.com"), today());
        for pair in history.windows(2) {
            assert!(pair[0].placed_at >= pair[1].placed_at);
        }
    }

    #[test]
    fn test_totals_match_line_items() {
        for order in orders(&user_id("grace@example.com"), today()) {
            assert_eq!(order.total, Order::total_of(&order.items));
            assert!(!order.items.is_empty() && order.items.len() <= 3);
            assert!(order.items.iter().all(|i| i.quantity >= 1));
        }
    }

    #[test]
    fn test_order_numbers_unique_and_prefixed() {
        let history = orders(&user_id("ada@example.com"), today());
        let mut numbers: Vec<_> = history.iter().map(|o| o.order_number.clone()).collect();
        assert!(numbers.iter().all(|n| n.starts_with("NX")));
        numbers.sort();
        numbers.dedup();
        assert_eq!(numbers.len(), history.len());
    }

    #[test]
    fn test_dates_within_window() {
        let today = today();
        let oldest = today.checked_sub_days(Days::new(179)).unwrap();
        for order in orders(&user_id("alan@example.com"), today) {
            assert!(order.placed_at <= today && order.placed_at >= oldest);
        }
    }

    #[test]
    fn test_statuses_skew_delivered() {
        // Across several users most orders should be Delivered.
        let mut delivered = 0usize;
        let mut total = 0usize;
        for email in ["a@x.com", "b@x.com", "c@x.com", "d@x.com"] {
            for order in orders(&user_id(email), today()) {
                total += 1;
                if order.status == OrderStatus::Delivered {
                    delivered += 1;
                }
            }
        }
        assert!(delivered * 2 > total, "{delivered}/{total}");
    }
}
