//! Order domain types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::{OrderId, ProductId};
use super::money::Money;
use super::status::OrderStatus;

/// A single line item within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Product this line refers to.
    pub id: ProductId,
    /// Product name at purchase time.
    pub name: String,
    /// Unit price at purchase time.
    pub price: Money,
    /// Units purchased, always at least 1.
    pub quantity: u32,
    /// Product image URL.
    pub image: String,
}

impl OrderItem {
    /// Line total (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// A placed or synthesized order.
///
/// `total` is fixed at creation as the sum of line totals; it is not
/// recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Human-facing order number (`NX` prefix, zero-padded).
    pub order_number: String,
    /// Calendar date the order was placed.
    pub placed_at: NaiveDate,
    pub total: Money,
    pub status: OrderStatus,
    pub items: Vec<OrderItem>,
    /// Formatted single-line shipping address.
    pub shipping_address: String,
}

impl Order {
    /// Sum of line totals for these items.
    #[must_use]
    pub fn total_of(items: &[OrderItem]) -> Money {
        items.iter().map(OrderItem::line_total).sum()
    }
}
