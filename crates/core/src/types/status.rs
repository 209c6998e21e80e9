//! Status enums for orders, notifications, payments, and toasts.

use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// `Cancelled` is terminal: once an order is cancelled no operation may move
/// it to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Whether this status allows cancellation.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        matches!(self, Self::Processing)
    }

    /// Whether this status permits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Shipped => write!(f, "Shipped"),
            Self::Delivered => write!(f, "Delivered"),
            Self::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Notification category.
///
/// The single canonical notification schema; every producer (generator,
/// checkout, dashboard) uses these three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// Order placed, shipped, or delivered.
    Order,
    /// Sales and promotions.
    Promo,
    /// Account and platform messages.
    System,
}

/// Payment method kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentKind {
    #[default]
    Card,
    Upi,
}

/// Severity level for transient UI toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancellable_only_from_processing() {
        assert!(OrderStatus::Processing.is_cancellable());
        assert!(!OrderStatus::Shipped.is_cancellable());
        assert!(!OrderStatus::Delivered.is_cancellable());
        assert!(!OrderStatus::Cancelled.is_cancellable());
    }

    #[test]
    fn test_cancelled_is_terminal() {
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderStatus::Processing.to_string(), "Processing");
        assert_eq!(OrderStatus::Cancelled.to_string(), "Cancelled");
    }
}
