//! Checkout: form validation and order placement.
//!
//! Validation runs synchronously and in full before anything else happens;
//! a validation failure never creates a partial order. The "payment
//! processing" step is a fixed-delay simulation with no real protocol - the
//! delay constant is exposed for UI pacing, and the core itself never
//! sleeps.

use std::time::Duration;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use clementine_core::{NotificationKind, Order, OrderId, OrderItem, OrderStatus};

use crate::stores::{CartStore, NotificationStore, OrderStore};

/// How long the UI should pretend the payment processor is thinking.
pub const PAYMENT_DELAY: Duration = Duration::from_millis(1_500);

/// A single failed form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// Human-readable message for display next to the field.
    pub message: String,
}

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// One or more form fields failed validation.
    #[error("checkout form invalid: {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The cart has nothing to order.
    #[error("cart is empty")]
    EmptyCart,
}

/// The checkout form as submitted by the UI.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl CheckoutForm {
    /// Validate every field, collecting all failures.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::Validation` with one entry per failed field.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("full_name", &self.full_name),
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError {
                    field,
                    message: "This field is required".to_string(),
                });
            }
        }

        if !is_digits(&self.zip_code, 5, 5) {
            errors.push(FieldError {
                field: "zip_code",
                message: "Enter a 5-digit ZIP code".to_string(),
            });
        }

        let card_digits: String = self
            .card_number
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if card_digits.len() != 16 {
            errors.push(FieldError {
                field: "card_number",
                message: "Enter a 16-digit card number".to_string(),
            });
        }

        if !is_valid_expiry(&self.expiry) {
            errors.push(FieldError {
                field: "expiry",
                message: "Enter expiry as MM/YY".to_string(),
            });
        }

        if !is_digits(&self.cvv, 3, 4) {
            errors.push(FieldError {
                field: "cvv",
                message: "Enter a 3- or 4-digit CVV".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CheckoutError::Validation(errors))
        }
    }

    /// Single-line shipping address from the form fields.
    #[must_use]
    pub fn shipping_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street.trim(),
            self.city.trim(),
            self.state.trim(),
            self.zip_code.trim()
        )
    }
}

fn is_digits(value: &str, min: usize, max: usize) -> bool {
    let trimmed = value.trim();
    (min..=max).contains(&trimmed.len()) && trimmed.chars().all(|c| c.is_ascii_digit())
}

fn is_valid_expiry(value: &str) -> bool {
    let Some((month, year)) = value.trim().split_once('/') else {
        return false;
    };
    let Ok(month) = month.parse::<u32>() else {
        return false;
    };
    (1..=12).contains(&month) && year.len() == 2 && year.chars().all(|c| c.is_ascii_digit())
}

/// Place an order from the cart.
///
/// Validates the form, snapshots the cart into order items, records the new
/// `Processing` order at the front of the history, pushes an order
/// notification, and clears the cart. Returns the created order.
///
/// # Errors
///
/// Returns `CheckoutError::Validation` before any state changes if the form
/// is invalid, and `CheckoutError::EmptyCart` if there is nothing to order.
pub fn place_order(
    cart: &mut CartStore,
    orders: &mut OrderStore,
    notifications: &mut NotificationStore,
    form: &CheckoutForm,
    now: DateTime<Utc>,
) -> Result<Order, CheckoutError> {
    form.validate()?;

    if cart.items().is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let items: Vec<OrderItem> = cart
        .items()
        .iter()
        .map(|line| OrderItem {
            id: line.id.clone(),
            name: line.name.clone(),
            price: line.price,
            quantity: line.quantity,
            image: line.image.clone(),
        })
        .collect();

    #[allow(clippy::cast_sign_loss)]
    let order = Order {
        id: OrderId::new(format!("ord-{}", Uuid::new_v4())),
        order_number: format!("NX{:08}", now.timestamp() as u64 % 100_000_000),
        placed_at: now.date_naive(),
        total: Order::total_of(&items),
        status: OrderStatus::Processing,
        items,
        shipping_address: form.shipping_address(),
    };

    orders.add_order(order.clone());
    notifications.push(
        NotificationKind::Order,
        "Order confirmed",
        format!("Order {} has been placed and is being processed.", order.order_number),
        now,
    );
    cart.clear();

    tracing::debug!(order = %order.id, total = %order.total, "order placed");
    Ok(order)
}
