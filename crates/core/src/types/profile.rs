//! Saved addresses and payment methods.

use serde::{Deserialize, Serialize};

use super::id::{AddressId, PaymentMethodId};
use super::status::PaymentKind;

/// A saved shipping address.
///
/// At most one address in a user's collection is the default. Removing the
/// default leaves the collection with no default until one is set again;
/// nothing is auto-promoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAddress {
    pub id: AddressId,
    /// Short label, e.g. "Home" or "Work".
    pub label: String,
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub is_default: bool,
}

impl SavedAddress {
    /// Single-line display form used on orders and at checkout.
    #[must_use]
    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}

/// A saved payment method.
///
/// Card numbers are stored masked; only the last four digits are retained.
/// Same single-default rule as [`SavedAddress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub kind: PaymentKind,
    /// Masked number, e.g. `**** **** **** 4242`.
    pub card_number: String,
    pub card_holder: String,
    /// Expiry as `MM/YY`.
    pub expiry: String,
    /// UPI handle for [`PaymentKind::Upi`] methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    pub is_default: bool,
}

impl PaymentMethod {
    /// Mask a card number down to its last four digits.
    #[must_use]
    pub fn mask(last4: &str) -> String {
        format!("**** **** **** {last4}")
    }
}
