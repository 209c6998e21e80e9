//! Saved address and payment method generation.

use clementine_core::{
    AddressId, PaymentKind, PaymentMethod, PaymentMethodId, SavedAddress, UserId,
};

use crate::catalog::{ADDRESS_LABELS, ADDRESS_POOL, UPI_PROVIDERS};
use crate::identity::{seed_for, to_base36};
use crate::seeded;

const ADDRESS_STRIDE: u64 = 104_729;
const PAYMENT_STRIDE: u64 = 224_737;

/// Synthesize 1-3 saved addresses for a user.
///
/// Labels cycle through the fixed label list in order; the first address is
/// the default.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::indexing_slicing)]
pub fn addresses(user_id: &UserId, user_name: &str) -> Vec<SavedAddress> {
    let seed = seed_for(user_id).wrapping_add(ADDRESS_STRIDE);
    let count = seeded::range(seed, 1, 3) as usize;

    (0..count)
        .map(|index| {
            let base = seed.wrapping_add((index as u64 + 1) * 31);
            let entry = seeded::pick(base, ADDRESS_POOL);
            SavedAddress {
                id: AddressId::new(format!("addr-{}", to_base36(base))),
                label: ADDRESS_LABELS[index % ADDRESS_LABELS.len()].to_string(),
                full_name: user_name.to_string(),
                street: entry.street.to_string(),
                city: entry.city.to_string(),
                state: entry.state.to_string(),
                zip_code: entry.zip_code.to_string(),
                is_default: index == 0,
            }
        })
        .collect()
}

/// Synthesize a user's payment methods.
///
/// Always one masked default card; a second UPI method is included with
/// roughly even odds, never as the default.
#[must_use]
pub fn payment_methods(user_id: &UserId, user_name: &str) -> Vec<PaymentMethod> {
    let seed = seed_for(user_id).wrapping_add(PAYMENT_STRIDE);

    let last4 = seeded::range(seed + 1, 0, 9_999);
    let month = seeded::range(seed + 2, 1, 12);
    let year = seeded::range(seed + 3, 25, 29);

    let mut methods = vec![PaymentMethod {
        id: PaymentMethodId::new(format!("pay-{}", to_base36(seed))),
        kind: PaymentKind::Card,
        card_number: PaymentMethod::mask(&format!("{last4:04}")),
        card_holder: user_name.to_string(),
        expiry: format!("{month:02}/{year}"),
        upi_id: None,
        is_default: true,
    }];

    if seeded::chance(seed + 4, 0.5) {
        let handle = user_name
            .split_whitespace()
            .next()
            .unwrap_or("user")
            .to_lowercase();
        let provider = seeded::pick(seed + 5, UPI_PROVIDERS);
        methods.push(PaymentMethod {
            id: PaymentMethodId::new(format!("pay-{}", to_base36(seed + 1))),
            kind: PaymentKind::Upi,
            card_number: String::new(),
            card_holder: user_name.to_string(),
            expiry: String::new(),
            upi_id: Some(format!("{handle}@{provider}")),
            is_default: false,
        });
    }

    methods
}
