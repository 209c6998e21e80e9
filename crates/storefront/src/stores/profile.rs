//! Profile store: saved addresses and payment methods.

use thiserror::Error;
use uuid::Uuid;

use clementine_core::{
    AddressId, PaymentKind, PaymentMethod, PaymentMethodId, SavedAddress, UserId,
};

use crate::generators;
use crate::storage::{EntityKind, UserStorage};

/// Errors from profile mutations.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No address with the given id.
    #[error("address not found: {0}")]
    AddressNotFound(AddressId),

    /// No payment method with the given id.
    #[error("payment method not found: {0}")]
    PaymentMethodNotFound(PaymentMethodId),
}

/// Fields for adding or updating a saved address.
#[derive(Debug, Clone)]
pub struct AddressInput {
    pub label: String,
    pub full_name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub is_default: bool,
}

/// Fields for adding a payment method. Card numbers are masked on entry;
/// only the last four digits are ever stored.
#[derive(Debug, Clone)]
pub struct PaymentInput {
    pub kind: PaymentKind,
    pub card_number: String,
    pub card_holder: String,
    pub expiry: String,
    pub upi_id: Option<String>,
    pub is_default: bool,
}

/// Saved addresses and payment methods for the active user.
///
/// Invariant: at most one address and at most one payment method carry the
/// default flag. Setting a new default clears the others; removing the
/// default leaves no default until one is set again - nothing is
/// auto-promoted.
pub struct ProfileStore {
    storage: UserStorage,
    current_user: Option<UserId>,
    addresses: Vec<SavedAddress>,
    payment_methods: Vec<PaymentMethod>,
}

impl ProfileStore {
    /// Create an uninitialized store over the given storage.
    #[must_use]
    pub fn new(storage: UserStorage) -> Self {
        Self {
            storage,
            current_user: None,
            addresses: Vec::new(),
            payment_methods: Vec::new(),
        }
    }

    /// Load (or synthesize) profile data for `user_id`, unless already
    /// initialized for it.
    ///
    /// A user with nothing persisted gets deterministic generated addresses
    /// and payment methods, which are persisted immediately so later edits
    /// stick.
    pub fn initialize_user_data(&mut self, user_id: &UserId, user_name: &str) {
        if self.current_user.as_ref() == Some(user_id) {
            return;
        }

        self.addresses = self.storage.load(EntityKind::Addresses, user_id);
        self.payment_methods = self.storage.load(EntityKind::Payments, user_id);

        if self.addresses.is_empty() && self.payment_methods.is_empty() {
            self.addresses = generators::addresses(user_id, user_name);
            self.payment_methods = generators::payment_methods(user_id, user_name);
            self.storage.save(EntityKind::Addresses, user_id, &self.addresses);
            self.storage.save(EntityKind::Payments, user_id, &self.payment_methods);
            tracing::debug!(user = %user_id, "profile synthesized");
        }

        self.current_user = Some(user_id.clone());
    }

    fn persist_addresses(&self) {
        if let Some(user) = &self.current_user {
            self.storage.save(EntityKind::Addresses, user, &self.addresses);
        }
    }

    fn persist_payments(&self) {
        if let Some(user) = &self.current_user {
            self.storage.save(EntityKind::Payments, user, &self.payment_methods);
        }
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    /// Add a new address. Returns the minted id.
    pub fn add_address(&mut self, input: AddressInput) -> AddressId {
        if input.is_default {
            for address in &mut self.addresses {
                address.is_default = false;
            }
        }
        let id = AddressId::new(format!("addr-{}", Uuid::new_v4()));
        self.addresses.push(SavedAddress {
            id: id.clone(),
            label: input.label,
            full_name: input.full_name,
            street: input.street,
            city: input.city,
            state: input.state,
            zip_code: input.zip_code,
            is_default: input.is_default,
        });
        self.persist_addresses();
        id
    }

    /// Replace an address's fields.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::AddressNotFound`] for an unknown id.
    pub fn update_address(&mut self, id: &AddressId, input: AddressInput) -> Result<(), ProfileError> {
        if !self.addresses.iter().any(|a| &a.id == id) {
            return Err(ProfileError::AddressNotFound(id.clone()));
        }
        if input.is_default {
            for address in &mut self.addresses {
                address.is_default = false;
            }
        }
        if let Some(address) = self.addresses.iter_mut().find(|a| &a.id == id) {
            address.label = input.label;
            address.full_name = input.full_name;
            address.street = input.street;
            address.city = input.city;
            address.state = input.state;
            address.zip_code = input.zip_code;
            address.is_default = input.is_default;
        }
        self.persist_addresses();
        Ok(())
    }

    /// Remove an address. Removing the default leaves no default.
    pub fn remove_address(&mut self, id: &AddressId) {
        self.addresses.retain(|address| &address.id != id);
        self.persist_addresses();
    }

    /// Make exactly `id` the default address.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::AddressNotFound`] for an unknown id; the
    /// collection is left untouched.
    pub fn set_default_address(&mut self, id: &AddressId) -> Result<(), ProfileError> {
        if !self.addresses.iter().any(|a| &a.id == id) {
            return Err(ProfileError::AddressNotFound(id.clone()));
        }
        for address in &mut self.addresses {
            address.is_default = &address.id == id;
        }
        self.persist_addresses();
        Ok(())
    }

    /// The active user's addresses.
    #[must_use]
    pub fn addresses(&self) -> &[SavedAddress] {
        &self.addresses
    }

    /// The default address, if one is set.
    #[must_use]
    pub fn default_address(&self) -> Option<&SavedAddress> {
        self.addresses.iter().find(|address| address.is_default)
    }

    // =========================================================================
    // Payment Methods
    // =========================================================================

    /// Add a payment method, masking the card number down to its last four
    /// digits. Returns the minted id.
    pub fn add_payment_method(&mut self, input: PaymentInput) -> PaymentMethodId {
        if input.is_default {
            for method in &mut self.payment_methods {
                method.is_default = false;
            }
        }

        let digits: String = input.card_number.chars().filter(char::is_ascii_digit).collect();
        let last4 = if digits.len() >= 4 {
            digits.split_at(digits.len() - 4).1.to_string()
        } else {
            digits
        };

        let id = PaymentMethodId::new(format!("pay-{}", Uuid::new_v4()));
        self.payment_methods.push(PaymentMethod {
            id: id.clone(),
            kind: input.kind,
            card_number: if last4.is_empty() {
                String::new()
            } else {
                PaymentMethod::mask(&last4)
            },
            card_holder: input.card_holder,
            expiry: input.expiry,
            upi_id: input.upi_id,
            is_default: input.is_default,
        });
        self.persist_payments();
        id
    }

    /// Remove a payment method. Removing the default leaves no default.
    pub fn remove_payment_method(&mut self, id: &PaymentMethodId) {
        self.payment_methods.retain(|method| &method.id != id);
        self.persist_payments();
    }

    /// Make exactly `id` the default payment method.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::PaymentMethodNotFound`] for an unknown id;
    /// the collection is left untouched.
    pub fn set_default_payment_method(&mut self, id: &PaymentMethodId) -> Result<(), ProfileError> {
        if !self.payment_methods.iter().any(|m| &m.id == id) {
            return Err(ProfileError::PaymentMethodNotFound(id.clone()));
        }
        for method in &mut self.payment_methods {
            method.is_default = &method.id == id;
        }
        self.persist_payments();
        Ok(())
    }

    /// The active user's payment methods.
    #[must_use]
    pub fn payment_methods(&self) -> &[PaymentMethod] {
        &self.payment_methods
    }

    /// The default payment method, if one is set.
    #[must_use]
    pub fn default_payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|method| method.is_default)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use crate::identity::user_id;
    use crate::storage::MemoryStore;

    use super::*;

    fn store() -> ProfileStore {
        let mut profile = ProfileStore::new(UserStorage::new(Arc::new(MemoryStore::default())));
        profile.initialize_user_data(&user_id("ada@example.com"), "Ada Lovelace");
        profile
    }

    fn input(label: &str, is_default: bool) -> AddressInput {
        AddressInput {
            label: label.to_string(),
            full_name: "Ada Lovelace".to_string(),
            street: "1 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "LD".to_string(),
            zip_code: "00001".to_string(),
            is_default,
        }
    }

    fn default_count(profile: &ProfileStore) -> usize {
        profile.addresses().iter().filter(|a| a.is_default).count()
    }

    #[test]
    fn test_first_init_synthesizes_profile() {
        let profile = store();
        assert!(!profile.addresses().is_empty());
        assert!(!profile.payment_methods().is_empty());
        assert_eq!(default_count(&profile), 1);
    }

    #[test]
    fn test_single_default_after_add() {
        let mut profile = store();
        profile.add_address(input("Cottage", true));
        assert_eq!(default_count(&profile), 1);
        assert_eq!(profile.default_address().unwrap().label, "Cottage");
    }

    #[test]
    fn test_set_default_is_exclusive() {
        let mut profile = store();
        let id = profile.add_address(input("Cottage", false));
        profile.set_default_address(&id).unwrap();

        assert_eq!(default_count(&profile), 1);
        assert_eq!(profile.default_address().unwrap().id, id);
    }

    #[test]
    fn test_set_default_unknown_id_untouched() {
        let mut profile = store();
        let before: Vec<_> = profile.addresses().to_vec();
        assert!(profile.set_default_address(&AddressId::new("addr-nope")).is_err());
        assert_eq!(profile.addresses(), before.as_slice());
    }

    #[test]
    fn test_removing_default_leaves_no_default() {
        let mut profile = store();
        let default_id = profile.default_address().unwrap().id.clone();
        profile.remove_address(&default_id);

        // No auto-promotion: the collection simply has no default now.
        assert_eq!(default_count(&profile), 0);
        assert!(profile.default_address().is_none());
    }

    #[test]
    fn test_update_address_can_take_default() {
        let mut profile = store();
        let id = profile.add_address(input("Cottage", false));
        profile.update_address(&id, input("Cottage", true)).unwrap();
        assert_eq!(default_count(&profile), 1);
        assert_eq!(profile.default_address().unwrap().id, id);
    }

    #[test]
    fn test_payment_method_masking() {
        let mut profile = store();
        let id = profile.add_payment_method(PaymentInput {
            kind: PaymentKind::Card,
            card_number: "4242 4242 4242 4242".to_string(),
            card_holder: "Ada Lovelace".to_string(),
            expiry: "04/27".to_string(),
            upi_id: None,
            is_default: true,
        });

        let method = profile
            .payment_methods()
            .iter()
            .find(|m| m.id == id)
            .unwrap();
        assert_eq!(method.card_number, "**** **** **** 4242");
        assert_eq!(
            profile.payment_methods().iter().filter(|m| m.is_default).count(),
            1
        );
    }

    #[test]
    fn test_removing_default_payment_leaves_no_default() {
        let mut profile = store();
        let default_id = profile.default_payment_method().unwrap().id.clone();
        profile.remove_payment_method(&default_id);
        assert!(profile.default_payment_method().is_none());
    }

    #[test]
    fn test_edits_survive_reload() {
        let port = Arc::new(MemoryStore::default());
        let user = user_id("ada@example.com");

        let mut first = ProfileStore::new(UserStorage::new(port.clone()));
        first.initialize_user_data(&user, "Ada Lovelace");
        let id = first.add_address(input("Cottage", true));

        let mut second = ProfileStore::new(UserStorage::new(port));
        second.initialize_user_data(&user, "Ada Lovelace");
        assert_eq!(second.default_address().unwrap().id, id);
    }
}
