//! Shopping cart store.

use clementine_core::{CartItem, Money, ProductId, UserId};

use crate::storage::{EntityKind, UserStorage};

/// The shopping cart for the active user.
///
/// Duplicate adds merge into one line item per product id.
pub struct CartStore {
    storage: UserStorage,
    current_user: Option<UserId>,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Create an uninitialized store over the given storage.
    #[must_use]
    pub fn new(storage: UserStorage) -> Self {
        Self {
            storage,
            current_user: None,
            items: Vec::new(),
        }
    }

    /// Load the cart for `user_id`, unless already initialized for it.
    pub fn initialize_user_data(&mut self, user_id: &UserId) {
        if self.current_user.as_ref() == Some(user_id) {
            return;
        }
        self.items = self.storage.load(EntityKind::Cart, user_id);
        self.current_user = Some(user_id.clone());
        tracing::debug!(user = %user_id, items = self.items.len(), "cart initialized");
    }

    fn persist(&self) {
        if let Some(user) = &self.current_user {
            self.storage.save(EntityKind::Cart, user, &self.items);
        }
    }

    /// Add an item, merging quantity into an existing line for the same
    /// product.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(index) = self.items.iter().position(|line| line.id == item.id) {
            if let Some(line) = self.items.get_mut(index) {
                line.quantity += item.quantity;
            }
        } else {
            self.items.push(item);
        }
        self.persist();
    }

    /// Remove a line item entirely.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
        self.persist();
    }

    /// Set a line's quantity; zero removes the line.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| &item.id == id) {
            item.quantity = quantity;
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    /// Current line items.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use crate::storage::MemoryStore;

    use super::*;

    fn store() -> CartStore {
        let mut cart = CartStore::new(UserStorage::new(Arc::new(MemoryStore::default())));
        cart.initialize_user_data(&UserId::new("user_ada"));
        cart
    }

    fn item(id: &str, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            name: "Yoga Mat".to_string(),
            price: Money::from_cents(2_499),
            image: "https://images.clementine.shop/p/yoga-mat.jpg".to_string(),
            quantity,
        }
    }

    #[test]
    fn test_duplicate_adds_merge_quantities() {
        let mut cart = store();
        cart.add_item(item("prod-1", 2));
        cart.add_item(item("prod-1", 3));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_totals() {
        let mut cart = store();
        cart.add_item(item("prod-1", 2));
        cart.add_item(item("prod-2", 1));

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_price(), Money::from_cents(7_497));
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = store();
        cart.add_item(item("prod-1", 2));
        cart.update_quantity(&"prod-1".into(), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_reinit_same_user_keeps_mutations() {
        let mut cart = store();
        cart.add_item(item("prod-1", 1));
        cart.initialize_user_data(&UserId::new("user_ada"));
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_switching_users_isolates_and_restores() {
        let storage = UserStorage::new(Arc::new(MemoryStore::default()));
        let mut cart = CartStore::new(storage);
        let ada = UserId::new("user_ada");
        let grace = UserId::new("user_grace");

        cart.initialize_user_data(&ada);
        cart.add_item(item("prod-1", 2));

        cart.initialize_user_data(&grace);
        assert!(cart.items().is_empty());
        cart.add_item(item("prod-9", 1));

        cart.initialize_user_data(&ada);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }
}
