//! Wishlist store.

use clementine_core::{ProductId, UserId, WishlistItem};

use crate::storage::{EntityKind, UserStorage};

/// The wishlist for the active user. Set semantics: adding an item twice
/// keeps a single entry.
pub struct WishlistStore {
    storage: UserStorage,
    current_user: Option<UserId>,
    items: Vec<WishlistItem>,
}

impl WishlistStore {
    /// Create an uninitialized store over the given storage.
    #[must_use]
    pub fn new(storage: UserStorage) -> Self {
        Self {
            storage,
            current_user: None,
            items: Vec::new(),
        }
    }

    /// Load the wishlist for `user_id`, unless already initialized for it.
    pub fn initialize_user_data(&mut self, user_id: &UserId) {
        if self.current_user.as_ref() == Some(user_id) {
            return;
        }
        self.items = self.storage.load(EntityKind::Wishlist, user_id);
        self.current_user = Some(user_id.clone());
        tracing::debug!(user = %user_id, items = self.items.len(), "wishlist initialized");
    }

    fn persist(&self) {
        if let Some(user) = &self.current_user {
            self.storage.save(EntityKind::Wishlist, user, &self.items);
        }
    }

    /// Add an item if not already present.
    pub fn add(&mut self, item: WishlistItem) {
        if !self.contains(&item.id) {
            self.items.push(item);
            self.persist();
        }
    }

    /// Remove an item.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
        self.persist();
    }

    /// Add if absent, remove if present. Returns whether the item is in the
    /// wishlist afterwards.
    pub fn toggle(&mut self, item: WishlistItem) -> bool {
        if self.contains(&item.id) {
            self.remove(&item.id);
            false
        } else {
            self.add(item);
            true
        }
    }

    /// Whether a product is wishlisted.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Current wishlist entries.
    #[must_use]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }
}
