//! Per-user persistence layer.
//!
//! Persistence is an abstract port ([`StoragePort`]) so a server-backed
//! implementation can swap in later without touching store logic. Two
//! implementations ship today: [`MemoryStore`] and [`FileStore`].
//!
//! Collections are namespaced as `<prefix>_<user_id>` with a distinct prefix
//! per entity kind, so they never collide across users or kinds. The typed
//! facade [`UserStorage`] absorbs every failure at this boundary: corrupt or
//! missing data degrades to an empty collection, and failed writes are
//! logged and dropped. This layer is a best-effort cache, not a source of
//! truth.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use clementine_core::UserId;

/// Global key holding the registered demo accounts list.
pub const ACCOUNTS_KEY: &str = "registered_users";

/// Errors raised by storage backends.
///
/// These never escape [`UserStorage`]; they exist so backends can report
/// faithfully while the facade decides to absorb.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failed (file backend).
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Abstract key-value persistence port.
pub trait StoragePort: Send + Sync {
    /// Read the raw value at `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` at `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value at `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Entity kinds with their storage key prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Orders,
    Addresses,
    Payments,
    Cart,
    Wishlist,
    Notifications,
}

impl EntityKind {
    /// Key prefix for this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Addresses => "addresses",
            Self::Payments => "payments",
            Self::Cart => "cart",
            Self::Wishlist => "wishlist",
            Self::Notifications => "notifications",
        }
    }

    /// Full storage key for this kind and user.
    #[must_use]
    pub fn key(self, user_id: &UserId) -> String {
        format!("{}_{}", self.prefix(), user_id)
    }
}

/// Typed, failure-absorbing facade over a [`StoragePort`].
///
/// Cheaply cloneable; clones share the same backend.
#[derive(Clone)]
pub struct UserStorage {
    port: Arc<dyn StoragePort>,
}

impl UserStorage {
    /// Wrap a storage backend.
    #[must_use]
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self { port }
    }

    /// Load a user's collection, or an empty one.
    ///
    /// Missing keys, backend failures, and corrupt JSON all degrade to an
    /// empty collection; corruption is logged.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, kind: EntityKind, user_id: &UserId) -> Vec<T> {
        self.load_key(&kind.key(user_id))
    }

    /// Persist a user's full collection, best-effort.
    pub fn save<T: Serialize>(&self, kind: EntityKind, user_id: &UserId, items: &[T]) {
        self.save_key(&kind.key(user_id), items);
    }

    /// Load a collection stored under a global (non-user) key.
    #[must_use]
    pub fn load_global<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.load_key(key)
    }

    /// Persist a collection under a global (non-user) key, best-effort.
    pub fn save_global<T: Serialize>(&self, key: &str, items: &[T]) {
        self.save_key(key, items);
    }

    fn load_key<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw = match self.port.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "storage read failed; treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupt persisted collection; treating as empty");
                Vec::new()
            }
        }
    }

    fn save_key<T: Serialize>(&self, key: &str, items: &[T]) {
        let raw = match serde_json::to_string(items) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize collection; write dropped");
                return;
            }
        };

        if let Err(e) = self.port.set(key, &raw) {
            tracing::warn!(key, error = %e, "storage write failed; write dropped");
        }
    }
}
