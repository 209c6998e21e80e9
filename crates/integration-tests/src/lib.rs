//! Shared helpers for Clementine integration tests.
//!
//! The scenarios in `tests/` exercise the public surface the way the UI
//! layer does: build a [`Storefront`], drive auth transitions, mutate
//! stores, and - to simulate reloads - build fresh storefronts over the
//! same storage backend.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clementine_storefront::storage::{MemoryStore, StoragePort};
use clementine_storefront::{Storefront, StorefrontConfig};

/// A shared in-memory backend multiple storefront instances can reopen.
#[must_use]
pub fn shared_backend() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

/// Build a storefront over a shared backend, as if the app had been
/// (re)loaded against existing persisted state.
#[must_use]
pub fn open(backend: &Arc<MemoryStore>) -> Storefront {
    let port: Arc<dyn StoragePort> = backend.clone();
    Storefront::with_port(StorefrontConfig::default(), port)
}

/// A valid checkout form for happy-path order placement.
#[must_use]
pub fn checkout_form() -> clementine_storefront::services::checkout::CheckoutForm {
    clementine_storefront::services::checkout::CheckoutForm {
        full_name: "Ada Lovelace".to_string(),
        street: "742 Maple Street".to_string(),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip_code: "97205".to_string(),
        card_number: "4242 4242 4242 4242".to_string(),
        expiry: "04/27".to_string(),
        cvv: "123".to_string(),
    }
}
