//! Clementine Storefront - deterministic demo storefront core.
//!
//! This crate implements the non-UI half of a client-side e-commerce demo:
//! product catalog, cart, wishlist, order history, notifications, saved
//! addresses and payment methods, checkout simulation, and a dashboard -
//! all backed by deterministic mock-data generation and pluggable local
//! persistence instead of a real backend.
//!
//! # Architecture
//!
//! - [`identity`] - stable user ids hashed from email addresses
//! - [`seeded`] - stateless seed-addressed pseudo-random generation
//! - [`catalog`] - the fixed product catalog and data pools generators draw
//!   from
//! - [`generators`] - pure functions synthesizing per-user orders, addresses,
//!   payment methods, notifications, spending analytics, and per-product
//!   reviews
//! - [`storage`] - the `StoragePort` persistence abstraction with in-memory
//!   and file-backed implementations, namespaced per entity kind and user
//! - [`stores`] - user-scoped state containers with an explicit
//!   initialize-on-auth-change lifecycle
//! - [`services`] - auth (demo credential store), checkout validation and
//!   order placement, dashboard projection
//! - [`state`] - the [`Storefront`] aggregate wiring it all together
//!
//! # Determinism
//!
//! Every generator is a pure function of a seed derived from the user (or
//! product) identifier. There is no stored generator state: the seed is the
//! cache, so the same user always sees the same synthetic history across
//! restarts and processes.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod generators;
pub mod identity;
pub mod seeded;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;

pub use config::{StoreBackend, StorefrontConfig};
pub use error::StorefrontError;
pub use state::Storefront;
