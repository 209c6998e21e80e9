//! Clementine Core - Shared types library.
//!
//! This crate provides common types used across all Clementine components:
//! - `storefront` - The storefront core (generators, persistence, stores)
//! - `cli` - Command-line tools for demo accounts and data previews
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! generators. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, emails, money, statuses, and the domain records
//!   (orders, addresses, payment methods, notifications, reviews, cart items)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
