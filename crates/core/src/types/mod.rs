//! Core types for Clementine.
//!
//! This module provides type-safe wrappers for common domain concepts and
//! the plain serializable records that the storefront stores persist.

pub mod analytics;
pub mod cart;
pub mod email;
pub mod id;
pub mod money;
pub mod notification;
pub mod order;
pub mod product;
pub mod profile;
pub mod review;
pub mod status;

pub use analytics::SpendingPoint;
pub use cart::{CartItem, WishlistItem};
pub use email::{Email, EmailError};
pub use id::*;
pub use money::Money;
pub use notification::Notification;
pub use order::{Order, OrderItem};
pub use product::{Product, ProductCategory};
pub use profile::{PaymentMethod, SavedAddress};
pub use review::DetailedReview;
pub use status::*;
