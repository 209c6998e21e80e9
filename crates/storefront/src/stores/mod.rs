//! Domain stores: in-memory reactive state, one slice of domain data each.
//!
//! The user-scoped stores (cart, wishlist, orders, notifications, profile)
//! all follow the same lifecycle contract:
//!
//! - `Uninitialized -> InitializedFor(user_id)` via `initialize_user_data`.
//! - Re-entrant calls with the same id are no-ops, so redundant lifecycle
//!   hooks never clobber in-memory mutations made since the last load.
//! - A different id (including switches to or from the `"guest"` sentinel)
//!   wholesale-replaces in-memory state from persistence.
//! - Every mutation persists the full collection immediately, so switching
//!   users never needs to flush the outgoing user - their last state is
//!   already durable.
//!
//! Derived queries are pure functions over the in-memory collection and
//! never touch persistence.

mod cart;
mod notifications;
mod orders;
mod products;
mod profile;
mod toast;
mod wishlist;

pub use cart::CartStore;
pub use notifications::NotificationStore;
pub use orders::{OrderError, OrderStore};
pub use products::ProductStore;
pub use profile::{AddressInput, PaymentInput, ProfileError, ProfileStore};
pub use toast::{Toast, ToastStore};
pub use wishlist::WishlistStore;
