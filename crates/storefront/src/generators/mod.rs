//! Deterministic per-user mock-data generators.
//!
//! Every function here is pure and idempotent: the same inputs always return
//! structurally identical output, with no I/O and no side effects, so they
//! are safe to call from any rendering context repeatedly. Seeds are
//! addressed arithmetically (see [`crate::seeded`]); each generator family
//! uses its own large odd stride so derived sequences never collide across
//! generators for the same user.
//!
//! The clock is always an explicit parameter (`today` / `now`) rather than
//! read inside, which keeps the functions total and the rolling windows
//! testable.

mod analytics;
mod notifications;
mod orders;
mod profile;
mod reviews;

pub use analytics::spending_analytics;
pub use notifications::notifications;
pub use orders::orders;
pub use profile::{addresses, payment_methods};
pub use reviews::reviews;
