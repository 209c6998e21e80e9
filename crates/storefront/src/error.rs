//! Unified error handling.
//!
//! Each service has its own focused error enum; `StorefrontError` is the
//! umbrella callers can bubble everything into with `?`. Storage failures
//! are deliberately absent - they are absorbed at the persistence boundary
//! (see [`crate::storage`]) and never surface here.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::services::checkout::CheckoutError;
use crate::storage::StorageError;
use crate::stores::{OrderError, ProfileError};

/// Application-level error type for the storefront core.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage backend could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Checkout operation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Order operation failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Profile operation failed.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::from(AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Auth error: invalid credentials");

        let err = StorefrontError::from(CheckoutError::EmptyCart);
        assert_eq!(err.to_string(), "Checkout error: cart is empty");
    }
}
