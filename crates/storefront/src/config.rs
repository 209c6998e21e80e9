//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; the library works with zero configuration.
//!
//! - `CLEMENTINE_STORE` - Persistence backend: `memory` (default) or `file`
//! - `CLEMENTINE_DATA_DIR` - Data directory for the file backend
//!   (default: `./clementine-data`)
//! - `CLEMENTINE_FEATURED_COUNT` - Products on the featured shelf
//!   (default: 4)

use std::path::PathBuf;

use thiserror::Error;

/// Default data directory for the file backend.
const DEFAULT_DATA_DIR: &str = "./clementine-data";
/// Default featured shelf size.
const DEFAULT_FEATURED_COUNT: usize = 4;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which persistence backend to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Process-lifetime in-memory store.
    Memory,
    /// File-per-key store under the given directory.
    File(PathBuf),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Persistence backend.
    pub backend: StoreBackend,
    /// Products shown on the featured shelf.
    pub featured_count: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let backend = match get_env_or_default("CLEMENTINE_STORE", "memory").as_str() {
            "memory" => StoreBackend::Memory,
            "file" => StoreBackend::File(PathBuf::from(get_env_or_default(
                "CLEMENTINE_DATA_DIR",
                DEFAULT_DATA_DIR,
            ))),
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "CLEMENTINE_STORE".to_string(),
                    format!("expected 'memory' or 'file', got '{other}'"),
                ));
            }
        };

        let featured_count = match get_optional_env("CLEMENTINE_FEATURED_COUNT") {
            Some(raw) => raw.parse::<usize>().map_err(|e| {
                ConfigError::InvalidEnvVar("CLEMENTINE_FEATURED_COUNT".to_string(), e.to_string())
            })?,
            None => DEFAULT_FEATURED_COUNT,
        };

        Ok(Self {
            backend,
            featured_count,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
