//! CLI command implementations.

pub mod account;
pub mod preview;

use clementine_storefront::{StoreBackend, Storefront, StorefrontConfig};

/// Build a storefront over the configured backend, defaulting to the file
/// store so demo state survives across CLI runs.
pub fn open_storefront() -> Result<Storefront, Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if config.backend == StoreBackend::Memory {
        // A memory backend makes every CLI invocation amnesiac; use the
        // default data directory unless the user chose one explicitly.
        config.backend = StoreBackend::File("./clementine-data".into());
    }
    Ok(Storefront::new(config)?)
}
