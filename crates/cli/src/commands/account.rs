//! Demo account management commands.

use tracing::info;

use super::open_storefront;

/// Register a new demo account.
///
/// # Errors
///
/// Returns an error if the storefront cannot be opened or registration is
/// rejected (invalid email, weak password, duplicate account).
pub fn register(email: &str, password: &str, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut storefront = open_storefront()?;
    storefront.register(email, password, name)?;

    let account = storefront
        .current_account()
        .ok_or("registration did not produce a session")?;
    info!("Registered account");
    info!("  Email: {}", account.email);
    info!("  Name: {}", account.name);
    info!("  User id: {}", account.user_id);
    Ok(())
}

/// Verify a login against the registered accounts.
///
/// # Errors
///
/// Returns an error if the storefront cannot be opened or the credentials
/// do not match.
pub fn login(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut storefront = open_storefront()?;
    storefront.login(email, password)?;

    let account = storefront
        .current_account()
        .ok_or("login did not produce a session")?;
    info!("Login ok");
    info!("  Name: {}", account.name);
    info!("  User id: {}", account.user_id);
    info!("  Orders on file: {}", storefront.orders.orders().len());
    Ok(())
}
