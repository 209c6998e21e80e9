//! Deterministic data preview commands.
//!
//! These commands call the generators directly: no account is required and
//! nothing is persisted, which makes them handy for eyeballing what a given
//! email's synthetic history looks like.

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use clementine_core::ProductId;
use clementine_storefront::stores::ProductStore;
use clementine_storefront::{generators, identity};

/// Errors that can occur during preview operations.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The product id is not in the demo catalog.
    #[error("unknown product id: {0}")]
    UnknownProduct(String),
}

/// Print a user's dashboard data: spending analytics and notifications.
///
/// # Errors
///
/// Infallible in practice; the signature matches the other commands.
pub fn dashboard(email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = identity::user_id(email);
    let now = Utc::now();

    info!("Dashboard preview for {email} ({user_id})");

    info!("Spending (trailing 12 months):");
    for point in generators::spending_analytics(&user_id, now.date_naive()) {
        info!("  {} {}", point.month, point.amount);
    }

    info!("Notifications:");
    for notification in generators::notifications(&user_id, now) {
        let marker = if notification.read { " " } else { "*" };
        info!(
            "  {marker} [{:?}] {} - {}",
            notification.kind, notification.title, notification.message
        );
    }

    Ok(())
}

/// Print a user's full synthetic order history.
///
/// # Errors
///
/// Infallible in practice; the signature matches the other commands.
pub fn orders(email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let user_id = identity::user_id(email);
    let history = generators::orders(&user_id, Utc::now().date_naive());

    info!("Order history for {email} ({user_id}): {} orders", history.len());
    for order in history {
        info!(
            "  {} {} {} {} ({} item(s))",
            order.order_number,
            order.placed_at,
            order.status,
            order.total,
            order.items.len()
        );
        for item in &order.items {
            info!("      {} x{} @ {}", item.name, item.quantity, item.price);
        }
    }

    Ok(())
}

/// Print generated reviews for a catalog product.
///
/// # Errors
///
/// Returns an error if the product id is not in the catalog.
pub fn reviews(product_id: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let products = ProductStore::new();
    let product = products
        .by_id(&ProductId::new(product_id))
        .ok_or_else(|| PreviewError::UnknownProduct(product_id.to_owned()))?;

    info!(
        "Reviews for {} (nominal rating {:.1}):",
        product.name, product.rating
    );
    for review in generators::reviews(product, count, Utc::now().date_naive()) {
        let verified = if review.verified { " [verified]" } else { "" };
        info!(
            "  {}* {} by {}{} (+{} / -{})",
            review.rating, review.title, review.author, verified, review.helpful, review.not_helpful
        );
        info!("      {}", review.comment);
    }

    Ok(())
}
