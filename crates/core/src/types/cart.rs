//! Cart and wishlist item types.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::money::Money;
use super::product::Product;

/// A line in the shopping cart.
///
/// Adding the same product again merges into the existing line's quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub quantity: u32,
}

impl CartItem {
    /// Line total (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }
}

/// A wishlist entry. The wishlist is a set: no duplicates, no quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let item = CartItem {
            id: ProductId::new("prod-1"),
            name: "Ceramic Mug Set".to_string(),
            price: Money::from_cents(2450),
            image: "https://images.example.com/p/1.jpg".to_string(),
            quantity: 2,
        };
        assert_eq!(item.line_total(), Money::from_cents(4900));
    }
}
