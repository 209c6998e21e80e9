//! Product catalog types.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::money::Money;

/// Product category.
///
/// Categories also select the template pool the review generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Electronics,
    Fashion,
    HomeGarden,
    Sports,
    #[default]
    Other,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Electronics => write!(f, "Electronics"),
            Self::Fashion => write!(f, "Fashion"),
            Self::HomeGarden => write!(f, "Home & Garden"),
            Self::Sports => write!(f, "Sports"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub category: ProductCategory,
    /// Nominal average rating displayed on the product page; drives the
    /// star distribution of generated reviews.
    pub rating: f32,
    pub review_count: u32,
}
