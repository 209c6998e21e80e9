//! Generated product review type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::ReviewId;

/// A generated product review.
///
/// Reviews are recomputed on demand from the product's seed and are never
/// persisted; the same product always yields the same review set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedReview {
    pub id: ReviewId,
    pub author: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Star rating, 2 through 5. One-star reviews are never generated.
    pub rating: u8,
    pub date: NaiveDate,
    pub title: String,
    pub comment: String,
    pub helpful: u32,
    pub not_helpful: u32,
    pub verified: bool,
}
