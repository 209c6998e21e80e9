//! Product catalog store.

use clementine_core::{Product, ProductCategory, ProductId};

use crate::catalog;

/// The product catalog.
///
/// Not user-scoped: the catalog is the same for everyone and is seeded
/// deterministically at construction. Queries are simple scans; search is a
/// case-insensitive substring match with no relevance ranking.
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Build the store from the demo catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: catalog::demo_products(),
        }
    }

    /// Every product.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// Products in a category.
    #[must_use]
    pub fn by_category(&self, category: ProductCategory) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// The `count` highest-rated products.
    #[must_use]
    pub fn featured(&self, count: usize) -> Vec<&Product> {
        let mut ranked: Vec<&Product> = self.products.iter().collect();
        ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        ranked.truncate(count);
        ranked
    }

    /// Case-insensitive substring search over product names.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_seeded() {
        let store = ProductStore::new();
        assert!(!store.all().is_empty());
    }

    #[test]
    fn test_by_id() {
        let store = ProductStore::new();
        let first = store.all().first().unwrap().clone();
        assert_eq!(store.by_id(&first.id), Some(&first));
        assert_eq!(store.by_id(&ProductId::new("prod-nope")), None);
    }

    #[test]
    fn test_by_category() {
        let store = ProductStore::new();
        let sports = store.by_category(ProductCategory::Sports);
        assert!(!sports.is_empty());
        assert!(sports.iter().all(|p| p.category == ProductCategory::Sports));
    }

    #[test]
    fn test_featured_sorted_by_rating() {
        let store = ProductStore::new();
        let featured = store.featured(4);
        assert_eq!(featured.len(), 4);
        for pair in featured.windows(2) {
            assert!(pair.first().unwrap().rating >= pair.last().unwrap().rating);
        }
    }

    #[test]
    fn test_search() {
        let store = ProductStore::new();
        let hits = store.search("WATCH");
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|p| p.name.to_lowercase().contains("watch")));
        assert!(store.search("").is_empty());
        assert!(store.search("zzzzzz").is_empty());
    }
}
