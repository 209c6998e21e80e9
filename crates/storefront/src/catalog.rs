//! Fixed data pools backing the mock-data generators.
//!
//! Everything here is compile-time constant: the product catalog, the
//! shipping address pool, reviewer names, and UPI providers. Generators pick
//! from these pools with seeded draws, so the pools' order is part of the
//! determinism contract - append, don't reorder.

use clementine_core::{Money, Product, ProductCategory, ProductId};

use crate::seeded;

/// A catalog entry: the name/image/category triple generators draw order
/// items from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub image: &'static str,
    pub category: ProductCategory,
    /// Price band in cents for seeded pricing.
    pub price_cents: (u64, u64),
}

/// The fixed product catalog.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Wireless Noise-Cancelling Headphones",
        image: "https://images.clementine.shop/p/headphones.jpg",
        category: ProductCategory::Electronics,
        price_cents: (12_999, 24_999),
    },
    CatalogEntry {
        name: "Smart Fitness Watch",
        image: "https://images.clementine.shop/p/fitness-watch.jpg",
        category: ProductCategory::Electronics,
        price_cents: (8_999, 19_999),
    },
    CatalogEntry {
        name: "Portable Bluetooth Speaker",
        image: "https://images.clementine.shop/p/speaker.jpg",
        category: ProductCategory::Electronics,
        price_cents: (3_999, 9_999),
    },
    CatalogEntry {
        name: "Mechanical Keyboard",
        image: "https://images.clementine.shop/p/keyboard.jpg",
        category: ProductCategory::Electronics,
        price_cents: (6_999, 15_999),
    },
    CatalogEntry {
        name: "Classic Denim Jacket",
        image: "https://images.clementine.shop/p/denim-jacket.jpg",
        category: ProductCategory::Fashion,
        price_cents: (4_999, 11_999),
    },
    CatalogEntry {
        name: "Leather Crossbody Bag",
        image: "https://images.clementine.shop/p/crossbody-bag.jpg",
        category: ProductCategory::Fashion,
        price_cents: (5_999, 14_999),
    },
    CatalogEntry {
        name: "Merino Wool Sweater",
        image: "https://images.clementine.shop/p/wool-sweater.jpg",
        category: ProductCategory::Fashion,
        price_cents: (6_499, 12_999),
    },
    CatalogEntry {
        name: "Canvas Sneakers",
        image: "https://images.clementine.shop/p/sneakers.jpg",
        category: ProductCategory::Fashion,
        price_cents: (3_499, 8_999),
    },
    CatalogEntry {
        name: "Ceramic Dinnerware Set",
        image: "https://images.clementine.shop/p/dinnerware.jpg",
        category: ProductCategory::HomeGarden,
        price_cents: (7_999, 16_999),
    },
    CatalogEntry {
        name: "Cast Iron Dutch Oven",
        image: "https://images.clementine.shop/p/dutch-oven.jpg",
        category: ProductCategory::HomeGarden,
        price_cents: (5_999, 13_999),
    },
    CatalogEntry {
        name: "Indoor Herb Garden Kit",
        image: "https://images.clementine.shop/p/herb-garden.jpg",
        category: ProductCategory::HomeGarden,
        price_cents: (2_999, 6_999),
    },
    CatalogEntry {
        name: "Weighted Throw Blanket",
        image: "https://images.clementine.shop/p/blanket.jpg",
        category: ProductCategory::HomeGarden,
        price_cents: (3_999, 8_999),
    },
    CatalogEntry {
        name: "Trail Running Shoes",
        image: "https://images.clementine.shop/p/running-shoes.jpg",
        category: ProductCategory::Sports,
        price_cents: (7_999, 15_999),
    },
    CatalogEntry {
        name: "Insulated Water Bottle",
        image: "https://images.clementine.shop/p/water-bottle.jpg",
        category: ProductCategory::Sports,
        price_cents: (1_999, 4_499),
    },
    CatalogEntry {
        name: "Yoga Mat",
        image: "https://images.clementine.shop/p/yoga-mat.jpg",
        category: ProductCategory::Sports,
        price_cents: (2_499, 5_999),
    },
    CatalogEntry {
        name: "Resistance Band Set",
        image: "https://images.clementine.shop/p/resistance-bands.jpg",
        category: ProductCategory::Sports,
        price_cents: (1_499, 3_999),
    },
];

/// A pooled shipping address.
#[derive(Debug, Clone, Copy)]
pub struct AddressEntry {
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip_code: &'static str,
}

/// The fixed shipping address pool.
pub const ADDRESS_POOL: &[AddressEntry] = &[
    AddressEntry {
        street: "742 Maple Street",
        city: "Portland",
        state: "OR",
        zip_code: "97205",
    },
    AddressEntry {
        street: "18 Birchwood Lane",
        city: "Austin",
        state: "TX",
        zip_code: "78704",
    },
    AddressEntry {
        street: "950 Harbor View Drive",
        city: "San Diego",
        state: "CA",
        zip_code: "92101",
    },
    AddressEntry {
        street: "27 Beacon Hill Road",
        city: "Boston",
        state: "MA",
        zip_code: "02108",
    },
    AddressEntry {
        street: "4410 Juniper Avenue",
        city: "Denver",
        state: "CO",
        zip_code: "80206",
    },
    AddressEntry {
        street: "88 Magnolia Court",
        city: "Savannah",
        state: "GA",
        zip_code: "31401",
    },
];

/// Address labels, cycled in order when generating saved addresses.
pub const ADDRESS_LABELS: &[&str] = &["Home", "Work", "Office", "Vacation Home"];

/// Reviewer first names.
pub const FIRST_NAMES: &[&str] = &[
    "Ava", "Liam", "Maya", "Noah", "Priya", "Ethan", "Sofia", "Marcus", "Hana", "Diego", "Clara",
    "Omar", "Ruth", "Felix", "Ingrid", "Jamal",
];

/// Reviewer last name initials.
pub const LAST_INITIALS: &[&str] = &[
    "A", "B", "C", "D", "G", "H", "J", "K", "L", "M", "N", "P", "R", "S", "T", "W",
];

/// UPI handle providers for generated alternate payment methods.
pub const UPI_PROVIDERS: &[&str] = &["okaxis", "oksbi", "ybl", "paytm"];

/// Build the demo product catalog shown by the product store.
///
/// Prices and ratings are seeded per entry index, so the catalog is
/// identical on every run.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn demo_products() -> Vec<Product> {
    const PRODUCT_STRIDE: u64 = 2_654_435_761;

    CATALOG
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let seed = (index as u64 + 1) * PRODUCT_STRIDE;
            // Nominal ratings live in [3.5, 5.0] in steps of 0.1.
            let rating = seeded::range(seed + 1, 35, 50) as f32 / 10.0;
            Product {
                id: ProductId::new(format!("prod-{:02}", index + 1)),
                name: entry.name.to_string(),
                price: price_for(seed + 2, entry),
                image: entry.image.to_string(),
                category: entry.category,
                rating,
                review_count: seeded::range(seed + 3, 24, 480) as u32,
            }
        })
        .collect()
}

/// Seeded price within an entry's band, snapped to .99 endings.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn price_for(seed: u64, entry: &CatalogEntry) -> Money {
    let (lo, hi) = entry.price_cents;
    let cents = seeded::range(seed, lo, hi);
    Money::from_cents((cents - (cents % 100) + 99) as i64)
}
