//! # Seed Catalog
//!
//! The built-in demo catalog used when no catalog file is configured.
//!
//! ## Products
//! Eight electronics across four categories:
//! - smartphones (phones, watches)
//! - laptops
//! - audio (headphones, earbuds)
//! - gaming (console, monitor)

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::types::{Product, ProductId, Rating};

/// (id, name, price in cents, category, icon, rating in tenths, reviews)
type SeedRow = (u32, &'static str, i64, &'static str, &'static str, u8, u32);

const DEMO_PRODUCTS: &[SeedRow] = &[
    (1, "Galaxy Pro Max", 99999, "smartphones", "📱", 48, 234),
    (2, "UltraBook Pro", 129999, "laptops", "💻", 49, 156),
    (3, "Noise-Cancel Headphones", 29999, "audio", "🎧", 47, 445),
    (4, "Gaming Console X", 49999, "gaming", "🎮", 49, 789),
    (5, "Smart Watch Elite", 39999, "smartphones", "⌚", 46, 321),
    (6, "4K Gaming Monitor", 59999, "gaming", "🖥️", 48, 189),
    (7, "Wireless Earbuds Pro", 19999, "audio", "🎵", 45, 567),
    (8, "MacBook Air M3", 119999, "laptops", "💻", 49, 432),
];

/// Returns the demo product records in declaration order.
pub fn demo_products() -> Vec<Product> {
    DEMO_PRODUCTS
        .iter()
        .map(
            |&(id, name, price_cents, category, icon, rating, reviews)| Product {
                id: ProductId::new(id),
                name: name.to_string(),
                price_cents,
                category: category.to_string(),
                icon: icon.to_string(),
                rating: Rating::from_tenths(rating),
                reviews,
            },
        )
        .collect()
}

/// Builds the demo catalog.
///
/// The records are static, so this only fails if the table above is edited
/// into an invalid state.
pub fn demo_catalog() -> Result<Catalog, ValidationError> {
    Catalog::new(demo_products())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_demo_prices() {
        let catalog = demo_catalog().unwrap();
        let galaxy = catalog.find_by_id(ProductId::new(1)).unwrap();
        assert_eq!(galaxy.price().to_string(), "$999.99");
        assert_eq!(galaxy.rating.to_string(), "4.8");
    }
}
