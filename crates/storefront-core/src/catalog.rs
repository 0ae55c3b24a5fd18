//! # Catalog Module
//!
//! The immutable set of purchasable products and the queries the product
//! grid runs against it.
//!
//! ## Query Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Queries                                  │
//! │                                                                         │
//! │  Page load ───────────► list_all()            declaration order         │
//! │  Category card ───────► filter_by_category()  exact, case-sensitive     │
//! │  Search box ──────────► search()              substring, any case       │
//! │  Add to cart ─────────► find_by_id()          O(1) via id index         │
//! │                                                                         │
//! │  No query ever fails for "no match": an empty Vec is returned.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

/// Read-only product catalog.
///
/// Built once at startup; there is no way to mutate it afterwards, so every
/// id a cart line holds stays resolvable for the life of the catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog from product records, validating each one.
    ///
    /// ## Errors
    /// - Any per-field rule from [`crate::validation`]
    /// - `ValidationError::Duplicate` when two records share an id
    pub fn new(products: Vec<Product>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            validate_product(product)?;
            if index.insert(product.id, position).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.to_string(),
                });
            }
        }

        Ok(Catalog { products, index })
    }

    /// Returns the full catalog in declaration order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Returns the products whose category equals `category` exactly.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::seed::demo_catalog;
    ///
    /// let catalog = demo_catalog().unwrap();
    /// assert_eq!(catalog.filter_by_category("audio").len(), 2);
    /// assert!(catalog.filter_by_category("Audio").is_empty());
    /// ```
    pub fn filter_by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over product name and category.
    ///
    /// An empty term matches everything.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::seed::demo_catalog;
    ///
    /// let catalog = demo_catalog().unwrap();
    /// let names: Vec<_> = catalog.search("PRO").iter().map(|p| p.name.as_str()).collect();
    /// assert_eq!(names, ["Galaxy Pro Max", "UltraBook Pro", "Wireless Earbuds Pro"]);
    /// ```
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    /// Looks up a product by id.
    ///
    /// ## Errors
    /// `CoreError::ProductNotFound` when the id was never declared.
    pub fn find_by_id(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Looks up a product by id, `None` when absent.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&position| &self.products[position])
    }

    /// Distinct categories in first-seen order (one card per category).
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(&product.category);
            }
        }
        seen
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_catalog;
    use crate::types::Rating;

    fn test_product(id: u32, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price_cents: 1000,
            category: category.to_string(),
            icon: "📦".to_string(),
            rating: Rating::from_tenths(40),
            reviews: 1,
        }
    }

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_list_all_keeps_declaration_order() {
        let catalog = demo_catalog().unwrap();
        let ids: Vec<u32> = catalog.list_all().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_search_empty_term_matches_all() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(catalog.search("").len(), catalog.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(
            names(&catalog.search("pro")),
            vec!["Galaxy Pro Max", "UltraBook Pro", "Wireless Earbuds Pro"]
        );
        assert_eq!(names(&catalog.search("Pro")), names(&catalog.search("pro")));
    }

    #[test]
    fn test_search_matches_category() {
        let catalog = demo_catalog().unwrap();
        // "laptops" matches by category only for MacBook Air M3
        assert_eq!(
            names(&catalog.search("LAPTOP")),
            vec!["UltraBook Pro", "MacBook Air M3"]
        );
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let catalog = demo_catalog().unwrap();
        assert!(catalog.search("toaster").is_empty());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(
            names(&catalog.filter_by_category("gaming")),
            vec!["Gaming Console X", "4K Gaming Monitor"]
        );
        assert!(catalog.filter_by_category("GAMING").is_empty());
        assert!(catalog.filter_by_category("toys").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(
            catalog.find_by_id(ProductId::new(4)).unwrap().name,
            "Gaming Console X"
        );
        assert_eq!(
            catalog.find_by_id(ProductId::new(99)),
            Err(CoreError::ProductNotFound(ProductId::new(99)))
        );
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = demo_catalog().unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["smartphones", "laptops", "audio", "gaming"]
        );
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            test_product(1, "A", "x"),
            test_product(1, "B", "y"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::Duplicate {
                field: "id".to_string(),
                value: "1".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_record_rejected() {
        let result = Catalog::new(vec![test_product(2, "", "x")]);
        assert!(matches!(result, Err(ValidationError::Required { .. })));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.search("").is_empty());
        assert!(catalog.categories().is_empty());
    }
}
