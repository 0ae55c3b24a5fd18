//! # Validation Module
//!
//! Product record validation for the storefront catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field types, rating range                                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Per-field business rules                                          │
//! │  └── Catalog-wide id uniqueness (Catalog::new)                         │
//! │                                                                         │
//! │  Once a Catalog exists, every product in it is known-good.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_product_name, validate_price_cents};
//!
//! validate_product_name("Gaming Console X").unwrap();
//! assert!(validate_price_cents(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Product, ProductId, Rating};
use crate::{MAX_CATEGORY_LEN, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must be positive (id 0 is reserved as "no product")
pub fn validate_product_id(id: ProductId) -> ValidationResult<()> {
    if id.get() == 0 {
        return Err(ValidationError::OutOfRange {
            field: "id".to_string(),
            min: 1,
            max: i64::from(u32::MAX),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_name;
///
/// assert!(validate_product_name("UltraBook Pro").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a category slug.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 50 characters
/// - No surrounding whitespace (categories are compared exactly)
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    if category.trim() != category {
        return Err(ValidationError::InvalidFormat {
            field: "category".to_string(),
            reason: "must not start or end with whitespace".to_string(),
        });
    }

    Ok(())
}

/// Validates a product icon glyph.
pub fn validate_icon(icon: &str) -> ValidationResult<()> {
    if icon.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "icon".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(99999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a rating.
///
/// ## Rules
/// - Must be between 0.0 and 5.0 stars
pub fn validate_rating(rating: Rating) -> ValidationResult<()> {
    if rating.tenths() > Rating::MAX_TENTHS {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every field of a product record.
///
/// Reviews need no check: the type already rules out negative counts.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(product.id)?;
    validate_product_name(&product.name)?;
    validate_price_cents(product.price_cents)?;
    validate_category(&product.category)?;
    validate_icon(&product.icon)?;
    validate_rating(product.rating)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: ProductId::new(4),
            name: "Gaming Console X".to_string(),
            price_cents: 49999,
            category: "gaming".to_string(),
            icon: "🎮".to_string(),
            rating: Rating::from_tenths(49),
            reviews: 789,
        }
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id(ProductId::new(1)).is_ok());
        assert!(validate_product_id(ProductId::new(0)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("MacBook Air M3").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("audio").is_ok());
        assert!(validate_category("").is_err());
        assert!(validate_category("home audio").is_ok());
        assert!(matches!(
            validate_category(" audio"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_category(&"c".repeat(51)).is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(Rating::from_tenths(0)).is_ok());
        assert!(validate_rating(Rating::from_tenths(50)).is_ok());
        assert!(validate_rating(Rating::from_tenths(51)).is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&product()).is_ok());

        let mut bad = product();
        bad.price_cents = -1;
        assert_eq!(
            validate_product(&bad),
            Err(ValidationError::OutOfRange {
                field: "price".to_string(),
                min: 0,
                max: i64::MAX,
            })
        );

        let mut bad = product();
        bad.icon = String::new();
        assert!(matches!(
            validate_product(&bad),
            Err(ValidationError::Required { .. })
        ));
    }
}
