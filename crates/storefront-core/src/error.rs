//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart / catalog rule violations                 │
//! │  └── ValidationError  - Malformed product records                      │
//! │                                                                         │
//! │  shell errors (apps/shell)                                             │
//! │  └── ApiError         - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Notice                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absent-target quantity changes and removals are NOT errors; they are
//! reported through return values (see [`crate::cart::QuantityChange`]).

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal. They leave the cart untouched and should be
/// surfaced to the shopper as a notice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Product cannot be found in the catalog.
    ///
    /// ## When This Occurs
    /// - `add_item` with an id the catalog never declared
    /// - `find_by_id` lookups from typed input
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Checkout attempted on a cart with no lines.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "Checkout" (cart empty)
    ///      │
    ///      ▼
    /// Cart::checkout() → EmptyCart
    ///      │
    ///      ▼
    /// UI shows: "Your cart is empty!"
    /// ```
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Product record validation errors.
///
/// Raised while building a [`crate::Catalog`], before any shopper can see
/// the data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a category with leading or trailing spaces).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two products sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found: 42");

        assert_eq!(CoreError::EmptyCart.to_string(), "Your cart is empty!");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "id".to_string(),
            value: "7".to_string(),
        };
        assert_eq!(err.to_string(), "id '7' already exists");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
