//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Command Function                                                      │
//! │  Result<(), ApiError>                                                  │
//! │         │                                                               │
//! │         ├── CoreError::ProductNotFound ──► NOT_FOUND     ─┐            │
//! │         ├── CoreError::EmptyCart ────────► EMPTY_CART     ├► Notice    │
//! │         ├── InputError ──────────────────► INVALID_INPUT ─┘  (keep     │
//! │         │                                                     going)   │
//! │         ├── ValidationError (catalog) ───► VALIDATION_ERROR ─┐         │
//! │         ├── ConfigError ─────────────────► CONFIG_ERROR      ├► exit   │
//! │         └── io / serde_json ─────────────► IO_ERROR         ─┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The JSON renderer emits errors as `{ "code": "EMPTY_CART", "message": "..." }`.

use serde::Serialize;
use storefront_core::{CoreError, ValidationError};

use crate::input::InputError;
use crate::state::ConfigError;

/// API error returned from shell commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id not in the catalog
    NotFound,

    /// Checkout on an empty cart
    EmptyCart,

    /// Unparsable action line
    InvalidInput,

    /// Catalog record failed validation
    ValidationError,

    /// Malformed environment configuration
    ConfigError,

    /// Reading input, the catalog file, or writing output failed
    IoError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }

    /// Whether the session can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::NotFound | ErrorCode::EmptyCart | ErrorCode::InvalidInput
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id.to_string()),
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, err.to_string()),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::new(
            ErrorCode::ValidationError,
            format!("Invalid catalog: {}", err),
        )
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::invalid_input(err.to_string())
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failure: {}", err);
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::new(ErrorCode::IoError, format!("Invalid JSON: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::ProductNotFound(ProductId::new(12)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 12");
        assert!(err.is_recoverable());

        let err: ApiError = CoreError::EmptyCart.into();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(err.message, "Your cart is empty!");
    }

    #[test]
    fn test_validation_is_not_recoverable() {
        let err: ApiError = CoreError::Validation(ValidationError::Required {
            field: "name".to_string(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::EmptyCart, "Your cart is empty!");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EMPTY_CART");
        assert_eq!(json["message"], "Your cart is empty!");
    }
}
