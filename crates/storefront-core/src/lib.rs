//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains the catalog and
//! cart logic as plain data structures with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (text / JSON / web)                │   │
//! │  │    Product Grid ──► Category Cards ──► Cart Panel ──► Checkout  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Action / Renderer                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Shell Commands                               │   │
//! │  │    search, select_category, add_to_cart, checkout, etc.         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │  Catalog  │  │   Cart    │  │   rules   │  │   │
//! │  │   │  Receipt  │  │  search   │  │ CartLine  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • NO PERSISTENCE                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, Rating, Receipt)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Immutable product catalog and its queries
//! - [`cart`] - Shopping cart state and checkout
//! - [`seed`] - Built-in demo catalog
//! - [`error`] - Domain error types
//! - [`validation`] - Product record validation
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::{seed, Cart, ProductId};
//!
//! let catalog = Arc::new(seed::demo_catalog().unwrap());
//! let mut cart = Cart::new(catalog);
//!
//! cart.add_item(ProductId::new(1)).unwrap();
//! cart.add_item(ProductId::new(1)).unwrap();
//! cart.add_item(ProductId::new(3)).unwrap();
//!
//! assert_eq!(cart.count(), 3);
//! assert_eq!(cart.total().to_string(), "$2299.97");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use storefront_core::Cart` instead of
// `use storefront_core::cart::Cart`

pub use cart::{Cart, CartLine, CartLineView, CartSnapshot, QuantityChange};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Maximum length of a category slug.
pub const MAX_CATEGORY_LEN: usize = 50;
