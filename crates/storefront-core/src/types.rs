//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Receipt      │   │    Rating       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id (UUID)      │   │  tenths (u8)    │       │
//! │  │  name           │   │  total          │   │  48 = 4.8 ★     │       │
//! │  │  price_cents    │   │  item_count     │   └─────────────────┘       │
//! │  │  category       │   │  placed_at      │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are reference data: created once when the catalog is built and
//! never mutated afterwards. Cart lines refer to them by [`ProductId`] only.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Stable, unique product identifier as declared in the catalog.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProductId)
    }
}

// =============================================================================
// Rating
// =============================================================================

/// Customer rating stored in tenths of a star.
///
/// ## Why Tenths?
/// Ratings are only ever shown with one decimal (4.8). Keeping them as an
/// integer makes star rendering and equality exact. On the wire a rating is
/// a plain number (`4.8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, TS)]
#[ts(export)]
pub struct Rating(u8);

impl Rating {
    /// Highest possible rating (5.0).
    pub const MAX_TENTHS: u8 = 50;

    #[inline]
    pub const fn from_tenths(tenths: u8) -> Self {
        Rating(tenths)
    }

    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Number of filled stars (floor of the rating).
    #[inline]
    pub const fn full_stars(&self) -> usize {
        (self.0 / 10) as usize
    }

    /// Whether the rating has a fractional part, shown as one hollow star.
    #[inline]
    pub const fn has_fraction(&self) -> bool {
        self.0 % 10 != 0
    }

    /// Star strip for the product card: `★★★★☆` for 4.8.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Rating;
    ///
    /// assert_eq!(Rating::from_tenths(48).stars(), "★★★★☆");
    /// assert_eq!(Rating::from_tenths(50).stars(), "★★★★★");
    /// ```
    pub fn stars(&self) -> String {
        let mut out = "★".repeat(self.full_stars());
        if self.has_fraction() {
            out.push('☆');
        }
        out
    }

    /// Rating as a float, for display and serialization only.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

/// Whole ratings print without a decimal (`5`), others with one (`4.8`).
impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_fraction() {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        } else {
            write!(f, "{}", self.0 / 10)
        }
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        if !value.is_finite() || !(0.0..=5.0).contains(&value) {
            return Err(de::Error::custom(format!(
                "rating must be between 0 and 5, got {}",
                value
            )));
        }
        Ok(Rating((value * 10.0).round() as u8))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,

    /// Display name shown on the product card and in the cart.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Category slug (`"audio"`, `"gaming"`). Matched case-sensitively.
    pub category: String,

    /// Glyph shown in place of a product image.
    pub icon: String,

    /// Average customer rating.
    pub rating: Rating,

    /// Number of reviews behind the rating.
    pub reviews: u32,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Case-insensitive substring match against name or category.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Result of a successful checkout.
///
/// No payment is processed; the receipt only records what was bought.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Unique receipt identifier (UUID v4).
    #[ts(as = "String")]
    pub id: Uuid,

    /// Amount charged, computed before the cart was cleared.
    pub total: Money,

    /// Sum of quantities across all lines.
    pub item_count: u32,

    /// Number of distinct products.
    pub line_count: usize,

    /// When the checkout completed.
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_parse() {
        assert_eq!("7".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert_eq!(" 3 ".parse::<ProductId>().unwrap(), ProductId::new(3));
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_rating_stars() {
        assert_eq!(Rating::from_tenths(45).stars(), "★★★★☆");
        assert_eq!(Rating::from_tenths(40).stars(), "★★★★");
        assert_eq!(Rating::from_tenths(0).stars(), "");
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::from_tenths(48).to_string(), "4.8");
        assert_eq!(Rating::from_tenths(50).to_string(), "5");
    }

    #[test]
    fn test_rating_serde() {
        let rating: Rating = serde_json::from_str("4.7").unwrap();
        assert_eq!(rating.tenths(), 47);
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4.7");

        assert!(serde_json::from_str::<Rating>("5.5").is_err());
        assert!(serde_json::from_str::<Rating>("-1").is_err());
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": 3,
            "name": "Noise-Cancel Headphones",
            "priceCents": 29999,
            "category": "audio",
            "icon": "🎧",
            "rating": 4.7,
            "reviews": 445
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.price(), Money::from_cents(29999));
        assert_eq!(product.rating, Rating::from_tenths(47));
    }

    #[test]
    fn test_product_matches() {
        let product = Product {
            id: ProductId::new(1),
            name: "Galaxy Pro Max".to_string(),
            price_cents: 99999,
            category: "smartphones".to_string(),
            icon: "📱".to_string(),
            rating: Rating::from_tenths(48),
            reviews: 234,
        };
        assert!(product.matches_lowercase("pro"));
        assert!(product.matches_lowercase("phones"));
        assert!(product.matches_lowercase(""));
        assert!(!product.matches_lowercase("audio"));
    }
}
