//! # Cart Module
//!
//! The shopper's in-memory cart: ordered lines, quantities, totals, checkout.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Shopper Action           Cart Method              State Change         │
//! │  ──────────────           ───────────              ────────────         │
//! │                                                                         │
//! │  Click "Add to Cart" ───► add_item(id) ──────────► qty += 1 or push     │
//! │                                                                         │
//! │  Click +/- ─────────────► change_quantity(id, d) ► qty += d, drop at ≤0 │
//! │                                                                         │
//! │  Click × ───────────────► remove_item(id) ───────► line removed         │
//! │                                                                         │
//! │  Click Checkout ────────► checkout() ────────────► Receipt, lines clear │
//! │                                                                         │
//! │  Badge / panel ─────────► count(), total(), snapshot() (read only)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has quantity >= 1
//! - Lines keep the order in which products were first added
//! - Names and prices are never copied into the cart; they are resolved
//!   through the catalog whenever a total or snapshot is computed

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{ProductId, Receipt};

// =============================================================================
// Cart Line
// =============================================================================

/// One entry in the cart: a product reference and how many of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl CartLine {
    fn new(product_id: ProductId) -> Self {
        CartLine {
            product_id,
            quantity: 1,
        }
    }
}

/// Outcome of [`Cart::change_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Line kept its position with the new quantity.
    Updated(u32),
    /// Quantity reached zero or below; the line is gone.
    Removed,
    /// No line for that product; nothing changed.
    Missing,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Owns its lines exclusively and shares the read-only catalog it resolves
/// prices against.
#[derive(Debug, Clone)]
pub struct Cart {
    catalog: Arc<Catalog>,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Cart {
            catalog,
            lines: Vec::new(),
        }
    }

    /// The catalog this cart resolves products against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1, position unchanged
    /// - Product not in cart: new line with quantity 1 appended at the end
    ///
    /// ## Errors
    /// `CoreError::ProductNotFound` if the catalog has no such product. The
    /// cart is left untouched.
    pub fn add_item(&mut self, product_id: ProductId) -> CoreResult<&CartLine> {
        self.catalog.find_by_id(product_id)?;

        let position = match self.position(product_id) {
            Some(position) => {
                let line = &mut self.lines[position];
                line.quantity = line.quantity.saturating_add(1);
                position
            }
            None => {
                self.lines.push(CartLine::new(product_id));
                self.lines.len() - 1
            }
        };

        Ok(&self.lines[position])
    }

    /// Adds `delta` to a line's quantity.
    ///
    /// ## Behavior
    /// - No line for `product_id`: no-op, returns `Missing`
    /// - Resulting quantity <= 0: line removed, returns `Removed`
    /// - Otherwise: updated in place, returns `Updated(new_quantity)`
    pub fn change_quantity(&mut self, product_id: ProductId, delta: i64) -> QuantityChange {
        let Some(position) = self.position(product_id) else {
            return QuantityChange::Missing;
        };

        let next = i64::from(self.lines[position].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(position);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[position].quantity = quantity;
        QuantityChange::Updated(quantity)
    }

    /// Removes the line for `product_id`.
    ///
    /// Returns `false` when there was no such line (not an error).
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|line| line.product_id != product_id);
        self.lines.len() != initial_len
    }

    /// Sum of quantities across all lines.
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of catalog price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .filter_map(|line| self.line_total(line))
            .sum()
    }

    /// Completes the purchase.
    ///
    /// ## Checkout Flow
    /// ```text
    /// lines empty? ──yes──► Err(EmptyCart), nothing changes
    ///      │ no
    ///      ▼
    /// total(), count() computed
    ///      │
    ///      ▼
    /// all lines cleared ──► Ok(Receipt)
    /// ```
    pub fn checkout(&mut self) -> CoreResult<Receipt> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let receipt = Receipt {
            id: Uuid::new_v4(),
            total: self.total(),
            item_count: self.count(),
            line_count: self.lines.len(),
            placed_at: Utc::now(),
        };
        self.lines.clear();

        Ok(receipt)
    }

    /// Lines in the order products were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if any.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Number of distinct products in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Builds the view the cart panel renders.
    pub fn snapshot(&self) -> CartSnapshot {
        let lines = self
            .lines
            .iter()
            .filter_map(|line| {
                let product = self.catalog.get(line.product_id)?;
                Some(CartLineView {
                    product_id: line.product_id,
                    name: product.name.clone(),
                    icon: product.icon.clone(),
                    unit_price: product.price(),
                    quantity: line.quantity,
                    line_total: product.price() * line.quantity,
                })
            })
            .collect();

        CartSnapshot {
            lines,
            count: self.count(),
            total: self.total(),
        }
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.product_id == product_id)
    }

    fn line_total(&self, line: &CartLine) -> Option<Money> {
        self.catalog
            .get(line.product_id)
            .map(|product| product.price() * line.quantity)
    }
}

// =============================================================================
// Snapshot DTOs
// =============================================================================

/// A cart line with its product data resolved, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub icon: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Everything the cart panel and badge need in one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub lines: Vec<CartLineView>,
    pub count: u32,
    pub total: Money,
}

impl CartSnapshot {
    /// Checks if the snapshot has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
