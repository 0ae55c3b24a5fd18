//! # Cart Commands
//!
//! Shopper actions that change the cart or the cart panel.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  checkout   ┌──────────┐     │
//! │  │  Empty   │───────────────►│ Has lines│────────────►│ Receipt  │     │
//! │  │  Cart    │◄───────────────│          │             │ (cart    │     │
//! │  └──────────┘ last line      └──────────┘             │  empty)  │     │
//! │       ▲       removed /         │   ▲                 └────┬─────┘     │
//! │       │       qty ≤ 0      adjust_quantity                 │           │
//! │       │                    remove_from_cart                │           │
//! │       └────────────────────────────────────────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command mutates first, then renders.

use storefront_core::{ProductId, QuantityChange};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::render::{Notice, Renderer};
use crate::state::Session;

/// Adds one unit of a product.
///
/// ## Errors
/// `NOT_FOUND` when the id is not in the catalog; the cart is unchanged.
pub fn add_to_cart(
    session: &mut Session,
    renderer: &mut dyn Renderer,
    product_id: ProductId,
) -> Result<(), ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let quantity = session.cart_mut().add_item(product_id)?.quantity;
    let name = session.catalog().find_by_id(product_id)?.name.clone();
    debug!(product_id = %product_id, quantity, "Item added");

    renderer.notify(&Notice::Added { product_id, name })?;
    refresh_cart(session, renderer)
}

/// Changes a line's quantity by `delta`.
///
/// ## Behavior
/// - No such line: nothing happens, nothing is rendered
/// - Quantity drops to 0 or below: the line is removed
pub fn adjust_quantity(
    session: &mut Session,
    renderer: &mut dyn Renderer,
    product_id: ProductId,
    delta: i64,
) -> Result<(), ApiError> {
    debug!(product_id = %product_id, delta, "adjust_quantity command");

    match session.cart_mut().change_quantity(product_id, delta) {
        QuantityChange::Missing => {
            debug!(product_id = %product_id, "Product not in cart, ignoring");
            Ok(())
        }
        change => {
            debug!(product_id = %product_id, ?change, "Quantity changed");
            refresh_cart(session, renderer)
        }
    }
}

/// Removes a product's line. Absent products are ignored.
pub fn remove_from_cart(
    session: &mut Session,
    renderer: &mut dyn Renderer,
    product_id: ProductId,
) -> Result<(), ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    if !session.cart_mut().remove_item(product_id) {
        debug!(product_id = %product_id, "Product not in cart");
    }

    refresh_cart(session, renderer)
}

pub fn open_cart(session: &mut Session, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    debug!("open_cart command");
    session.set_cart_open(true);
    render_panel(session, renderer)
}

pub fn close_cart(session: &mut Session, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    debug!("close_cart command");
    session.set_cart_open(false);
    render_panel(session, renderer)
}

pub fn toggle_cart(session: &mut Session, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    let open = session.toggle_cart();
    debug!(open, "toggle_cart command");
    render_panel(session, renderer)
}

/// Completes the purchase and closes the cart panel.
///
/// ## User Workflow
/// ```text
/// Click "Checkout"
///      │
///      ├── cart empty? ──► Err(EMPTY_CART) → "Your cart is empty!"
///      │
///      ▼
/// Cart::checkout() → Receipt { total }
///      │
///      ▼
/// "Thank you for your purchase! Total: $X.XX"
///      │
///      ▼
/// cart panel re-rendered (empty), badge 0, panel closed
/// ```
pub fn checkout(session: &mut Session, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    debug!("checkout command");

    let receipt = session.cart_mut().checkout()?;
    info!(
        receipt_id = %receipt.id,
        total = %receipt.total,
        items = receipt.item_count,
        lines = receipt.line_count,
        "Checkout complete"
    );

    session.set_cart_open(false);
    renderer.notify(&Notice::Purchased { receipt })?;
    refresh_cart(session, renderer)
}

/// Re-renders the cart panel and the badge.
fn refresh_cart(session: &Session, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    let snapshot = session.cart().snapshot();
    renderer.render_cart(&snapshot, session.is_cart_open())?;
    renderer.render_badge(snapshot.count)?;
    Ok(())
}

fn render_panel(session: &Session, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    renderer.render_cart(&session.cart().snapshot(), session.is_cart_open())?;
    Ok(())
}
