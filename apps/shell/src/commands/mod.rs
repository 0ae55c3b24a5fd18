//! # Commands Module
//!
//! One function per shopper action, plus the dispatcher the input loop uses.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch)
//! ├── catalog.rs  ◄─── search, category filter, full listing
//! └── cart.rs     ◄─── add, quantity, remove, panel, checkout
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action::AddToCart(3)                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&mut session, &mut renderer, action)                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  cart::add_to_cart()                                                    │
//! │    1. mutate: session.cart_mut().add_item(id)?                          │
//! │    2. render: notice, cart panel, badge                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Err(recoverable)? ──► renderer.notify(Error), session continues        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;

use tracing::warn;

use crate::error::ApiError;
use crate::input::{Action, HELP};
use crate::render::{Notice, Renderer};
use crate::state::Session;

/// Whether the input loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one action and reports recoverable failures to the shopper.
///
/// ## Errors
/// Only unrecoverable errors (output failures) are returned.
pub fn dispatch(
    session: &mut Session,
    renderer: &mut dyn Renderer,
    action: Action,
) -> Result<Flow, ApiError> {
    match execute(session, renderer, action) {
        Ok(flow) => Ok(flow),
        Err(error) if error.is_recoverable() => {
            warn!(code = ?error.code, "{}", error.message);
            renderer.notify(&Notice::Error { error })?;
            Ok(Flow::Continue)
        }
        Err(error) => Err(error),
    }
}

/// Maps an action 1:1 onto its command.
pub fn execute(
    session: &mut Session,
    renderer: &mut dyn Renderer,
    action: Action,
) -> Result<Flow, ApiError> {
    match action {
        Action::Search(term) => catalog::search(session, renderer, &term)?,
        Action::SelectCategory(category) => {
            catalog::select_category(session, renderer, &category)?
        }
        Action::ShowAll => catalog::show_all(session, renderer)?,
        Action::AddToCart(id) => cart::add_to_cart(session, renderer, id)?,
        Action::AdjustQuantity(id, delta) => {
            cart::adjust_quantity(session, renderer, id, delta)?
        }
        Action::RemoveFromCart(id) => cart::remove_from_cart(session, renderer, id)?,
        Action::OpenCart => cart::open_cart(session, renderer)?,
        Action::CloseCart => cart::close_cart(session, renderer)?,
        Action::ToggleCart => cart::toggle_cart(session, renderer)?,
        Action::Checkout => cart::checkout(session, renderer)?,
        Action::Help => help(session, renderer)?,
        Action::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn help(session: &Session, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    let mut lines: Vec<String> = HELP.iter().map(|line| line.to_string()).collect();
    lines.push(format!(
        "categories: {}",
        session.catalog().categories().join(", ")
    ));
    renderer.notify(&Notice::Info { lines })?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    //! A renderer that records every call, for command tests.

    use std::io;

    use storefront_core::{CartSnapshot, Product, ProductId};

    use crate::render::{Notice, Renderer};

    #[derive(Debug, Clone, PartialEq)]
    pub enum Rendered {
        Products(Vec<ProductId>),
        Cart { count: u32, total_cents: i64, open: bool },
        Badge(u32),
        Notice(Notice),
    }

    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub calls: Vec<Rendered>,
    }

    impl RecordingRenderer {
        pub fn take(&mut self) -> Vec<Rendered> {
            std::mem::take(&mut self.calls)
        }
    }

    impl Renderer for RecordingRenderer {
        fn render_products(&mut self, products: &[&Product]) -> io::Result<()> {
            self.calls
                .push(Rendered::Products(products.iter().map(|p| p.id).collect()));
            Ok(())
        }

        fn render_cart(&mut self, cart: &CartSnapshot, open: bool) -> io::Result<()> {
            self.calls.push(Rendered::Cart {
                count: cart.count,
                total_cents: cart.total.cents(),
                open,
            });
            Ok(())
        }

        fn render_badge(&mut self, count: u32) -> io::Result<()> {
            self.calls.push(Rendered::Badge(count));
            Ok(())
        }

        fn notify(&mut self, notice: &Notice) -> io::Result<()> {
            self.calls.push(Rendered::Notice(notice.clone()));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{RecordingRenderer, Rendered};
    use super::*;
    use crate::error::ErrorCode;
    use std::sync::Arc;
    use storefront_core::{seed, ProductId};

    fn test_session() -> Session {
        Session::new(Arc::new(seed::demo_catalog().unwrap()))
    }

    #[test]
    fn test_quit() {
        let mut session = test_session();
        let mut renderer = RecordingRenderer::default();
        let flow = dispatch(&mut session, &mut renderer, Action::Quit).unwrap();
        assert_eq!(flow, Flow::Quit);
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn test_recoverable_error_becomes_notice() {
        let mut session = test_session();
        let mut renderer = RecordingRenderer::default();

        let flow = dispatch(&mut session, &mut renderer, Action::Checkout).unwrap();
        assert_eq!(flow, Flow::Continue);

        match renderer.take().as_slice() {
            [Rendered::Notice(Notice::Error { error })] => {
                assert_eq!(error.code, ErrorCode::EmptyCart);
                assert_eq!(error.message, "Your cart is empty!");
            }
            other => panic!("unexpected render calls: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_product_becomes_notice() {
        let mut session = test_session();
        let mut renderer = RecordingRenderer::default();

        dispatch(
            &mut session,
            &mut renderer,
            Action::AddToCart(ProductId::new(77)),
        )
        .unwrap();

        assert!(session.cart().is_empty());
        assert!(matches!(
            renderer.take().as_slice(),
            [Rendered::Notice(Notice::Error { error })] if error.code == ErrorCode::NotFound
        ));
    }

    #[test]
    fn test_help_lists_categories() {
        let mut session = test_session();
        let mut renderer = RecordingRenderer::default();
        dispatch(&mut session, &mut renderer, Action::Help).unwrap();

        match renderer.take().as_slice() {
            [Rendered::Notice(Notice::Info { lines })] => {
                assert_eq!(
                    lines.last().unwrap(),
                    "categories: smartphones, laptops, audio, gaming"
                );
            }
            other => panic!("unexpected render calls: {:?}", other),
        }
    }
}
