//! # Session State
//!
//! Everything one shopper's visit holds: the shared catalog, their cart and
//! the view state the presentation layer needs (active category, whether the
//! cart panel is open).

use std::sync::Arc;

use storefront_core::{Cart, Catalog};

/// One shopping session.
///
/// ## Lifecycle
/// The cart starts empty and is emptied again by checkout. The session
/// itself lives until the input ends.
#[derive(Debug)]
pub struct Session {
    catalog: Arc<Catalog>,
    cart: Cart,
    current_filter: Option<String>,
    cart_open: bool,
}

impl Session {
    /// Creates a session with an empty cart and the cart panel closed.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Session {
            cart: Cart::new(Arc::clone(&catalog)),
            catalog,
            current_filter: None,
            cart_open: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Category last selected from a category card, if any.
    pub fn current_filter(&self) -> Option<&str> {
        self.current_filter.as_deref()
    }

    pub fn set_filter(&mut self, category: impl Into<String>) {
        self.current_filter = Some(category.into());
    }

    pub fn clear_filter(&mut self) {
        self.current_filter = None;
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
    }

    /// Flips the cart panel and returns the new state.
    pub fn toggle_cart(&mut self) -> bool {
        self.cart_open = !self.cart_open;
        self.cart_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{seed, ProductId};

    fn test_session() -> Session {
        Session::new(Arc::new(seed::demo_catalog().unwrap()))
    }

    #[test]
    fn test_new_session() {
        let session = test_session();
        assert!(session.cart().is_empty());
        assert!(!session.is_cart_open());
        assert_eq!(session.current_filter(), None);
        assert_eq!(session.catalog().len(), 8);
    }

    #[test]
    fn test_cart_shares_catalog() {
        let mut session = test_session();
        session.cart_mut().add_item(ProductId::new(8)).unwrap();
        assert_eq!(session.cart().catalog().len(), session.catalog().len());
    }

    #[test]
    fn test_toggle_and_filter() {
        let mut session = test_session();
        assert!(session.toggle_cart());
        assert!(!session.toggle_cart());

        session.set_filter("audio");
        assert_eq!(session.current_filter(), Some("audio"));
        session.clear_filter();
        assert_eq!(session.current_filter(), None);
    }
}
