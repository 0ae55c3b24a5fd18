//! # Catalog Commands
//!
//! Product grid queries: search box, category cards, "show all".
//!
//! None of these touch the cart; each re-renders the product grid.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ApiError;
use crate::render::Renderer;
use crate::state::Session;

/// Searches name and category, case-insensitively.
///
/// An empty term shows the whole catalog.
pub fn search(session: &Session, renderer: &mut dyn Renderer, term: &str) -> Result<(), ApiError> {
    let start = Instant::now();
    debug!(term = %term, filter = ?session.current_filter(), "search command");

    let products = session.catalog().search(term);

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = products.len(),
        term = %term,
        "search complete"
    );

    renderer.render_products(&products)?;
    Ok(())
}

/// Shows one category, matched exactly.
pub fn select_category(
    session: &mut Session,
    renderer: &mut dyn Renderer,
    category: &str,
) -> Result<(), ApiError> {
    debug!(category = %category, "select_category command");

    session.set_filter(category);
    let products = session.catalog().filter_by_category(category);
    if products.is_empty() {
        debug!(category = %category, "No products in category");
    }

    renderer.render_products(&products)?;
    Ok(())
}

/// Shows the full catalog in declaration order.
pub fn show_all(session: &mut Session, renderer: &mut dyn Renderer) -> Result<(), ApiError> {
    debug!("show_all command");

    session.clear_filter();
    let products: Vec<_> = session.catalog().list_all().iter().collect();

    renderer.render_products(&products)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{RecordingRenderer, Rendered};
    use std::sync::Arc;
    use storefront_core::{seed, ProductId};

    fn test_session() -> Session {
        Session::new(Arc::new(seed::demo_catalog().unwrap()))
    }

    fn ids(raw: &[u32]) -> Vec<ProductId> {
        raw.iter().copied().map(ProductId::new).collect()
    }

    #[test]
    fn test_search_renders_matches() {
        let session = test_session();
        let mut renderer = RecordingRenderer::default();

        search(&session, &mut renderer, "pro").unwrap();
        assert_eq!(renderer.take(), vec![Rendered::Products(ids(&[1, 2, 7]))]);

        search(&session, &mut renderer, "").unwrap();
        assert_eq!(
            renderer.take(),
            vec![Rendered::Products(ids(&[1, 2, 3, 4, 5, 6, 7, 8]))]
        );
    }

    #[test]
    fn test_select_category_sets_filter() {
        let mut session = test_session();
        let mut renderer = RecordingRenderer::default();

        select_category(&mut session, &mut renderer, "smartphones").unwrap();
        assert_eq!(session.current_filter(), Some("smartphones"));
        assert_eq!(renderer.take(), vec![Rendered::Products(ids(&[1, 5]))]);

        show_all(&mut session, &mut renderer).unwrap();
        assert_eq!(session.current_filter(), None);
    }

    #[test]
    fn test_unknown_category_renders_empty_grid() {
        let mut session = test_session();
        let mut renderer = RecordingRenderer::default();

        select_category(&mut session, &mut renderer, "Audio").unwrap();
        assert_eq!(renderer.take(), vec![Rendered::Products(Vec::new())]);
    }
}
