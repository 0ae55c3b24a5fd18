//! # Catalog Source
//!
//! Supplies the read-only catalog at startup.
//!
//! ## Sources
//! ```text
//! STOREFRONT_CATALOG_PATH set? ──yes──► read file ──► JSON array of Product
//!           │ no                                           │
//!           ▼                                              ▼
//!   seed::demo_products()  ─────────────────────────► Catalog::new (validated)
//! ```
//!
//! ## File Format
//! ```json
//! [
//!   { "id": 1, "name": "Galaxy Pro Max", "priceCents": 99999,
//!     "category": "smartphones", "icon": "📱", "rating": 4.8, "reviews": 234 }
//! ]
//! ```
//!
//! Prices are whole cents. A decimal `priceCents` such as `999.99` or a
//! `price` field in dollars is rejected with an `IO_ERROR` ("Invalid JSON").

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use storefront_core::{seed, Catalog, Product};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::ShellConfig;

/// Loads the catalog the config points at.
pub fn load_catalog(config: &ShellConfig) -> Result<Arc<Catalog>, ApiError> {
    let start = Instant::now();

    let catalog = match &config.catalog_path {
        Some(path) => load_file(path)?,
        None => {
            debug!("No catalog path configured, using demo catalog");
            Catalog::new(seed::demo_products())?
        }
    };

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        products = catalog.len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );

    Ok(Arc::new(catalog))
}

/// Reads and validates a JSON product file.
pub fn load_file(path: &Path) -> Result<Catalog, ApiError> {
    debug!(path = %path.display(), "Reading catalog file");
    let raw = std::fs::read_to_string(path)?;
    parse_catalog(&raw)
}

/// Parses a JSON array of products into a validated catalog.
pub fn parse_catalog(json: &str) -> Result<Catalog, ApiError> {
    let products: Vec<Product> = serde_json::from_str(json)?;
    Ok(Catalog::new(products)?)
}
