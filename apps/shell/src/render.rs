//! # Rendering
//!
//! The outbound half of the shell: after every action the commands hand the
//! current state to a [`Renderer`].
//!
//! ## Render Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Action                     Renderer calls                              │
//! │  ──────                     ──────────────                              │
//! │  search / category / all ─► render_products                             │
//! │  add ─────────────────────► notify(Added), render_cart, render_badge    │
//! │  qty / remove ────────────► render_cart, render_badge                   │
//! │  open / close / cart ─────► render_cart                                 │
//! │  checkout ────────────────► notify(Purchased), render_cart, render_badge│
//! │  failure ─────────────────► notify(Error)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Renderers only display; they never touch the cart.

use std::io::{self, Write};

use serde::Serialize;
use storefront_core::{CartSnapshot, Product, ProductId, Receipt};

use crate::error::ApiError;
use crate::state::ShellConfig;

/// Something worth telling the shopper that is not plain state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Notice {
    /// A product went into the cart ("Added!").
    Added { product_id: ProductId, name: String },

    /// Checkout completed.
    Purchased { receipt: Receipt },

    /// An action was refused.
    Error { error: ApiError },

    /// Free-form information (help text, welcome banner).
    Info { lines: Vec<String> },
}

/// Presentation adapter interface.
pub trait Renderer {
    /// Shows the visible product list.
    fn render_products(&mut self, products: &[&Product]) -> io::Result<()>;

    /// Shows the cart panel contents. `open` says whether the panel is visible.
    fn render_cart(&mut self, cart: &CartSnapshot, open: bool) -> io::Result<()>;

    /// Shows the item count badge.
    fn render_badge(&mut self, count: u32) -> io::Result<()>;

    fn notify(&mut self, notice: &Notice) -> io::Result<()>;
}

// =============================================================================
// Text Renderer
// =============================================================================

/// Human-readable renderer for a terminal.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    config: ShellConfig,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, config: &ShellConfig) -> Self {
        TextRenderer {
            out,
            config: config.clone(),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render_products(&mut self, products: &[&Product]) -> io::Result<()> {
        if products.is_empty() {
            return writeln!(self.out, "No products found.");
        }

        for product in products {
            writeln!(
                self.out,
                "[{}] {} {} - {}  {} {} ({} reviews)",
                product.id,
                product.icon,
                product.name,
                self.config.format_currency(product.price()),
                product.rating.stars(),
                product.rating,
                product.reviews
            )?;
        }
        Ok(())
    }

    fn render_cart(&mut self, cart: &CartSnapshot, open: bool) -> io::Result<()> {
        // A closed panel keeps its contents current but shows nothing.
        if !open {
            return Ok(());
        }

        writeln!(self.out, "--- Shopping Cart ---")?;
        if cart.is_empty() {
            writeln!(self.out, "Your cart is empty")?;
        }
        for line in &cart.lines {
            writeln!(
                self.out,
                "[{}] {} {} - {} x {} = {}",
                line.product_id,
                line.icon,
                line.name,
                self.config.format_currency(line.unit_price),
                line.quantity,
                self.config.format_currency(line.line_total)
            )?;
        }
        writeln!(self.out, "Total: {}", self.config.format_currency(cart.total))
    }

    fn render_badge(&mut self, count: u32) -> io::Result<()> {
        writeln!(self.out, "Cart: {}", count)
    }

    fn notify(&mut self, notice: &Notice) -> io::Result<()> {
        match notice {
            Notice::Added { name, .. } => writeln!(self.out, "Added! {}", name),
            Notice::Purchased { receipt } => {
                writeln!(
                    self.out,
                    "Thank you for your purchase! Total: {}",
                    self.config.format_currency(receipt.total)
                )?;
                writeln!(self.out)?;
                writeln!(self.out, "This is a demo - no actual payment processed.")
            }
            Notice::Error { error } => writeln!(self.out, "! {}", error.message),
            Notice::Info { lines } => {
                for line in lines {
                    writeln!(self.out, "{}", line)?;
                }
                Ok(())
            }
        }
    }
}

// =============================================================================
// JSON Renderer
// =============================================================================

/// Machine-readable renderer: one JSON object per line.
///
/// Lets a separate front end drive the shell over a pipe.
#[derive(Debug)]
pub struct JsonRenderer<W> {
    out: W,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
enum RenderEvent<'a> {
    Products { products: &'a [&'a Product] },
    Cart { cart: &'a CartSnapshot, open: bool },
    Badge { count: u32 },
    Notice { notice: &'a Notice },
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonRenderer { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &RenderEvent<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render_products(&mut self, products: &[&Product]) -> io::Result<()> {
        self.emit(&RenderEvent::Products { products })
    }

    fn render_cart(&mut self, cart: &CartSnapshot, open: bool) -> io::Result<()> {
        self.emit(&RenderEvent::Cart { cart, open })
    }

    fn render_badge(&mut self, count: u32) -> io::Result<()> {
        self.emit(&RenderEvent::Badge { count })
    }

    fn notify(&mut self, notice: &Notice) -> io::Result<()> {
        self.emit(&RenderEvent::Notice { notice })
    }
}
