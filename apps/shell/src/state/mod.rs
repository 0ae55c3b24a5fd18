//! # State Module
//!
//! Application state for the storefront shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │           Session            │   │         ShellConfig          │   │
//! │  │                              │   │                              │   │
//! │  │  Arc<Catalog> (read only)    │   │  store name                  │   │
//! │  │  Cart (owned, mutable)       │   │  currency symbol             │   │
//! │  │  current filter              │   │  catalog path                │   │
//! │  │  cart panel open?            │   │  output format               │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  Single-threaded: the session is owned by the input loop and passed    │
//! │  to commands as `&mut Session`. No locks.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, OutputFormat, ShellConfig};
pub use session::Session;
