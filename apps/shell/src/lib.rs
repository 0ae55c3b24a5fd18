//! # Storefront Shell Library
//!
//! The presentation adapter around `storefront-core`: it turns input lines
//! into actions, runs them against a session and renders the result.
//!
//! ## Module Organization
//! ```text
//! storefront_shell_lib/
//! ├── lib.rs             ◄─── You are here (startup & input loop)
//! ├── state/
//! │   ├── mod.rs         ◄─── State type exports
//! │   ├── session.rs     ◄─── Catalog handle, cart, view state
//! │   └── config.rs      ◄─── Environment configuration
//! ├── commands/
//! │   ├── mod.rs         ◄─── Action dispatch
//! │   ├── catalog.rs     ◄─── Search / category commands
//! │   └── cart.rs        ◄─── Cart manipulation commands
//! ├── catalog_source.rs  ◄─── JSON file or demo catalog
//! ├── input.rs           ◄─── Line → Action parser
//! ├── render.rs          ◄─── Renderer trait, text and JSON renderers
//! └── error.rs           ◄─── API error type for commands
//! ```

pub mod catalog_source;
pub mod commands;
pub mod error;
pub mod input;
pub mod render;
pub mod state;

use std::io::{self, BufRead};
use std::sync::Arc;

use storefront_core::Catalog;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use commands::Flow;
use error::ApiError;
use input::InputError;
use render::{JsonRenderer, Notice, Renderer, TextRenderer};
use state::{OutputFormat, Session, ShellConfig};

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,storefront_shell_lib=debug; override with RUST_LOG  │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • STOREFRONT_* environment variables                                │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • JSON file or built-in demo, validated                             │
/// │                                                                         │
/// │  4. Run Session ──────────────────────────────────────────────────────► │
/// │     • Initial render, then one action per input line                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    info!("Starting storefront shell");

    let config = ShellConfig::from_env()?;
    info!(
        store = %config.store_name,
        output = ?config.output,
        catalog_path = ?config.catalog_path,
        "Configuration loaded"
    );

    let catalog = catalog_source::load_catalog(&config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = match config.output {
        OutputFormat::Text => {
            let mut renderer = TextRenderer::new(stdout.lock(), &config);
            run_session(stdin.lock(), &mut renderer, catalog, &config)?
        }
        OutputFormat::Json => {
            let mut renderer = JsonRenderer::new(stdout.lock());
            run_session(stdin.lock(), &mut renderer, catalog, &config)?
        }
    };

    info!(items_left = session.cart().count(), "Session ended");
    Ok(())
}

/// Drives one session: initial render, then one action per line.
///
/// Lines that are not valid UTF-8 are reported like any other bad line.
/// Returns the session as it was when input ended or `quit` was read.
pub fn run_session<R: BufRead>(
    mut input: R,
    renderer: &mut dyn Renderer,
    catalog: Arc<Catalog>,
    config: &ShellConfig,
) -> Result<Session, ApiError> {
    let mut session = Session::new(catalog);

    renderer.notify(&Notice::Info {
        lines: vec![format!(
            "Welcome to {}! Type 'help' for commands.",
            config.store_name
        )],
    })?;
    commands::catalog::show_all(&mut session, renderer)?;
    renderer.render_badge(session.cart().count())?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(err) => {
                warn!(valid_up_to = err.valid_up_to(), "Skipping undecodable input line");
                let error = InputError::InvalidEncoding.into();
                renderer.notify(&Notice::Error { error })?;
                continue;
            }
        };

        let action = match input::parse(line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(err) => {
                renderer.notify(&Notice::Error { error: err.into() })?;
                continue;
            }
        };

        debug!(?action, "Dispatching action");
        if commands::dispatch(&mut session, renderer, action)? == Flow::Quit {
            break;
        }
    }

    Ok(session)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_core=trace` - Narrow to one crate
/// - Default: INFO, DEBUG for the shell itself
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_shell_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
