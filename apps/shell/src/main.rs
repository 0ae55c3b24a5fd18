//! # Storefront Shell Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, stderr)
//! 2. Load configuration from `STOREFRONT_*` environment variables
//! 3. Load the catalog (JSON file or built-in demo)
//! 4. Render the product grid and empty cart badge
//! 5. Read actions from stdin until `quit` or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match storefront_shell_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("storefront: {}", err.message);
            ExitCode::FAILURE
        }
    }
}
