//! # Configuration State
//!
//! Shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! | Variable                      | Default        |
//! |-------------------------------|----------------|
//! | `STOREFRONT_STORE_NAME`       | `TechStore`    |
//! | `STOREFRONT_CURRENCY_SYMBOL`  | `$`            |
//! | `STOREFRONT_CATALOG_PATH`     | built-in demo  |
//! | `STOREFRONT_OUTPUT`           | `text`         |
//!
//! Configuration is read-only after startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use storefront_core::Money;

/// Shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    /// Store name (shown in the welcome banner)
    pub store_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// JSON product file; `None` uses the built-in demo catalog
    pub catalog_path: Option<PathBuf>,

    /// How state is rendered on stdout
    pub output: OutputFormat,
}

/// Renderer selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable product grid and cart panel
    #[default]
    Text,

    /// One JSON object per render call
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "STOREFRONT_OUTPUT".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            store_name: "TechStore".to_string(),
            currency_symbol: "$".to_string(),
            catalog_path: None,
            output: OutputFormat::Text,
        }
    }
}

impl ShellConfig {
    /// Creates a ShellConfig from environment variables and defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = ShellConfig::default();

        if let Some(store_name) = get("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(symbol) = get("STOREFRONT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(path) = get("STOREFRONT_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(output) = get("STOREFRONT_OUTPUT") {
            config.output = output.parse()?;
        }

        Ok(config)
    }

    /// Formats an amount with the configured symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Money;
    /// use storefront_shell_lib::state::ShellConfig;
    ///
    /// let config = ShellConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(229997)), "$2299.97");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let decimal = amount.to_decimal_string();
        match decimal.strip_prefix('-') {
            Some(abs) => format!("-{}{}", self.currency_symbol, abs),
            None => format!("{}{}", self.currency_symbol, decimal),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },
}
