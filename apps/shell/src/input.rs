//! # Input Parsing
//!
//! Turns one line of shopper input into an [`Action`].
//!
//! ## Line Syntax
//! ```text
//! search <term...>      search name/category (empty term = everything)
//! category <name...>   show one category (exact name, may contain spaces)
//! all                   show the whole catalog
//! add <id>              add one unit to the cart
//! qty <id> <delta>      change a quantity (+1, -1, 3, ...)
//! remove <id>           drop a line from the cart
//! open | close | cart   open, close or toggle the cart panel
//! checkout              buy everything in the cart
//! help                  list commands
//! quit | exit           leave the shell
//! ```

use storefront_core::ProductId;
use thiserror::Error;

/// A discrete shopper gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(String),
    SelectCategory(String),
    ShowAll,
    AddToCart(ProductId),
    AdjustQuantity(ProductId, i64),
    RemoveFromCart(ProductId),
    OpenCart,
    CloseCart,
    ToggleCart,
    Checkout,
    Help,
    Quit,
}

/// Why a line could not be turned into an action.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("'{value}' is not a valid {argument}")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },

    #[error("Input line is not valid UTF-8")]
    InvalidEncoding,
}

/// Usage lines shown by `help`.
pub const HELP: &[&str] = &[
    "search <term>      search products by name or category",
    "category <name>    show one category",
    "all                show every product",
    "add <id>           add a product to the cart",
    "qty <id> <delta>   change a quantity, e.g. qty 4 -1",
    "remove <id>        remove a product from the cart",
    "open / close       show or hide the cart",
    "cart               toggle the cart",
    "checkout           complete the purchase",
    "quit               leave the store",
];

/// Parses one input line.
///
/// Blank lines yield `Ok(None)`.
///
/// ## Example
/// ```rust
/// use storefront_core::ProductId;
/// use storefront_shell_lib::input::{parse, Action};
///
/// assert_eq!(parse("qty 4 -1").unwrap(), Some(Action::AdjustQuantity(ProductId::new(4), -1)));
/// assert_eq!(parse("search Pro").unwrap(), Some(Action::Search("Pro".to_string())));
/// ```
pub fn parse(line: &str) -> Result<Option<Action>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let action = match command.to_ascii_lowercase().as_str() {
        "search" => Action::Search(rest.to_string()),
        "category" => {
            if rest.is_empty() {
                return Err(InputError::MissingArgument {
                    command: "category",
                    argument: "a category name",
                });
            }
            Action::SelectCategory(rest.to_string())
        }
        "all" => Action::ShowAll,
        "add" => Action::AddToCart(product_id("add", args.next())?),
        "qty" => {
            let id = product_id("qty", args.next())?;
            let raw = args.next().ok_or(InputError::MissingArgument {
                command: "qty",
                argument: "a quantity change",
            })?;
            let delta = raw.parse().map_err(|_| InputError::InvalidNumber {
                argument: "quantity change",
                value: raw.to_string(),
            })?;
            Action::AdjustQuantity(id, delta)
        }
        "remove" => Action::RemoveFromCart(product_id("remove", args.next())?),
        "open" => Action::OpenCart,
        "close" => Action::CloseCart,
        "cart" => Action::ToggleCart,
        "checkout" => Action::Checkout,
        "help" | "?" => Action::Help,
        "quit" | "exit" => Action::Quit,
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(Some(action))
}

fn product_id(command: &'static str, raw: Option<&str>) -> Result<ProductId, InputError> {
    let raw = raw.ok_or(InputError::MissingArgument {
        command,
        argument: "a product id",
    })?;
    raw.parse().map_err(|_| InputError::InvalidNumber {
        argument: "product id",
        value: raw.to_string(),
    })
}
