//! Take-profit errors
//!
//! Ladder edits and validation never fail with an `Err`: structural no-ops are
//! reported through `Option`/`bool` returns and rule violations through the
//! ladder's message and row flags. Errors here cover configuration and
//! context values pushed in from outside.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid ladder configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid order context: {field} must be non-negative, got {value}")]
    InvalidContext { field: &'static str, value: String },

    #[error("Order total {total} at price {price} gives an amount out of range")]
    AmountOverflow { total: String, price: String },
}

pub type Result<T> = std::result::Result<T, Error>;
