//! Ladder Core Domain
//!
//! Pure domain types shared by the take-profit ladder crates.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{OrderContext, Side};
pub use values::{
    Percent, Price, Quantity, format_decimal, parse_decimal, parse_leading_decimal, parse_or_zero,
    round_half_up, to_fixed,
};
