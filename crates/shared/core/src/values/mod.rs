use rust_decimal::Decimal;

mod decimal;

pub use decimal::{
    format_decimal, parse_decimal, parse_leading_decimal, parse_or_zero, round_half_up, to_fixed,
};

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Quantity value - uses Decimal for precision
pub type Quantity = Decimal;

/// Percentage value, expressed on a 0-100 scale (2 means 2%)
pub type Percent = Decimal;
