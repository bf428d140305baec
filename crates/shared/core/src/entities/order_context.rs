use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Side;
use crate::values::{Price, Quantity};

/// Reference state of the order being placed.
///
/// Owned by the surrounding order form. The ladder only reads it: `price` and
/// `side` drive profit/price conversion, `amount` drives projected profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContext {
    /// Reference unit price (>= 0)
    pub price: Price,
    /// Total position size (>= 0)
    pub amount: Quantity,
    pub side: Side,
}

impl Default for OrderContext {
    fn default() -> Self {
        Self {
            price: Decimal::ZERO,
            amount: Decimal::ZERO,
            side: Side::Buy,
        }
    }
}

impl OrderContext {
    pub fn new(side: Side, price: Price, amount: Quantity) -> Self {
        Self {
            price,
            amount,
            side,
        }
    }

    /// Builder: Set reference price
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    /// Builder: Set position amount
    pub fn with_amount(mut self, amount: Quantity) -> Self {
        self.amount = amount;
        self
    }

    /// Builder: Set side
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Notional value of the order (`price * amount`)
    ///
    /// Saturates instead of overflowing.
    pub fn total(&self) -> Decimal {
        self.price.saturating_mul(self.amount)
    }
}
