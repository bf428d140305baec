//! Target - one row of the take-profit ladder
//!
//! Numeric fields are stored as the raw text the user typed. They are only
//! parsed at commit boundaries (field blur, validation, aggregation), so a
//! half-typed value never corrupts the rest of the ladder.

use ladder_core::{Side, format_decimal, parse_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Profit percentage, e.g. "2" for 2%
    pub profit_percent: String,
    /// Absolute target price
    pub target_price: String,
    /// Share of the position (0-100) closed at this target
    pub allocation_percent: String,
    /// Per-row validation flag
    pub has_error: bool,
}

impl Target {
    /// Create a target from numeric values, formatted for display
    pub fn new(profit: Decimal, price: Decimal, allocation: Decimal) -> Self {
        Self {
            profit_percent: format_decimal(profit),
            target_price: format_decimal(price),
            allocation_percent: format_decimal(allocation),
            has_error: false,
        }
    }

    /// Create a target from raw text fields
    pub fn from_text(
        profit: impl Into<String>,
        price: impl Into<String>,
        allocation: impl Into<String>,
    ) -> Self {
        Self {
            profit_percent: profit.into(),
            target_price: price.into(),
            allocation_percent: allocation.into(),
            has_error: false,
        }
    }

    pub fn profit(&self) -> Option<Decimal> {
        parse_decimal(&self.profit_percent)
    }

    pub fn price(&self) -> Option<Decimal> {
        parse_decimal(&self.target_price)
    }

    pub fn allocation(&self) -> Option<Decimal> {
        parse_decimal(&self.allocation_percent)
    }
}

/// Target field a table column renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetField {
    Profit,
    Price,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Right,
}

/// Column descriptor for rendering the ladder as a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub field: TargetField,
    pub align: Alignment,
}

/// Table columns for the ladder. The amount title follows the order side.
pub fn columns(side: Side) -> [Column; 3] {
    [
        Column {
            title: "Profit".to_string(),
            field: TargetField::Profit,
            align: Alignment::Left,
        },
        Column {
            title: "Target price".to_string(),
            field: TargetField::Price,
            align: Alignment::Left,
        },
        Column {
            title: format!("Amount to {}", side),
            field: TargetField::Amount,
            align: Alignment::Right,
        },
    ]
}
