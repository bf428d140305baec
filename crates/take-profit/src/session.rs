//! Order Session
//!
//! One order form: the [`OrderContext`] it edits and the take-profit ladder
//! attached to it. Context setters fire the ladder's recalculation hook
//! whenever the reference price or side actually changes, so the ladder is
//! never observed half-updated.

use crate::config::LadderConfig;
use crate::error::{Error, Result};
use crate::ladder::{LadderSnapshot, TakeProfitLadder};
use crate::target::{Column, Target};
use ladder_core::{OrderContext, Price, Quantity, Side};
use log::debug;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default)]
pub struct OrderSession {
    context: OrderContext,
    ladder: TakeProfitLadder,
}

impl OrderSession {
    pub fn new(context: OrderContext) -> Result<Self> {
        Self::with_config(context, LadderConfig::default())
    }

    pub fn with_config(context: OrderContext, config: LadderConfig) -> Result<Self> {
        check_non_negative("price", context.price)?;
        check_non_negative("amount", context.amount)?;
        Ok(Self {
            context,
            ladder: TakeProfitLadder::with_config(config)?,
        })
    }

    pub fn context(&self) -> &OrderContext {
        &self.context
    }

    pub fn ladder(&self) -> &TakeProfitLadder {
        &self.ladder
    }

    // ------------------------------------------------------------------
    // Order form
    // ------------------------------------------------------------------

    pub fn set_price(&mut self, price: Price) -> Result<()> {
        check_non_negative("price", price)?;
        if self.context.price != price {
            self.context.price = price;
            self.context_changed();
        }
        Ok(())
    }

    pub fn set_side(&mut self, side: Side) {
        if self.context.side != side {
            self.context.side = side;
            self.context_changed();
        }
    }

    pub fn set_amount(&mut self, amount: Quantity) -> Result<()> {
        check_non_negative("amount", amount)?;
        self.context.amount = amount;
        Ok(())
    }

    /// Set the amount from an order total at the current price.
    ///
    /// With no reference price the amount drops to zero. A total too large
    /// for the current price leaves the amount unchanged.
    pub fn set_total(&mut self, total: Decimal) -> Result<()> {
        check_non_negative("total", total)?;
        self.context.amount = if self.context.price > Decimal::ZERO {
            total
                .checked_div(self.context.price)
                .ok_or_else(|| Error::AmountOverflow {
                    total: total.to_string(),
                    price: self.context.price.to_string(),
                })?
        } else {
            Decimal::ZERO
        };
        Ok(())
    }

    /// Order notional (`price * amount`)
    pub fn total(&self) -> Decimal {
        self.context.total()
    }

    fn context_changed(&mut self) {
        let updated = self.ladder.on_context_changed(&self.context);
        debug!(
            "Order context now {} @ {}, {} targets re-priced",
            self.context.side, self.context.price, updated
        );
    }

    // ------------------------------------------------------------------
    // Take-profit ladder
    // ------------------------------------------------------------------

    pub fn set_take_profit_enabled(&mut self, enabled: bool) {
        self.ladder.set_enabled(enabled, &self.context);
    }

    pub fn add_target(&mut self) -> Option<usize> {
        self.ladder.add_target(&self.context)
    }

    pub fn remove_target(&mut self, index: usize) -> Option<Target> {
        self.ladder.remove_target(index)
    }

    /// Type profit text into a row and commit it
    pub fn edit_profit(&mut self, index: usize, text: impl Into<String>) -> bool {
        self.ladder.set_profit_text(index, text)
            && self.ladder.on_profit_field_committed(index, &self.context)
    }

    /// Type price text into a row and commit it
    pub fn edit_price(&mut self, index: usize, text: impl Into<String>) -> bool {
        self.ladder.set_price_text(index, text)
            && self.ladder.on_price_field_committed(index, &self.context)
    }

    pub fn edit_allocation(&mut self, index: usize, text: impl Into<String>) -> bool {
        self.ladder.set_allocation_text(index, text)
    }

    pub fn validate(&mut self) -> bool {
        self.ladder.validate()
    }

    pub fn clear_item_error(&mut self, index: usize) {
        self.ladder.clear_item_error(index);
    }

    pub fn projected_profit(&self) -> Decimal {
        self.ladder.projected_profit(&self.context)
    }

    pub fn columns(&self) -> [Column; 3] {
        self.ladder.columns(&self.context)
    }

    pub fn snapshot(&self) -> LadderSnapshot {
        self.ladder.snapshot()
    }
}

fn check_non_negative(field: &'static str, value: Decimal) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(Error::InvalidContext {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}
