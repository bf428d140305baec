//! Projected Profit
//!
//! Expected absolute profit if every target fills at its price:
//!
//! ```text
//! target_amount = ctx.amount * allocation / 100
//! Buy:  profit += target_amount * (target_price - ctx.price)
//! Sell: profit += target_amount * (ctx.price - target_price)
//! ```
//!
//! Rows with non-numeric fields contribute nothing.

use crate::target::Target;
use ladder_core::{OrderContext, Side, round_half_up};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Projected profit of one target, `None` when its fields don't parse
pub fn target_profit(target: &Target, ctx: &OrderContext) -> Option<Decimal> {
    let price = target.price()?;
    let allocation = target.allocation()?;

    let target_amount = ctx.amount.checked_mul(allocation)?.checked_div(dec!(100))?;
    let per_unit = match ctx.side {
        Side::Buy => price.checked_sub(ctx.price)?,
        Side::Sell => ctx.price.checked_sub(price)?,
    };
    target_amount.checked_mul(per_unit)
}

/// Sum of projected profit over all targets, rounded to `dp` digits
pub fn projected_profit(targets: &[Target], ctx: &OrderContext, dp: u32) -> Decimal {
    let total = targets
        .iter()
        .filter_map(|t| target_profit(t, ctx))
        .fold(Decimal::ZERO, |sum, p| sum.saturating_add(p));
    round_half_up(total, dp)
}
