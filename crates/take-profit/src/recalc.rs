//! Recalculation Engine
//!
//! Converts between a target's profit percentage and its absolute price for
//! a given order context. Profit percent is the ladder's source of truth:
//! when the context price or side changes, every price is re-derived from
//! the stored profit.
//!
//! ```text
//! Buy:  price  = ref * (1 + profit / 100)     profit = (price - ref) / ref * 100
//! Sell: price  = ref * (1 - profit / 100)     profit = (ref - price) / ref * 100
//! ```
//!
//! Results are rounded to `dp` digits. `None` means the arithmetic left the
//! Decimal range; callers keep the stored text unchanged in that case.

use crate::target::Target;
use ladder_core::{OrderContext, Percent, Price, Side, format_decimal, round_half_up};
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const HUNDRED: Decimal = dec!(100);

/// Target price reached at `profit` percent from the reference price
pub fn price_from_profit(profit: Percent, ctx: &OrderContext, dp: u32) -> Option<Price> {
    let fraction = profit.checked_div(HUNDRED)?;
    let factor = match ctx.side {
        Side::Buy => Decimal::ONE.checked_add(fraction)?,
        Side::Sell => Decimal::ONE.checked_sub(fraction)?,
    };
    let price = ctx.price.checked_mul(factor)?;
    Some(round_half_up(price, dp))
}

/// Profit percentage realised at `target_price`.
///
/// A zero reference price yields zero profit rather than dividing by zero.
pub fn profit_from_price(target_price: Price, ctx: &OrderContext, dp: u32) -> Option<Percent> {
    if ctx.price.is_zero() {
        return Some(Decimal::ZERO);
    }
    let diff = match ctx.side {
        Side::Buy => target_price.checked_sub(ctx.price)?,
        Side::Sell => ctx.price.checked_sub(target_price)?,
    };
    let profit = diff.checked_div(ctx.price)?.checked_mul(HUNDRED)?;
    Some(round_half_up(profit, dp))
}

/// Re-derive every target price from its stored profit in one pass.
///
/// Rows with unparseable profit text keep their price. Nothing is touched
/// while the reference price is zero. Returns the number of rows updated.
pub fn recalculate_prices(targets: &mut [Target], ctx: &OrderContext, dp: u32) -> usize {
    if ctx.price <= Decimal::ZERO {
        debug!("Skipping price recalculation: reference price {}", ctx.price);
        return 0;
    }

    let mut updated = 0;
    for target in targets.iter_mut() {
        let Some(profit) = target.profit() else {
            continue;
        };
        if let Some(price) = price_from_profit(profit, ctx, dp) {
            target.target_price = format_decimal(price);
            updated += 1;
        }
    }

    debug!(
        "Recalculated {}/{} target prices at {} ({})",
        updated,
        targets.len(),
        ctx.price,
        ctx.side
    );
    updated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buy(price: Decimal) -> OrderContext {
        OrderContext::new(Side::Buy, price, Decimal::ZERO)
    }

    fn sell(price: Decimal) -> OrderContext {
        OrderContext::new(Side::Sell, price, Decimal::ZERO)
    }

    #[test]
    fn test_price_from_profit_buy() {
        assert_eq!(price_from_profit(dec!(2), &buy(dec!(100)), 2), Some(dec!(102)));
        assert_eq!(
            price_from_profit(dec!(2.5), &buy(dec!(2)), 2),
            Some(dec!(2.05))
        );
    }

    #[test]
    fn test_price_from_profit_sell() {
        assert_eq!(price_from_profit(dec!(2), &sell(dec!(100)), 2), Some(dec!(98)));
        assert_eq!(
            price_from_profit(dec!(150), &sell(dec!(100)), 2),
            Some(dec!(-50))
        );
    }

    #[test]
    fn test_price_is_rounded_to_display_precision() {
        // 33.33 * 1.07 = 35.6631
        assert_eq!(
            price_from_profit(dec!(7), &buy(dec!(33.33)), 2),
            Some(dec!(35.66))
        );
    }

    #[test]
    fn test_profit_from_price() {
        assert_eq!(
            profit_from_price(dec!(104), &buy(dec!(100)), 2),
            Some(dec!(4))
        );
        assert_eq!(
            profit_from_price(dec!(90), &sell(dec!(100)), 2),
            Some(dec!(10))
        );
        assert_eq!(
            profit_from_price(dec!(95), &buy(dec!(100)), 2),
            Some(dec!(-5))
        );
    }

    #[test]
    fn test_profit_from_price_zero_reference() {
        assert_eq!(
            profit_from_price(dec!(104), &buy(Decimal::ZERO), 2),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_overflow_yields_none() {
        assert_eq!(price_from_profit(dec!(100), &buy(Decimal::MAX), 2), None);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let tolerance = dec!(0.01);
        for ctx in [buy(dec!(100)), sell(dec!(100)), buy(dec!(2)), sell(dec!(37.19))] {
            for profit in [dec!(0.01), dec!(1), dec!(2.5), dec!(13.37), dec!(50), dec!(99.99)] {
                let price = price_from_profit(profit, &ctx, 2).unwrap();
                let back = profit_from_price(price, &ctx, 2).unwrap();
                // Price rounding moves profit by at most half a cent relative to ref
                let bound = tolerance.max(dec!(0.5) / ctx.price + dec!(0.01));
                assert!(
                    (back - profit).abs() <= bound,
                    "{:?} profit {} -> price {} -> profit {}",
                    ctx.side,
                    profit,
                    price,
                    back
                );
            }
        }
    }

    #[test]
    fn test_recalculate_prices_follows_side() {
        let mut targets = vec![
            Target::from_text("2", "102", "80"),
            Target::from_text("4", "104", "20"),
        ];

        let updated = recalculate_prices(&mut targets, &sell(dec!(100)), 2);

        assert_eq!(updated, 2);
        assert_eq!(targets[0].target_price, "98");
        assert_eq!(targets[1].target_price, "96");
        // profit stays authoritative
        assert_eq!(targets[0].profit_percent, "2");
    }

    #[test]
    fn test_recalculate_skips_malformed_rows() {
        let mut targets = vec![
            Target::from_text("abc", "55", "50"),
            Target::from_text("10", "0", "50"),
        ];

        let updated = recalculate_prices(&mut targets, &buy(dec!(200)), 2);

        assert_eq!(updated, 1);
        assert_eq!(targets[0].target_price, "55");
        assert_eq!(targets[1].target_price, "220");
    }

    #[test]
    fn test_recalculate_noop_on_zero_reference() {
        let mut targets = vec![Target::from_text("2", "102", "100")];
        assert_eq!(recalculate_prices(&mut targets, &buy(Decimal::ZERO), 2), 0);
        assert_eq!(targets[0].target_price, "102");
    }
}
