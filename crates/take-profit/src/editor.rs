//! Ladder Editor policies
//!
//! Allocation bookkeeping applied when targets are inserted or removed.
//! Both policies work on the raw target list; malformed allocation text
//! counts as zero.

use crate::target::Target;
use ladder_core::{Percent, format_decimal, parse_leading_decimal, parse_or_zero, round_half_up};
use rust_decimal::Decimal;

/// Allocation change made by [`rebalance_after_insert`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rebalance {
    pub index: usize,
    pub from: Percent,
    pub to: Percent,
}

/// Sum of all allocations
pub fn allocation_total(targets: &[Target]) -> Percent {
    targets.iter().fold(Decimal::ZERO, |sum, t| {
        sum.saturating_add(parse_or_zero(&t.allocation_percent))
    })
}

/// Profit for a target appended after the current last one.
///
/// The last profit is read from its leading number, so a half-edited
/// `"4x"` still steps from 4. Text with no leading number counts as 0.
pub fn next_profit(targets: &[Target], step: Percent, dp: u32) -> Percent {
    let last = targets
        .last()
        .and_then(|t| parse_leading_decimal(&t.profit_percent))
        .unwrap_or(Decimal::ZERO);
    round_half_up(last.saturating_add(step), dp)
}

/// Clamp the allocation total back to `cap` after an insertion.
///
/// When the total exceeds `cap`, the largest allocation (first occurrence on
/// ties) is reduced by exactly the excess. Totals at or under `cap` are left
/// alone.
pub fn rebalance_after_insert(targets: &mut [Target], cap: Percent) -> Option<Rebalance> {
    let total = allocation_total(targets);
    if total <= cap {
        return None;
    }

    let mut max_index = 0;
    let mut max_amount = Decimal::ZERO;
    for (index, target) in targets.iter().enumerate() {
        let amount = parse_or_zero(&target.allocation_percent);
        if amount > max_amount {
            max_amount = amount;
            max_index = index;
        }
    }

    let excess = total - cap;
    let reduced = max_amount.saturating_sub(excess);
    let target = targets.get_mut(max_index)?;
    target.allocation_percent = format_decimal(reduced);

    Some(Rebalance {
        index: max_index,
        from: max_amount,
        to: reduced,
    })
}

/// Hand a removed target's allocation to the new first target.
///
/// Returns the first target's new allocation, or `None` when the ladder is
/// now empty.
pub fn absorb_removed(targets: &mut [Target], freed: Percent, dp: u32) -> Option<Percent> {
    let first = targets.first_mut()?;
    let amount = round_half_up(
        parse_or_zero(&first.allocation_percent).saturating_add(freed),
        dp,
    );
    first.allocation_percent = format_decimal(amount);
    Some(amount)
}
