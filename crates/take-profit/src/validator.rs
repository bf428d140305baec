//! Ladder Validation
//!
//! Rule checks run over the target list before the order can be submitted.
//! The validator is stateless: it reports the first violated rule and the
//! ladder applies it to its message and row flags.
//!
//! Rule order (first failure wins):
//! 1. Sum of profits above the configured maximum (all rows)
//! 2. Per row, in index order: profit below minimum, profit not above the
//!    previous row, price not positive (offending row only)
//! 3. Allocation total above or below the required total (all rows)
//!
//! Non-numeric text counts as zero for every rule.

use crate::config::LadderConfig;
use crate::editor::allocation_total;
use crate::target::Target;
use ladder_core::{Percent, format_decimal, parse_or_zero, to_fixed};
use rust_decimal::Decimal;
use std::fmt;

/// A violated ladder rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    ProfitSumExceeded {
        limit: Percent,
    },
    ProfitBelowMinimum {
        index: usize,
        minimum: Percent,
    },
    ProfitNotIncreasing {
        index: usize,
    },
    PriceNotPositive {
        index: usize,
    },
    AllocationExceeded {
        total: Percent,
        expected: Percent,
        precision: u32,
    },
    AllocationShort {
        total: Percent,
        expected: Percent,
        precision: u32,
    },
}

impl Violation {
    /// Row the violation is attributed to, or `None` for ladder-wide rules
    pub fn target_index(&self) -> Option<usize> {
        match self {
            Violation::ProfitBelowMinimum { index, .. }
            | Violation::ProfitNotIncreasing { index }
            | Violation::PriceNotPositive { index } => Some(*index),
            Violation::ProfitSumExceeded { .. }
            | Violation::AllocationExceeded { .. }
            | Violation::AllocationShort { .. } => None,
        }
    }

    /// Does this violation flag every row?
    pub fn is_ladder_wide(&self) -> bool {
        self.target_index().is_none()
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::ProfitSumExceeded { limit } => {
                write!(f, "Maximum profit sum is {}%", format_decimal(*limit))
            }
            Violation::ProfitBelowMinimum { minimum, .. } => {
                write!(f, "Minimum value is {}%", format_decimal(*minimum))
            }
            Violation::ProfitNotIncreasing { .. } => {
                f.write_str("Each target's profit should be greater than the previous one")
            }
            Violation::PriceNotPositive { .. } => f.write_str("Price must be greater than 0"),
            Violation::AllocationExceeded {
                total,
                expected,
                precision,
            } => write!(
                f,
                "{} out of {}% selected. Please decrease by {}",
                format_decimal(*total),
                format_decimal(*expected),
                to_fixed(total.saturating_sub(*expected), *precision)
            ),
            Violation::AllocationShort {
                total,
                expected,
                precision,
            } => write!(
                f,
                "{} out of {}% selected. Please increase by {}",
                format_decimal(*total),
                format_decimal(*expected),
                to_fixed(expected.saturating_sub(*total), *precision)
            ),
        }
    }
}

/// Validates an enabled ladder's targets
pub struct LadderValidator;

impl LadderValidator {
    /// Run every rule in order and return the first violation, if any
    pub fn check(targets: &[Target], config: &LadderConfig) -> Option<Violation> {
        // 1. Ladder-wide profit budget
        let profit_sum = targets.iter().fold(Decimal::ZERO, |sum, t| {
            sum.saturating_add(parse_or_zero(&t.profit_percent))
        });
        if profit_sum > config.max_profit_sum {
            return Some(Violation::ProfitSumExceeded {
                limit: config.max_profit_sum,
            });
        }

        // 2. Per-row checks
        let mut previous: Option<Decimal> = None;
        for (index, target) in targets.iter().enumerate() {
            let profit = parse_or_zero(&target.profit_percent);
            let price = parse_or_zero(&target.target_price);

            if profit < config.min_profit {
                return Some(Violation::ProfitBelowMinimum {
                    index,
                    minimum: config.min_profit,
                });
            }

            if let Some(prev) = previous {
                if profit <= prev {
                    return Some(Violation::ProfitNotIncreasing { index });
                }
            }

            if price <= Decimal::ZERO {
                return Some(Violation::PriceNotPositive { index });
            }

            previous = Some(profit);
        }

        // 3. Allocation total (an empty ladder has nothing to allocate)
        if targets.is_empty() {
            return None;
        }
        let total = allocation_total(targets);
        if total > config.allocation_total {
            return Some(Violation::AllocationExceeded {
                total,
                expected: config.allocation_total,
                precision: config.display_precision,
            });
        }
        if total < config.allocation_total {
            return Some(Violation::AllocationShort {
                total,
                expected: config.allocation_total,
                precision: config.display_precision,
            });
        }

        None
    }
}
