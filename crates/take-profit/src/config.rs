//! Ladder configuration
//!
//! Every constant the ladder engine relies on. Defaults reproduce the
//! order form's behaviour; a scenario file may override them.

use crate::error::{Error, Result};
use ladder_core::Percent;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Maximum number of targets (surfaced to the UI as `target_to`)
    pub max_targets: usize,
    /// Profit of the single target seeded when the ladder is enabled
    pub initial_profit: Percent,
    /// Allocation of the seeded target
    pub initial_allocation: Percent,
    /// Profit added on top of the last target by `add_target`
    pub profit_step: Percent,
    /// Allocation given to a newly added target
    pub default_allocation: Percent,
    /// Smallest accepted profit per target
    pub min_profit: Percent,
    /// Upper bound for the sum of all target profits
    pub max_profit_sum: Percent,
    /// Required sum of all target allocations
    pub allocation_total: Percent,
    /// Fractional digits for user-facing profit, price and allocation text
    pub display_precision: u32,
    /// Fractional digits for the projected profit sum
    pub projection_precision: u32,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_targets: 5,
            initial_profit: dec!(2),
            initial_allocation: dec!(100),
            profit_step: dec!(2),
            default_allocation: dec!(20),
            min_profit: dec!(0.01),
            max_profit_sum: dec!(500),
            allocation_total: dec!(100),
            display_precision: 2,
            projection_precision: 8,
        }
    }
}

impl LadderConfig {
    /// Check the configuration is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.max_targets == 0 {
            return Err(Error::InvalidConfig(
                "max_targets must be at least 1".to_string(),
            ));
        }
        if self.allocation_total <= Decimal::ZERO {
            return Err(Error::InvalidConfig(format!(
                "allocation_total must be positive, got {}",
                self.allocation_total
            )));
        }
        if self.initial_allocation < Decimal::ZERO
            || self.initial_allocation > self.allocation_total
        {
            return Err(Error::InvalidConfig(format!(
                "initial_allocation {} must be within 0..={}",
                self.initial_allocation, self.allocation_total
            )));
        }
        if self.default_allocation < Decimal::ZERO
            || self.default_allocation > self.allocation_total
        {
            return Err(Error::InvalidConfig(format!(
                "default_allocation {} must be within 0..={}",
                self.default_allocation, self.allocation_total
            )));
        }
        if self.min_profit <= Decimal::ZERO {
            return Err(Error::InvalidConfig(format!(
                "min_profit must be positive, got {}",
                self.min_profit
            )));
        }
        if self.initial_profit < self.min_profit {
            return Err(Error::InvalidConfig(format!(
                "initial_profit {} is below min_profit {}",
                self.initial_profit, self.min_profit
            )));
        }
        if self.profit_step <= Decimal::ZERO {
            return Err(Error::InvalidConfig(format!(
                "profit_step must be positive, got {}",
                self.profit_step
            )));
        }
        if self.max_profit_sum < self.initial_profit {
            return Err(Error::InvalidConfig(format!(
                "max_profit_sum {} is below initial_profit {}",
                self.max_profit_sum, self.initial_profit
            )));
        }
        // Decimal supports at most 28 fractional digits
        if self.display_precision > 28 || self.projection_precision > 28 {
            return Err(Error::InvalidConfig(
                "precision must not exceed 28 digits".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = LadderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_targets, 5);
        assert_eq!(config.min_profit, dec!(0.01));
    }

    #[test]
    fn test_rejects_zero_targets() {
        let config = LadderConfig {
            max_targets: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_allocation_above_total() {
        let config = LadderConfig {
            default_allocation: dec!(120),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_initial_profit_below_minimum() {
        let config = LadderConfig {
            initial_profit: dec!(0.001),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LadderConfig = serde_json::from_str(r#"{ "max_targets": 3 }"#).unwrap();
        assert_eq!(config.max_targets, 3);
        assert_eq!(config.profit_step, dec!(2));
        assert_eq!(config.projection_precision, 8);
    }
}
