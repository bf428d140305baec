//! Take-Profit Ladder
//!
//! The ladder store plus every operation the order form drives:
//! enable/disable, target insertion and removal, per-field commits,
//! validation and projected profit.
//!
//! The ladder never owns the [`OrderContext`]. Operations that depend on the
//! reference price or side take it as an argument, and whoever owns the
//! context calls [`TakeProfitLadder::on_context_changed`] after a price or
//! side change.

use crate::config::LadderConfig;
use crate::editor::{self, Rebalance};
use crate::error::Result;
use crate::projection;
use crate::recalc::{self, price_from_profit, profit_from_price};
use crate::target::{self, Column, Target};
use crate::validator::{LadderValidator, Violation};
use ladder_core::{OrderContext, format_decimal, parse_decimal, parse_or_zero, round_half_up};
use log::{debug, info};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the ladder's observable state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderSnapshot {
    pub enabled: bool,
    pub targets: Vec<Target>,
    pub error_message: String,
}

#[derive(Debug, Clone)]
pub struct TakeProfitLadder {
    config: LadderConfig,
    enabled: bool,
    targets: Vec<Target>,
    error_message: String,
}

impl Default for TakeProfitLadder {
    fn default() -> Self {
        Self::new()
    }
}

impl TakeProfitLadder {
    /// Create an empty, disabled ladder with default configuration
    pub fn new() -> Self {
        Self {
            config: LadderConfig::default(),
            enabled: false,
            targets: Vec::new(),
            error_message: String::new(),
        }
    }

    /// Create an empty, disabled ladder with a validated configuration
    pub fn with_config(config: LadderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn target(&self, index: usize) -> Option<&Target> {
        self.targets.get(index)
    }

    /// Ladder-level validation message, empty when no violation is active
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Any row flagged or a ladder message showing
    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty() || self.targets.iter().any(|t| t.has_error)
    }

    /// Current number of targets
    pub fn target_from(&self) -> usize {
        self.targets.len()
    }

    /// Maximum number of targets
    pub fn target_to(&self) -> usize {
        self.config.max_targets
    }

    pub fn can_add_target(&self) -> bool {
        self.enabled && self.targets.len() < self.config.max_targets
    }

    /// Table column metadata for the current side
    pub fn columns(&self, ctx: &OrderContext) -> [Column; 3] {
        target::columns(ctx.side)
    }

    pub fn snapshot(&self) -> LadderSnapshot {
        LadderSnapshot {
            enabled: self.enabled,
            targets: self.targets.clone(),
            error_message: self.error_message.clone(),
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Toggle the ladder.
    ///
    /// Enabling seeds a single target at the initial profit with the full
    /// allocation. Disabling drops every target and the error message.
    /// Setting the current value again does nothing.
    pub fn set_enabled(&mut self, enabled: bool, ctx: &OrderContext) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.error_message.clear();

        if !enabled {
            self.targets.clear();
            info!("Take-profit ladder disabled");
            return;
        }

        let profit = round_half_up(self.config.initial_profit, self.config.display_precision);
        let price = price_from_profit(profit, ctx, self.config.display_precision)
            .unwrap_or(Decimal::ZERO);
        self.targets = vec![Target::new(profit, price, self.config.initial_allocation)];
        info!(
            "Take-profit ladder enabled: seeded {}% at {} ({})",
            profit, price, ctx.side
        );
    }

    /// Context hook: re-derive every target price from its profit.
    ///
    /// Must be called once after the reference price or side changes; the
    /// whole ladder is updated before this returns.
    pub fn on_context_changed(&mut self, ctx: &OrderContext) -> usize {
        recalc::recalculate_prices(&mut self.targets, ctx, self.config.display_precision)
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    /// Append a target one profit step above the last.
    ///
    /// If the allocation total then exceeds the required total, the largest
    /// allocation absorbs the excess. Returns the new row's index, or `None`
    /// when the ladder is disabled or full.
    pub fn add_target(&mut self, ctx: &OrderContext) -> Option<usize> {
        if !self.can_add_target() {
            debug!(
                "add_target ignored: enabled={}, targets={}/{}",
                self.enabled,
                self.targets.len(),
                self.config.max_targets
            );
            return None;
        }

        let dp = self.config.display_precision;
        let profit = editor::next_profit(&self.targets, self.config.profit_step, dp);
        let price = price_from_profit(profit, ctx, dp).unwrap_or(Decimal::ZERO);
        self.targets
            .push(Target::new(profit, price, self.config.default_allocation));

        if let Some(Rebalance { index, from, to }) =
            editor::rebalance_after_insert(&mut self.targets, self.config.allocation_total)
        {
            debug!("Rebalanced target {} allocation {} -> {}", index, from, to);
        }

        let index = self.targets.len() - 1;
        debug!("Added target {} at {}% / {}", index, profit, price);
        Some(index)
    }

    /// Remove a target, handing its allocation to the new first target.
    ///
    /// Returns the removed row, or `None` for an out-of-range index.
    pub fn remove_target(&mut self, index: usize) -> Option<Target> {
        if index >= self.targets.len() {
            debug!(
                "remove_target ignored: index {} out of {}",
                index,
                self.targets.len()
            );
            return None;
        }

        let removed = self.targets.remove(index);
        let freed = parse_or_zero(&removed.allocation_percent);
        if let Some(first) =
            editor::absorb_removed(&mut self.targets, freed, self.config.display_precision)
        {
            debug!(
                "Removed target {}, first target allocation now {}",
                index, first
            );
        } else {
            debug!("Removed target {}, ladder is empty", index);
        }
        Some(removed)
    }

    /// Buffer raw profit text for a row. Returns false for a bad index.
    pub fn set_profit_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        self.edit(index, |t| t.profit_percent = text.into())
    }

    /// Buffer raw price text for a row. Returns false for a bad index.
    pub fn set_price_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        self.edit(index, |t| t.target_price = text.into())
    }

    /// Buffer raw allocation text for a row. Returns false for a bad index.
    pub fn set_allocation_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        self.edit(index, |t| t.allocation_percent = text.into())
    }

    fn edit(&mut self, index: usize, apply: impl FnOnce(&mut Target)) -> bool {
        match self.targets.get_mut(index) {
            Some(target) => {
                apply(target);
                true
            }
            None => false,
        }
    }

    /// Commit a profit edit: round it and derive the price.
    ///
    /// Non-numeric text leaves the row untouched. Returns whether the row
    /// was updated.
    pub fn on_profit_field_committed(&mut self, index: usize, ctx: &OrderContext) -> bool {
        let dp = self.config.display_precision;
        let Some(target) = self.targets.get_mut(index) else {
            return false;
        };
        let Some(profit) = parse_decimal(&target.profit_percent) else {
            debug!(
                "Profit commit skipped for target {}: {:?}",
                index, target.profit_percent
            );
            return false;
        };

        let profit = round_half_up(profit, dp);
        let Some(price) = price_from_profit(profit, ctx, dp) else {
            return false;
        };
        target.profit_percent = format_decimal(profit);
        target.target_price = format_decimal(price);
        true
    }

    /// Commit a price edit: round it and derive the profit.
    ///
    /// Non-numeric text leaves the row untouched. Returns whether the row
    /// was updated.
    pub fn on_price_field_committed(&mut self, index: usize, ctx: &OrderContext) -> bool {
        let dp = self.config.display_precision;
        let Some(target) = self.targets.get_mut(index) else {
            return false;
        };
        let Some(price) = parse_decimal(&target.target_price) else {
            debug!(
                "Price commit skipped for target {}: {:?}",
                index, target.target_price
            );
            return false;
        };

        let price = round_half_up(price, dp);
        let Some(profit) = profit_from_price(price, ctx, dp) else {
            return false;
        };
        target.target_price = format_decimal(price);
        target.profit_percent = format_decimal(profit);
        true
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Check every rule, updating the message and row flags.
    ///
    /// Flags and message are reset first, so repeated calls without edits
    /// give identical results. A disabled ladder always passes.
    pub fn validate(&mut self) -> bool {
        self.error_message.clear();
        for target in &mut self.targets {
            target.has_error = false;
        }

        if !self.enabled {
            return true;
        }

        match LadderValidator::check(&self.targets, &self.config) {
            None => true,
            Some(violation) => {
                self.apply_violation(&violation);
                false
            }
        }
    }

    /// The rule currently failing, without touching flags
    pub fn violation(&self) -> Option<Violation> {
        if !self.enabled {
            return None;
        }
        LadderValidator::check(&self.targets, &self.config)
    }

    fn apply_violation(&mut self, violation: &Violation) {
        match violation.target_index() {
            Some(index) => {
                if let Some(target) = self.targets.get_mut(index) {
                    target.has_error = true;
                }
            }
            None => {
                for target in &mut self.targets {
                    target.has_error = true;
                }
            }
        }
        self.error_message = violation.message();
        info!("[LADDER INVALID] {:?}: {}", violation, self.error_message);
    }

    /// Clear one row's flag.
    ///
    /// The ladder message goes away only once no other row is flagged.
    pub fn clear_item_error(&mut self, index: usize) {
        let Some(target) = self.targets.get_mut(index) else {
            return;
        };
        if !target.has_error {
            return;
        }
        target.has_error = false;

        let others_flagged = self
            .targets
            .iter()
            .enumerate()
            .any(|(i, t)| i != index && t.has_error);
        if !others_flagged {
            self.error_message.clear();
        }
    }

    // ------------------------------------------------------------------
    // Aggregation
    // ------------------------------------------------------------------

    /// Expected absolute profit across all targets
    pub fn projected_profit(&self, ctx: &OrderContext) -> Decimal {
        projection::projected_profit(&self.targets, ctx, self.config.projection_precision)
    }
}
