//! Scenario replay
//!
//! Applies a scenario's actions to an [`OrderSession`] one at a time and
//! records what each did. Actions that cannot apply (bad row index, full
//! ladder, unparseable text) are recorded as not applied; they never abort
//! the replay.

use crate::error::Result;
use crate::scenario::{Action, Scenario};
use ladder_core::OrderContext;
use ladder_take_profit::{Column, OrderSession, Target};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of one replayed action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: usize,
    pub action: Action,
    pub applied: bool,
}

/// Final state of a replayed session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub context: OrderContext,
    pub columns: Vec<Column>,
    pub enabled: bool,
    pub targets: Vec<Target>,
    pub error_message: String,
    pub projected_profit: Decimal,
    /// Verdict of the last `validate` action, if any ran
    pub last_validation: Option<bool>,
    pub steps: Vec<StepRecord>,
}

pub struct ScenarioRunner {
    session: OrderSession,
    last_validation: Option<bool>,
    steps: Vec<StepRecord>,
}

impl ScenarioRunner {
    pub fn new(scenario: &Scenario) -> Result<Self> {
        let session = OrderSession::with_config(scenario.context, scenario.config.clone())?;
        Ok(Self {
            session,
            last_validation: None,
            steps: Vec::new(),
        })
    }

    /// Replay every action of a scenario and report the final state
    pub fn run(scenario: &Scenario) -> Result<SessionReport> {
        let mut runner = Self::new(scenario)?;
        for action in &scenario.actions {
            runner.apply(action.clone())?;
        }
        info!(
            "Replayed {} actions, {} applied",
            runner.steps.len(),
            runner.steps.iter().filter(|s| s.applied).count()
        );
        Ok(runner.report())
    }

    pub fn session(&self) -> &OrderSession {
        &self.session
    }

    /// Apply one action.
    ///
    /// Only context values rejected by the session (negative price, amount
    /// or total) are returned as errors.
    pub fn apply(&mut self, action: Action) -> Result<bool> {
        let session = &mut self.session;
        let applied = match &action {
            Action::SetPrice { price } => {
                session.set_price(*price)?;
                true
            }
            Action::SetSide { side } => {
                session.set_side(*side);
                true
            }
            Action::SetAmount { amount } => {
                session.set_amount(*amount)?;
                true
            }
            Action::SetTotal { total } => {
                session.set_total(*total)?;
                true
            }
            Action::Enable => {
                session.set_take_profit_enabled(true);
                true
            }
            Action::Disable => {
                session.set_take_profit_enabled(false);
                true
            }
            Action::AddTarget => session.add_target().is_some(),
            Action::RemoveTarget { index } => session.remove_target(*index).is_some(),
            Action::EditProfit { index, value } => session.edit_profit(*index, value.as_str()),
            Action::EditPrice { index, value } => session.edit_price(*index, value.as_str()),
            Action::EditAllocation { index, value } => {
                session.edit_allocation(*index, value.as_str())
            }
            Action::Validate => {
                let valid = session.validate();
                self.last_validation = Some(valid);
                true
            }
            Action::ClearError { index } => {
                session.clear_item_error(*index);
                true
            }
        };

        let step = self.steps.len();
        if applied {
            debug!("Step {}: {:?}", step, action);
        } else {
            warn!("Step {}: {:?} had no effect", step, action);
        }
        self.steps.push(StepRecord {
            step,
            action,
            applied,
        });
        Ok(applied)
    }

    pub fn report(&self) -> SessionReport {
        let snapshot = self.session.snapshot();
        SessionReport {
            context: *self.session.context(),
            columns: self.session.columns().to_vec(),
            enabled: snapshot.enabled,
            targets: snapshot.targets,
            error_message: snapshot.error_message,
            projected_profit: self.session.projected_profit(),
            last_validation: self.last_validation,
            steps: self.steps.clone(),
        }
    }
}
