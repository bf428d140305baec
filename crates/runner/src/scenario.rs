//! Scenario files
//!
//! A scenario is the order form's starting state plus the user actions to
//! replay against it, in order:
//!
//! ```json
//! {
//!   "config": { "max_targets": 5 },
//!   "context": { "price": "100", "amount": "10", "side": "Buy" },
//!   "actions": [
//!     { "action": "enable" },
//!     { "action": "add_target" },
//!     { "action": "edit_profit", "index": 1, "value": "6" },
//!     { "action": "validate" }
//!   ]
//! }
//! ```

use crate::error::{Result, ScenarioError};
use ladder_core::{OrderContext, Side};
use ladder_take_profit::LadderConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Ladder configuration (defaults when omitted)
    #[serde(default)]
    pub config: LadderConfig,

    /// Initial order form state
    #[serde(default)]
    pub context: OrderContext,

    /// Actions to replay
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// One user action on the order form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SetPrice { price: Decimal },
    SetSide { side: Side },
    SetAmount { amount: Decimal },
    SetTotal { total: Decimal },
    Enable,
    Disable,
    AddTarget,
    RemoveTarget { index: usize },
    EditProfit { index: usize, value: String },
    EditPrice { index: usize, value: String },
    EditAllocation { index: usize, value: String },
    Validate,
    ClearError { index: usize },
}

impl Scenario {
    /// Load a scenario from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ScenarioError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse a scenario from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Self =
            serde_json::from_str(json).map_err(|e| ScenarioError::Parse(e.to_string()))?;
        scenario.config.validate()?;
        Ok(scenario)
    }
}
