//! Ladder Runner - Scenario Replay
//!
//! Replays scripted order-form actions against a take-profit session:
//!
//! - **Scenario**: initial order context, ladder configuration and actions,
//!   loaded from JSON
//! - **Replay**: applies each action in order and reports the final ladder,
//!   validation verdict and projected profit

pub mod error;
pub mod replay;
pub mod scenario;

// Re-export main types
pub use error::{Result, ScenarioError};
pub use replay::{ScenarioRunner, SessionReport, StepRecord};
pub use scenario::{Action, Scenario};
