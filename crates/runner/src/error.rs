//! Scenario errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Failed to read scenario file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse scenario: {0}")]
    Parse(String),

    #[error(transparent)]
    Config(#[from] ladder_take_profit::Error),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;
