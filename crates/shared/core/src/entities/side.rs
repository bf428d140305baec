use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side (Buy or Sell)
///
/// Decides the sign convention when converting between a profit percentage
/// and an absolute target price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Buy,
    Sell,
}

impl Side {
    /// Lowercase verb used in user-facing labels ("buy" / "sell")
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
