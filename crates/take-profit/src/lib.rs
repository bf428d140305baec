//! Take-Profit Ladder
//!
//! Manages the exit ladder attached to a pending order: up to five targets,
//! each a profit percentage (or the equivalent target price) plus the share
//! of the position to close there.
//!
//! - **Recalculation**: keeps profit and price consistent with the order's
//!   reference price and side
//! - **Editing**: target insertion/removal with allocation rebalancing,
//!   per-field commits of raw user text
//! - **Validation**: ordered rule checks producing one ladder message and
//!   per-row error flags
//! - **Projection**: expected absolute profit across all targets
//!
//! ## Architecture
//!
//! ```text
//!  Order form ──► OrderContext (price, side, amount)
//!                      │
//!                      │ on_context_changed
//!  ┌───────────────────▼──────────────────────────────┐
//!  │                TakeProfitLadder                   │
//!  │                                                   │
//!  │  edits ──► Editor ──► Recalc ──► targets[0..5]    │
//!  │                                      │            │
//!  │             validate() ◄─────────────┤            │
//!  │  message + row flags ◄── Validator   │            │
//!  │                                      ▼            │
//!  │                           Projected profit        │
//!  └───────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ladder_core::{OrderContext, Side};
//! use ladder_take_profit::OrderSession;
//! use rust_decimal_macros::dec;
//!
//! let mut session = OrderSession::new(OrderContext::new(Side::Buy, dec!(100), dec!(10))).unwrap();
//! session.set_take_profit_enabled(true);
//! session.add_target();
//!
//! assert!(session.validate());
//! assert_eq!(session.projected_profit(), dec!(24));
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod ladder;
pub mod projection;
pub mod recalc;
pub mod session;
pub mod target;
pub mod validator;

// Re-export main types
pub use config::LadderConfig;
pub use editor::Rebalance;
pub use error::{Error, Result};
pub use ladder::{LadderSnapshot, TakeProfitLadder};
pub use projection::projected_profit;
pub use recalc::{price_from_profit, profit_from_price, recalculate_prices};
pub use session::OrderSession;
pub use target::{Alignment, Column, Target, TargetField, columns};
pub use validator::{LadderValidator, Violation};
