//! Match-driver contract.
//!
//! Each game variant implements `MatchRules`:
//! - Legality of an action against a round
//! - The round transition function
//! - Round and match end detection
//!
//! The trait pins the contract; it does not make the driver generic.
//! `run_round` and `run_match` play Love Letter only, because the draw
//! step, the offered card and the agent interface are specific to it.
//! `PaperScissorsRock` is a second implementation that keeps the contract
//! honest, and is driven through the trait alone in its own tests.

pub mod engine;

pub use engine::{score_map, GameResult, MatchRules};
