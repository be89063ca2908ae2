//! # love-letter-arena
//!
//! A rule engine and match driver for the card game Love Letter, built to
//! pit untrusted agents against each other.
//!
//! ## Design Principles
//!
//! 1. **One Checker**: The same legality function validates agent output
//!    in the driver and guides agents through their `PlayerView`.
//!
//! 2. **N-Player First**: Every API takes `player_count` as context.
//!    Tables of two to four players share one code path.
//!
//! 3. **Deterministic Replays**: All randomness flows from a seeded
//!    `GameRng`; the same seed and agents replay the same match.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `cards`: The eight Love Letter cards
//! - `rules`: `MatchRules` trait shared by game variants
//! - `games`: Love Letter and paper/scissors/rock
//! - `agents`: The `Agent` contract and `RandomAgent`
//! - `driver`: Round and match loops

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod agents;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState,
    MatchConfig,
    ActionError, AgentError, IllegalAction, RulesError,
};

pub use crate::cards::Card;

pub use crate::rules::{score_map, GameResult, MatchRules};

pub use crate::games::love_letter::{
    Action, ActionRecord, LoveLetter, MatchState, PlayerView, RoundState, Table,
    check_action, legal_action,
};

pub use crate::agents::{Agent, RandomAgent};

pub use crate::driver::{fill_roster, run_match, run_round, MatchOutcome};
