//! Match configuration.
//!
//! `MatchConfig` is what the lobby hands the driver together with the
//! roster: the seed, the decision deadline, and the token target.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 2;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 4;

/// Tokens needed to win a match at the given table size.
///
/// Returns `None` for unsupported player counts.
#[must_use]
pub fn target_tokens_for(player_count: usize) -> Option<u32> {
    match player_count {
        2 => Some(7),
        3 => Some(5),
        4 => Some(4),
        _ => None,
    }
}

/// Match driver configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Master seed. Deck shuffles fork from it, one fork per round.
    pub seed: u64,

    /// Wall-clock budget for a single `play_card` call.
    /// Overrunning it eliminates the player for the round.
    pub decision_timeout: Duration,

    /// Hard cap on rounds per match (guarantees termination when every
    /// round ends without a winner).
    pub max_rounds: u32,

    /// Token target override. `None` uses `target_tokens_for`.
    pub target_tokens: Option<u32>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            decision_timeout: Duration::from_secs(1),
            max_rounds: 100,
            target_tokens: None,
        }
    }
}

impl MatchConfig {
    /// Create a config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a config with custom decision timeout.
    pub fn with_decision_timeout(mut self, timeout: Duration) -> Self {
        self.decision_timeout = timeout;
        self
    }

    /// Create a config with custom round cap.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Create a config with a fixed token target.
    ///
    /// Not validated here: a target of 0 makes `run_match` fail with
    /// `RulesError::InvalidTargetTokens`.
    pub fn with_target_tokens(mut self, tokens: u32) -> Self {
        self.target_tokens = Some(tokens);
        self
    }

    /// Resolve the token target for a table of `player_count`.
    #[must_use]
    pub fn target_for(&self, player_count: usize) -> Option<u32> {
        match self.target_tokens {
            Some(tokens) => Some(tokens),
            None => target_tokens_for(player_count),
        }
    }
}
