//! Token tally across the rounds of one match.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::{MatchConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::core::error::RulesError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::rules::GameResult;

/// Cumulative match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    target: u32,
    tokens: PlayerMap<u32>,
    rounds_played: u32,
    last_first: PlayerId,
    last_winners: Vec<PlayerId>,
}

impl MatchState {
    /// Start a match for `player_count` seats playing to `target` tokens.
    /// A target of 0 is rejected.
    pub fn new(player_count: usize, target: u32) -> Result<Self, RulesError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(RulesError::InvalidPlayerCount(player_count));
        }
        if target == 0 {
            return Err(RulesError::InvalidTargetTokens(target));
        }
        Ok(Self {
            target,
            tokens: PlayerMap::with_value(player_count, 0),
            rounds_played: 0,
            last_first: PlayerId::new(0),
            last_winners: Vec::new(),
        })
    }

    /// Start a match using the configured (or standard) token target.
    pub fn from_config(player_count: usize, config: &MatchConfig) -> Result<Self, RulesError> {
        let target = config
            .target_for(player_count)
            .ok_or(RulesError::InvalidPlayerCount(player_count))?;
        Self::new(player_count, target)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.tokens.player_count()
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    #[must_use]
    pub fn tokens(&self) -> &PlayerMap<u32> {
        &self.tokens
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Who opens the next round: a winner of the previous round, else the
    /// seat after the previous opener.
    #[must_use]
    pub fn next_first_player(&self) -> PlayerId {
        if self.rounds_played == 0 {
            return PlayerId::new(0);
        }
        self.last_winners
            .first()
            .copied()
            .unwrap_or_else(|| self.last_first.next(self.player_count()))
    }

    /// Fold a finished round into the tally. Every round winner gains a
    /// token.
    pub fn record_round(&mut self, first: PlayerId, result: &GameResult) {
        self.rounds_played += 1;
        self.last_first = first;
        self.last_winners = result.winners();
        for &winner in &self.last_winners {
            if let Some(tokens) = self.tokens.get_mut(winner) {
                *tokens += 1;
            }
        }
        info!(
            round = self.rounds_played,
            winners = ?self.last_winners,
            tokens = ?self.tokens.values().collect::<Vec<_>>(),
            "round recorded"
        );
    }

    /// Some player has reached the token target.
    #[must_use]
    pub fn is_match_over(&self) -> bool {
        self.tokens.values().any(|&t| t >= self.target)
    }

    /// Players at the target, or, for a match cut short, the token
    /// leaders. Nobody wins a match where no token was ever awarded.
    #[must_use]
    pub fn match_winner(&self) -> GameResult {
        let best = self.tokens.values().copied().max().unwrap_or(0);
        if best == 0 {
            return GameResult::Draw;
        }
        let threshold = if self.is_match_over() { self.target } else { best };
        GameResult::from_winners(
            self.tokens
                .iter()
                .filter(|&(_, &t)| t >= threshold)
                .map(|(p, _)| p)
                .collect(),
        )
    }
}
