//! Match-driver contract shared by every game variant.
//!
//! A game implements `MatchRules` to tell the driver:
//! - Which actions are legal in a round
//! - How an action transforms the round
//! - When a round and a match are over, and who won

use rustc_hash::FxHashMap;

use crate::core::error::RulesError;
use crate::core::player::PlayerId;

/// Result of a completed round or match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Nobody won (e.g. every player was eliminated by faults).
    Draw,
    /// Shared victory.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Build a result from an unordered winner set.
    #[must_use]
    pub fn from_winners(mut winners: Vec<PlayerId>) -> Self {
        winners.sort_unstable();
        winners.dedup();
        match winners.len() {
            0 => GameResult::Draw,
            1 => GameResult::Winner(winners[0]),
            _ => GameResult::Winners(winners),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    /// The winners in seat order.
    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            GameResult::Winner(p) => vec![*p],
            GameResult::Winners(ps) => ps.clone(),
            GameResult::Draw => Vec::new(),
        }
    }
}

/// Rules a match driver needs from a game.
///
/// ## Implementation Notes
///
/// - `legal_action` must be pure: same inputs, same answer, no mutation
/// - `apply_action` must reject anything `legal_action` rejects
/// - `round_winner` is only meaningful once `is_round_over` holds
pub trait MatchRules {
    /// Per-round mutable state.
    type Round;
    /// Cross-round state (scores).
    type Match;
    /// One player's move.
    type Action;

    /// Whether `action` may be applied to `round` right now.
    fn legal_action(&self, round: &Self::Round, action: &Self::Action) -> bool;

    /// Apply a legal action, advancing the round.
    fn apply_action(&self, round: &mut Self::Round, action: &Self::Action) -> Result<(), RulesError>;

    /// Whether the round has ended.
    fn is_round_over(&self, round: &Self::Round) -> bool;

    /// Winners of a finished round.
    fn round_winner(&self, round: &Self::Round) -> GameResult;

    /// Whether the match has ended.
    fn is_match_over(&self, state: &Self::Match) -> bool;
}

/// Final score map handed to the result recorder.
///
/// Winners score `1.0`, everybody else `0.0`. `identities` is indexed by
/// seat.
#[must_use]
pub fn score_map(result: &GameResult, identities: &[String]) -> FxHashMap<String, f64> {
    identities
        .iter()
        .enumerate()
        .map(|(seat, identity)| {
            let score = if result.is_winner(PlayerId::new(seat as u8)) { 1.0 } else { 0.0 };
            (identity.clone(), score)
        })
        .collect()
}
