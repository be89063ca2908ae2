//! Paper/scissors/rock rounds and match tally.

use serde::{Deserialize, Serialize};

use crate::core::error::{IllegalAction, RulesError};
use crate::core::player::{PlayerId, PlayerMap};
use crate::rules::{GameResult, MatchRules};

/// One hand shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Throw {
    Paper,
    Scissors,
    Rock,
}

impl Throw {
    pub const ALL: [Throw; 3] = [Throw::Paper, Throw::Scissors, Throw::Rock];

    /// Whether `self` beats `other`.
    #[must_use]
    pub const fn beats(self, other: Throw) -> bool {
        matches!(
            (self, other),
            (Throw::Paper, Throw::Rock) | (Throw::Scissors, Throw::Paper) | (Throw::Rock, Throw::Scissors)
        )
    }
}

/// A player's hidden throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsrAction {
    pub player: PlayerId,
    pub throw: Throw,
}

/// One simultaneous round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsrRound {
    throws: PlayerMap<Option<Throw>>,
}

impl PsrRound {
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            throws: PlayerMap::with_value(player_count, None),
        }
    }

    #[must_use]
    pub fn throw_of(&self, player: PlayerId) -> Option<Throw> {
        self.throws.get(player).copied().flatten()
    }
}

/// Token tally for a paper/scissors/rock match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsrMatch {
    pub target: u32,
    pub tokens: PlayerMap<u32>,
}

impl PsrMatch {
    #[must_use]
    pub fn new(player_count: usize, target: u32) -> Self {
        Self {
            target,
            tokens: PlayerMap::with_value(player_count, 0),
        }
    }

    /// Give every round winner a token.
    pub fn record_round(&mut self, result: &GameResult) {
        for winner in result.winners() {
            if let Some(tokens) = self.tokens.get_mut(winner) {
                *tokens += 1;
            }
        }
    }
}

/// Paper/scissors/rock rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct PaperScissorsRock;

impl PaperScissorsRock {
    /// Default tokens needed to win.
    pub const DEFAULT_TARGET: u32 = 3;

    fn check(round: &PsrRound, action: &PsrAction) -> Result<(), IllegalAction> {
        match round.throws.get(action.player) {
            None => Err(IllegalAction::NotActorsTurn(action.player)),
            Some(Some(_)) => Err(IllegalAction::NotActorsTurn(action.player)),
            Some(None) => Ok(()),
        }
    }
}

impl MatchRules for PaperScissorsRock {
    type Round = PsrRound;
    type Match = PsrMatch;
    type Action = PsrAction;

    fn legal_action(&self, round: &PsrRound, action: &PsrAction) -> bool {
        Self::check(round, action).is_ok()
    }

    fn apply_action(&self, round: &mut PsrRound, action: &PsrAction) -> Result<(), RulesError> {
        Self::check(round, action)?;
        round.throws[action.player] = Some(action.throw);
        Ok(())
    }

    fn is_round_over(&self, round: &PsrRound) -> bool {
        round.throws.values().all(Option::is_some)
    }

    /// A throw wins if it beats something on the table and nothing beats it.
    fn round_winner(&self, round: &PsrRound) -> GameResult {
        let thrown: Vec<(PlayerId, Throw)> = round
            .throws
            .iter()
            .filter_map(|(p, t)| t.map(|t| (p, t)))
            .collect();

        GameResult::from_winners(
            thrown
                .iter()
                .filter(|&&(_, mine)| {
                    let beats_some = thrown.iter().any(|&(_, other)| mine.beats(other));
                    let beaten = thrown.iter().any(|&(_, other)| other.beats(mine));
                    beats_some && !beaten
                })
                .map(|&(p, _)| p)
                .collect(),
        )
    }

    fn is_match_over(&self, state: &PsrMatch) -> bool {
        state.tokens.values().any(|&t| t >= state.target)
    }
}
