//! `MatchRules` for Love Letter.

use crate::core::error::RulesError;
use crate::rules::{GameResult, MatchRules};

use super::action::Action;
use super::legality::legal_action;
use super::match_state::MatchState;
use super::state::RoundState;

/// Love Letter rules, as seen by the match driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoveLetter;

impl MatchRules for LoveLetter {
    type Round = RoundState;
    type Match = MatchState;
    type Action = Action;

    fn legal_action(&self, round: &RoundState, action: &Action) -> bool {
        legal_action(round, action)
    }

    fn apply_action(&self, round: &mut RoundState, action: &Action) -> Result<(), RulesError> {
        round.apply_action(action).map(|_| ())
    }

    fn is_round_over(&self, round: &RoundState) -> bool {
        round.is_round_over()
    }

    fn round_winner(&self, round: &RoundState) -> GameResult {
        round.round_winner()
    }

    fn is_match_over(&self, state: &MatchState) -> bool {
        state.is_match_over()
    }
}
