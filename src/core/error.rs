//! Error taxonomy for actions, rules, and agents.
//!
//! None of these abort a match. The driver turns every `AgentError` into
//! an elimination for the rest of the round; `RulesError` only surfaces
//! when the driver itself misuses the transition functions.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::Card;

/// A flat action record whose shape does not fit its card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("{0:?} requires a guessed card")]
    MissingGuess(Card),

    #[error("{0:?} does not take a guessed card")]
    UnexpectedGuess(Card),

    #[error("{0:?} does not take a target")]
    UnexpectedTarget(Card),
}

/// Why the legality checker rejected a well-formed action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("no turn is in progress")]
    TurnNotStarted,

    #[error("{0} is not the active player")]
    NotActorsTurn(PlayerId),

    #[error("{0} has been eliminated")]
    ActorEliminated(PlayerId),

    #[error("{player} does not hold {card:?}")]
    CardNotHeld { player: PlayerId, card: Card },

    #[error("target {0} is not seated at this table")]
    TargetOutOfRange(PlayerId),

    #[error("target {0} has been eliminated")]
    TargetEliminated(PlayerId),

    #[error("target {0} is protected")]
    TargetProtected(PlayerId),

    #[error("{0:?} cannot target its own player")]
    SelfTarget(Card),

    #[error("{0:?} needs a target while a valid one exists")]
    TargetRequired(Card),

    #[error("Guard cannot guess Guard")]
    GuardGuessedGuard,

    #[error("Countess must be played alongside King or Prince")]
    CountessForced,
}

/// Errors from the round and match transition functions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("illegal action: {0}")]
    Illegal(#[from] IllegalAction),

    #[error("the round is already over")]
    RoundOver,

    #[error("a turn is already in progress")]
    TurnInProgress,

    #[error("unsupported player count: {0}")]
    InvalidPlayerCount(usize),

    #[error("token target must be at least 1, got {0}")]
    InvalidTargetTokens(u32),

    #[error("arranged cards exceed the catalogue: {0}")]
    InvalidArrangement(String),
}

/// Everything an agent can do wrong, handled uniformly by the driver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AgentError {
    #[error("decision timed out")]
    Timeout,

    #[error("agent fault: {0}")]
    Fault(String),

    #[error("malformed action: {0}")]
    Structural(#[from] ActionError),

    #[error("illegal action: {0}")]
    Illegal(#[from] IllegalAction),

    #[error("no legal action found after {0} attempts")]
    RetriesExhausted(u32),
}
