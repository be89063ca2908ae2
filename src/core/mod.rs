//! Core building blocks shared by every game variant: seats, RNG,
//! configuration, and errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{target_tokens_for, MatchConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ActionError, AgentError, IllegalAction, RulesError};
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
