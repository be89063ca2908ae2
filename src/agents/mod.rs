//! Agents: the player-side contract and the reference random player.
//!
//! - `Agent`: what the driver calls (`new_round`, `see`, `play_card`)
//! - `RandomAgent`: samples actions until one is legal; used to validate
//!   the protocol and to fill empty seats

pub mod agent;
pub mod random;

pub use agent::Agent;
pub use random::RandomAgent;
