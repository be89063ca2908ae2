//! Match driver: seats agents, deals rounds, and referees every decision.
//!
//! - `run_round`: one round, calling `new_round`, `play_card` and `see`
//! - `run_match`: rounds until the token target, producing a score map
//! - `fill_roster`: pad a table with random agents
//!
//! The driver never trusts an agent. A panic, an error, a slow answer or
//! an illegal action eliminates that agent from the current round and play
//! continues. Each agent call runs on a worker thread and is abandoned at
//! the deadline, so a hung agent costs its seat, not the match.

mod deadline;
mod round;
mod session;

pub use round::run_round;
pub use session::{fill_roster, run_match, MatchOutcome, FILLER_NAME};
