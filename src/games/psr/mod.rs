//! Paper/scissors/rock.
//!
//! The simplest game that fits the match-driver contract: every player
//! throws once per round, a throw that beats something and is beaten by
//! nothing wins the round.

mod game;

pub use game::{PaperScissorsRock, PsrAction, PsrMatch, PsrRound, Throw};
