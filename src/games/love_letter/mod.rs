//! Love Letter: 16 cards, 2-4 players, one card in hand.
//!
//! On your turn you draw, then play one of your two cards and resolve
//! its effect. A round ends when one player is left or the deck runs out;
//! the round winner gains a token and the first player to the target wins
//! the match.

mod action;
mod legality;
mod match_state;
mod rules;
mod state;
mod view;

pub use action::{Action, ActionRecord};
pub use legality::{check_action, countess_forced, has_valid_target, legal_action, Table};
pub use match_state::MatchState;
pub use rules::LoveLetter;
pub use state::{Hand, Reveal, RoundEvent, RoundState};
pub use view::PlayerView;
