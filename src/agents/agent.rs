//! The capability contract every player implements.

use crate::cards::Card;
use crate::core::error::AgentError;
use crate::games::love_letter::{Action, PlayerView};

/// A Love Letter player.
///
/// Per round an agent goes Idle -> Observing -> Deciding -> Idle:
/// `new_round` once, then `see` after every applied action (its own
/// included) and `play_card` whenever it is on turn.
///
/// Agents are untrusted. Whatever `play_card` returns is re-validated by
/// the driver, and any error, panic, timeout, or illegal action removes
/// the agent from the current round only.
pub trait Agent: Send {
    /// Identity used in the final score map.
    fn name(&self) -> &str;

    /// Reset all private state for a fresh round.
    fn new_round(&mut self, view: &PlayerView) -> Result<(), AgentError>;

    /// Observe an applied action and the table after it.
    fn see(&mut self, action: &Action, view: &PlayerView) -> Result<(), AgentError>;

    /// Choose this turn's action.
    ///
    /// `card` is the card offered for discard: the one just drawn, or the
    /// Countess when it must be played. `view.hand` holds both cards.
    fn play_card(&mut self, card: Card, view: &PlayerView) -> Result<Action, AgentError>;
}
