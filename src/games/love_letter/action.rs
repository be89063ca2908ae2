//! Turn actions: one variant per card type.
//!
//! `Action` only guarantees structural shape: a Guard always carries a
//! guess, a Handmaid never carries a target. Whether the action is allowed
//! in the current round is the legality checker's job.
//!
//! On the wire an action is the flat `ActionRecord`
//! `{cardPlayed, actorIndex, targetIndex?, guessedCard?}`.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::error::ActionError;
use crate::core::player::PlayerId;

/// A complete turn move.
///
/// Target-requiring cards hold `Option<PlayerId>`: `None` is only legal
/// when no opponent can be targeted.
///
/// ```
/// use love_letter_arena::cards::Card;
/// use love_letter_arena::core::PlayerId;
/// use love_letter_arena::games::love_letter::Action;
///
/// let guess = Action::guard(PlayerId::new(0), Some(PlayerId::new(1)), Card::Priest);
/// assert_eq!(guess.card(), Card::Guard);
/// assert_eq!(guess.target(), Some(PlayerId::new(1)));
/// assert_eq!(guess, Action::guard(PlayerId::new(0), Some(PlayerId::new(1)), Card::Priest));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ActionRecord", into = "ActionRecord")]
pub enum Action {
    Guard { actor: PlayerId, target: Option<PlayerId>, guess: Card },
    Priest { actor: PlayerId, target: Option<PlayerId> },
    Baron { actor: PlayerId, target: Option<PlayerId> },
    Handmaid { actor: PlayerId },
    Prince { actor: PlayerId, target: Option<PlayerId> },
    King { actor: PlayerId, target: Option<PlayerId> },
    Countess { actor: PlayerId },
    Princess { actor: PlayerId },
}

impl Action {
    #[must_use]
    pub const fn guard(actor: PlayerId, target: Option<PlayerId>, guess: Card) -> Self {
        Action::Guard { actor, target, guess }
    }

    #[must_use]
    pub const fn priest(actor: PlayerId, target: Option<PlayerId>) -> Self {
        Action::Priest { actor, target }
    }

    #[must_use]
    pub const fn baron(actor: PlayerId, target: Option<PlayerId>) -> Self {
        Action::Baron { actor, target }
    }

    #[must_use]
    pub const fn handmaid(actor: PlayerId) -> Self {
        Action::Handmaid { actor }
    }

    #[must_use]
    pub const fn prince(actor: PlayerId, target: Option<PlayerId>) -> Self {
        Action::Prince { actor, target }
    }

    #[must_use]
    pub const fn king(actor: PlayerId, target: Option<PlayerId>) -> Self {
        Action::King { actor, target }
    }

    #[must_use]
    pub const fn countess(actor: PlayerId) -> Self {
        Action::Countess { actor }
    }

    #[must_use]
    pub const fn princess(actor: PlayerId) -> Self {
        Action::Princess { actor }
    }

    /// Build an action from loose parts, checking only the shape.
    pub fn from_parts(
        card: Card,
        actor: PlayerId,
        target: Option<PlayerId>,
        guess: Option<Card>,
    ) -> Result<Self, ActionError> {
        if !card.requires_target() && target.is_some() {
            return Err(ActionError::UnexpectedTarget(card));
        }
        if card != Card::Guard && guess.is_some() {
            return Err(ActionError::UnexpectedGuess(card));
        }

        Ok(match card {
            Card::Guard => {
                let guess = guess.ok_or(ActionError::MissingGuess(card))?;
                Action::guard(actor, target, guess)
            }
            Card::Priest => Action::priest(actor, target),
            Card::Baron => Action::baron(actor, target),
            Card::Handmaid => Action::handmaid(actor),
            Card::Prince => Action::prince(actor, target),
            Card::King => Action::king(actor, target),
            Card::Countess => Action::countess(actor),
            Card::Princess => Action::princess(actor),
        })
    }

    /// The card being played.
    #[must_use]
    pub const fn card(&self) -> Card {
        match self {
            Action::Guard { .. } => Card::Guard,
            Action::Priest { .. } => Card::Priest,
            Action::Baron { .. } => Card::Baron,
            Action::Handmaid { .. } => Card::Handmaid,
            Action::Prince { .. } => Card::Prince,
            Action::King { .. } => Card::King,
            Action::Countess { .. } => Card::Countess,
            Action::Princess { .. } => Card::Princess,
        }
    }

    /// The player making the move.
    #[must_use]
    pub const fn actor(&self) -> PlayerId {
        match *self {
            Action::Guard { actor, .. }
            | Action::Priest { actor, .. }
            | Action::Baron { actor, .. }
            | Action::Handmaid { actor }
            | Action::Prince { actor, .. }
            | Action::King { actor, .. }
            | Action::Countess { actor }
            | Action::Princess { actor } => actor,
        }
    }

    /// The targeted player, if any.
    #[must_use]
    pub const fn target(&self) -> Option<PlayerId> {
        match *self {
            Action::Guard { target, .. }
            | Action::Priest { target, .. }
            | Action::Baron { target, .. }
            | Action::Prince { target, .. }
            | Action::King { target, .. } => target,
            Action::Handmaid { .. } | Action::Countess { .. } | Action::Princess { .. } => None,
        }
    }

    /// The Guard's guess.
    #[must_use]
    pub const fn guess(&self) -> Option<Card> {
        match *self {
            Action::Guard { guess, .. } => Some(guess),
            _ => None,
        }
    }

    /// Flatten into the wire record.
    #[must_use]
    pub fn to_record(&self) -> ActionRecord {
        ActionRecord {
            card_played: self.card(),
            actor_index: self.actor(),
            target_index: self.target(),
            guessed_card: self.guess(),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} plays {}", self.actor(), self.card().name())?;
        if let Some(target) = self.target() {
            write!(f, " on {}", target)?;
        }
        if let Some(guess) = self.guess() {
            write!(f, " guessing {}", guess.name())?;
        }
        Ok(())
    }
}

/// Flat wire form of an `Action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    pub card_played: Card,
    pub actor_index: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_index: Option<PlayerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guessed_card: Option<Card>,
}

impl TryFrom<ActionRecord> for Action {
    type Error = ActionError;

    fn try_from(record: ActionRecord) -> Result<Self, Self::Error> {
        Action::from_parts(
            record.card_played,
            record.actor_index,
            record.target_index,
            record.guessed_card,
        )
    }
}

impl From<Action> for ActionRecord {
    fn from(action: Action) -> Self {
        action.to_record()
    }
}
