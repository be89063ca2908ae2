//! Legality checker.
//!
//! Pure functions over anything implementing `Table`. Both the full
//! `RoundState` and an agent's `PlayerView` implement it, so an agent can
//! run the very checker the driver will run, on what it is allowed to see.
//!
//! Checks run in order:
//! 1. The actor is on turn and holds the played card
//! 2. The target is seated, alive, unprotected and not the actor
//!    (Prince may pick itself). With no such opponent, a target-requiring
//!    card may be played without a target.
//! 3. Guard never guesses Guard
//! 4. Countess held with King or Prince must be played

use crate::cards::Card;
use crate::core::error::IllegalAction;
use crate::core::player::PlayerId;

use super::action::Action;

/// Read-only table facts the checker needs.
pub trait Table {
    /// Seats at the table, eliminated ones included.
    fn player_count(&self) -> usize;

    /// Whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// Whether the active player has drawn and not yet played.
    fn turn_in_progress(&self) -> bool;

    fn is_eliminated(&self, player: PlayerId) -> bool;

    fn is_protected(&self, player: PlayerId) -> bool;

    /// A player's hand, or `None` when hidden from this table view.
    fn hand(&self, player: PlayerId) -> Option<&[Card]>;
}

/// Whether `actor` has at least one opponent it may target.
pub fn has_valid_target<T: Table + ?Sized>(table: &T, actor: PlayerId) -> bool {
    PlayerId::all(table.player_count())
        .any(|p| p != actor && !table.is_eliminated(p) && !table.is_protected(p))
}

/// Whether a hand forces the Countess to be played.
#[must_use]
pub fn countess_forced(hand: &[Card]) -> bool {
    hand.contains(&Card::Countess)
        && (hand.contains(&Card::King) || hand.contains(&Card::Prince))
}

/// Check an action, returning the first rule it breaks.
pub fn check_action<T: Table + ?Sized>(table: &T, action: &Action) -> Result<(), IllegalAction> {
    let actor = action.actor();
    let card = action.card();

    if !table.turn_in_progress() {
        return Err(IllegalAction::TurnNotStarted);
    }
    if actor != table.active_player() {
        return Err(IllegalAction::NotActorsTurn(actor));
    }
    if table.is_eliminated(actor) {
        return Err(IllegalAction::ActorEliminated(actor));
    }
    let hand = table.hand(actor).unwrap_or(&[]);
    if !hand.contains(&card) {
        return Err(IllegalAction::CardNotHeld { player: actor, card });
    }

    if card.requires_target() {
        check_target(table, actor, card, action.target())?;
    }

    if action.guess() == Some(Card::Guard) {
        return Err(IllegalAction::GuardGuessedGuard);
    }

    if card != Card::Countess && countess_forced(hand) {
        return Err(IllegalAction::CountessForced);
    }

    Ok(())
}

fn check_target<T: Table + ?Sized>(
    table: &T,
    actor: PlayerId,
    card: Card,
    target: Option<PlayerId>,
) -> Result<(), IllegalAction> {
    let Some(target) = target else {
        return if has_valid_target(table, actor) {
            Err(IllegalAction::TargetRequired(card))
        } else {
            Ok(())
        };
    };

    if target.index() >= table.player_count() {
        return Err(IllegalAction::TargetOutOfRange(target));
    }
    if target == actor {
        return if card.allows_self_target() {
            Ok(())
        } else {
            Err(IllegalAction::SelfTarget(card))
        };
    }
    if table.is_eliminated(target) {
        return Err(IllegalAction::TargetEliminated(target));
    }
    if table.is_protected(target) {
        return Err(IllegalAction::TargetProtected(target));
    }
    Ok(())
}

/// Whether the action is legal right now.
pub fn legal_action<T: Table + ?Sized>(table: &T, action: &Action) -> bool {
    check_action(table, action).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal table for exercising the checker in isolation.
    struct Fixture {
        hand: Vec<Card>,
        eliminated: Vec<bool>,
        protected: Vec<bool>,
    }

    impl Fixture {
        fn new(players: usize, hand: &[Card]) -> Self {
            Self {
                hand: hand.to_vec(),
                eliminated: vec![false; players],
                protected: vec![false; players],
            }
        }
    }

    impl Table for Fixture {
        fn player_count(&self) -> usize {
            self.eliminated.len()
        }
        fn active_player(&self) -> PlayerId {
            PlayerId::new(0)
        }
        fn turn_in_progress(&self) -> bool {
            true
        }
        fn is_eliminated(&self, player: PlayerId) -> bool {
            self.eliminated[player.index()]
        }
        fn is_protected(&self, player: PlayerId) -> bool {
            self.protected[player.index()]
        }
        fn hand(&self, player: PlayerId) -> Option<&[Card]> {
            (player == PlayerId::new(0)).then_some(self.hand.as_slice())
        }
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);
    const P2: PlayerId = PlayerId::new(2);

    #[test]
    fn test_card_must_be_held() {
        let table = Fixture::new(2, &[Card::Guard, Card::Priest]);
        assert_eq!(
            check_action(&table, &Action::baron(P0, Some(P1))),
            Err(IllegalAction::CardNotHeld { player: P0, card: Card::Baron })
        );
        assert!(legal_action(&table, &Action::priest(P0, Some(P1))));
    }

    #[test]
    fn test_only_active_player_acts() {
        let table = Fixture::new(2, &[Card::Handmaid, Card::Guard]);
        assert_eq!(
            check_action(&table, &Action::handmaid(P1)),
            Err(IllegalAction::NotActorsTurn(P1))
        );
    }

    #[test]
    fn test_target_rules() {
        let mut table = Fixture::new(3, &[Card::King, Card::Prince]);
        table.eliminated[1] = true;

        assert_eq!(
            check_action(&table, &Action::king(P0, Some(P0))),
            Err(IllegalAction::SelfTarget(Card::King))
        );
        assert_eq!(
            check_action(&table, &Action::king(P0, Some(P1))),
            Err(IllegalAction::TargetEliminated(P1))
        );
        assert_eq!(
            check_action(&table, &Action::king(P0, Some(PlayerId::new(7)))),
            Err(IllegalAction::TargetOutOfRange(PlayerId::new(7)))
        );
        assert_eq!(
            check_action(&table, &Action::king(P0, None)),
            Err(IllegalAction::TargetRequired(Card::King))
        );
        assert!(legal_action(&table, &Action::king(P0, Some(P2))));
        assert!(legal_action(&table, &Action::prince(P0, Some(P0))));
    }

    #[test]
    fn test_no_target_allowed_when_everyone_else_is_protected() {
        let mut table = Fixture::new(3, &[Card::Baron, Card::Guard]);
        table.protected[1] = true;
        table.eliminated[2] = true;

        assert!(legal_action(&table, &Action::baron(P0, None)));
        assert_eq!(
            check_action(&table, &Action::baron(P0, Some(P1))),
            Err(IllegalAction::TargetProtected(P1))
        );
    }

    #[test]
    fn test_guard_cannot_guess_guard() {
        let table = Fixture::new(2, &[Card::Guard, Card::Guard]);
        assert_eq!(
            check_action(&table, &Action::guard(P0, Some(P1), Card::Guard)),
            Err(IllegalAction::GuardGuessedGuard)
        );
        assert!(legal_action(&table, &Action::guard(P0, Some(P1), Card::Princess)));
    }

    #[test]
    fn test_countess_forced_with_prince() {
        let table = Fixture::new(2, &[Card::Countess, Card::Prince]);
        assert_eq!(
            check_action(&table, &Action::prince(P0, Some(P1))),
            Err(IllegalAction::CountessForced)
        );
        assert!(legal_action(&table, &Action::countess(P0)));
    }

    #[test]
    fn test_countess_not_forced_otherwise() {
        let table = Fixture::new(2, &[Card::Countess, Card::Baron]);
        assert!(legal_action(&table, &Action::baron(P0, Some(P1))));
        assert!(!countess_forced(&[Card::Countess, Card::Princess]));
        assert!(countess_forced(&[Card::King, Card::Countess]));
    }
}
