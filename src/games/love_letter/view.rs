//! What one player is allowed to know about a round.
//!
//! Agents never touch `RoundState`. They get a `PlayerView`: their own
//! hand, the public table, and whatever their own Priest revealed. The
//! view implements `Table`, so `legal_action(&view, &action)` gives the
//! same answer the driver will.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::player::{PlayerId, PlayerMap};

use super::legality::Table;
use super::state::{Hand, RoundState};

/// Owned, redacted snapshot of a round for one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// The seat this view belongs to.
    pub me: PlayerId,
    pub round: u32,
    pub turn: u32,
    pub active_player: PlayerId,
    pub turn_in_progress: bool,

    /// Own cards only.
    pub hand: Hand,

    pub eliminated: PlayerMap<bool>,
    pub protected: PlayerMap<bool>,
    pub discards: PlayerMap<Vec<Card>>,

    pub deck_size: usize,
    pub face_up: Vec<Card>,

    /// Card seen with our own Priest on the last action.
    pub peeked: Option<(PlayerId, Card)>,
}

impl PlayerView {
    /// Project `round` for seat `me`.
    #[must_use]
    pub fn new(round: &RoundState, me: PlayerId) -> Self {
        let count = round.player_count();
        Self {
            me,
            round: round.round(),
            turn: round.turn(),
            active_player: round.active_player(),
            turn_in_progress: round.turn_in_progress(),
            hand: round.cards_in_hand(me).iter().copied().collect(),
            eliminated: PlayerMap::new(count, |p| round.is_eliminated(p)),
            protected: PlayerMap::new(count, |p| round.is_protected(p)),
            discards: PlayerMap::new(count, |p| round.discards(p).to_vec()),
            deck_size: round.deck_size(),
            face_up: round.face_up().to_vec(),
            peeked: round
                .reveal()
                .filter(|r| r.viewer == me)
                .map(|r| (r.target, r.card)),
        }
    }

    /// The card kept in hand if `played` leaves it.
    #[must_use]
    pub fn other_card(&self, played: Card) -> Option<Card> {
        let pos = self.hand.iter().position(|&c| c == played)?;
        self.hand
            .iter()
            .enumerate()
            .find(|&(i, _)| i != pos)
            .map(|(_, &c)| c)
    }

    /// Opponents still in the round.
    pub fn opponents(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.eliminated
            .iter()
            .filter(move |&(p, &out)| p != self.me && !out)
            .map(|(p, _)| p)
    }
}

impl Table for PlayerView {
    fn player_count(&self) -> usize {
        self.eliminated.player_count()
    }

    fn active_player(&self) -> PlayerId {
        self.active_player
    }

    fn turn_in_progress(&self) -> bool {
        self.turn_in_progress
    }

    fn is_eliminated(&self, player: PlayerId) -> bool {
        self.eliminated.get(player).copied().unwrap_or(true)
    }

    fn is_protected(&self, player: PlayerId) -> bool {
        self.protected.get(player).copied().unwrap_or(false)
    }

    fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        (player == self.me).then_some(self.hand.as_slice())
    }
}
