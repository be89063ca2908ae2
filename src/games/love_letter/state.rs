//! Round state: where every one of the 16 cards is, and whose turn it is.
//!
//! A card is always in exactly one place: the deck, a hand, a discard
//! pile, or the removed buffer (one face-down card, plus three face-up
//! cards at a two-player table). `card_count()` is 16 for every reachable
//! state.
//!
//! ## Turn flow
//!
//! 1. `begin_turn`: the active player's protection lapses and they draw
//! 2. `apply_action`: the played card is discarded and its effect resolves
//! 3. The turn passes to the next player still in the round
//!
//! Between turns every live player holds one card. The exception is the
//! target of a Prince played on the empty deck: it discards and draws
//! nothing, so it reaches the showdown empty-handed with rank 0.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::Card;
use crate::core::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::error::RulesError;
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::rules::GameResult;

use super::action::{Action, ActionRecord};
use super::legality::{check_action, countess_forced, Table};

/// Cards held by one player: one between turns, two while deciding.
pub type Hand = SmallVec<[Card; 2]>;

/// Face-up cards removed before a two-player round.
const FACE_UP_REMOVED_TWO_PLAYER: usize = 3;

/// A Priest's private peek at another hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub viewer: PlayerId,
    pub target: PlayerId,
    pub card: Card,
}

/// One entry of the round transcript.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A legal action was applied.
    Played {
        turn: u32,
        action: ActionRecord,
        eliminated: SmallVec<[PlayerId; 2]>,
    },
    /// A player was removed for misbehaving.
    Forfeited { turn: u32, player: PlayerId, reason: String },
}

/// Complete state of one round, hidden information included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    round: u32,
    turn: u32,

    /// Face-down draw pile (top = end of vec).
    deck: Vec<Card>,
    /// Face-down removed card. Never drawn.
    set_aside: Option<Card>,
    /// Face-up removed cards, visible to everyone.
    face_up: Vec<Card>,

    hands: PlayerMap<Hand>,
    discards: PlayerMap<Vec<Card>>,
    eliminated: PlayerMap<bool>,
    protected: PlayerMap<bool>,

    active: PlayerId,
    in_turn: bool,

    /// Last Priest peek; cleared by the next action.
    reveal: Option<Reveal>,

    history: Vector<RoundEvent>,
}

impl RoundState {
    /// Shuffle a full deck and deal a new round.
    ///
    /// `first` takes the first turn.
    pub fn deal(
        player_count: usize,
        round: u32,
        first: PlayerId,
        rng: &mut GameRng,
    ) -> Result<Self, RulesError> {
        check_player_count(player_count)?;

        let mut deck = Card::full_deck();
        rng.shuffle(&mut deck);

        let set_aside = deck.pop();
        let face_up = if player_count == 2 {
            let keep = deck.len() - FACE_UP_REMOVED_TWO_PLAYER;
            deck.split_off(keep)
        } else {
            Vec::new()
        };

        let mut hands: PlayerMap<Hand> = PlayerMap::with_default(player_count);
        for player in PlayerId::all(player_count) {
            if let Some(card) = deck.pop() {
                hands[player].push(card);
            }
        }

        Ok(Self::assemble(round, first, deck, set_aside, face_up, hands))
    }

    /// Build a round from a fixed arrangement, for replays and tests.
    ///
    /// `starting[i]` is seat `i`'s starting card and `deck` is drawn from the
    /// end. The catalogue cards left over go to the removed buffer: the
    /// first face-down, the rest face-up.
    ///
    /// A short `deck` therefore shows far more face-up cards in every
    /// `PlayerView` than a dealt round would. Agents that count cards see a
    /// table no real deal produces.
    pub fn arranged(starting: &[Card], deck: Vec<Card>, first: PlayerId) -> Result<Self, RulesError> {
        check_player_count(starting.len())?;

        let mut leftover = Card::full_deck();
        for card in starting.iter().chain(deck.iter()) {
            let pos = leftover.iter().position(|c| c == card).ok_or_else(|| {
                RulesError::InvalidArrangement(format!("too many copies of {:?}", card))
            })?;
            leftover.remove(pos);
        }

        let set_aside = if leftover.is_empty() { None } else { Some(leftover.remove(0)) };
        let hands = PlayerMap::new(starting.len(), |p| {
            let mut hand = Hand::new();
            hand.push(starting[p.index()]);
            hand
        });

        Ok(Self::assemble(1, first, deck, set_aside, leftover, hands))
    }

    fn assemble(
        round: u32,
        first: PlayerId,
        deck: Vec<Card>,
        set_aside: Option<Card>,
        face_up: Vec<Card>,
        hands: PlayerMap<Hand>,
    ) -> Self {
        let player_count = hands.player_count();
        Self {
            round,
            turn: 0,
            deck,
            set_aside,
            face_up,
            discards: PlayerMap::with_default(player_count),
            eliminated: PlayerMap::with_value(player_count, false),
            protected: PlayerMap::with_value(player_count, false),
            active: if hands.contains(first) { first } else { PlayerId::new(0) },
            hands,
            in_turn: false,
            reveal: None,
            history: Vector::new(),
        }
    }

    // === Turn flow ===

    /// Start the active player's turn: drop their protection and draw.
    ///
    /// Returns the drawn card.
    pub fn begin_turn(&mut self) -> Result<Card, RulesError> {
        if self.in_turn {
            return Err(RulesError::TurnInProgress);
        }
        if self.is_round_over() {
            return Err(RulesError::RoundOver);
        }

        let player = self.active;
        let card = self.deck.pop().ok_or(RulesError::RoundOver)?;
        self.protected[player] = false;
        self.hands[player].push(card);
        self.turn += 1;
        self.in_turn = true;
        Ok(card)
    }

    /// The card the active player is asked about: the Countess when the
    /// forced-discard rule applies, otherwise the card just drawn.
    #[must_use]
    pub fn offered_card(&self, drawn: Card) -> Card {
        if countess_forced(&self.hands[self.active]) {
            Card::Countess
        } else {
            drawn
        }
    }

    /// Validate and apply an action, then pass the turn.
    ///
    /// Returns the players eliminated by the action.
    pub fn apply_action(&mut self, action: &Action) -> Result<SmallVec<[PlayerId; 2]>, RulesError> {
        check_action(&*self, action)?;

        let actor = action.actor();
        let played = action.card();
        if let Some(pos) = self.hands[actor].iter().position(|&c| c == played) {
            self.hands[actor].remove(pos);
        }
        self.discards[actor].push(played);
        self.in_turn = false;
        self.reveal = None;

        let mut eliminated = SmallVec::new();
        match *action {
            Action::Guard { target: Some(target), guess, .. } => {
                if self.hands[target].contains(&guess) {
                    self.knock_out(target);
                    eliminated.push(target);
                }
            }
            Action::Priest { target: Some(target), .. } => {
                if let Some(&card) = self.hands[target].first() {
                    self.reveal = Some(Reveal { viewer: actor, target, card });
                }
            }
            Action::Baron { target: Some(target), .. } => {
                let mine = held_rank(&self.hands[actor]);
                let theirs = held_rank(&self.hands[target]);
                let loser = match mine.cmp(&theirs) {
                    std::cmp::Ordering::Less => Some(actor),
                    std::cmp::Ordering::Greater => Some(target),
                    std::cmp::Ordering::Equal => None,
                };
                if let Some(loser) = loser {
                    self.knock_out(loser);
                    eliminated.push(loser);
                }
            }
            Action::Handmaid { .. } => {
                self.protected[actor] = true;
            }
            Action::Prince { target: Some(target), .. } => {
                let dropped: Hand = std::mem::take(&mut self.hands[target]);
                let lost_princess = dropped.contains(&Card::Princess);
                self.discards[target].extend(dropped);
                if lost_princess {
                    self.knock_out(target);
                    eliminated.push(target);
                } else if let Some(card) = self.deck.pop() {
                    self.hands[target].push(card);
                }
            }
            Action::King { target: Some(target), .. } => {
                let mine = std::mem::take(&mut self.hands[actor]);
                let theirs = std::mem::replace(&mut self.hands[target], mine);
                self.hands[actor] = theirs;
            }
            Action::Princess { .. } => {
                self.knock_out(actor);
                eliminated.push(actor);
            }
            // Countess, or a targeted card with nobody to target
            _ => {}
        }

        debug!(
            round = self.round,
            turn = self.turn,
            actor = %actor,
            card = ?played,
            target = ?action.target(),
            eliminated = ?eliminated,
            "action applied"
        );

        self.history.push_back(RoundEvent::Played {
            turn: self.turn,
            action: action.to_record(),
            eliminated: eliminated.clone(),
        });
        self.advance_from(actor);
        Ok(eliminated)
    }

    /// Remove a player from the round for misbehaving.
    ///
    /// Their cards go face-up to their discard pile. If they were on turn,
    /// the turn passes. Eliminating an eliminated player does nothing.
    pub fn eliminate(&mut self, player: PlayerId, reason: impl Into<String>) {
        if !self.eliminated.contains(player) || self.eliminated[player] {
            return;
        }

        self.knock_out(player);
        if player == self.active {
            self.in_turn = false;
            self.advance_from(player);
        }
        self.history.push_back(RoundEvent::Forfeited {
            turn: self.turn,
            player,
            reason: reason.into(),
        });
    }

    fn knock_out(&mut self, player: PlayerId) {
        let hand = std::mem::take(&mut self.hands[player]);
        self.discards[player].extend(hand);
        self.eliminated[player] = true;
        self.protected[player] = false;
    }

    fn advance_from(&mut self, player: PlayerId) {
        if self.alive_count() <= 1 {
            return;
        }
        let count = self.player_count();
        let mut next = player.next(count);
        while self.eliminated[next] {
            next = next.next(count);
        }
        self.active = next;
    }

    // === Round end ===

    /// The deck is exhausted between turns, or at most one player is left.
    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.alive_count() <= 1 || (self.deck.is_empty() && !self.in_turn)
    }

    /// Last player standing, else highest held rank. Equal ranks share
    /// the win.
    #[must_use]
    pub fn round_winner(&self) -> GameResult {
        let alive = self.alive_players();
        if alive.len() <= 1 {
            return GameResult::from_winners(alive);
        }

        let best = alive
            .iter()
            .map(|&p| held_rank(&self.hands[p]))
            .max()
            .unwrap_or(0);
        GameResult::from_winners(
            alive
                .into_iter()
                .filter(|&p| held_rank(&self.hands[p]) == best)
                .collect(),
        )
    }

    // === Accessors ===

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Turns started so far this round.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Face-up removed cards.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        &self.face_up
    }

    /// Size of the whole removed buffer, face-down card included.
    #[must_use]
    pub fn removed_count(&self) -> usize {
        self.face_up.len() + usize::from(self.set_aside.is_some())
    }

    #[must_use]
    pub fn cards_in_hand(&self, player: PlayerId) -> &[Card] {
        self.hands.get(player).map_or(&[], |h| h.as_slice())
    }

    #[must_use]
    pub fn discards(&self, player: PlayerId) -> &[Card] {
        self.discards.get(player).map_or(&[], |d| d.as_slice())
    }

    #[must_use]
    pub fn reveal(&self) -> Option<Reveal> {
        self.reveal
    }

    #[must_use]
    pub fn history(&self) -> &Vector<RoundEvent> {
        &self.history
    }

    /// Players still in the round, in seat order.
    #[must_use]
    pub fn alive_players(&self) -> Vec<PlayerId> {
        self.eliminated
            .iter()
            .filter(|&(_, &out)| !out)
            .map(|(p, _)| p)
            .collect()
    }

    fn alive_count(&self) -> usize {
        self.eliminated.values().filter(|&&out| !out).count()
    }

    /// Total cards across deck, hands, discards and the removed buffer.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.hands.values().map(|h| h.len()).sum::<usize>()
            + self.discards.values().map(|d| d.len()).sum::<usize>()
            + self.removed_count()
    }
}

impl Table for RoundState {
    fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn turn_in_progress(&self) -> bool {
        self.in_turn
    }

    fn is_eliminated(&self, player: PlayerId) -> bool {
        self.eliminated.get(player).copied().unwrap_or(true)
    }

    fn is_protected(&self, player: PlayerId) -> bool {
        self.protected.get(player).copied().unwrap_or(false)
    }

    fn hand(&self, player: PlayerId) -> Option<&[Card]> {
        self.hands.get(player).map(|h| h.as_slice())
    }
}

fn check_player_count(player_count: usize) -> Result<(), RulesError> {
    if (MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        Ok(())
    } else {
        Err(RulesError::InvalidPlayerCount(player_count))
    }
}

fn held_rank(hand: &[Card]) -> u8 {
    hand.iter().map(|c| c.rank()).max().unwrap_or(0)
}
