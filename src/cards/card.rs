//! The closed Love Letter card catalogue.
//!
//! Eight card types, each with a unique rank and a fixed number of copies
//! in the 16-card deck. Cards outside the catalogue cannot be constructed:
//! `Card` is a plain enum, and deserializing an unknown name fails.

use serde::{Deserialize, Serialize};

/// A card type from the Love Letter catalogue.
///
/// Ordering follows rank, so `Card::Princess > Card::Guard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Guard,
    Priest,
    Baron,
    Handmaid,
    Prince,
    King,
    Countess,
    Princess,
}

impl Card {
    /// Every card type, lowest rank first.
    pub const ALL: [Card; 8] = [
        Card::Guard,
        Card::Priest,
        Card::Baron,
        Card::Handmaid,
        Card::Prince,
        Card::King,
        Card::Countess,
        Card::Princess,
    ];

    /// Number of cards in a full deck.
    pub const DECK_SIZE: usize = 16;

    /// Rank used for Baron comparisons and end-of-round tie-breaking.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Card::Guard => 1,
            Card::Priest => 2,
            Card::Baron => 3,
            Card::Handmaid => 4,
            Card::Prince => 5,
            Card::King => 6,
            Card::Countess => 7,
            Card::Princess => 8,
        }
    }

    /// Copies of this card in the deck.
    #[must_use]
    pub const fn quantity(self) -> usize {
        match self {
            Card::Guard => 5,
            Card::Priest | Card::Baron | Card::Handmaid | Card::Prince => 2,
            Card::King | Card::Countess | Card::Princess => 1,
        }
    }

    /// Whether playing this card names another player.
    #[must_use]
    pub const fn requires_target(self) -> bool {
        matches!(
            self,
            Card::Guard | Card::Priest | Card::Baron | Card::Prince | Card::King
        )
    }

    /// Whether the card may name its own player as target.
    #[must_use]
    pub const fn allows_self_target(self) -> bool {
        matches!(self, Card::Prince)
    }

    /// Look up a card by rank (1..=8).
    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Card> {
        Card::ALL.iter().copied().find(|c| c.rank() == rank)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Guard => "Guard",
            Card::Priest => "Priest",
            Card::Baron => "Baron",
            Card::Handmaid => "Handmaid",
            Card::Prince => "Prince",
            Card::King => "King",
            Card::Countess => "Countess",
            Card::Princess => "Princess",
        }
    }

    /// An unshuffled full deck, lowest rank first.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        Card::ALL
            .iter()
            .flat_map(|&card| std::iter::repeat(card).take(card.quantity()))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.rank())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_are_unique_and_sequential() {
        let ranks: Vec<u8> = Card::ALL.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_deck_composition() {
        let deck = Card::full_deck();
        assert_eq!(deck.len(), Card::DECK_SIZE);
        assert_eq!(deck.iter().filter(|&&c| c == Card::Guard).count(), 5);
        assert_eq!(deck.iter().filter(|&&c| c == Card::Prince).count(), 2);
        assert_eq!(deck.iter().filter(|&&c| c == Card::Princess).count(), 1);
    }

    #[test]
    fn test_targeting_cards() {
        let targeted: Vec<Card> = Card::ALL.iter().copied().filter(|c| c.requires_target()).collect();
        assert_eq!(
            targeted,
            vec![Card::Guard, Card::Priest, Card::Baron, Card::Prince, Card::King]
        );
        assert!(Card::Prince.allows_self_target());
        assert!(!Card::King.allows_self_target());
    }

    #[test]
    fn test_from_rank() {
        assert_eq!(Card::from_rank(6), Some(Card::King));
        assert_eq!(Card::from_rank(0), None);
        assert_eq!(Card::from_rank(9), None);
    }

    #[test]
    fn test_unknown_card_does_not_deserialize() {
        assert_eq!(serde_json::from_str::<Card>("\"Baron\"").unwrap(), Card::Baron);
        assert!(serde_json::from_str::<Card>("\"Jester\"").is_err());
    }
}
