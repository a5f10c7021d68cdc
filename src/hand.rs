//! Player and dealer hand representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};

/// Highest total a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

/// Returns the best total for `cards`.
///
/// Two running totals are kept: `low`, with every Ace counted as 1, and
/// `high`, with exactly one Ace promoted to 11 (`0` until an Ace is seen).
/// The result is `high` when it is set and does not exceed 21, otherwise
/// `low`. A bust hand still returns its numeric total.
///
/// Only a single Ace is ever considered for promotion, which is exact for any
/// hand where a second promotion would bust anyway. That covers every hand
/// with at most two Aces, but not the full combinatorial best for more.
///
/// # Example
///
/// ```
/// use blackjack_rs::{Card, Rank, Suit};
/// use blackjack_rs::hand::best_score;
///
/// let cards = [
///     Card::new(Suit::Spades, Rank::Ace),
///     Card::new(Suit::Hearts, Rank::Ace),
///     Card::new(Suit::Clubs, Rank::Nine),
/// ];
/// assert_eq!(best_score(&cards), 21);
/// ```
#[must_use]
pub fn best_score(cards: &[Card]) -> u8 {
    let mut low: u8 = 0;
    let mut high: u8 = 0;

    for card in cards {
        let value = card.rank.value();
        if card.rank == Rank::Ace && high == 0 {
            high = low.saturating_add(11);
        } else if high != 0 {
            high = high.saturating_add(value);
        }
        low = low.saturating_add(value);
    }

    if high != 0 && high <= BLACKJACK {
        high
    } else {
        low
    }
}

/// An ordered, append-only sequence of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`, in deal order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Calculates the best total of the hand. See [`best_score`].
    #[must_use]
    pub fn value(&self) -> u8 {
        best_score(&self.cards)
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// The human player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Cards dealt to the player.
    pub hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }
}

/// The automated dealer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dealer {
    /// Cards dealt to the dealer.
    pub hand: Hand,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl Dealer {
    /// Index of the hole card within the dealer's hand.
    pub const HOLE_INDEX: usize = 1;

    /// Creates a dealer with an empty hand and a hidden hole card.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.get(0)
    }

    /// Returns the hole card (second card), hidden or not.
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.hand.get(Self::HOLE_INDEX)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns whether the card at `index` is shown face up.
    #[must_use]
    pub const fn is_face_up(&self, index: usize) -> bool {
        index != Self::HOLE_INDEX || self.hole_revealed
    }
}
