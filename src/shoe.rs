//! The shoe: the ordered, not-yet-dealt cards of a round.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DealError;

/// Remaining cards of a round, consumed strictly from the front.
///
/// A shoe is never replenished: once it runs dry every further
/// [`draw`](Self::draw) fails with [`DealError::ShoeExhausted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: VecDeque<Card>,
}

impl Shoe {
    /// Creates and shuffles a shoe with the specified number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_rs::{DECK_SIZE, Shoe};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let shoe = Shoe::new(3, &mut rng);
    /// assert_eq!(shoe.len(), 3 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(num_decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(num_decks as usize * DECK_SIZE);

        for _ in 0..num_decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        log::debug!("built shoe: {num_decks} deck(s), {} cards", cards.len());

        Self {
            cards: cards.into(),
        }
    }

    /// Creates a shoe that deals `cards` in the given order, first card first.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Draws the front card of the shoe.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ShoeExhausted`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, DealError> {
        self.cards.pop_front().ok_or(DealError::ShoeExhausted)
    }

    /// Returns the next card to be dealt without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
