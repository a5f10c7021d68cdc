//! Game configuration options.

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_rs::GameOptions;
///
/// let options = GameOptions::default().with_decks(6);
/// assert_eq!(options.decks, 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of decks shuffled into the shoe.
    pub decks: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: Self::DEFAULT_DECKS,
        }
    }
}

impl GameOptions {
    /// Number of decks used when none is configured.
    pub const DEFAULT_DECKS: u8 = 3;

    /// Sets the number of decks.
    ///
    /// A deck count of zero builds an empty shoe; the round then fails on its
    /// first deal with [`DealError::ShoeExhausted`](crate::DealError::ShoeExhausted).
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_rs::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }
}
