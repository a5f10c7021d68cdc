//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while dealing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// A deal was requested with no cards left in the shoe.
    #[error("deck exhausted")]
    ShoeExhausted,
}

/// Errors that end a round abnormally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A card could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The player's input closed before a decision was made.
    #[error("player input closed before a decision was made")]
    InputClosed,
    /// The round has already been resolved.
    #[error("round is already finished")]
    Finished,
}
