//! Round phase types.

use core::fmt;

/// Phase of a round. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Dealing the initial two cards to each party.
    #[default]
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Revealing the dealer's hole card.
    DealerTurn,
    /// Scoring both hands and declaring the outcome.
    Resolution,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dealing => "dealing",
            Self::PlayerTurn => "player turn",
            Self::DealerTurn => "dealer turn",
            Self::Resolution => "resolution",
        })
    }
}

/// Which party a card is dealt to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// The human player.
    Player,
    /// The automated dealer.
    Dealer,
}
