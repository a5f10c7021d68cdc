//! Round result types for resolution.

use core::fmt;

use crate::hand::BLACKJACK;

/// Outcome of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player went over 21; the dealer wins whatever their total.
    PlayerBust,
    /// Player has the higher total.
    PlayerWins,
    /// Both totals are equal.
    Draw,
    /// Dealer has the higher total.
    DealerWins,
}

impl Outcome {
    /// Classifies a round from the best totals of both hands.
    ///
    /// Only the player's bust is special. A dealer total over 21 is compared
    /// as a plain number, so a busted dealer still beats any lower player
    /// total.
    ///
    /// ```
    /// use blackjack_rs::Outcome;
    ///
    /// assert_eq!(Outcome::classify(20, 18), Outcome::PlayerWins);
    /// assert_eq!(Outcome::classify(23, 17), Outcome::PlayerBust);
    /// assert_eq!(Outcome::classify(19, 19), Outcome::Draw);
    /// assert_eq!(Outcome::classify(18, 24), Outcome::DealerWins);
    /// ```
    #[must_use]
    pub const fn classify(player_score: u8, dealer_score: u8) -> Self {
        if player_score > BLACKJACK {
            Self::PlayerBust
        } else if player_score > dealer_score {
            Self::PlayerWins
        } else if player_score == dealer_score {
            Self::Draw
        } else {
            Self::DealerWins
        }
    }

    /// Returns the line announcing this outcome.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBust => "Player bust, dealer wins",
            Self::PlayerWins => "Player wins",
            Self::Draw => "Draw",
            Self::DealerWins => "Dealer wins",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's best total.
    pub player_value: u8,
    /// The dealer's best total.
    pub dealer_value: u8,
}
