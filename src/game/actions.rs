use crate::error::RoundError;
use crate::io::PlayerIo;

use super::{Phase, Round, Seat};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take one more card.
    Hit,
    /// End the turn without drawing.
    Stand,
}

impl Decision {
    /// Parses a line of player input.
    ///
    /// Surrounding whitespace and case are ignored. Anything other than
    /// `h`, `hit`, `s` or `stand` is rejected.
    ///
    /// ```
    /// use blackjack_rs::Decision;
    ///
    /// assert_eq!(Decision::parse(" H\n"), Some(Decision::Hit));
    /// assert_eq!(Decision::parse("Stand"), Some(Decision::Stand));
    /// assert_eq!(Decision::parse("x"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("h") || input.eq_ignore_ascii_case("hit") {
            Some(Self::Hit)
        } else if input.eq_ignore_ascii_case("s") || input.eq_ignore_ascii_case("stand") {
            Some(Self::Stand)
        } else {
            None
        }
    }
}

/// Prompts until the player enters a valid decision.
///
/// Invalid input is re-prompted without limit.
///
/// # Errors
///
/// Returns [`RoundError::InputClosed`] if the input closes first.
pub fn prompt_decision<IO: PlayerIo + ?Sized>(io: &mut IO) -> Result<Decision, RoundError> {
    loop {
        io.render("Type h for hit, or s for stand, and press enter");
        let line = io.read_line().ok_or(RoundError::InputClosed)?;
        if let Some(decision) = Decision::parse(&line) {
            return Ok(decision);
        }
        log::debug!("rejected player input {:?}", line.trim());
        io.render("Invalid input!");
    }
}

impl Round {
    /// Asks the player for one decision and applies it.
    pub(super) fn player_turn<IO: PlayerIo + ?Sized>(
        &mut self,
        io: &mut IO,
    ) -> Result<Phase, RoundError> {
        io.render("Player's turn");

        match prompt_decision(io)? {
            Decision::Stand => Ok(Phase::DealerTurn),
            Decision::Hit => {
                self.deal_to(Seat::Player, io)?;
                if self.player.hand.is_bust() {
                    Ok(Phase::Resolution)
                } else {
                    Ok(Phase::PlayerTurn)
                }
            }
        }
    }
}
