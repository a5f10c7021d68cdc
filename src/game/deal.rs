use alloc::format;

use crate::card::Card;
use crate::error::DealError;
use crate::io::PlayerIo;

use super::{Phase, Round, Seat};

impl Round {
    /// Deals one card from the front of the shoe to `seat` and renders it.
    ///
    /// The dealer's hole card is rendered as `hidden`; its value is stored
    /// in the hand like any other card.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ShoeExhausted`] if the shoe is empty.
    pub fn deal_to<IO: PlayerIo + ?Sized>(
        &mut self,
        seat: Seat,
        io: &mut IO,
    ) -> Result<Card, DealError> {
        let card = self.shoe.draw()?;

        let line = match seat {
            Seat::Player => {
                self.player.hand.add_card(card);
                format!("Player card {}: {}", self.player.hand.len(), card.rank)
            }
            Seat::Dealer => {
                self.dealer.hand.add_card(card);
                let index = self.dealer.hand.len() - 1;
                if self.dealer.is_face_up(index) {
                    format!("Dealer card {}: {}", index + 1, card.rank)
                } else {
                    format!("Dealer card {}: hidden", index + 1)
                }
            }
        };

        log::debug!("dealt {:?} to {seat:?}, {} left", card, self.shoe.len());
        io.render(&line);
        Ok(card)
    }

    /// Deals the opening hands: player, dealer, player, dealer.
    pub(super) fn deal_initial<IO: PlayerIo + ?Sized>(
        &mut self,
        io: &mut IO,
    ) -> Result<Phase, DealError> {
        io.render("Welcome to simple Blackjack! Dealing cards...");

        for seat in [Seat::Player, Seat::Dealer, Seat::Player, Seat::Dealer] {
            self.deal_to(seat, io)?;
        }

        Ok(Phase::PlayerTurn)
    }
}
