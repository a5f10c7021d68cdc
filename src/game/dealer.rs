use alloc::format;

use crate::io::PlayerIo;
use crate::result::{Outcome, RoundResult};

use super::{Phase, Round};

impl Round {
    /// Dealer reveals the hole card. The dealer never draws.
    pub(super) fn dealer_turn<IO: PlayerIo + ?Sized>(&mut self, io: &mut IO) -> Phase {
        io.render("Dealer's turn");
        self.dealer.reveal_hole();

        if let Some(card) = self.dealer.hole_card() {
            io.render(&format!("Dealer's second card: {}", card.rank));
        }

        Phase::Resolution
    }

    /// Scores both hands and renders the single outcome line.
    pub(super) fn resolve<IO: PlayerIo + ?Sized>(&self, io: &mut IO) -> RoundResult {
        let player_value = self.player.hand.value();
        let dealer_value = self.dealer.hand.value();
        let outcome = Outcome::classify(player_value, dealer_value);

        log::debug!("resolved: player {player_value}, dealer {dealer_value}, {outcome:?}");
        io.render(outcome.message());

        RoundResult {
            outcome,
            player_value,
            dealer_value,
        }
    }
}
