//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::RoundError;
use crate::hand::{Dealer, Player};
use crate::io::PlayerIo;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use actions::{Decision, prompt_decision};
pub use state::{Phase, Seat};

/// A single round of blackjack between one player and the dealer.
///
/// The round exclusively owns the shoe and both hands. It starts in
/// [`Phase::Dealing`] and is driven one phase at a time by [`step`](Self::step),
/// or straight through to the outcome by [`play`](Self::play). Each phase
/// handler mutates the round in place and returns the phase that follows it.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    pub shoe: Shoe,
    /// The player.
    pub player: Player,
    /// The dealer.
    pub dealer: Dealer,
    /// Current phase.
    phase: Phase,
    /// Set once resolution has rendered its outcome.
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a round with a freshly shuffled shoe from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_rs::{DECK_SIZE, GameOptions, Phase, Round};
    ///
    /// let round = Round::new(GameOptions::default(), 42);
    /// assert_eq!(round.phase(), Phase::Dealing);
    /// assert_eq!(round.cards_remaining(), 3 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_shoe(Shoe::new(options.decks, &mut rng))
    }

    /// Creates a round that deals from the given shoe.
    #[must_use]
    pub const fn with_shoe(shoe: Shoe) -> Self {
        Self {
            shoe,
            player: Player::new(),
            dealer: Dealer::new(),
            phase: Phase::Dealing,
            result: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the result once the round has been resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns whether the outcome has been declared.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Runs the handler of the current phase and moves to the phase it returns.
    ///
    /// Resolution is terminal: running it records the result and leaves the
    /// round in [`Phase::Resolution`].
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::Finished`] if the round is already resolved,
    /// [`RoundError::Deal`] if the shoe runs out, or
    /// [`RoundError::InputClosed`] if the player input closes mid-turn.
    pub fn step<IO: PlayerIo + ?Sized>(&mut self, io: &mut IO) -> Result<Phase, RoundError> {
        if self.is_finished() {
            return Err(RoundError::Finished);
        }

        let current = self.phase;
        let next = match current {
            Phase::Dealing => self.deal_initial(io)?,
            Phase::PlayerTurn => self.player_turn(io)?,
            Phase::DealerTurn => self.dealer_turn(io),
            Phase::Resolution => {
                self.result = Some(self.resolve(io));
                Phase::Resolution
            }
        };

        if next != current {
            log::debug!("phase {current} -> {next}");
        }
        self.phase = next;
        Ok(next)
    }

    /// Plays the round through to its outcome.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by [`step`](Self::step).
    pub fn play<IO: PlayerIo + ?Sized>(&mut self, io: &mut IO) -> Result<RoundResult, RoundError> {
        loop {
            self.step(io)?;
            if let Some(result) = self.result {
                return Ok(result);
            }
        }
    }
}
