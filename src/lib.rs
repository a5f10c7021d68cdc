//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one round against an
//! automated dealer: dealing, the player's hit/stand turn, the dealer's hole
//! card reveal, and resolution. Player interaction goes through the
//! [`PlayerIo`] trait, so the same round runs on a terminal ([`ConsoleIo`])
//! or against scripted input.
//!
//! # Example
//!
//! ```no_run
//! use blackjack_rs::{ConsoleIo, GameOptions, Round};
//!
//! let mut round = Round::new(GameOptions::default(), 42);
//! let result = round.play(&mut ConsoleIo::stdio())?;
//! println!("{}", result.outcome);
//! # Ok::<(), blackjack_rs::RoundError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod io;
pub mod options;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::{DealError, RoundError};
pub use game::{Decision, Phase, Round, Seat, prompt_decision};
pub use hand::{BLACKJACK, Dealer, Hand, Player, best_score};
#[cfg(feature = "std")]
pub use io::ConsoleIo;
pub use io::PlayerIo;
pub use options::GameOptions;
pub use result::{Outcome, RoundResult};
pub use shoe::Shoe;
