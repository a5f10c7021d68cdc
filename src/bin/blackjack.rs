//! Terminal blackjack: one round against the dealer.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_rs::{ConsoleIo, GameOptions, Round};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "blackjack",
    about = "Play one round of blackjack against the dealer"
)]
struct Cli {
    /// Number of decks shuffled into the shoe
    #[arg(long, env = "BLACKJACK_DECKS", default_value_t = GameOptions::DEFAULT_DECKS)]
    decks: u8,

    /// Shuffle seed; derived from the clock when omitted
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("starting round: {} deck(s), seed {seed}", cli.decks);

    let options = GameOptions::default().with_decks(cli.decks);
    let mut round = Round::new(options, seed);

    let result = round.play(&mut ConsoleIo::stdio());
    match result {
        Ok(result) => {
            log::info!(
                "round over: player {}, dealer {}",
                result.player_value,
                result.dealer_value
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Round ended abnormally: {err}");
            ExitCode::FAILURE
        }
    }
}
