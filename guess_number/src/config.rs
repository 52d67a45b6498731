use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::game::Options;

/// Guess a secret number between 1 and 100.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about)]
pub struct Config {
    /// Seed for the secret number, for replayable games
    #[arg(long, env = "GUESS_NUMBER_SEED")]
    pub seed: Option<u64>,

    /// Print the secret number before the first guess
    #[arg(long)]
    pub show_secret: bool,

    /// Do not repeat each guess back
    #[arg(long)]
    pub no_echo: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Random source for this run. Seeded from the OS unless `--seed` was given.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn options(&self) -> Options {
        Options {
            show_secret: self.show_secret,
            echo_guess: !self.no_echo,
        }
    }

    /// Default filter directive when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
