//! Guess-the-number game.
//!
//! A secret between 1 and 100 is drawn once per game. Each input line is
//! parsed as a guess and answered with "too low", "too high" or a win;
//! lines that are not numbers are skipped.
//!
//! ```
//! use std::io::Cursor;
//! use guess_number::{Game, Options, SecretNumber};
//!
//! let mut game = Game::new(SecretNumber::new(42).unwrap());
//! let mut out = Vec::new();
//! let outcome = game
//!     .play(Cursor::new("7\nabc\n99\n42\n"), &mut out, Options::default())
//!     .unwrap();
//! assert_eq!(outcome.guesses, 3);
//! ```

pub mod config;
pub mod error;
pub mod game;
pub mod guess;
pub mod secret;

pub use config::Config;
pub use error::GameError;
pub use game::{Game, Options, Outcome, State, Step};
pub use guess::{ComparisonResult, ParseGuessError, parse_guess};
pub use secret::SecretNumber;
