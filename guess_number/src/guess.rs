use std::cmp::Ordering;
use std::num::{IntErrorKind, ParseIntError};

use crate::secret::SecretNumber;

/// Why a line of input was not taken as a guess.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseGuessError {
    #[error("empty guess")]
    Empty,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("`{0}` does not fit in a guess")]
    TooLarge(String),
    #[error("input is not valid UTF-8")]
    NotUtf8,
}

/// Parses one raw input line as a guess.
///
/// Surrounding whitespace and the line terminator are ignored. Anything that
/// is not an unsigned 32-bit integer is rejected; values outside the secret
/// range are still valid guesses and simply compare as too low or too high.
pub fn parse_guess(line: &str) -> Result<u32, ParseGuessError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(ParseGuessError::Empty);
    }

    text.parse::<u32>().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => ParseGuessError::TooLarge(text.to_string()),
        _ => ParseGuessError::NotANumber(text.to_string()),
    })
}

/// Outcome of holding a guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonResult {
    Less,
    Greater,
    Equal,
}

impl ComparisonResult {
    pub fn of(guess: u32, secret: SecretNumber) -> ComparisonResult {
        guess.cmp(&secret.value()).into()
    }

    /// Line shown to the player.
    pub fn feedback(self) -> &'static str {
        match self {
            ComparisonResult::Less => "Too low!",
            ComparisonResult::Greater => "Too high!",
            ComparisonResult::Equal => "You win!",
        }
    }

    pub fn is_win(self) -> bool {
        self == ComparisonResult::Equal
    }
}

impl From<Ordering> for ComparisonResult {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => ComparisonResult::Less,
            Ordering::Greater => ComparisonResult::Greater,
            Ordering::Equal => ComparisonResult::Equal,
        }
    }
}
