use std::io;

use crate::secret::{MAX, MIN};

/// Errors that stop a game.
///
/// Bad guesses are not in here: they are recovered inside the loop and
/// reported as [`ParseGuessError`](crate::guess::ParseGuessError).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("input ended before the secret number was guessed")]
    InputExhausted,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("secret number {0} is outside {min}..={max}", min = MIN, max = MAX)]
    SecretOutOfRange(u32),
    #[error("the game is already won")]
    AlreadyWon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(
            GameError::InputExhausted.to_string(),
            "input ended before the secret number was guessed"
        );
        assert_eq!(
            GameError::SecretOutOfRange(0).to_string(),
            "secret number 0 is outside 1..=100"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: GameError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, GameError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
