use std::ops::RangeInclusive;

use rand::Rng;

use crate::error::GameError;

/// Smallest value the secret can take.
pub const MIN: u32 = 1;
/// Largest value the secret can take.
pub const MAX: u32 = 100;

pub fn range() -> RangeInclusive<u32> {
    MIN..=MAX
}

/// The number the player has to find.
///
/// Fixed for the whole game: there is no way to change it once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretNumber(u32);

impl SecretNumber {
    /// Draws a secret uniformly from `MIN..=MAX`.
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> SecretNumber {
        SecretNumber(rng.gen_range(range()))
    }

    /// Uses a known value, e.g. for a replayable game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SecretOutOfRange`] if `value` is not in `MIN..=MAX`.
    pub fn new(value: u32) -> Result<SecretNumber, GameError> {
        if range().contains(&value) {
            Ok(SecretNumber(value))
        } else {
            Err(GameError::SecretOutOfRange(value))
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }
}
