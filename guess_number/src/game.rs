use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::error::GameError;
use crate::guess::{ComparisonResult, ParseGuessError, parse_guess};
use crate::secret::SecretNumber;

/// Where the game loop currently is.
///
/// Between calls to [`Game::advance`] a game is always either waiting for
/// input or won; `Parsing` and `Comparing` are only held while a line is
/// being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingInput,
    Parsing,
    Comparing,
    Won,
}

/// What happened to one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The line was not a number and was thrown away.
    Discarded(ParseGuessError),
    /// The line was a guess and got compared to the secret.
    Compared {
        guess: u32,
        result: ComparisonResult,
    },
}

/// Presentation switches for [`Game::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Print the secret before the first prompt.
    pub show_secret: bool,
    /// Repeat each accepted guess back to the player.
    pub echo_guess: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_secret: false,
            echo_guess: true,
        }
    }
}

/// Counters reported once the secret is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Lines that parsed as a number, the winning one included.
    pub guesses: u32,
    /// Lines that were thrown away.
    pub discarded: u32,
}

pub const WELCOME: &str = "Guess the number!";
pub const PROMPT: &str = "Please input your guess.";

/// One game: a fixed secret plus the loop state around it.
#[derive(Debug)]
pub struct Game {
    secret: SecretNumber,
    state: State,
    guesses: u32,
    discarded: u32,
}

impl Game {
    pub fn new(secret: SecretNumber) -> Game {
        Game {
            secret,
            state: State::AwaitingInput,
            guesses: 0,
            discarded: 0,
        }
    }

    /// Starts a game with a secret drawn from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Game {
        Game::new(SecretNumber::draw(rng))
    }

    pub fn secret(&self) -> SecretNumber {
        self.secret
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state == State::Won
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            guesses: self.guesses,
            discarded: self.discarded,
        }
    }

    /// Feeds one line of input through the state machine.
    ///
    /// Returns to `AwaitingInput` unless the line matched the secret, in
    /// which case the game is `Won` for good.
    ///
    /// # Errors
    ///
    /// [`GameError::AlreadyWon`] if called after the game was won.
    pub fn advance(&mut self, line: &str) -> Result<Step, GameError> {
        if self.is_won() {
            return Err(GameError::AlreadyWon);
        }

        self.state = State::Parsing;
        let guess = match parse_guess(line) {
            Ok(guess) => guess,
            Err(e) => return Ok(self.discard(e)),
        };

        self.state = State::Comparing;
        self.guesses = self.guesses.saturating_add(1);
        let result = ComparisonResult::of(guess, self.secret);
        debug!(guess, ?result, attempt = self.guesses, "compared guess");

        self.state = if result.is_win() {
            State::Won
        } else {
            State::AwaitingInput
        };

        Ok(Step::Compared { guess, result })
    }

    fn discard(&mut self, reason: ParseGuessError) -> Step {
        debug!(%reason, "discarding input");
        self.discarded = self.discarded.saturating_add(1);
        self.state = State::AwaitingInput;
        Step::Discarded(reason)
    }

    /// Runs the game until the secret is guessed.
    ///
    /// Reads one line per prompt from `input` and writes the transcript to
    /// `output`. Lines that are not numbers are skipped without feedback.
    ///
    /// # Errors
    ///
    /// [`GameError::InputExhausted`] if `input` ends first, [`GameError::Io`]
    /// if reading or writing fails, [`GameError::AlreadyWon`] if the game is
    /// already over.
    pub fn play<R, W>(
        &mut self,
        mut input: R,
        mut output: W,
        options: Options,
    ) -> Result<Outcome, GameError>
    where
        R: BufRead,
        W: Write,
    {
        if self.is_won() {
            return Err(GameError::AlreadyWon);
        }

        debug!(?options, "starting game");
        writeln!(output, "{WELCOME}")?;
        if options.show_secret {
            writeln!(output, "The secret number is: {}", self.secret.value())?;
        }

        while !self.is_won() {
            writeln!(output, "{PROMPT}")?;
            output.flush()?;

            let mut buf = Vec::new();
            if input.read_until(b'\n', &mut buf)? == 0 {
                warn!(guesses = self.guesses, "input closed before a win");
                return Err(GameError::InputExhausted);
            }
            let Ok(line) = String::from_utf8(buf) else {
                self.discard(ParseGuessError::NotUtf8);
                continue;
            };

            if let Step::Compared { guess, result } = self.advance(&line)? {
                if options.echo_guess {
                    writeln!(output, "You guessed: {guess}")?;
                }
                writeln!(output, "{}", result.feedback())?;
            }
        }

        let outcome = self.outcome();
        let noun = if outcome.guesses == 1 { "guess" } else { "guesses" };
        writeln!(output, "Solved in {} {noun}.", outcome.guesses)?;
        output.flush()?;
        info!(
            guesses = outcome.guesses,
            discarded = outcome.discarded,
            "secret found"
        );

        Ok(outcome)
    }
}
