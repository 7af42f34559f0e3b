//! Game session state and guess evaluation
//!
//! A `Game` owns the secret word and the attempt history, evaluates each
//! submitted guess into per-letter feedback, and tracks the win/loss state
//! across a bounded number of attempts.

use super::feedback::{Feedback, LetterFeedback, LetterStatus};
use super::word::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Maximum number of guesses in one round
pub const MAX_GUESSES: usize = 6;

/// Round progress
///
/// `Won` and `Lost` are terminal; no transitions leave them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Error type for rejected guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess failed word validation (length, alphabet)
    InvalidGuess(WordError),
    /// The round already ended; no further guesses are accepted
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGuess(err) => Some(err),
            Self::GameOver => None,
        }
    }
}

/// A single round: the secret word plus the history of evaluated guesses
///
/// The session is mutated only by [`Game::evaluate`]; every other method is a
/// read-only query. Secret selection is the caller's responsibility.
///
/// # Examples
/// ```
/// use wordle_game::core::{Game, LetterStatus, Word};
///
/// let mut game = Game::new(Word::new("crane").unwrap());
/// let feedback = game.evaluate("trace").unwrap();
///
/// assert_eq!(feedback[0].status(), LetterStatus::Absent); // T
/// assert_eq!(feedback[1].status(), LetterStatus::Correct); // R
/// assert!(!game.is_over());
///
/// game.evaluate("crane").unwrap();
/// assert!(game.is_over());
/// assert!(game.is_win());
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    secret: Word,
    attempts: Vec<Feedback>,
    state: GameState,
}

impl Game {
    /// Start a round with the given secret
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            attempts: Vec::new(),
            state: GameState::InProgress,
        }
    }

    /// Evaluate a guess against the secret
    ///
    /// Implements the exact feedback rules, including proper handling of
    /// duplicate letters:
    ///
    /// 1. First pass: mark exact position matches (`Correct`) and consume
    ///    each matched letter from a working pool of the secret's letters.
    /// 2. Second pass: for the remaining positions, strictly left to right,
    ///    mark `Present` and consume one pool instance if the letter is still
    ///    available, else `Absent`. Greedy consumption means a duplicated
    ///    guess letter can only claim as many `Present` marks as the secret
    ///    has unmatched instances.
    ///
    /// The resulting feedback is appended to the attempt history. An
    /// all-`Correct` guess wins the round; a sixth non-winning guess loses
    /// it.
    ///
    /// # Errors
    /// - [`GameError::GameOver`] if the round already ended. The attempt
    ///   history is left untouched.
    /// - [`GameError::InvalidGuess`] if the guess is not a valid five-letter
    ///   word. No feedback is produced.
    pub fn evaluate(&mut self, guess: &str) -> Result<Feedback, GameError> {
        if self.state != GameState::InProgress {
            return Err(GameError::GameOver);
        }

        let guess = Word::new(guess).map_err(GameError::InvalidGuess)?;
        let feedback = self.score(&guess);

        self.attempts.push(feedback.clone());

        if feedback.is_win() {
            self.state = GameState::Won;
        } else if self.attempts.len() >= MAX_GUESSES {
            self.state = GameState::Lost;
        }

        Ok(feedback)
    }

    /// Two-pass scoring of a validated guess
    fn score(&self, guess: &Word) -> Feedback {
        let mut statuses = [LetterStatus::Absent; WORD_LENGTH];
        let mut available = self.secret.letter_counts();

        // First pass: exact matches consume their secret letter so it cannot
        // be reused for a Present mark elsewhere
        // Allow: Index needed to compare guess[i] with secret[i] and set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.letters()[i] == self.secret.letters()[i] {
                statuses[i] = LetterStatus::Correct;

                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: unresolved positions claim the remaining pool greedily,
        // left to right
        // Allow: Index needed to access guess[i] and check/set statuses[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if statuses[i] != LetterStatus::Correct {
                let letter = guess.letters()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    statuses[i] = LetterStatus::Present;
                    *count -= 1;
                }
            }
        }

        Feedback::new(std::array::from_fn(|i| {
            LetterFeedback::new(guess.letters()[i], statuses[i])
        }))
    }

    /// The secret word, for end-of-round reveal
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Feedback for every evaluated guess, in chronological order
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Feedback] {
        &self.attempts
    }

    /// Current round state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Whether the round ended (won or lost)
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    /// Whether the round ended with a winning guess
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.state == GameState::Won
    }

    /// Number of guesses evaluated so far
    #[inline]
    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.attempts.len()
    }

    /// Number of guesses left in the round
    #[inline]
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES - self.attempts.len()
    }
}
