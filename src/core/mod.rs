//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero UI knowledge.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod game;
mod word;

pub use feedback::{Feedback, LetterFeedback, LetterStatus};
pub use game::{Game, GameError, GameState, MAX_GUESSES};
pub use word::{WORD_LENGTH, Word, WordError};
