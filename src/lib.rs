//! Wordle Game
//!
//! A single-player Wordle for the terminal: guess the hidden five-letter word
//! within six attempts, with per-letter feedback after each guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Game, LetterStatus, Word};
//!
//! // Start a round with a secret word
//! let mut game = Game::new(Word::new("crane").unwrap());
//!
//! // Evaluate a guess
//! let feedback = game.evaluate("trace").unwrap();
//! assert_eq!(feedback[1].status(), LetterStatus::Correct); // R
//! assert!(!game.is_over());
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
