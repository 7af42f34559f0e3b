//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, LetterStatus};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn paint_letter(entry: LetterFeedback) -> ColoredString {
    let tile = format!(" {} ", entry.letter());
    match entry.status() {
        LetterStatus::Correct => tile.black().on_green(),
        LetterStatus::Present => tile.black().on_yellow(),
        LetterStatus::Absent => tile.white().on_bright_black(),
    }
}

/// Render a full guess as a row of colored tiles
#[must_use]
pub fn paint_row(feedback: &Feedback) -> String {
    let mut row = String::new();
    for &entry in feedback {
        row.push_str(&paint_letter(entry).to_string());
    }
    row
}

/// Multi-line emoji grid of a whole round, for sharing
#[must_use]
pub fn emoji_grid(attempts: &[Feedback]) -> String {
    attempts
        .iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, Word};

    fn feedback(secret: &str, guess: &str) -> Feedback {
        Game::new(Word::new(secret).unwrap())
            .evaluate(guess)
            .unwrap()
    }

    #[test]
    fn painted_row_contains_every_letter() {
        let row = paint_row(&feedback("crane", "slate"));
        for letter in ["S", "L", "A", "T", "E"] {
            assert!(row.contains(letter), "missing {letter} in {row}");
        }
    }

    #[test]
    fn emoji_grid_one_line_per_attempt() {
        let mut game = Game::new(Word::new("crane").unwrap());
        game.evaluate("slate").unwrap();
        game.evaluate("crane").unwrap();

        let grid = emoji_grid(game.attempts());
        let lines: Vec<&str> = grid.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "🟩🟩🟩🟩🟩");
    }
}
