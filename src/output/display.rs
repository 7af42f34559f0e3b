//! Display functions for the plain CLI mode

use super::formatters::{emoji_grid, paint_row};
use super::keyboard::KeyboardHints;
use crate::core::{Feedback, Game, LetterStatus, MAX_GUESSES};
use colored::Colorize;

/// Print one evaluated guess as a colored tile row
pub fn print_guess_row(turn: usize, feedback: &Feedback) {
    println!(
        "  {} {}  {}",
        format!("{turn}.").bright_black(),
        paint_row(feedback),
        feedback.to_emoji()
    );
}

/// Print the A-Z letter bank colored by best-known status
pub fn print_keyboard_line(hints: &KeyboardHints) {
    let mut line = String::new();
    for letter in 'A'..='Z' {
        let painted = match hints.status_of(letter) {
            Some(LetterStatus::Correct) => letter.to_string().black().on_green(),
            Some(LetterStatus::Present) => letter.to_string().black().on_yellow(),
            Some(LetterStatus::Absent) => letter.to_string().bright_black(),
            None => letter.to_string().white(),
        };
        line.push_str(&painted.to_string());
        line.push(' ');
    }
    println!("     {line}");
}

/// Print the celebration banner for a won round
pub fn print_win_banner(game: &Game) {
    let turn = game.guesses_made();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "{}",
        "    🎉 ✨  Y O U   W O N !  ✨ 🎉    ".bright_green().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());

    let performance = match turn {
        1 => "🏆 Hole in one!",
        2 => "⭐ Magnificent!",
        3 => "💫 Splendid!",
        4 => "✨ Great job!",
        5 => "👍 Nice work!",
        _ => "😅 Phew! Got it on the last try!",
    };

    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "  Guessed in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "try" } else { "tries" }
    );

    println!("\n{}", emoji_grid(game.attempts()));
    println!("\n{}", "═".repeat(60).bright_cyan());
}

/// Print the reveal for a lost round
pub fn print_loss_reveal(game: &Game) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  {} The secret word was: {}",
        format!("❌ Out of guesses ({MAX_GUESSES}).").red().bold(),
        game.secret().text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).bright_cyan());
}
