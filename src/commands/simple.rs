//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI

use crate::core::{Game, GameError, MAX_GUESSES, Word};
use crate::output::{
    KeyboardHints, print_guess_row, print_keyboard_line, print_loss_reveal, print_win_banner,
};
use crate::wordlists::choose_secret;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// round is requested and the word list is empty.
pub fn run_simple(words: &[Word], mut game: Game) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word. After each guess:\n");
    println!("  - Green  = right letter, right position");
    println!("  - Yellow = right letter, wrong position");
    println!("  - Gray   = letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a fresh word\n");

    let mut hints = KeyboardHints::new();

    loop {
        let turn = game.guesses_made() + 1;
        let prompt = format!("Guess {turn}/{MAX_GUESSES}");
        let input = get_user_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                game = new_round(words)?;
                hints = KeyboardHints::new();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "" => continue,
            guess => match game.evaluate(guess) {
                Ok(feedback) => {
                    hints.observe(&feedback);
                    print_guess_row(game.guesses_made(), &feedback);
                    print_keyboard_line(&hints);
                    println!();
                }
                Err(err @ GameError::InvalidGuess(_)) => {
                    println!("❌ {err}\n");
                    continue;
                }
                Err(GameError::GameOver) => {
                    // Round already settled; fall through to the replay prompt
                }
            },
        }

        if game.is_over() {
            if game.is_win() {
                print_win_banner(&game);
            } else {
                print_loss_reveal(&game);
            }
            println!();

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    game = new_round(words)?;
                    hints = KeyboardHints::new();
                    println!("\n🔄 New game started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn new_round(words: &[Word]) -> Result<Game, String> {
    choose_secret(words)
        .map(Game::new)
        .ok_or_else(|| "No words available for a new round".to_string())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
