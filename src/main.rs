//! Wordle Game - CLI
//!
//! Single-player Wordle for the terminal, with a TUI and a plain CLI mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    core::{Game, Word},
    wordlists::{ANSWERS, choose_secret, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Fix the secret word instead of picking one at random
    #[arg(short, long, global = true)]
    secret: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load the answer word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(ANSWERS)),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from '{path}'"))?;
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    if words.is_empty() {
        anyhow::bail!("Word list '{}' contains no playable words", cli.wordlist);
    }

    let secret = match cli.secret {
        Some(fixed) => Word::new(fixed)?,
        None => choose_secret(&words).context("Word list is empty")?,
    };
    let game = Game::new(secret);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&words, game),
        Commands::Simple => run_simple(&words, game).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(words: &[Word], game: Game) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words, game);
    run_tui(app)
}
