//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;
pub mod keyboard;

pub use display::{print_guess_row, print_keyboard_line, print_loss_reveal, print_win_banner};
pub use keyboard::KeyboardHints;
