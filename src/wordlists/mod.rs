//! Word lists and secret selection
//!
//! Provides the embedded answer list compiled into the binary, a loader for
//! custom lists, and random secret selection for the front-ends. The game
//! engine itself never touches any of this.

mod embedded;
pub mod loader;

use crate::core::Word;
use rand::seq::IndexedRandom;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

/// Pick a uniformly random secret from a word list
///
/// Returns `None` if the list is empty.
#[must_use]
pub fn choose_secret(words: &[Word]) -> Option<Word> {
    words.choose(&mut rand::rng()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        // All answers should be 5 letters, lowercase
        for &word in ANSWERS {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_contain_no_duplicates() {
        let unique: std::collections::HashSet<_> = ANSWERS.iter().collect();
        assert_eq!(unique.len(), ANSWERS.len());
    }

    #[test]
    fn choose_secret_comes_from_list() {
        let words = loader::words_from_slice(&["crane", "slate", "apple"]);
        let secret = choose_secret(&words).unwrap();
        assert!(words.contains(&secret));
    }

    #[test]
    fn choose_secret_empty_list() {
        assert!(choose_secret(&[]).is_none());
    }
}
