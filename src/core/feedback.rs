//! Per-letter guess feedback
//!
//! A `Feedback` holds one `LetterFeedback` per guess position. Letters are
//! carried uppercase, ready for display.

use super::word::WORD_LENGTH;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Present,
    /// Letter not matched
    Absent,
}

/// One guessed letter together with its classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterFeedback {
    letter: char,
    status: LetterStatus,
}

impl LetterFeedback {
    pub(crate) fn new(letter: u8, status: LetterStatus) -> Self {
        Self {
            letter: letter.to_ascii_uppercase() as char,
            status,
        }
    }

    /// The guessed letter, uppercase
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    /// The letter's classification
    #[inline]
    #[must_use]
    pub const fn status(self) -> LetterStatus {
        self.status
    }
}

/// Feedback for one full guess: exactly one entry per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    pub(crate) const fn new(entries: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(entries)
    }

    /// Check whether every position is `Correct` (a winning guess)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0
            .iter()
            .all(|entry| entry.status() == LetterStatus::Correct)
    }

    /// All entries in guess order
    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Iterate over entries in guess order
    pub fn iter(&self) -> std::slice::Iter<'_, LetterFeedback> {
        self.0.iter()
    }

    /// The guessed word, uppercase
    #[must_use]
    pub fn word(&self) -> String {
        self.0.iter().map(|entry| entry.letter()).collect()
    }

    /// Convert feedback to an emoji tile string
    ///
    /// Returns a string like "🟩🟨⬜🟩🟨".
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Game, Word};
    ///
    /// let mut game = Game::new(Word::new("crane").unwrap());
    /// let feedback = game.evaluate("crane").unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|entry| match entry.status() {
                LetterStatus::Correct => '🟩',
                LetterStatus::Present => '🟨',
                LetterStatus::Absent => '⬜',
            })
            .collect()
    }
}

impl std::ops::Index<usize> for Feedback {
    type Output = LetterFeedback;

    fn index(&self, position: usize) -> &Self::Output {
        &self.0[position]
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback_from(statuses: [LetterStatus; WORD_LENGTH]) -> Feedback {
        let word = b"crane";
        Feedback::new(std::array::from_fn(|i| {
            LetterFeedback::new(word[i], statuses[i])
        }))
    }

    #[test]
    fn letter_feedback_uppercases() {
        let entry = LetterFeedback::new(b'c', LetterStatus::Correct);
        assert_eq!(entry.letter(), 'C');
        assert_eq!(entry.status(), LetterStatus::Correct);
    }

    #[test]
    fn is_win_all_correct() {
        let feedback = feedback_from([LetterStatus::Correct; WORD_LENGTH]);
        assert!(feedback.is_win());
    }

    #[test]
    fn is_win_rejects_partial() {
        let feedback = feedback_from([
            LetterStatus::Correct,
            LetterStatus::Correct,
            LetterStatus::Present,
            LetterStatus::Correct,
            LetterStatus::Correct,
        ]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn word_is_uppercase() {
        let feedback = feedback_from([LetterStatus::Absent; WORD_LENGTH]);
        assert_eq!(feedback.word(), "CRANE");
    }

    #[test]
    fn emoji_tiles() {
        let feedback = feedback_from([
            LetterStatus::Correct,
            LetterStatus::Present,
            LetterStatus::Absent,
            LetterStatus::Absent,
            LetterStatus::Correct,
        ]);
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜⬜🟩");
        assert_eq!(format!("{feedback}"), "🟩🟨⬜⬜🟩");
    }

    #[test]
    fn indexing_matches_entries() {
        let feedback = feedback_from([
            LetterStatus::Absent,
            LetterStatus::Present,
            LetterStatus::Correct,
            LetterStatus::Absent,
            LetterStatus::Absent,
        ]);
        assert_eq!(feedback[1].status(), LetterStatus::Present);
        assert_eq!(feedback[2].status(), LetterStatus::Correct);
        assert_eq!(feedback.entries().len(), WORD_LENGTH);
    }
}
