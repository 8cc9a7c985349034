//! Dictionary word representation
//!
//! A Word is a lowercase alphabetic string of at least four letters, the minimum
//! playable length in the puzzle.

use std::fmt;
use thiserror::Error;

/// Minimum playable word length
pub const MIN_WORD_LEN: usize = 4;

/// A validated puzzle word: lowercase, ASCII alphabetic, length >= 4
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be at least {MIN_WORD_LEN} letters, got {0}")]
    TooShort(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation, so `"PEAL"` and `"peal"` produce
    /// the same Word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is less than 4
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters (digits, hyphens, apostrophes)
    ///
    /// # Examples
    /// ```
    /// use spellbee::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("abc").is_err());
    /// assert!(Word::new("isn't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() < MIN_WORD_LEN {
            return Err(WordError::TooShort(text.len()));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Word length in letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed Word (length >= 4), present for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of distinct letters in the word
    ///
    /// A word with exactly 7 distinct letters is a pangram candidate.
    #[must_use]
    pub fn distinct_letters(&self) -> usize {
        let mut mask: u32 = 0;
        for b in self.text.bytes() {
            mask |= 1 << (b - b'a');
        }
        mask.count_ones() as usize
    }

    /// Consume the Word and return the owned string
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.text(), "apple");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("APPLE").unwrap();
        assert_eq!(word.text(), "apple");

        let word2 = Word::new("ApPlE").unwrap();
        assert_eq!(word2.text(), "apple");
    }

    #[test]
    fn word_creation_minimum_length() {
        assert!(Word::new("peal").is_ok());
        assert!(matches!(Word::new("pea"), Err(WordError::TooShort(3))));
        assert!(matches!(Word::new(""), Err(WordError::TooShort(0))));
    }

    #[test]
    fn word_creation_long_words_allowed() {
        let word = Word::new("unquestionably").unwrap();
        assert_eq!(word.len(), 14);
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("pla3a").is_err()); // Number
        assert!(Word::new("pea l").is_err()); // Space
        assert!(Word::new("isn't").is_err()); // Apostrophe
        assert!(Word::new("co-op").is_err()); // Hyphen
    }

    #[test]
    fn word_creation_non_ascii() {
        assert!(matches!(Word::new("café"), Err(WordError::NonAscii)));
    }

    #[test]
    fn word_distinct_letters() {
        assert_eq!(Word::new("apple").unwrap().distinct_letters(), 4);
        assert_eq!(Word::new("aaaa").unwrap().distinct_letters(), 1);
        assert_eq!(Word::new("amplify").unwrap().distinct_letters(), 7);
    }

    #[test]
    fn word_display() {
        let word = Word::new("peal").unwrap();
        assert_eq!(format!("{word}"), "peal");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("peal").unwrap();
        let word2 = Word::new("PEAL").unwrap();
        let word3 = Word::new("plea").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }

    #[test]
    fn word_into_text() {
        let word = Word::new("Plea").unwrap();
        assert_eq!(word.into_text(), "plea");
    }
}
