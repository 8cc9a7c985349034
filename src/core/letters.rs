//! The seven-letter puzzle alphabet
//!
//! A `LetterSet` holds exactly seven distinct letters, one of which is the
//! mandatory center letter. Words are formed by reusing letters from the set
//! arbitrarily many times ("reuse without consumption").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::word::MIN_WORD_LEN;

/// Number of letters in a puzzle
pub const LETTER_COUNT: usize = 7;

/// Seven distinct lowercase letters; slot 0 is the center letter
///
/// The six outer letters are kept sorted so that two sets with the same
/// letters and center compare equal regardless of construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LetterSet {
    letters: [u8; LETTER_COUNT],
}

/// Error type for malformed letter sets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterSetError {
    #[error("Letter set must have exactly {LETTER_COUNT} letters, got {0}")]
    WrongCount(usize),
    #[error("Letter set contains duplicate letter '{0}'")]
    DuplicateLetter(char),
    #[error("'{0}' is not an ASCII letter")]
    NotALetter(char),
}

impl LetterSet {
    /// Create a letter set from a center letter and six outer letters
    ///
    /// # Errors
    /// Returns `LetterSetError` if any input is not an ASCII letter or if the
    /// seven letters are not distinct.
    ///
    /// # Examples
    /// ```
    /// use spellbee::core::LetterSet;
    ///
    /// let set = LetterSet::new('p', ['a', 'l', 'e', 'x', 'y', 'z']).unwrap();
    /// assert_eq!(set.center(), 'p');
    /// assert!(set.contains('x'));
    /// assert!(!set.contains('q'));
    /// ```
    pub fn new(center: char, outer: [char; LETTER_COUNT - 1]) -> Result<Self, LetterSetError> {
        let mut letters = [0u8; LETTER_COUNT];
        letters[0] = lowercase_byte(center)?;

        let mut rest = [0u8; LETTER_COUNT - 1];
        for (slot, &c) in rest.iter_mut().zip(outer.iter()) {
            *slot = lowercase_byte(c)?;
        }
        rest.sort_unstable();
        letters[1..].copy_from_slice(&rest);

        // Distinctness: sorted tail makes duplicates adjacent
        for pair in rest.windows(2) {
            if pair[0] == pair[1] {
                return Err(LetterSetError::DuplicateLetter(char::from(pair[0])));
            }
        }
        if rest.contains(&letters[0]) {
            return Err(LetterSetError::DuplicateLetter(char::from(letters[0])));
        }

        Ok(Self { letters })
    }

    /// The mandatory center letter
    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.letters[0] as char
    }

    /// All seven letters, center first
    #[must_use]
    pub fn letters(&self) -> [char; LETTER_COUNT] {
        self.letters.map(char::from)
    }

    /// Check whether a character is a member of the set (case-insensitive)
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii_alphabetic() && self.letters.contains(&(c.to_ascii_lowercase() as u8))
    }

    /// The formability predicate: can this word be played against the set?
    ///
    /// True iff the word is at least 4 letters, contains the center letter at
    /// least once, and every character is a member of the set. Letters may
    /// repeat arbitrarily many times even though the set has each letter once.
    /// Case-insensitive; independent of dictionary membership.
    ///
    /// # Examples
    /// ```
    /// use spellbee::core::LetterSet;
    ///
    /// let set = LetterSet::new('p', ['a', 'l', 'e', 'x', 'y', 'z']).unwrap();
    /// assert!(set.can_form("apple"));   // 'p' twice is fine
    /// assert!(!set.can_form("alley")); // no center letter
    /// assert!(!set.can_form("plat"));  // 't' not in set
    /// assert!(!set.can_form("pal"));   // too short
    /// ```
    #[must_use]
    pub fn can_form(&self, word: &str) -> bool {
        if word.chars().count() < MIN_WORD_LEN {
            return false;
        }

        let mut has_center = false;
        for c in word.chars() {
            if !self.contains(c) {
                return false;
            }
            if c.to_ascii_lowercase() == self.center() {
                has_center = true;
            }
        }

        has_center
    }

    /// Canonical string form: seven lowercase letters, center first
    ///
    /// Stable across processes, used as a cache key component.
    #[must_use]
    pub fn signature(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }
}

fn lowercase_byte(c: char) -> Result<u8, LetterSetError> {
    if c.is_ascii_alphabetic() {
        Ok(c.to_ascii_lowercase() as u8)
    } else {
        Err(LetterSetError::NotALetter(c))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature())
    }
}

impl FromStr for LetterSet {
    type Err = LetterSetError;

    /// Parse seven letters where the first is the center, e.g. `"palexyz"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != LETTER_COUNT {
            return Err(LetterSetError::WrongCount(chars.len()));
        }

        let outer: [char; LETTER_COUNT - 1] = chars[1..]
            .try_into()
            .map_err(|_| LetterSetError::WrongCount(chars.len()))?;
        Self::new(chars[0], outer)
    }
}

impl TryFrom<String> for LetterSet {
    type Error = LetterSetError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LetterSet> for String {
    fn from(set: LetterSet) -> Self {
        set.signature()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LetterSet {
        LetterSet::new('p', ['a', 'l', 'e', 'x', 'y', 'z']).unwrap()
    }

    #[test]
    fn letter_set_creation() {
        let set = sample();
        assert_eq!(set.center(), 'p');
        assert_eq!(set.letters()[0], 'p');
        for c in ['a', 'l', 'e', 'x', 'y', 'z', 'p'] {
            assert!(set.contains(c));
        }
        assert!(!set.contains('q'));
    }

    #[test]
    fn letter_set_normalizes_case() {
        let set = LetterSet::new('P', ['A', 'L', 'E', 'X', 'Y', 'Z']).unwrap();
        assert_eq!(set.center(), 'p');
        assert!(set.contains('a'));
        assert!(set.contains('A'));
    }

    #[test]
    fn letter_set_rejects_duplicates() {
        assert!(matches!(
            LetterSet::new('p', ['a', 'a', 'e', 'x', 'y', 'z']),
            Err(LetterSetError::DuplicateLetter('a'))
        ));
        // Center duplicated among outer letters
        assert!(matches!(
            LetterSet::new('p', ['a', 'p', 'e', 'x', 'y', 'z']),
            Err(LetterSetError::DuplicateLetter('p'))
        ));
    }

    #[test]
    fn letter_set_rejects_non_letters() {
        assert!(matches!(
            LetterSet::new('3', ['a', 'l', 'e', 'x', 'y', 'z']),
            Err(LetterSetError::NotALetter('3'))
        ));
        assert!(LetterSet::new('p', ['a', 'l', 'e', 'x', 'y', '-']).is_err());
    }

    #[test]
    fn letter_set_order_independent_equality() {
        let set1 = LetterSet::new('p', ['a', 'l', 'e', 'x', 'y', 'z']).unwrap();
        let set2 = LetterSet::new('p', ['z', 'y', 'x', 'e', 'l', 'a']).unwrap();
        assert_eq!(set1, set2);
        assert_eq!(set1.signature(), set2.signature());
    }

    #[test]
    fn can_form_accepts_repeated_letters() {
        let set = sample();
        assert!(set.can_form("apple")); // p and a, p repeated
        assert!(set.can_form("papal"));
        assert!(set.can_form("pappy"));
        assert!(set.can_form("zzzzpppzzz")); // arbitrary repetition is legal
    }

    #[test]
    fn can_form_requires_center() {
        let set = sample();
        assert!(!set.can_form("alley"));
        assert!(!set.can_form("axle"));
    }

    #[test]
    fn can_form_rejects_out_of_set_letters() {
        let set = sample();
        assert!(!set.can_form("plant")); // n, t
        assert!(!set.can_form("pearl")); // r
    }

    #[test]
    fn can_form_rejects_short_words() {
        let set = sample();
        assert!(!set.can_form("pal"));
        assert!(!set.can_form("pa"));
        assert!(!set.can_form(""));
    }

    #[test]
    fn can_form_case_insensitive() {
        let set = sample();
        assert!(set.can_form("APPLE"));
        assert!(set.can_form("ApPlE"));
    }

    #[test]
    fn can_form_rejects_non_alphabetic() {
        let set = sample();
        assert!(!set.can_form("app!e"));
        assert!(!set.can_form("app e"));
    }

    #[test]
    fn parse_round_trip() {
        let set = sample();
        let parsed: LetterSet = set.signature().parse().unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(matches!(
            "pale".parse::<LetterSet>(),
            Err(LetterSetError::WrongCount(4))
        ));
        assert!("palexyzq".parse::<LetterSet>().is_err());
    }

    #[test]
    fn serde_as_string() {
        let set = sample();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, format!("\"{}\"", set.signature()));

        let back: LetterSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
