//! Word scoring
//!
//! Pure, stateless scoring: four-letter words score 1, longer words score their
//! length, and pangrams (words using all seven puzzle letters) earn a bonus.
//! Defined for any input; callers normally pass already-validated candidates,
//! but nothing here panics on pathological strings.

/// Bonus awarded for a pangram
pub const PANGRAM_BONUS: u32 = 7;

/// Distinct letters required for a pangram (the full puzzle alphabet)
const PANGRAM_LETTERS: usize = 7;

/// Check whether a word uses exactly seven distinct letters
///
/// Case-insensitive; non-alphabetic characters are ignored.
///
/// # Examples
/// ```
/// use spellbee::core::scoring::is_pangram;
///
/// assert!(is_pangram("amplify"));
/// assert!(is_pangram("acrobats")); // repeats allowed, 7 distinct letters
/// assert!(!is_pangram("apple"));
/// ```
#[must_use]
pub fn is_pangram(word: &str) -> bool {
    distinct_letters(word) == PANGRAM_LETTERS
}

/// Score a word: 1 point for exactly four letters, length otherwise,
/// plus [`PANGRAM_BONUS`] if the word is a pangram
///
/// # Examples
/// ```
/// use spellbee::core::scoring::score;
///
/// assert_eq!(score("word"), 1);     // length 4 scores 1
/// assert_eq!(score("words"), 5);    // length 5 scores 5
/// assert_eq!(score("amplify"), 14); // 7 + pangram bonus
/// ```
#[must_use]
pub fn score(word: &str) -> u32 {
    let len = word.chars().count() as u32;
    if len == 0 {
        return 0;
    }

    let base = if len == 4 { 1 } else { len };
    let bonus = if is_pangram(word) { PANGRAM_BONUS } else { 0 };
    base + bonus
}

fn distinct_letters(word: &str) -> usize {
    let mut mask: u32 = 0;
    for c in word.chars() {
        if c.is_ascii_alphabetic() {
            mask |= 1 << (c.to_ascii_lowercase() as u32 - 'a' as u32);
        }
    }
    mask.count_ones() as usize
}
