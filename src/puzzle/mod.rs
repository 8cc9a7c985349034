//! Daily puzzle generation and scheduling
//!
//! A puzzle is derived deterministically from its calendar date: the date key
//! seeds a PRNG that draws seven distinct letters, and the candidate set is
//! quality-gated against the dictionary before acceptance. Puzzles are
//! immutable once generated and cached by the scheduler for the retention
//! window.

mod generator;
mod scheduler;
mod seed;

pub use generator::{Generator, MAX_ATTEMPTS, QualityGate};
pub use scheduler::{CacheStats, PuzzleScheduler, REFERENCE_OFFSET_HOURS, ROLLOVER_HOUR};
pub use seed::{SplitMix64, date_seed};

use crate::core::LetterSet;
use crate::core::scoring;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Format a date as a puzzle identifier (`YYYY-MM-DD`)
#[must_use]
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A fully generated daily puzzle, immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Calendar-date key (`YYYY-MM-DD`) identifying the puzzle
    pub puzzle_id: String,
    /// The seven letters, center first
    pub letters: LetterSet,
    /// Every dictionary word playable against the letter set, sorted ascending
    pub valid_words: Vec<String>,
    /// Sum of scores over all valid words
    pub max_score: u32,
    /// Number of valid words using all seven letters
    pub pangram_count: usize,
    /// When generation finished
    pub generated_at: DateTime<Utc>,
    /// Attempts consumed before acceptance (1-based)
    pub attempts: u32,
    /// True when no candidate passed the quality gate and the last one was kept
    pub is_fallback: bool,
}

impl Puzzle {
    pub(crate) fn build(
        puzzle_id: String,
        letters: LetterSet,
        valid_words: Vec<String>,
        attempts: u32,
        is_fallback: bool,
    ) -> Self {
        let max_score = valid_words.iter().map(|w| scoring::score(w)).sum();
        let pangram_count = valid_words.iter().filter(|w| scoring::is_pangram(w)).count();

        Self {
            puzzle_id,
            letters,
            valid_words,
            max_score,
            pangram_count,
            generated_at: Utc::now(),
            attempts,
            is_fallback,
        }
    }

    /// The mandatory center letter
    #[inline]
    #[must_use]
    pub fn center(&self) -> char {
        self.letters.center()
    }

    /// Number of valid words
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.valid_words.len()
    }

    /// Iterate over the pangrams in the word list
    pub fn pangrams(&self) -> impl Iterator<Item = &str> {
        self.valid_words
            .iter()
            .filter(|w| scoring::is_pangram(w))
            .map(String::as_str)
    }
}
