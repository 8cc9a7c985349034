//! Quality-gated puzzle generation
//!
//! Letters are drawn deterministically from the date seed: one vowel first
//! (the center), then draws from the full pool skipping duplicates until seven
//! distinct letters are collected. A candidate is accepted only if its word
//! list clears the quality gate; rejected candidates retry with a perturbed
//! seed up to the attempt ceiling, after which the last candidate is returned
//! flagged as a fallback. Generation never fails for lack of a perfect set.

use super::seed::{SplitMix64, date_seed};
use super::{Puzzle, date_key};
use crate::core::{LetterSet, scoring};
use crate::dictionary::Dictionary;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Vowels; the center letter is always one of these
const VOWELS: &[u8] = b"aeiou";

/// Common consonants eligible for the outer letters
const CONSONANTS: &[u8] = b"rstlndchfpgmbwyvk";

/// Attempt ceiling before accepting a fallback puzzle
pub const MAX_ATTEMPTS: u32 = 50;

/// Acceptance criteria for a generated puzzle
#[derive(Debug, Clone)]
pub struct QualityGate {
    /// Minimum valid-word count
    pub min_words: usize,
    /// Maximum valid-word count
    pub max_words: usize,
    /// Minimum number of pangrams
    pub min_pangrams: usize,
    /// Minimum total score
    pub min_score: u32,
    /// Maximum total score
    pub max_score: u32,
}

impl Default for QualityGate {
    fn default() -> Self {
        Self {
            min_words: 20,
            max_words: 100,
            min_pangrams: 1,
            min_score: 50,
            max_score: 200,
        }
    }
}

impl QualityGate {
    /// Check whether a candidate's statistics clear the gate
    #[must_use]
    pub fn accepts(&self, word_count: usize, pangram_count: usize, total_score: u32) -> bool {
        word_count >= self.min_words
            && word_count <= self.max_words
            && pangram_count >= self.min_pangrams
            && total_score >= self.min_score
            && total_score <= self.max_score
    }
}

/// Deterministic daily puzzle generator
#[derive(Debug, Clone, Default)]
pub struct Generator {
    gate: QualityGate,
}

impl Generator {
    /// Generator with the standard quality gate
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator with a custom quality gate
    #[must_use]
    pub const fn with_gate(gate: QualityGate) -> Self {
        Self { gate }
    }

    /// The letter set for a given date and attempt index
    ///
    /// Pure and deterministic: the same (date, attempt) pair yields the same
    /// letters on every machine. Attempt 0 is the canonical draw for the day;
    /// higher attempts perturb the seed the way the original schedule advanced
    /// its reference time one simulated hour per retry.
    ///
    /// # Panics
    /// Does not panic: the draw always terminates (the pool has 22 letters and
    /// 7 are needed) and the collected letters are distinct by construction.
    #[must_use]
    pub fn letters_for(date: NaiveDate, attempt: u32) -> LetterSet {
        let base = date_seed(&date_key(date));
        let mut rng = SplitMix64::new(u64::from(base) ^ (u64::from(attempt) << 32));

        let center = VOWELS[rng.next_below(VOWELS.len())];

        let pool: Vec<u8> = VOWELS.iter().chain(CONSONANTS.iter()).copied().collect();
        let mut picked: Vec<u8> = vec![center];
        while picked.len() < 7 {
            let letter = pool[rng.next_below(pool.len())];
            if !picked.contains(&letter) {
                picked.push(letter);
            }
        }

        let outer: [char; 6] = [
            picked[1] as char,
            picked[2] as char,
            picked[3] as char,
            picked[4] as char,
            picked[5] as char,
            picked[6] as char,
        ];
        LetterSet::new(center as char, outer).expect("drawn letters are distinct ASCII")
    }

    /// Generate the puzzle for a calendar date
    ///
    /// Retries with perturbed seeds until the quality gate passes or the
    /// attempt ceiling is reached, then falls back to the last candidate with
    /// `is_fallback` set. Deterministic for a given date and dictionary
    /// contents; no external side effects, so callers may freely abandon the
    /// result.
    #[must_use]
    pub fn generate(&self, dictionary: &Dictionary, date: NaiveDate) -> Puzzle {
        let puzzle_id = date_key(date);
        let mut last_candidate: Option<(LetterSet, Vec<String>)> = None;

        for attempt in 0..MAX_ATTEMPTS {
            let letters = Self::letters_for(date, attempt);
            let words = dictionary.find_valid_words(&letters);

            let total_score: u32 = words.iter().map(|w| scoring::score(w)).sum();
            let pangrams = words.iter().filter(|w| scoring::is_pangram(w)).count();

            debug!(
                %puzzle_id,
                attempt,
                letters = %letters,
                words = words.len(),
                pangrams,
                total_score,
                "evaluated candidate letter set"
            );

            if self.gate.accepts(words.len(), pangrams, total_score) {
                info!(
                    %puzzle_id,
                    attempts = attempt + 1,
                    words = words.len(),
                    "accepted puzzle"
                );
                return Puzzle::build(puzzle_id, letters, words, attempt + 1, false);
            }

            last_candidate = Some((letters, words));
        }

        warn!(%puzzle_id, "no candidate cleared the quality gate, keeping last attempt");
        let (letters, words) = last_candidate.expect("attempt ceiling is nonzero");
        Puzzle::build(puzzle_id, letters, words, MAX_ATTEMPTS, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::FALLBACK;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn letters_are_deterministic_per_date_and_attempt() {
        let a = Generator::letters_for(june_15(), 0);
        let b = Generator::letters_for(june_15(), 0);
        assert_eq!(a, b);

        let c = Generator::letters_for(june_15(), 3);
        let d = Generator::letters_for(june_15(), 3);
        assert_eq!(c, d);
    }

    #[test]
    fn letters_center_is_a_vowel() {
        for day in 1..=28 {
            let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
            let letters = Generator::letters_for(date, 0);
            assert!("aeiou".contains(letters.center()));
        }
    }

    #[test]
    fn letters_are_seven_distinct() {
        let letters = Generator::letters_for(june_15(), 0);
        let mut chars = letters.letters().to_vec();
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), 7);
    }

    #[test]
    fn attempts_perturb_the_draw() {
        // Identical draws across all 50 attempts would mean the perturbation
        // does nothing
        let distinct: std::collections::HashSet<String> = (0..MAX_ATTEMPTS)
            .map(|attempt| Generator::letters_for(june_15(), attempt).signature())
            .collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn generate_is_deterministic() {
        let dict = Dictionary::from_words(FALLBACK.iter().copied());
        let generator = Generator::new();

        let first = generator.generate(&dict, june_15());
        let second = generator.generate(&dict, june_15());

        assert_eq!(first.letters, second.letters);
        assert_eq!(first.valid_words, second.valid_words);
        assert_eq!(first.attempts, second.attempts);
        assert_eq!(first.is_fallback, second.is_fallback);
    }

    #[test]
    fn generate_clears_gate_or_flags_fallback() {
        let dict = Dictionary::from_words(FALLBACK.iter().copied());
        let generator = Generator::new();
        let gate = QualityGate::default();

        for day in 1..=10 {
            let date = NaiveDate::from_ymd_opt(2024, 7, day).unwrap();
            let puzzle = generator.generate(&dict, date);

            if puzzle.is_fallback {
                assert_eq!(puzzle.attempts, MAX_ATTEMPTS);
            } else {
                assert!(gate.accepts(
                    puzzle.word_count(),
                    puzzle.pangram_count,
                    puzzle.max_score
                ));
                assert!(puzzle.attempts >= 1 && puzzle.attempts <= MAX_ATTEMPTS);
            }
        }
    }

    #[test]
    fn generate_with_empty_dictionary_never_fails() {
        let dict = Dictionary::from_words(Vec::<String>::new());
        let puzzle = Generator::new().generate(&dict, june_15());

        assert!(puzzle.is_fallback);
        assert_eq!(puzzle.attempts, MAX_ATTEMPTS);
        assert!(puzzle.valid_words.is_empty());
        assert_eq!(puzzle.max_score, 0);
    }

    #[test]
    fn generate_word_list_is_playable_and_sorted() {
        let dict = Dictionary::from_words(FALLBACK.iter().copied());
        let puzzle = Generator::new().generate(&dict, june_15());

        let mut sorted = puzzle.valid_words.clone();
        sorted.sort_unstable();
        assert_eq!(puzzle.valid_words, sorted);

        for word in &puzzle.valid_words {
            assert!(puzzle.letters.can_form(word), "unplayable word '{word}'");
        }
    }

    #[test]
    fn gate_boundaries() {
        let gate = QualityGate::default();
        assert!(gate.accepts(20, 1, 50));
        assert!(gate.accepts(100, 1, 200));
        assert!(!gate.accepts(19, 1, 50));
        assert!(!gate.accepts(101, 1, 100));
        assert!(!gate.accepts(20, 0, 50));
        assert!(!gate.accepts(20, 1, 49));
        assert!(!gate.accepts(20, 1, 201));
    }

    #[test]
    fn custom_gate_is_respected() {
        // A gate nothing can satisfy forces the fallback path
        let impossible = QualityGate {
            min_words: usize::MAX,
            ..QualityGate::default()
        };
        let dict = Dictionary::from_words(FALLBACK.iter().copied());
        let puzzle = Generator::with_gate(impossible).generate(&dict, june_15());
        assert!(puzzle.is_fallback);
    }
}
