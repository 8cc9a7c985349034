//! Core domain types for the spelling-bee puzzle
//!
//! The fundamental domain types: validated words, the seven-letter alphabet,
//! and scoring. Everything here is pure and independent of the dictionary,
//! scheduling, and I/O layers.

mod letters;
pub mod scoring;
mod word;

pub use letters::{LetterSet, LetterSetError};
pub use word::{MIN_WORD_LEN, Word, WordError};
