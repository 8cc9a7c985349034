//! Spellbee
//!
//! Daily spelling-bee puzzle engine: deterministic date-seeded letter
//! generation with a quality gate, pangram-bonus scoring, and an interactive
//! word-validation service over a corpus that degrades gracefully to an
//! embedded fallback.
//!
//! # Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spellbee::dictionary::Dictionary;
//! use spellbee::puzzle::Generator;
//!
//! let dictionary = Dictionary::from_words(["apple", "plea", "peal"]);
//! let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//!
//! // Same date, same puzzle, on every machine
//! let puzzle = Generator::new().generate(&dictionary, date);
//! assert_eq!(puzzle.puzzle_id, "2024-06-15");
//! ```

// Core domain types
pub mod core;

// Word corpus service
pub mod dictionary;

// Daily puzzle generation and scheduling
pub mod puzzle;

// Interactive word validation
pub mod validation;

// Session and profile records
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
