//! Puzzle quality audit command
//!
//! Generates puzzles for a run of consecutive dates and reports how the
//! quality gate holds up: fallback rate, attempt counts, word-count spread.
//! Useful when tuning the gate or swapping corpora.

use crate::dictionary::Dictionary;
use crate::puzzle::{Generator, date_key};
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};

/// One audited date
pub struct AuditRow {
    /// Date audited
    pub date: NaiveDate,
    /// Letter-set signature (center first)
    pub letters: String,
    /// Valid words found
    pub word_count: usize,
    /// Pangrams among them
    pub pangram_count: usize,
    /// Total achievable score
    pub max_score: u32,
    /// Attempts consumed
    pub attempts: u32,
    /// Whether the gate was never satisfied
    pub is_fallback: bool,
}

/// Aggregated audit results
pub struct AuditReport {
    /// Per-date rows, in date order
    pub rows: Vec<AuditRow>,
    /// Number of fallback puzzles
    pub fallbacks: usize,
    /// Mean attempts per accepted puzzle
    pub average_attempts: f64,
    /// Mean valid-word count
    pub average_words: f64,
}

/// Audit puzzle generation over `days` consecutive dates starting at `start`
#[must_use]
pub fn run_audit(
    dictionary: &Dictionary,
    generator: &Generator,
    start: NaiveDate,
    days: u32,
    show_progress: bool,
) -> AuditReport {
    let progress = if show_progress {
        let bar = ProgressBar::new(u64::from(days));
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Some(bar)
    } else {
        None
    };

    let mut rows = Vec::with_capacity(days as usize);
    for offset in 0..days {
        let Some(date) = start.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };

        if let Some(bar) = &progress {
            bar.set_message(date_key(date));
        }

        let puzzle = generator.generate(dictionary, date);
        rows.push(AuditRow {
            date,
            letters: puzzle.letters.signature(),
            word_count: puzzle.word_count(),
            pangram_count: puzzle.pangram_count,
            max_score: puzzle.max_score,
            attempts: puzzle.attempts,
            is_fallback: puzzle.is_fallback,
        });

        if let Some(bar) = &progress {
            bar.inc(1);
        }
    }

    if let Some(bar) = &progress {
        bar.finish_and_clear();
    }

    let fallbacks = rows.iter().filter(|r| r.is_fallback).count();
    let total = rows.len().max(1) as f64;
    let average_attempts = rows.iter().map(|r| f64::from(r.attempts)).sum::<f64>() / total;
    let average_words = rows.iter().map(|r| r.word_count as f64).sum::<f64>() / total;

    AuditReport {
        rows,
        fallbacks,
        average_attempts,
        average_words,
    }
}
