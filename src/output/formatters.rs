//! Formatting utilities for terminal output

use crate::core::LetterSet;
use chrono::Duration;

/// Format a letter set as `P | A L E X Y Z` (center first, uppercase)
#[must_use]
pub fn letters_line(letters: &LetterSet) -> String {
    let chars = letters.letters();
    let outer: Vec<String> = chars[1..]
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect();
    format!("{} | {}", chars[0].to_ascii_uppercase(), outer.join(" "))
}

/// Format a countdown duration as `HH:MM:SS`
///
/// Negative durations clamp to zero.
#[must_use]
pub fn countdown_clock(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
