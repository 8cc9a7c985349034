//! Puzzle display command
//!
//! Resolves the active (or requested) puzzle and gathers what the caller needs
//! to render it: the puzzle itself, the rollover countdown, and whether a
//! session was already recorded for it.

use crate::dictionary::Dictionary;
use crate::puzzle::{Puzzle, PuzzleScheduler};
use crate::session::SessionStore;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;

/// Everything needed to render a puzzle
pub struct PuzzleView {
    /// The resolved puzzle
    pub puzzle: Arc<Puzzle>,
    /// Time remaining until the next rollover
    pub countdown: Duration,
    /// Whether a session for this puzzle was already recorded
    pub already_played: bool,
}

/// Resolve the puzzle for `date` (or the active date when `None`)
pub fn puzzle_view(
    scheduler: &PuzzleScheduler,
    dictionary: &Dictionary,
    store: &dyn SessionStore,
    date: Option<NaiveDate>,
) -> PuzzleView {
    let puzzle = match date {
        Some(date) => scheduler.puzzle_for_date(dictionary, date),
        None => scheduler.todays_puzzle(dictionary),
    };

    PuzzleView {
        already_played: store.has_played(&puzzle.puzzle_id),
        countdown: scheduler.time_until_next_rollover(),
        puzzle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::FALLBACK;
    use crate::session::{GameSession, MemoryStore};

    #[test]
    fn view_resolves_requested_date() {
        let dict = Dictionary::from_words(FALLBACK.iter().copied());
        let scheduler = PuzzleScheduler::new();
        let store = MemoryStore::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let view = puzzle_view(&scheduler, &dict, &store, Some(date));
        assert_eq!(view.puzzle.puzzle_id, "2024-06-15");
        assert!(!view.already_played);
    }

    #[test]
    fn view_reports_prior_session() {
        let dict = Dictionary::from_words(FALLBACK.iter().copied());
        let scheduler = PuzzleScheduler::new();
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let mut store = MemoryStore::new();
        store.save_session(GameSession::new("2024-06-15", vec![], 0));

        let view = puzzle_view(&scheduler, &dict, &store, Some(date));
        assert!(view.already_played);
    }

    #[test]
    fn view_countdown_is_within_a_day() {
        let dict = Dictionary::from_words(FALLBACK.iter().copied());
        let scheduler = PuzzleScheduler::new();
        let store = MemoryStore::new();

        let view = puzzle_view(&scheduler, &dict, &store, None);
        assert!(view.countdown > Duration::zero());
        assert!(view.countdown <= Duration::hours(24));
    }
}
