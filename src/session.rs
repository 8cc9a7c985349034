//! Session and profile records
//!
//! The engine treats play history as opaque records owned by the persistence
//! collaborator: it only needs "has this puzzle been played" and "record this
//! session's summary". Records serialize as JSON; a missing prior session is
//! simply the first play of the day, never an error.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Summary of one day's play, keyed by puzzle id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Date key of the puzzle played
    pub puzzle_id: String,
    /// Words the player found
    pub found_words: Vec<String>,
    /// Score achieved
    pub score: u32,
    /// When the session was recorded
    pub timestamp: DateTime<Utc>,
}

impl GameSession {
    /// Create a session record stamped with the current time
    #[must_use]
    pub fn new(puzzle_id: impl Into<String>, found_words: Vec<String>, score: u32) -> Self {
        Self {
            puzzle_id: puzzle_id.into(),
            found_words,
            score,
            timestamp: Utc::now(),
        }
    }
}

/// Aggregate player statistics across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Total sessions recorded
    pub games_played: u32,
    /// Total words found across all sessions
    pub words_found: u32,
    /// Sum of session scores
    pub total_score: u32,
    /// Highest single-session score
    pub best_score: u32,
    /// Consecutive puzzle days played, ending at `last_played`
    pub current_streak: u32,
    /// Longest streak ever reached
    pub longest_streak: u32,
    /// Puzzle date of the most recent session
    pub last_played: Option<NaiveDate>,
}

impl UserProfile {
    /// Fold a completed session into the profile
    ///
    /// `played_on` is the puzzle date, not the wall-clock date; streaks count
    /// consecutive puzzle days. Playing the same day twice leaves the streak
    /// unchanged; a gap of more than one day resets it to 1.
    pub fn record_session(&mut self, session: &GameSession, played_on: NaiveDate) {
        self.games_played += 1;
        self.words_found += session.found_words.len() as u32;
        self.total_score += session.score;
        self.best_score = self.best_score.max(session.score);

        let previous_day = played_on.checked_sub_days(Days::new(1));
        match self.last_played {
            Some(last) if last == played_on => {}
            Some(last) if Some(last) == previous_day => self.current_streak += 1,
            _ => self.current_streak = 1,
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_played = Some(played_on);
    }
}

/// Persistence seam owned by the excluded storage collaborator
///
/// The engine reads "already played" and writes session summaries; storage
/// format and failure handling are the collaborator's concern.
pub trait SessionStore {
    /// Load the session for a puzzle id, if one was recorded
    fn load_session(&self, puzzle_id: &str) -> Option<GameSession>;

    /// Record a session summary
    fn save_session(&mut self, session: GameSession);

    /// Whether the puzzle has already been played
    fn has_played(&self, puzzle_id: &str) -> bool {
        self.load_session(puzzle_id).is_some()
    }
}

/// In-memory store used by the CLI and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: FxHashMap<String, GameSession>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn load_session(&self, puzzle_id: &str) -> Option<GameSession> {
        self.sessions.get(puzzle_id).cloned()
    }

    fn save_session(&mut self, session: GameSession) {
        self.sessions.insert(session.puzzle_id.clone(), session);
    }
}
