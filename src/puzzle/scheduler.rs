//! Rollover scheduling and the bounded puzzle cache
//!
//! The scheduler maps "now" to the active puzzle date with a fixed 10:00
//! rollover in the reference zone: before the rollover, players keep the prior
//! day's puzzle. Generated puzzles are cached by date key and never
//! regenerated for a key already present, so every player sees the same
//! puzzle all day. Entries strictly older than the retention window are
//! purged whenever a new puzzle is cached.

use super::generator::Generator;
use super::{Puzzle, date_key};
use crate::dictionary::Dictionary;
use chrono::{DateTime, Days, Duration, FixedOffset, NaiveDate, NaiveTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Hour of the daily rollover in the reference zone
pub const ROLLOVER_HOUR: u32 = 10;

/// Reference zone offset from UTC in hours (UTC-8, the original's Pacific clock)
pub const REFERENCE_OFFSET_HOURS: i32 = -8;

/// Cached puzzles are retained for this many days
const RETENTION_DAYS: u64 = 7;

/// Summary of the cache contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached puzzles
    pub cached: usize,
    /// Oldest cached date key
    pub oldest: Option<NaiveDate>,
    /// Newest cached date key
    pub newest: Option<NaiveDate>,
}

/// Maps the current time to the active puzzle, generating and caching on demand
pub struct PuzzleScheduler {
    generator: Generator,
    cache: Mutex<BTreeMap<NaiveDate, Arc<Puzzle>>>,
    zone: FixedOffset,
    rollover: NaiveTime,
}

impl PuzzleScheduler {
    /// Scheduler with the standard generator and reference zone
    ///
    /// # Panics
    /// Does not panic: the fixed offset and rollover time are in range.
    #[must_use]
    pub fn new() -> Self {
        let zone = FixedOffset::east_opt(REFERENCE_OFFSET_HOURS * 3600)
            .expect("reference offset is in range");
        Self::with_zone(Generator::new(), zone)
    }

    /// Scheduler with a custom generator and reference zone
    ///
    /// # Panics
    /// Does not panic: the rollover hour constant is valid.
    #[must_use]
    pub fn with_zone(generator: Generator, zone: FixedOffset) -> Self {
        Self {
            generator,
            cache: Mutex::new(BTreeMap::new()),
            zone,
            rollover: NaiveTime::from_hms_opt(ROLLOVER_HOUR, 0, 0)
                .expect("rollover time is valid"),
        }
    }

    fn reference_now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.zone)
    }

    /// The active puzzle date for an explicit reference-zone instant
    ///
    /// Today once the reference time-of-day reaches the rollover, otherwise
    /// yesterday.
    #[must_use]
    pub fn active_date_at(&self, now: DateTime<FixedOffset>) -> NaiveDate {
        let date = now.date_naive();
        if now.time() >= self.rollover {
            date
        } else {
            date.checked_sub_days(Days::new(1)).unwrap_or(date)
        }
    }

    /// The active puzzle date right now
    #[must_use]
    pub fn active_date(&self) -> NaiveDate {
        self.active_date_at(self.reference_now())
    }

    /// Time remaining until the next rollover from an explicit instant
    #[must_use]
    pub fn time_until_rollover_at(&self, now: DateTime<FixedOffset>) -> Duration {
        let local = now.naive_local();
        let today_rollover = local.date().and_time(self.rollover);

        let next = if local.time() < self.rollover {
            today_rollover
        } else {
            today_rollover + Duration::days(1)
        };

        next - local
    }

    /// Time remaining until the next rollover, recomputed on demand
    #[must_use]
    pub fn time_until_next_rollover(&self) -> Duration {
        self.time_until_rollover_at(self.reference_now())
    }

    /// The puzzle for the active date, generated and cached on first request
    #[must_use]
    pub fn todays_puzzle(&self, dictionary: &Dictionary) -> Arc<Puzzle> {
        self.puzzle_for_date(dictionary, self.active_date())
    }

    /// The puzzle for a specific date
    ///
    /// A cache hit returns the stored puzzle unchanged; puzzles are never
    /// regenerated for a present key. The cache lock is held across
    /// generation, so concurrent callers for the same uncached date cannot
    /// generate twice (generation is deterministic, so even a duplicate write
    /// would be idempotent).
    #[must_use]
    pub fn puzzle_for_date(&self, dictionary: &Dictionary, date: NaiveDate) -> Arc<Puzzle> {
        let mut cache = self.lock_cache();

        if let Some(puzzle) = cache.get(&date) {
            debug!(puzzle_id = %date_key(date), "puzzle cache hit");
            return Arc::clone(puzzle);
        }

        let puzzle = Arc::new(self.generator.generate(dictionary, date));
        cache.insert(date, Arc::clone(&puzzle));
        Self::purge_stale(&mut cache);

        puzzle
    }

    /// Current cache contents summary
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let cache = self.lock_cache();
        CacheStats {
            cached: cache.len(),
            oldest: cache.keys().next().copied(),
            newest: cache.keys().next_back().copied(),
        }
    }

    fn purge_stale(cache: &mut BTreeMap<NaiveDate, Arc<Puzzle>>) {
        let Some(newest) = cache.keys().next_back().copied() else {
            return;
        };
        let Some(cutoff) = newest.checked_sub_days(Days::new(RETENTION_DAYS)) else {
            return;
        };

        let before = cache.len();
        cache.retain(|&date, _| date >= cutoff);
        let purged = before - cache.len();
        if purged > 0 {
            info!(purged, "evicted stale puzzles from cache");
        }
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, BTreeMap<NaiveDate, Arc<Puzzle>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PuzzleScheduler {
    fn default() -> Self {
        Self::new()
    }
}
