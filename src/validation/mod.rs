//! Interactive word validation
//!
//! Wraps the dictionary and scoring for the live "is this word acceptable"
//! check used on every keystroke. Structural reasons (too short, missing
//! center, unformable) are reported before dictionary membership; until the
//! corpus has loaded, a structurally formable word is `Pending` rather than
//! rejected. Verdicts are memoized in a small bounded cache, and checks can be
//! dispatched off the input-handling path onto the runtime.

use crate::core::{LetterSet, MIN_WORD_LEN, scoring};
use crate::dictionary::Dictionary;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::oneshot;
use tracing::trace;

/// Bound on the number of memoized verdicts
pub const MEMO_CAPACITY: usize = 100;

/// Why a candidate word was rejected, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// Fewer than four letters
    TooShort,
    /// Does not contain the center letter
    MissingCenter,
    /// Uses a character outside the letter set
    NotInLetterSet,
    /// Formable but not a dictionary word
    NotInDictionary,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TooShort => "too short",
            Self::MissingCenter => "missing center letter",
            Self::NotInLetterSet => "uses letters outside the puzzle",
            Self::NotInDictionary => "not in the dictionary",
        };
        write!(f, "{text}")
    }
}

/// Outcome of validating a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Acceptable word with its score
    Valid {
        /// Point value of the word
        score: u32,
        /// Whether the word uses all seven letters
        is_pangram: bool,
    },
    /// Rejected with a structured reason
    Invalid(RejectReason),
    /// Formable, but the dictionary has not loaded yet; not authoritative
    Pending,
}

impl Verdict {
    /// True for an accepted word
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Memoizing validation front-end over dictionary and scoring
pub struct ValidationService {
    dictionary: Arc<Dictionary>,
    memo: Mutex<Memo>,
}

impl ValidationService {
    /// Create a service over a shared dictionary
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self {
            dictionary,
            memo: Mutex::new(Memo::with_capacity(MEMO_CAPACITY)),
        }
    }

    /// Validate a candidate word against a letter set
    ///
    /// Reasons are checked in order: length, center letter, letter-set
    /// membership, then dictionary membership. The dictionary is only
    /// consulted once structural checks pass, so `"ab"` is `TooShort` even
    /// before any corpus load. `Pending` verdicts are not memoized; they
    /// become stale the moment the corpus finishes loading.
    #[must_use]
    pub fn check(&self, word: &str, letters: &LetterSet) -> Verdict {
        let normalized = word.to_lowercase();
        let key = (normalized, letters.signature());

        if let Some(verdict) = self.lock_memo().get(&key) {
            trace!(word = %key.0, "validation memo hit");
            return verdict;
        }

        let verdict = self.evaluate(&key.0, letters);
        if verdict != Verdict::Pending {
            self.lock_memo().insert(key, verdict);
        }
        verdict
    }

    /// Validate off the interactive path, delivering the verdict asynchronously
    ///
    /// The check runs as a spawned task on the current runtime; keystroke
    /// handling never blocks on a dictionary scan. Dropping the receiver
    /// abandons the result harmlessly.
    pub fn check_deferred(
        self: &Arc<Self>,
        word: String,
        letters: LetterSet,
    ) -> oneshot::Receiver<Verdict> {
        let (tx, rx) = oneshot::channel();
        let service = Arc::clone(self);

        tokio::spawn(async move {
            let verdict = service.check(&word, &letters);
            // Caller may have moved on to the next keystroke
            let _ = tx.send(verdict);
        });

        rx
    }

    /// Number of memoized verdicts
    #[must_use]
    pub fn memo_len(&self) -> usize {
        self.lock_memo().len()
    }

    fn evaluate(&self, word: &str, letters: &LetterSet) -> Verdict {
        if word.chars().count() < MIN_WORD_LEN {
            return Verdict::Invalid(RejectReason::TooShort);
        }

        if !word
            .chars()
            .any(|c| c.to_ascii_lowercase() == letters.center())
        {
            return Verdict::Invalid(RejectReason::MissingCenter);
        }

        if !word.chars().all(|c| letters.contains(c)) {
            return Verdict::Invalid(RejectReason::NotInLetterSet);
        }

        if !self.dictionary.is_loaded() {
            return Verdict::Pending;
        }

        if self.dictionary.is_valid_word(word) {
            Verdict::Valid {
                score: scoring::score(word),
                is_pangram: scoring::is_pangram(word),
            }
        } else {
            Verdict::Invalid(RejectReason::NotInDictionary)
        }
    }

    fn lock_memo(&self) -> std::sync::MutexGuard<'_, Memo> {
        self.memo.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

type MemoKey = (String, String);

/// Bounded verdict cache with oldest-entry eviction
struct Memo {
    map: FxHashMap<MemoKey, Verdict>,
    order: VecDeque<MemoKey>,
    capacity: usize,
}

impl Memo {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::default(),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    fn get(&self, key: &MemoKey) -> Option<Verdict> {
        self.map.get(key).copied()
    }

    fn insert(&mut self, key: MemoKey, verdict: Verdict) {
        if self.map.insert(key.clone(), verdict).is_none() {
            self.order.push_back(key);
            if self.order.len() > self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.map.remove(&oldest);
                }
            }
        }
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}
