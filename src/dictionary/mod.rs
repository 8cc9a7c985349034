//! Word corpus service
//!
//! The `Dictionary` owns the immutable-after-load word set and answers
//! membership and formability queries. Loading installs the embedded fallback
//! corpus synchronously, then tries to upgrade to a larger network corpus
//! within a bounded waiting budget. A slow or failed fetch never blocks
//! gameplay; the fallback stays authoritative until superseded.

mod embedded;
mod fetch;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
pub use fetch::{CorpusSource, DEFAULT_FETCH_TIMEOUT};

use crate::core::{LetterSet, Word};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

/// The word corpus with membership and scan queries
///
/// Constructed once per process and passed by reference to consumers; there is
/// no ambient global instance.
pub struct Dictionary {
    words: RwLock<Arc<FxHashSet<String>>>,
    loaded: AtomicBool,
    load_once: OnceCell<()>,
    source: CorpusSource,
}

impl Dictionary {
    /// Create an empty dictionary with the default corpus source
    ///
    /// The word set is empty until [`load`](Self::load) runs; membership
    /// queries return false (non-authoritative) until then.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(CorpusSource::default())
    }

    /// Create an empty dictionary with a custom corpus source
    #[must_use]
    pub fn with_source(source: CorpusSource) -> Self {
        Self {
            words: RwLock::new(Arc::new(FxHashSet::default())),
            loaded: AtomicBool::new(false),
            load_once: OnceCell::new(),
            source,
        }
    }

    /// Build an already-loaded dictionary from an explicit word list
    ///
    /// Entries failing the playable-word rules are silently skipped, matching
    /// corpus filtering. Intended for callers that bring their own corpus and
    /// for tests.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: FxHashSet<String> = words
            .into_iter()
            .filter_map(|w| Word::new(w.as_ref()).ok().map(Word::into_text))
            .collect();

        // Pre-completed load cell: a later load() must not replace this corpus
        let dict = Self {
            words: RwLock::new(Arc::new(FxHashSet::default())),
            loaded: AtomicBool::new(false),
            load_once: OnceCell::new_with(Some(())),
            source: CorpusSource::offline(),
        };
        dict.install(set);
        dict
    }

    /// Load the corpus: fallback first, then an optional network upgrade
    ///
    /// Idempotent; concurrent callers share a single in-flight load. The
    /// embedded fallback is installed before any network activity, so the
    /// dictionary is usable the moment this returns (and usually much sooner
    /// than the fetch timeout). A fetched corpus replaces the fallback only if
    /// it is strictly larger. Fetch failures and timeouts are logged and
    /// swallowed; they are never surfaced as errors.
    pub async fn load(&self) {
        self.load_once
            .get_or_init(|| async {
                self.install_fallback();

                if self.source.offline {
                    debug!("offline mode, keeping embedded fallback corpus");
                    return;
                }

                self.try_upgrade().await;
            })
            .await;
    }

    fn install_fallback(&self) {
        let set: FxHashSet<String> = FALLBACK.iter().map(|&w| w.to_string()).collect();
        info!(words = set.len(), "installed embedded fallback corpus");
        self.install(set);
    }

    async fn try_upgrade(&self) {
        let client = reqwest::Client::new();

        for url in &self.source.urls {
            debug!(%url, "attempting corpus upgrade");
            match tokio::time::timeout(self.source.timeout, fetch::fetch_word_list(&client, url))
                .await
            {
                Ok(Ok(fetched)) => {
                    if fetched.len() > self.len() {
                        info!(words = fetched.len(), %url, "upgraded corpus");
                        self.install(fetched);
                    } else {
                        debug!(
                            words = fetched.len(),
                            "fetched corpus not larger than current, keeping fallback"
                        );
                    }
                    return;
                }
                Ok(Err(e)) => {
                    warn!(%url, error = %e, "corpus fetch failed, trying next source");
                }
                Err(_) => {
                    warn!(%url, timeout = ?self.source.timeout, "corpus fetch timed out");
                }
            }
        }

        info!("no network corpus obtained, fallback corpus is authoritative");
    }

    fn install(&self, set: FxHashSet<String>) {
        *self.write() = Arc::new(set);
        self.loaded.store(true, Ordering::Release);
    }

    /// Whether any corpus (fallback or upgraded) has been installed
    #[inline]
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Number of words in the current corpus
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True before any load completes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Check whether the lowercase form of a word is in the corpus
    ///
    /// Returns false before any load; callers should treat a pre-load false
    /// as "not yet authoritative" rather than a definitive rejection.
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        if !self.is_loaded() {
            return false;
        }
        self.read().contains(&word.to_lowercase())
    }

    /// All corpus words playable against the given letter set, sorted ascending
    ///
    /// Scans the whole corpus in parallel; the scan is read-only against an
    /// immutable snapshot, so a concurrent corpus upgrade cannot tear it.
    /// Returns an empty list before any load.
    #[must_use]
    pub fn find_valid_words(&self, letters: &LetterSet) -> Vec<String> {
        if !self.is_loaded() {
            return Vec::new();
        }

        let snapshot = self.snapshot();
        let mut words: Vec<String> = snapshot
            .par_iter()
            .filter(|word| letters.can_form(word))
            .cloned()
            .collect();
        words.par_sort_unstable();
        words
    }

    /// A cheap clone of the current word set
    #[must_use]
    pub fn snapshot(&self) -> Arc<FxHashSet<String>> {
        self.read().clone()
    }

    fn read(&self) -> RwLockReadGuard<'_, Arc<FxHashSet<String>>> {
        self.words.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Arc<FxHashSet<String>>> {
        self.words.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_words_are_playable() {
        // The embedded corpus must already satisfy the filtering rules
        for &word in FALLBACK {
            assert!(word.len() >= 4, "Word '{word}' is too short");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK.len(), FALLBACK_COUNT);
    }

    #[test]
    fn fallback_has_no_duplicates() {
        let set: FxHashSet<&str> = FALLBACK.iter().copied().collect();
        assert_eq!(set.len(), FALLBACK.len());
    }

    #[test]
    fn unloaded_dictionary_is_not_authoritative() {
        let dict = Dictionary::with_source(CorpusSource::offline());
        assert!(!dict.is_loaded());
        assert!(!dict.is_valid_word("apple"));
        assert!(dict.find_valid_words(&sample_letters()).is_empty());
    }

    #[tokio::test]
    async fn offline_load_installs_fallback() {
        let dict = Dictionary::with_source(CorpusSource::offline());
        dict.load().await;

        assert!(dict.is_loaded());
        assert_eq!(dict.len(), FALLBACK_COUNT);
        assert!(dict.is_valid_word("apple"));
        assert!(dict.is_valid_word("APPLE"));
        assert!(!dict.is_valid_word("zzzzz"));
    }

    #[tokio::test]
    async fn load_is_idempotent() {
        let dict = Dictionary::with_source(CorpusSource::offline());
        tokio::join!(dict.load(), dict.load());
        let first = dict.len();

        dict.load().await;
        assert_eq!(dict.len(), first);
    }

    #[test]
    fn from_words_filters_invalid_entries() {
        let dict = Dictionary::from_words(["apple", "cat", "co-op", "PLEA"]);
        assert!(dict.is_loaded());
        assert_eq!(dict.len(), 2);
        assert!(dict.is_valid_word("apple"));
        assert!(dict.is_valid_word("plea"));
    }

    #[test]
    fn find_valid_words_concrete_scenario() {
        // Spec scenario: three-word dictionary, letters {a,p,l,e,x,y,z}, center p
        let dict = Dictionary::from_words(["apple", "plea", "peal"]);
        let words = dict.find_valid_words(&sample_letters());
        assert_eq!(words, vec!["apple", "peal", "plea"]);
    }

    #[test]
    fn find_valid_words_excludes_unformable() {
        let dict = Dictionary::from_words(["apple", "plea", "peal", "pearl", "alley"]);
        let words = dict.find_valid_words(&sample_letters());
        // "pearl" has 'r' outside the set; "alley" lacks the center
        assert_eq!(words, vec!["apple", "peal", "plea"]);
    }

    #[test]
    fn find_valid_words_sorted_on_larger_corpus() {
        let dict = Dictionary::from_words(FALLBACK.iter().copied());
        let words = dict.find_valid_words(&sample_letters());
        let mut sorted = words.clone();
        sorted.sort_unstable();
        assert_eq!(words, sorted);
    }

    fn sample_letters() -> LetterSet {
        LetterSet::new('p', ['a', 'l', 'e', 'x', 'y', 'z']).unwrap()
    }
}
