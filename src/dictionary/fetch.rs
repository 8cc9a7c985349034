//! Network corpus fetching
//!
//! Downloads a newline-delimited word list and filters it to playable words.
//! Every failure mode here is recoverable: callers fall back to the embedded
//! corpus, so nothing in this module is ever fatal.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::time::Duration;

/// Primary corpus: large public English word list
const PRIMARY_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

/// Backup corpus: smaller but reliable list
const BACKUP_URL: &str =
    "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english-usa.txt";

/// Default waiting budget per source before giving up on the network
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to obtain the upgraded corpus
#[derive(Debug, Clone)]
pub struct CorpusSource {
    /// Candidate URLs, tried in order until one yields a usable corpus
    pub urls: Vec<String>,
    /// Waiting budget per URL
    pub timeout: Duration,
    /// Skip the network entirely and keep the embedded fallback
    pub offline: bool,
}

impl Default for CorpusSource {
    fn default() -> Self {
        Self {
            urls: vec![PRIMARY_URL.to_string(), BACKUP_URL.to_string()],
            timeout: DEFAULT_FETCH_TIMEOUT,
            offline: false,
        }
    }
}

impl CorpusSource {
    /// A source that never touches the network
    #[must_use]
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }
}

/// Fetch a newline-delimited word list and filter it to playable words
///
/// # Errors
/// Returns the transport error if the request or body read fails. An empty
/// result after filtering is reported as `Ok` with an empty set; the caller
/// decides whether that is usable.
pub(crate) async fn fetch_word_list(
    client: &reqwest::Client,
    url: &str,
) -> reqwest::Result<FxHashSet<String>> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    Ok(filter_corpus(&body))
}

/// Filter raw corpus text to the playable subset
///
/// Keeps lowercase ASCII alphabetic words of length >= 4; drops anything with
/// hyphens, apostrophes, digits, or non-ASCII characters.
#[must_use]
pub(crate) fn filter_corpus(text: &str) -> FxHashSet<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok().map(Word::into_text)
            }
        })
        .collect()
}
