//! Stopword sets resolved through an ordered search path.
//!
//! Stopwords are common words (like "the", "is", "at") that carry little
//! semantic meaning and are excluded from term counting. Sets are loaded
//! per language code from plain-text files (whitespace-separated words, file
//! name equal to the language code) found on an ordered list of search-path
//! directories. Corpora for `en` and `fr` are bundled with the crate and act
//! as the fallback when no registered directory provides a file.
//!
//! Lookups are memoized per language code, including the empty result for an
//! unknown language. The store uses interior mutability so it can be shared
//! behind `&self` during classification; it is **not** thread-safe, matching
//! the single-threaded contract of the engine that owns it.
//!
//! # Examples
//!
//! ```
//! use clasificar::text::stopwords::StopwordStore;
//!
//! let store = StopwordStore::new();
//! assert!(store.is_stopword("en", "the"));
//! assert!(!store.is_stopword("en", "machine"));
//!
//! // Unknown languages resolve to the empty set.
//! assert!(store.stopwords("gibberish").is_empty());
//! ```

use std::cell::{Ref, RefCell};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;

use tracing::{debug, warn};

/// Stopword corpora shipped with the crate, consulted when no search-path
/// directory provides a file for the requested language.
const BUNDLED: &[(&str, &str)] = &[
    ("en", include_str!("../../data/stopwords/en")),
    ("fr", include_str!("../../data/stopwords/fr")),
];

/// Per-language stopword sets backed by an ordered directory search path.
///
/// The first directory on the path containing a file named exactly like the
/// language code supplies the set. Results are cached; registering a new
/// search path affects only languages not yet cached, so callers needing a
/// refresh must [`invalidate`](StopwordStore::invalidate) or
/// [`clear`](StopwordStore::clear) explicitly.
#[derive(Debug, Default)]
pub struct StopwordStore {
    search_paths: RefCell<Vec<PathBuf>>,
    cache: RefCell<HashMap<String, HashSet<String>>>,
}

impl StopwordStore {
    /// Create a store with an empty search path (bundled corpora only).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `path` to the search order.
    ///
    /// The new path takes priority over previously registered paths on the
    /// next lookup of a language that is not yet cached. Already-cached
    /// languages are unaffected until invalidated.
    pub fn register_search_path(&self, path: impl Into<PathBuf>) {
        self.search_paths.borrow_mut().insert(0, path.into());
    }

    /// The stopword set for `language`, loading and caching it on first
    /// access.
    ///
    /// # Examples
    ///
    /// ```
    /// use clasificar::text::stopwords::StopwordStore;
    ///
    /// let store = StopwordStore::new();
    /// assert!(store.stopwords("en").contains("because"));
    /// ```
    pub fn stopwords(&self, language: &str) -> Ref<'_, HashSet<String>> {
        self.ensure_loaded(language);
        Ref::map(self.cache.borrow(), |cache| {
            cache.get(language).expect("entry cached by ensure_loaded")
        })
    }

    /// Whether `word` is a stopword for `language`.
    #[must_use]
    pub fn is_stopword(&self, language: &str, word: &str) -> bool {
        self.stopwords(language).contains(word)
    }

    /// Drop the cached set for `language`, forcing a re-scan on next lookup.
    pub fn invalidate(&self, language: &str) {
        self.cache.borrow_mut().remove(language);
    }

    /// Reset the entire cache.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    fn ensure_loaded(&self, language: &str) {
        if self.cache.borrow().contains_key(language) {
            return;
        }
        let set = self.load(language);
        self.cache.borrow_mut().insert(language.to_string(), set);
    }

    fn load(&self, language: &str) -> HashSet<String> {
        for dir in self.search_paths.borrow().iter() {
            let file = dir.join(language);
            if !file.is_file() {
                continue;
            }
            match fs::read_to_string(&file) {
                Ok(content) => {
                    let set = parse_stopword_file(&content);
                    debug!(language, file = %file.display(), words = set.len(), "loaded stopwords");
                    return set;
                }
                Err(err) => {
                    warn!(language, file = %file.display(), %err, "unreadable stopword file, skipping");
                }
            }
        }

        for (code, content) in BUNDLED {
            if *code == language {
                let set = parse_stopword_file(content);
                debug!(language, words = set.len(), "loaded bundled stopwords");
                return set;
            }
        }

        debug!(language, "no stopword file found, caching empty set");
        HashSet::new()
    }
}

fn parse_stopword_file(content: &str) -> HashSet<String> {
    content.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
