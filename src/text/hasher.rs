//! Word hashing: raw text to a weighted term multiset.
//!
//! [`WordHasher`] turns a document into [`TermCounts`] in five steps:
//! strip non-word characters and lowercase, extract candidate words (by
//! whitespace splitting, or through the [`MorphAnalyzer`] for
//! segmented-script languages), filter short words and stopwords, stem, and
//! merge in the standalone punctuation/symbol characters counted from the
//! original text. Symbol terms are never stemmed, never stopword-filtered,
//! and never length-filtered.
//!
//! # Examples
//!
//! ```
//! use clasificar::text::hasher::WordHasher;
//!
//! let hasher = WordHasher::new();
//! let counts = hasher.word_hash("I love", "en", false);
//! assert_eq!(counts.get("love"), 1);
//! assert_eq!(counts.len(), 1); // "I" is too short to count
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::text::morph::MorphAnalyzer;
use crate::text::stem::{SnowballStemmer, Stemmer};
use crate::text::stopwords::StopwordStore;

/// Marker signalling that a stemmer mangled the word (encoding loss); the
/// original word is kept instead.
const REPLACEMENT_MARKER: char = '\u{FFFD}';

/// A single character that is neither a word character nor whitespace.
static SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid symbol pattern"));

/// Weighted term multiset: term → non-negative count.
///
/// Absent terms count 0; entries are created only on update and pruned when
/// they drop back to 0, so the set of keys is exactly the set of terms with
/// positive counts. Backed by a `BTreeMap` so iteration and serialization
/// are deterministic.
///
/// # Examples
///
/// ```
/// use clasificar::text::hasher::TermCounts;
///
/// let mut counts = TermCounts::new();
/// assert_eq!(counts.get("word"), 0);
/// counts.add("word", 2);
/// assert_eq!(counts.get("word"), 2);
/// assert_eq!(counts.total(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermCounts {
    counts: BTreeMap<String, u32>,
}

impl TermCounts {
    /// Create an empty multiset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The count for `term`, 0 when absent.
    #[must_use]
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Add `n` occurrences of `term`.
    pub fn add(&mut self, term: impl Into<String>, n: u32) {
        if n == 0 {
            return;
        }
        *self.counts.entry(term.into()).or_insert(0) += n;
    }

    /// Remove up to `n` occurrences of `term`, clamping at 0 and pruning
    /// the entry when it empties. Returns the number actually removed.
    pub fn remove(&mut self, term: &str, n: u32) -> u32 {
        let Some(count) = self.counts.get_mut(term) else {
            return 0;
        };
        let removed = n.min(*count);
        *count -= removed;
        if *count == 0 {
            self.counts.remove(term);
        }
        removed
    }

    /// Merge another multiset in, additively on shared terms.
    pub fn merge(&mut self, other: TermCounts) {
        for (term, count) in other.counts {
            self.add(term, count);
        }
    }

    /// Iterate over `(term, count)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the multiset is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().map(|count| u64::from(*count)).sum()
    }
}

/// Turns raw text into a weighted term multiset.
///
/// Owns its tokenization collaborators: the stopword store, the stemmer,
/// and (optionally) the morphological analyzer for segmented-script
/// languages. All of them are injectable in the builder style.
pub struct WordHasher {
    stopwords: StopwordStore,
    stemmer: Box<dyn Stemmer>,
    analyzer: Option<Box<dyn MorphAnalyzer>>,
}

impl fmt::Debug for WordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordHasher")
            .field("stopwords", &self.stopwords)
            .field("analyzer", &self.analyzer.is_some())
            .finish()
    }
}

impl Default for WordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl WordHasher {
    /// Create a hasher with the default collaborators: an empty-search-path
    /// stopword store, the English Snowball stemmer, and no morphological
    /// analyzer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stopwords: StopwordStore::new(),
            stemmer: Box::new(SnowballStemmer::english()),
            analyzer: None,
        }
    }

    /// Replace the stemmer.
    #[must_use]
    pub fn with_stemmer(mut self, stemmer: Box<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Attach a morphological analyzer for segmented-script languages.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Box<dyn MorphAnalyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Replace the stopword store.
    #[must_use]
    pub fn with_stopword_store(mut self, store: StopwordStore) -> Self {
        self.stopwords = store;
        self
    }

    /// The stopword store in use.
    #[must_use]
    pub fn stopword_store(&self) -> &StopwordStore {
        &self.stopwords
    }

    /// Register a custom stopword search path (takes priority over
    /// previously registered paths for languages not yet cached).
    pub fn add_stopword_path(&self, path: impl Into<PathBuf>) {
        self.stopwords.register_search_path(path);
    }

    /// Hash `text` into a weighted term multiset: cleaned, filtered,
    /// optionally stemmed words plus standalone symbol characters.
    #[must_use]
    pub fn word_hash(&self, text: &str, language: &str, enable_stemmer: bool) -> TermCounts {
        let mut counts = self.clean_word_hash(text, language, enable_stemmer);
        counts.merge(self.symbol_hash(text));
        counts
    }

    /// Hash `text` into word terms only: no symbol extraction.
    #[must_use]
    pub fn clean_word_hash(&self, text: &str, language: &str, enable_stemmer: bool) -> TermCounts {
        let clean = SYMBOL.replace_all(text, "").to_lowercase();
        let words = self.candidate_words(&clean, language);
        self.hash_words(words, language, enable_stemmer)
    }

    /// Candidate words from the cleaned text: morphological segmentation
    /// for segmented-script languages (minus function-word morphemes),
    /// whitespace splitting otherwise. Analyzer failures degrade to
    /// whitespace splitting.
    fn candidate_words(&self, clean: &str, language: &str) -> Vec<String> {
        if is_segmented(language) {
            if let Some(analyzer) = &self.analyzer {
                match analyzer.analyze(clean) {
                    Ok(morphemes) => {
                        return morphemes
                            .into_iter()
                            .filter(|m| !m.pos.is_function_word())
                            .map(|m| m.base)
                            .collect();
                    }
                    Err(err) => {
                        warn!(language, %err, "analyzer failed, splitting on whitespace");
                    }
                }
            }
        }
        clean.split_whitespace().map(str::to_string).collect()
    }

    fn hash_words(&self, words: Vec<String>, language: &str, enable_stemmer: bool) -> TermCounts {
        let mut counts = TermCounts::new();
        let length_filtered = !is_segmented(language);
        for word in words {
            if length_filtered && word.chars().count() <= 2 {
                continue;
            }
            if self.stopwords.is_stopword(language, &word) {
                continue;
            }
            let term = if enable_stemmer {
                match self.stemmer.stem(&word) {
                    Ok(stem) if !stem.contains(REPLACEMENT_MARKER) => stem,
                    // Failed or mangled stems keep the original word.
                    _ => word,
                }
            } else {
                word
            };
            counts.add(term, 1);
        }
        counts
    }

    /// Count every standalone non-word, non-whitespace character in the
    /// original text as its own term.
    fn symbol_hash(&self, text: &str) -> TermCounts {
        let mut counts = TermCounts::new();
        for symbol in SYMBOL.find_iter(text) {
            counts.add(symbol.as_str(), 1);
        }
        counts
    }
}

/// Segmented-script language codes are routed through the morphological
/// analyzer and skip the short-word filter.
fn is_segmented(language: &str) -> bool {
    matches!(language, "ja" | "en-ja")
}

#[cfg(test)]
#[path = "hasher_tests.rs"]
mod tests;
