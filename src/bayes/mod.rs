//! Naive Bayes classification engine.
//!
//! [`Bayes`] accumulates per-category term-frequency statistics from
//! labeled training text and scores new documents with add-one (Laplace)
//! smoothed log-probabilities over the vocabulary observed across all
//! categories. Categories are kept in declaration order; ties are broken in
//! favor of the first-declared category. An optional absolute threshold
//! rejects winners whose score falls below it.
//!
//! # Example
//!
//! ```
//! use clasificar::Bayes;
//!
//! let mut classifier =
//!     Bayes::new(["Interesting", "Uninteresting"]).expect("at least one category");
//! classifier
//!     .train("Interesting", "here are some good words. I hope you love them")
//!     .expect("category exists");
//! classifier
//!     .train("Uninteresting", "here are some bad words, I hate you")
//!     .expect("category exists");
//!
//! assert_eq!(
//!     classifier.classify("I hate bad words and you"),
//!     Some("Uninteresting".to_string())
//! );
//! assert_eq!(classifier.classify("I love"), Some("Interesting".to_string()));
//! ```

mod snapshot;

pub use snapshot::Snapshot;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ClasificarError, Result};
use crate::text::hasher::{TermCounts, WordHasher};
use crate::text::morph::MorphAnalyzer;
use crate::text::stem::Stemmer;
use crate::text::stopwords::StopwordStore;

/// One category's accumulated training statistics.
#[derive(Debug, Clone, Default)]
struct Category {
    name: String,
    term_counts: TermCounts,
    word_count: u64,
    training_count: u64,
}

impl Category {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Naive Bayes text classifier.
///
/// The engine owns its categories and tokenization collaborators; it is
/// single-threaded by contract: there is no internal locking, and callers
/// wanting concurrent use must synchronize externally.
#[derive(Debug)]
pub struct Bayes {
    categories: Vec<Category>,
    language: String,
    enable_stemmer: bool,
    auto_categorize: bool,
    threshold_enabled: bool,
    threshold: f64,
    total_words: u64,
    total_trainings: u64,
    hasher: WordHasher,
}

impl Bayes {
    /// Create an engine over the given categories (declaration order is
    /// preserved and breaks score ties).
    ///
    /// Defaults: language `en`, stemming enabled, auto-categorization
    /// enabled, thresholding disabled with a threshold of 0.0.
    ///
    /// # Errors
    ///
    /// Returns [`ClasificarError::UnsupportedOperation`] when no categories
    /// are given; an engine needs at least one.
    ///
    /// # Examples
    ///
    /// ```
    /// use clasificar::Bayes;
    ///
    /// let classifier = Bayes::new(["Spam", "Ham"]).expect("two categories");
    /// assert_eq!(classifier.categories(), vec!["Spam", "Ham"]);
    /// ```
    pub fn new<I, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut engine = Self {
            categories: Vec::new(),
            language: "en".to_string(),
            enable_stemmer: true,
            auto_categorize: true,
            threshold_enabled: false,
            threshold: 0.0,
            total_words: 0,
            total_trainings: 0,
            hasher: WordHasher::new(),
        };
        for name in categories {
            engine.add_category(name);
        }
        if engine.categories.is_empty() {
            return Err(ClasificarError::UnsupportedOperation {
                operation: "constructing an engine with no categories".to_string(),
            });
        }
        Ok(engine)
    }

    /// Set the language code used for tokenization (stopword lookup and,
    /// for segmented-script codes, morphological segmentation).
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Enable or disable stemming.
    #[must_use]
    pub fn with_stemming(mut self, enabled: bool) -> Self {
        self.enable_stemmer = enabled;
        self
    }

    /// Enable or disable implicit category creation on training.
    #[must_use]
    pub fn with_auto_categorize(mut self, enabled: bool) -> Self {
        self.auto_categorize = enabled;
        self
    }

    /// Enable thresholding with the given rejection threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold_enabled = true;
        self.threshold = threshold;
        self
    }

    /// Inject a stemmer.
    #[must_use]
    pub fn with_stemmer(mut self, stemmer: Box<dyn Stemmer>) -> Self {
        self.hasher = self.hasher.with_stemmer(stemmer);
        self
    }

    /// Inject a morphological analyzer for segmented-script languages.
    #[must_use]
    pub fn with_analyzer(mut self, analyzer: Box<dyn MorphAnalyzer>) -> Self {
        self.hasher = self.hasher.with_analyzer(analyzer);
        self
    }

    /// Inject a stopword store.
    #[must_use]
    pub fn with_stopword_store(mut self, store: StopwordStore) -> Self {
        self.hasher = self.hasher.with_stopword_store(store);
        self
    }

    /// Train `category` on `text`.
    ///
    /// An unknown category is created when auto-categorization is enabled.
    /// Either every count delta is applied or, on error, none.
    ///
    /// # Errors
    ///
    /// Returns [`ClasificarError::CategoryNotFound`] for an unknown
    /// category while auto-categorization is disabled.
    pub fn train(&mut self, category: &str, text: &str) -> Result<()> {
        let index = self.resolve_category(category)?;
        let counts = self
            .hasher
            .word_hash(text, &self.language, self.enable_stemmer);

        let added = counts.total();
        let cat = &mut self.categories[index];
        for (term, count) in counts.iter() {
            cat.term_counts.add(term, count);
        }
        cat.word_count += added;
        cat.training_count += 1;
        self.total_words += added;
        self.total_trainings += 1;

        debug!(category, terms = counts.len(), words = added, "trained");
        Ok(())
    }

    /// Remove a training of `category` on `text`: the exact inverse of
    /// [`train`](Bayes::train), with counts clamped at 0 (totals are
    /// adjusted by the amount actually removed).
    ///
    /// # Errors
    ///
    /// Returns [`ClasificarError::CategoryNotFound`] for an unknown
    /// category while auto-categorization is disabled.
    pub fn untrain(&mut self, category: &str, text: &str) -> Result<()> {
        let index = self.resolve_category(category)?;
        let counts = self
            .hasher
            .word_hash(text, &self.language, self.enable_stemmer);

        let cat = &mut self.categories[index];
        let mut removed = 0u64;
        for (term, count) in counts.iter() {
            removed += u64::from(cat.term_counts.remove(term, count));
        }
        cat.word_count = cat.word_count.saturating_sub(removed);
        cat.training_count = cat.training_count.saturating_sub(1);
        self.total_words = self.total_words.saturating_sub(removed);
        self.total_trainings = self.total_trainings.saturating_sub(1);

        debug!(category, words = removed, "untrained");
        Ok(())
    }

    /// Log-probability score per category, in declaration order.
    ///
    /// For each category the score is the sum over query terms of
    /// `count * ln((seen + 1) / (category_words + vocabulary))`, add-one
    /// smoothing over the vocabulary observed across all categories, plus
    /// a prior `ln(trainings / total_trainings)` once any training has
    /// happened (a category with no trainings of its own is priced at a 0.1
    /// pseudo-count). Scores are always finite; before the first training
    /// every category scores 0 and declaration order decides.
    #[must_use]
    pub fn classifications(&self, text: &str) -> Vec<(String, f64)> {
        let query = self
            .hasher
            .word_hash(text, &self.language, self.enable_stemmer);
        let vocabulary = self.vocabulary_size() as f64;

        self.categories
            .iter()
            .map(|cat| {
                // Floor at 1 so a fully untrained engine stays finite.
                let denominator = (cat.word_count as f64 + vocabulary).max(1.0);
                let mut score = 0.0;
                for (term, count) in query.iter() {
                    let seen = f64::from(cat.term_counts.get(term));
                    score += f64::from(count) * ((seen + 1.0) / denominator).ln();
                }
                if self.total_trainings > 0 {
                    // 0.1 pseudo-count for a category untrained back to
                    // zero; the prior must stay finite.
                    let trainings = if cat.training_count > 0 {
                        cat.training_count as f64
                    } else {
                        0.1
                    };
                    score += (trainings / self.total_trainings as f64).ln();
                }
                (cat.name.clone(), score)
            })
            .collect()
    }

    /// Classify `text`, returning the winning category and its score.
    ///
    /// The winner is the maximum-score category, ties broken by
    /// declaration order. With thresholding enabled the label is `None`
    /// when the winning score falls below the threshold; the score is
    /// returned either way.
    #[must_use]
    pub fn classify_with_score(&self, text: &str) -> (Option<String>, f64) {
        let mut scores = self.classifications(text).into_iter();
        let Some((mut best_name, mut best_score)) = scores.next() else {
            return (None, f64::NEG_INFINITY);
        };
        for (name, score) in scores {
            if score > best_score {
                best_name = name;
                best_score = score;
            }
        }

        if self.threshold_enabled && best_score < self.threshold {
            debug!(
                category = %best_name,
                score = best_score,
                threshold = self.threshold,
                "rejected below threshold"
            );
            return (None, best_score);
        }
        (Some(best_name), best_score)
    }

    /// Classify `text`, returning the winning category or `None` when
    /// thresholding rejects it.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<String> {
        self.classify_with_score(text).0
    }

    /// Add a category; a no-op when the name is already present.
    pub fn add_category(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.categories.iter().any(|cat| cat.name == name) {
            self.categories.push(Category::new(name));
        }
    }

    /// Category names in declaration order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.categories.iter().map(|cat| cat.name.as_str()).collect()
    }

    /// The configured language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether stemming is enabled.
    #[must_use]
    pub fn stemmer_enabled(&self) -> bool {
        self.enable_stemmer
    }

    /// Whether training may create unknown categories implicitly.
    #[must_use]
    pub fn auto_categorize_enabled(&self) -> bool {
        self.auto_categorize
    }

    /// Whether thresholding is enabled.
    #[must_use]
    pub fn threshold_enabled(&self) -> bool {
        self.threshold_enabled
    }

    /// The rejection threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Enable thresholding.
    pub fn enable_threshold(&mut self) {
        self.threshold_enabled = true;
    }

    /// Disable thresholding.
    pub fn disable_threshold(&mut self) {
        self.threshold_enabled = false;
    }

    /// Set the rejection threshold.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    /// Grand total of trained words across all categories.
    #[must_use]
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Grand total of training calls across all categories.
    #[must_use]
    pub fn total_trainings(&self) -> u64 {
        self.total_trainings
    }

    /// Training calls recorded for `category`, `None` when unknown.
    #[must_use]
    pub fn training_count(&self, category: &str) -> Option<u64> {
        self.categories
            .iter()
            .find(|cat| cat.name == category)
            .map(|cat| cat.training_count)
    }

    /// The word hasher in use (exposes `clean_word_hash` and the stopword
    /// store).
    #[must_use]
    pub fn hasher(&self) -> &WordHasher {
        &self.hasher
    }

    /// Register a custom stopword search path.
    pub fn add_stopword_path(&self, path: impl Into<std::path::PathBuf>) {
        self.hasher.add_stopword_path(path);
    }

    fn resolve_category(&mut self, name: &str) -> Result<usize> {
        if let Some(index) = self.categories.iter().position(|cat| cat.name == name) {
            return Ok(index);
        }
        if !self.auto_categorize {
            return Err(ClasificarError::CategoryNotFound {
                category: name.to_string(),
            });
        }
        debug!(category = name, "auto-created category");
        self.categories.push(Category::new(name));
        Ok(self.categories.len() - 1)
    }

    /// Number of distinct terms observed across all categories.
    fn vocabulary_size(&self) -> usize {
        let mut vocabulary: HashSet<&str> = HashSet::new();
        for cat in &self.categories {
            for (term, _) in cat.term_counts.iter() {
                vocabulary.insert(term);
            }
        }
        vocabulary.len()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
