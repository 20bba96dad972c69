//! Stemming seam for word normalization.
//!
//! Stemming reduces words to their root form ("running" → "run") so that
//! inflected variants count as the same term. The algorithm itself is an
//! external collaborator: the default implementation wraps the Snowball
//! stemmers from the `rust_stemmers` crate, and callers may inject any
//! [`Stemmer`] of their own.
//!
//! # Examples
//!
//! ```
//! use clasificar::text::stem::{SnowballStemmer, Stemmer};
//!
//! let stemmer = SnowballStemmer::english();
//! assert_eq!(stemmer.stem("running").expect("stem should succeed"), "run");
//! assert_eq!(stemmer.stem("words").expect("stem should succeed"), "word");
//! ```

use rust_stemmers::Algorithm;

use crate::error::Result;

/// Trait for stemming algorithms.
///
/// Implementations may fail; the tokenization pipeline treats any failure
/// (or an output carrying the Unicode replacement character) as a signal to
/// keep the original word.
pub trait Stemmer {
    /// Stem a single word to its root form.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing algorithm cannot produce a stem.
    fn stem(&self, word: &str) -> Result<String>;
}

/// Snowball-backed stemmer.
///
/// `rust_stemmers::Stemmer` implements neither `Clone` nor `Debug`, so both
/// are provided manually by recreating from the stored algorithm.
pub struct SnowballStemmer {
    stemmer: rust_stemmers::Stemmer,
    algorithm: Algorithm,
}

impl SnowballStemmer {
    /// Create a stemmer for the given Snowball algorithm.
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            stemmer: rust_stemmers::Stemmer::create(algorithm),
            algorithm,
        }
    }

    /// Create an English Snowball stemmer.
    ///
    /// # Examples
    ///
    /// ```
    /// use clasificar::text::stem::{SnowballStemmer, Stemmer};
    ///
    /// let stemmer = SnowballStemmer::english();
    /// assert_eq!(stemmer.stem("cats").expect("stem should succeed"), "cat");
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(Algorithm::English)
    }
}

impl Clone for SnowballStemmer {
    fn clone(&self) -> Self {
        Self {
            stemmer: rust_stemmers::Stemmer::create(self.algorithm),
            algorithm: self.algorithm,
        }
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        Ok(self.stemmer.stem(word).into_owned())
    }
}

#[cfg(test)]
#[path = "stem_tests.rs"]
mod tests;
