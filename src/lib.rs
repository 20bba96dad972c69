//! Clasificar: naive Bayes text classification with a word-hashing
//! tokenization pipeline.
//!
//! The crate learns to assign free-text documents to user-defined
//! categories from labeled examples. Text flows through the
//! [`text::WordHasher`] (stopword filtering, Snowball stemming, optional
//! morphological segmentation for segmented-script languages, symbol
//! extraction) into a weighted term multiset; the [`Bayes`] engine
//! accumulates per-category term frequencies and scores new documents with
//! Laplace-smoothed log-probabilities.
//!
//! # Quick Start
//!
//! ```
//! use clasificar::Bayes;
//!
//! let mut classifier =
//!     Bayes::new(["Interesting", "Uninteresting"]).expect("at least one category");
//!
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
//!
//! // Models snapshot to a stable JSON layout and restore bit-for-bit.
//! let snapshot = classifier.snapshot();
//! let mut restored = Bayes::new(["Interesting", "Uninteresting"]).expect("categories");
//! restored.restore(&snapshot).expect("well-formed snapshot");
//! assert_eq!(restored.classify("I love"), Some("Interesting".to_string()));
//! ```
//!
//! # Modules
//!
//! - [`bayes`]: the classification engine and its snapshot format
//! - [`text`]: the tokenization pipeline (hasher, stopwords, stemming,
//!   morphological analysis)
//! - [`error`]: the crate error type
//! - [`prelude`]: convenience re-exports

pub mod bayes;
pub mod error;
pub mod prelude;
pub mod text;

pub use bayes::{Bayes, Snapshot};
pub use error::{ClasificarError, Result};
