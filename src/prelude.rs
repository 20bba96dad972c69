//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use clasificar::prelude::*;
//! ```

pub use crate::bayes::{Bayes, Snapshot};
pub use crate::error::{ClasificarError, Result};
pub use crate::text::hasher::{TermCounts, WordHasher};
pub use crate::text::morph::{JumanAnalyzer, MorphAnalyzer, Morpheme, PartOfSpeech};
pub use crate::text::stem::{SnowballStemmer, Stemmer};
pub use crate::text::stopwords::StopwordStore;
