//! Text processing: the word-hashing pipeline and its collaborators.
//!
//! This module turns raw text into the weighted term multisets the Bayes
//! engine trains on and classifies:
//!
//! - [`hasher`]: [`WordHasher`](hasher::WordHasher) and
//!   [`TermCounts`](hasher::TermCounts), the pipeline itself
//! - [`stopwords`]: per-language stopword sets resolved through an ordered
//!   search path of directories
//! - [`stem`]: the [`Stemmer`](stem::Stemmer) seam with a Snowball-backed
//!   default
//! - [`morph`]: the [`MorphAnalyzer`](morph::MorphAnalyzer) seam for
//!   segmented-script languages, with a subprocess-backed default

pub mod hasher;
pub mod morph;
pub mod stem;
pub mod stopwords;

pub use hasher::{TermCounts, WordHasher};
pub use morph::{JumanAnalyzer, MorphAnalyzer, Morpheme, PartOfSpeech};
pub use stem::{SnowballStemmer, Stemmer};
pub use stopwords::StopwordStore;
