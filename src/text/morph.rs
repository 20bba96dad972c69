//! Morphological segmentation seam for segmented-script languages.
//!
//! Languages written without word separators (Japanese in particular) cannot
//! be tokenized by whitespace splitting. The pipeline delegates those to a
//! [`MorphAnalyzer`]: a black box that maps a string to an ordered sequence
//! of morphemes with part-of-speech tags and base forms. The default
//! implementation shells out to a JUMAN-style segmenter; tests substitute a
//! stub so the classification core never depends on the external tool.

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use crate::error::Result;

/// Environment variable overriding the segmenter launch command.
pub const ANALYZER_CMD_ENV: &str = "JUMAN_CMD";

const DEFAULT_COMMAND: &str = "juman";

/// One segmented unit of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Morpheme {
    /// The form as it appears in the input.
    pub surface: String,
    /// The dictionary base form.
    pub base: String,
    /// Part-of-speech class assigned by the analyzer.
    pub pos: PartOfSpeech,
}

/// Part-of-speech classes as reported by the analyzer.
///
/// Tags the analyzer emits natively (Japanese strings for JUMAN) are mapped
/// into this enum; anything unrecognized lands in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Particle,
    Demonstrative,
    Special,
    Suffix,
    Other(String),
}

impl PartOfSpeech {
    /// Map an analyzer-native tag to a class.
    ///
    /// # Examples
    ///
    /// ```
    /// use clasificar::text::morph::PartOfSpeech;
    ///
    /// assert_eq!(PartOfSpeech::from_tag("名詞"), PartOfSpeech::Noun);
    /// assert_eq!(PartOfSpeech::from_tag("助詞"), PartOfSpeech::Particle);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "名詞" => PartOfSpeech::Noun,
            "動詞" => PartOfSpeech::Verb,
            "形容詞" => PartOfSpeech::Adjective,
            "副詞" => PartOfSpeech::Adverb,
            "助詞" => PartOfSpeech::Particle,
            "指示詞" => PartOfSpeech::Demonstrative,
            "特殊" => PartOfSpeech::Special,
            "接尾辞" => PartOfSpeech::Suffix,
            other => PartOfSpeech::Other(other.to_string()),
        }
    }

    /// Function-word classes carry no topical content and are dropped from
    /// the candidate-word stream: particles, demonstratives, specials
    /// (punctuation and the like), and suffixes.
    #[must_use]
    pub fn is_function_word(&self) -> bool {
        matches!(
            self,
            PartOfSpeech::Particle
                | PartOfSpeech::Demonstrative
                | PartOfSpeech::Special
                | PartOfSpeech::Suffix
        )
    }
}

/// Maps a string to an ordered sequence of morphemes.
pub trait MorphAnalyzer {
    /// Segment `text` into morphemes.
    ///
    /// # Errors
    ///
    /// Returns an error if the analyzer cannot be reached or produces
    /// unusable output. Callers in the tokenization pipeline absorb the
    /// failure and fall back to whitespace splitting.
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>>;
}

/// Analyzer backed by an external JUMAN-style segmenter process.
///
/// The launch command defaults to `juman` and may be overridden with the
/// `JUMAN_CMD` environment variable (arguments split on whitespace). Input
/// is written to the child's stdin; output is the usual line-oriented
/// format, one morpheme per line terminated by `EOS`, with `@`-prefixed
/// lines marking alternative readings.
#[derive(Debug, Clone)]
pub struct JumanAnalyzer {
    command: String,
}

impl JumanAnalyzer {
    /// Create an analyzer using `JUMAN_CMD` or the default command.
    #[must_use]
    pub fn new() -> Self {
        let command =
            env::var(ANALYZER_CMD_ENV).unwrap_or_else(|_| DEFAULT_COMMAND.to_string());
        Self { command }
    }

    /// Create an analyzer with an explicit launch command.
    #[must_use]
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for JumanAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphAnalyzer for JumanAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<Morpheme>> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| crate::error::ClasificarError::UnsupportedOperation {
                operation: "morphological analysis with an empty launch command".to_string(),
            })?;

        debug!(command = %self.command, bytes = text.len(), "invoking segmenter");
        let mut child = Command::new(program)
            .args(parts)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(text.as_bytes())?;
            stdin.write_all(b"\n")?;
        }

        let output = child.wait_with_output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let morphemes = parse_output(&stdout);
        trace!(count = morphemes.len(), "segmenter returned morphemes");
        Ok(morphemes)
    }
}

/// Parse JUMAN's line-oriented output: `surface reading base pos …` fields
/// separated by spaces, `EOS` closing each sentence, `@` lines carrying
/// alternative readings for the previous morpheme.
fn parse_output(output: &str) -> Vec<Morpheme> {
    let mut morphemes = Vec::new();
    for line in output.lines() {
        if line == "EOS" || line.starts_with('@') || line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() < 4 {
            continue;
        }
        let surface = fields[0].to_string();
        let base = match fields[2] {
            "" | "*" => surface.clone(),
            base => base.to_string(),
        };
        morphemes.push(Morpheme {
            surface,
            base,
            pos: PartOfSpeech::from_tag(fields[3]),
        });
    }
    morphemes
}

#[cfg(test)]
#[path = "morph_tests.rs"]
mod tests;
