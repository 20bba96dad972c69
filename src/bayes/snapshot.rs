//! Engine snapshots: a structural dump of trained state with a fixed wire
//! layout.
//!
//! The JSON form is a 10-element array whose order and defaults are a
//! compatibility contract with previously persisted models:
//!
//! ```text
//! [ category term tables,        declaration order
//!   grand total word count,
//!   per-category training counts, positive entries only
//!   per-category word totals,     positive entries only
//!   language code,
//!   threshold-enabled flag,
//!   reserved flag,                always false, never interpreted
//!   threshold,
//!   stemmer-enabled flag,
//!   auto-categorize flag ]
//! ```
//!
//! A freshly constructed two-category engine therefore serializes to
//! exactly
//! `[{"Interesting":{},"Uninteresting":{}},0,{},{},"en-ja",false,false,0.0,true,true]`.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use super::{Bayes, Category};
use crate::error::{ClasificarError, Result};
use crate::text::hasher::TermCounts;

/// Structural dump of an engine's trained state.
///
/// Produced by [`Bayes::snapshot`] and consumed by [`Bayes::restore`];
/// convertible to and from the JSON wire format. Two snapshots compare
/// equal iff the engines they came from hold identical trained state and
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    tables: Vec<(String, TermCounts)>,
    total_words: u64,
    training_counts: Vec<(String, u64)>,
    word_counts: Vec<(String, u64)>,
    language: String,
    threshold_enabled: bool,
    reserved: bool,
    threshold: f64,
    stemmer_enabled: bool,
    auto_categorize: bool,
}

impl Snapshot {
    /// Render the snapshot as its JSON wire format.
    ///
    /// # Errors
    ///
    /// Returns [`ClasificarError::Snapshot`] if the document cannot be
    /// rendered.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.to_value()?).map_err(|err| ClasificarError::Snapshot {
            message: format!("cannot render document: {err}"),
        })
    }

    /// Parse a snapshot from its JSON wire format.
    ///
    /// # Errors
    ///
    /// Returns [`ClasificarError::Snapshot`] for malformed documents.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|err| ClasificarError::Snapshot {
            message: format!("not valid JSON: {err}"),
        })?;
        Self::from_value(&value)
    }

    fn to_value(&self) -> Result<Value> {
        let mut tables = Map::new();
        for (name, counts) in &self.tables {
            let table = serde_json::to_value(counts).map_err(|err| ClasificarError::Snapshot {
                message: format!("cannot render term table for {name}: {err}"),
            })?;
            tables.insert(name.clone(), table);
        }

        Ok(Value::Array(vec![
            Value::Object(tables),
            Value::from(self.total_words),
            counter_map(&self.training_counts),
            counter_map(&self.word_counts),
            Value::from(self.language.clone()),
            Value::from(self.threshold_enabled),
            Value::from(self.reserved),
            Value::from(self.threshold),
            Value::from(self.stemmer_enabled),
            Value::from(self.auto_categorize),
        ]))
    }

    fn from_value(value: &Value) -> Result<Self> {
        let fields = value.as_array().ok_or_else(|| snapshot_error("expected an array"))?;
        if fields.len() != 10 {
            return Err(snapshot_error(&format!(
                "expected 10 fields, found {}",
                fields.len()
            )));
        }

        let raw_tables = fields[0]
            .as_object()
            .ok_or_else(|| snapshot_error("field 1: expected category tables"))?;
        let mut tables = Vec::with_capacity(raw_tables.len());
        for (name, table) in raw_tables {
            let counts: TermCounts =
                serde_json::from_value(table.clone()).map_err(|err| {
                    snapshot_error(&format!("field 1: bad term table for {name}: {err}"))
                })?;
            tables.push((name.clone(), counts));
        }

        Ok(Self {
            tables,
            total_words: fields[1]
                .as_u64()
                .ok_or_else(|| snapshot_error("field 2: expected a word total"))?,
            training_counts: counter_entries(&fields[2], "field 3")?,
            word_counts: counter_entries(&fields[3], "field 4")?,
            language: fields[4]
                .as_str()
                .ok_or_else(|| snapshot_error("field 5: expected a language code"))?
                .to_string(),
            threshold_enabled: fields[5]
                .as_bool()
                .ok_or_else(|| snapshot_error("field 6: expected a flag"))?,
            reserved: fields[6]
                .as_bool()
                .ok_or_else(|| snapshot_error("field 7: expected a flag"))?,
            threshold: fields[7]
                .as_f64()
                .ok_or_else(|| snapshot_error("field 8: expected a threshold"))?,
            stemmer_enabled: fields[8]
                .as_bool()
                .ok_or_else(|| snapshot_error("field 9: expected a flag"))?,
            auto_categorize: fields[9]
                .as_bool()
                .ok_or_else(|| snapshot_error("field 10: expected a flag"))?,
        })
    }
}

fn snapshot_error(message: &str) -> ClasificarError {
    ClasificarError::Snapshot {
        message: message.to_string(),
    }
}

fn counter_map(entries: &[(String, u64)]) -> Value {
    let mut map = Map::new();
    for (name, count) in entries {
        map.insert(name.clone(), Value::from(*count));
    }
    Value::Object(map)
}

fn counter_entries(value: &Value, field: &str) -> Result<Vec<(String, u64)>> {
    let map = value
        .as_object()
        .ok_or_else(|| snapshot_error(&format!("{field}: expected a counter map")))?;
    let mut entries = Vec::with_capacity(map.len());
    for (name, count) in map {
        let count = count
            .as_u64()
            .ok_or_else(|| snapshot_error(&format!("{field}: bad count for {name}")))?;
        entries.push((name.clone(), count));
    }
    Ok(entries)
}

impl Bayes {
    /// Dump the engine's trained state and configuration.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let positive = |count: u64| count > 0;
        Snapshot {
            tables: self
                .categories
                .iter()
                .map(|cat| (cat.name.clone(), cat.term_counts.clone()))
                .collect(),
            total_words: self.total_words,
            training_counts: self
                .categories
                .iter()
                .filter(|cat| positive(cat.training_count))
                .map(|cat| (cat.name.clone(), cat.training_count))
                .collect(),
            word_counts: self
                .categories
                .iter()
                .filter(|cat| positive(cat.word_count))
                .map(|cat| (cat.name.clone(), cat.word_count))
                .collect(),
            language: self.language.clone(),
            threshold_enabled: self.threshold_enabled,
            reserved: false,
            threshold: self.threshold,
            stemmer_enabled: self.enable_stemmer,
            auto_categorize: self.auto_categorize,
        }
    }

    /// Rebuild the engine's state from a snapshot, keeping the injected
    /// tokenization collaborators. Categories are recreated in document
    /// order, empty ones included.
    ///
    /// # Errors
    ///
    /// Returns [`ClasificarError::Snapshot`] when the document carries no
    /// categories.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<()> {
        if snapshot.tables.is_empty() {
            return Err(snapshot_error("document carries no categories"));
        }

        let counter = |entries: &[(String, u64)], name: &str| {
            entries
                .iter()
                .find(|(entry, _)| entry == name)
                .map(|(_, count)| *count)
        };

        self.categories = snapshot
            .tables
            .iter()
            .map(|(name, counts)| Category {
                name: name.clone(),
                word_count: counter(&snapshot.word_counts, name).unwrap_or_else(|| counts.total()),
                training_count: counter(&snapshot.training_counts, name).unwrap_or(0),
                term_counts: counts.clone(),
            })
            .collect();
        self.total_words = snapshot.total_words;
        self.total_trainings = self
            .categories
            .iter()
            .map(|cat| cat.training_count)
            .sum();
        self.language = snapshot.language.clone();
        self.threshold_enabled = snapshot.threshold_enabled;
        self.threshold = snapshot.threshold;
        self.enable_stemmer = snapshot.stemmer_enabled;
        self.auto_categorize = snapshot.auto_categorize;

        debug!(categories = self.categories.len(), words = self.total_words, "restored");
        Ok(())
    }

    /// Write the engine's snapshot to `path` atomically (temp file in the
    /// same directory, renamed into place).
    ///
    /// # Errors
    ///
    /// Returns [`ClasificarError::Io`] on filesystem failures and
    /// [`ClasificarError::Snapshot`] if the document cannot be rendered.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.snapshot().to_json()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.persist(path)
            .map_err(|err| ClasificarError::Io(err.error))?;

        debug!(path = %path.display(), bytes = json.len(), "saved snapshot");
        Ok(())
    }

    /// Restore the engine from a snapshot file written by
    /// [`save`](Bayes::save).
    ///
    /// # Errors
    ///
    /// Returns [`ClasificarError::Io`] on filesystem failures and
    /// [`ClasificarError::Snapshot`] for malformed documents.
    pub fn load_snapshot<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let json = fs::read_to_string(path)?;
        let snapshot = Snapshot::from_json(&json)?;
        self.restore(&snapshot)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
