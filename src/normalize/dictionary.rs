//! Translation Table Stage
//!
//! A lookup table mapping foreign or synonym terms onto one canonical word.
//! Stands in for an external translation service: anything that can produce
//! `term -> canonical` pairs can feed it.

use super::normalizer::{AlphabeticValidator, Normalizer};
use super::types::{DictionaryError, Rejection};

use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Maps known terms to their canonical word; unknown words pass through.
///
/// Terms and targets are stored lower-cased and lookups are
/// case-insensitive. A target may never also be a term, which keeps
/// translation idempotent: translating a canonical word is a no-op.
#[derive(Debug, Default, Clone)]
pub struct DictionaryTranslator {
    entries: HashMap<String, String>,
    targets: HashSet<String>,
}

impl DictionaryTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(term, canonical)` pairs.
    pub fn from_pairs<I, T, C>(pairs: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = (T, C)>,
        T: AsRef<str>,
        C: AsRef<str>,
    {
        let mut translator = Self::new();
        for (term, target) in pairs {
            translator.insert(term.as_ref(), target.as_ref())?;
        }
        Ok(translator)
    }

    /// Parses a JSON object of the form `{"flor": "flower", "Blume": "flower"}`.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let pairs: HashMap<String, String> =
            serde_json::from_str(json).map_err(DictionaryError::Parse)?;
        // Sorted so that conflict errors are reported deterministically.
        let mut pairs: Vec<_> = pairs.into_iter().collect();
        pairs.sort();
        Self::from_pairs(pairs)
    }

    /// Reads a JSON translation table from disk.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let translator = Self::from_json_str(&json)?;
        tracing::info!(
            "Loaded {} translations from {}",
            translator.len(),
            path.display()
        );
        Ok(translator)
    }

    /// Adds a single `term -> target` mapping.
    ///
    /// Re-inserting an identical mapping is accepted; mapping a word to
    /// itself is a no-op.
    pub fn insert(&mut self, term: &str, target: &str) -> Result<(), DictionaryError> {
        let term = Self::prepare(term)?;
        let target = Self::prepare(target)?;

        if term == target {
            return Ok(());
        }
        if let Some(existing) = self.entries.get(&term) {
            if *existing == target {
                return Ok(());
            }
            return Err(DictionaryError::Conflict {
                term,
                existing: existing.clone(),
                requested: target,
            });
        }
        if self.targets.contains(&term) {
            return Err(DictionaryError::ChainedTranslation { term, target });
        }
        if let Some(next) = self.entries.get(&target) {
            return Err(DictionaryError::ChainedTranslation {
                term: target,
                target: next.clone(),
            });
        }

        self.targets.insert(target.clone());
        self.entries.insert(term, target);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn prepare(word: &str) -> Result<String, DictionaryError> {
        AlphabeticValidator
            .normalize(&word.to_lowercase())
            .map_err(|_| DictionaryError::InvalidTerm(word.to_string()))
    }
}

impl Normalizer for DictionaryTranslator {
    fn normalize(&self, raw: &str) -> Result<String, Rejection> {
        match self.entries.get(&raw.to_lowercase()) {
            Some(target) => Ok(target.clone()),
            None => Ok(raw.to_string()),
        }
    }
}
