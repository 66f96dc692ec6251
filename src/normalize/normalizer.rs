//! Normalizer Trait and Stateless Stages

use super::dictionary::DictionaryTranslator;
use super::types::Rejection;

use std::sync::Arc;

/// Maps a raw token to its canonical form, or rejects it.
///
/// Implementations must be deterministic and free of side effects: the
/// store calls them from many threads and expects the same answer for the
/// same input every time.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, raw: &str) -> Result<String, Rejection>;
}

/// Accepts every token and returns it unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThrough;

impl Normalizer for PassThrough {
    fn normalize(&self, raw: &str) -> Result<String, Rejection> {
        Ok(raw.to_string())
    }
}

/// Rejects empty tokens and tokens containing any non-alphabetic character.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlphabeticValidator;

impl Normalizer for AlphabeticValidator {
    fn normalize(&self, raw: &str) -> Result<String, Rejection> {
        if raw.is_empty() {
            return Err(Rejection::Empty);
        }
        match raw.chars().find(|c| !c.is_alphabetic()) {
            Some(found) => Err(Rejection::NonAlphabetic {
                word: raw.to_string(),
                found,
            }),
            None => Ok(raw.to_string()),
        }
    }
}

/// Lower-cases the token. Never rejects.
#[derive(Debug, Default, Clone, Copy)]
pub struct LowerCase;

impl Normalizer for LowerCase {
    fn normalize(&self, raw: &str) -> Result<String, Rejection> {
        Ok(raw.to_lowercase())
    }
}

/// Runs stages in order, feeding each stage the previous output.
///
/// An empty chain behaves like `PassThrough`.
#[derive(Default, Clone)]
pub struct Chain {
    stages: Vec<Arc<dyn Normalizer>>,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stage to the end of the chain.
    pub fn then<N: Normalizer + 'static>(mut self, stage: N) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Normalizer for Chain {
    fn normalize(&self, raw: &str) -> Result<String, Rejection> {
        let mut word = raw.to_string();
        for stage in &self.stages {
            word = stage.normalize(&word)?;
        }
        Ok(word)
    }
}

/// Builds the standard pipeline: lower-case, validate, then translate.
///
/// Canonical forms produced by this pipeline are always lower-case, so
/// "Blume" and "blume" count as the same word. Validation runs on the
/// lower-cased form, since lower-casing can introduce combining marks
/// ("İ" becomes "i\u{307}").
pub fn standard(translator: DictionaryTranslator) -> Chain {
    Chain::new()
        .then(LowerCase)
        .then(AlphabeticValidator)
        .then(translator)
}
