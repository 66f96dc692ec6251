//! Thread-Safe Word Store
//!
//! A single `RwLock` guards the whole count map. Writers hold it for an
//! entire batch, so readers only ever see a batch fully applied or not at
//! all. Normalization runs before the lock is taken; no caller-supplied code
//! executes while the lock is held.

use super::types::{AddReport, RejectedWord, WordCount};
use crate::normalize::{Normalizer, PassThrough, Rejection};

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

pub struct WordStore {
    counts: RwLock<HashMap<String, u64>>,
    normalizer: Arc<dyn Normalizer>,
}

impl WordStore {
    /// Creates an empty store that normalizes every token with `normalizer`.
    pub fn new(normalizer: Arc<dyn Normalizer>) -> Self {
        Self {
            counts: RwLock::new(HashMap::new()),
            normalizer,
        }
    }

    /// Adds a batch of words.
    ///
    /// Each word is normalized in order. Rejected words are skipped and
    /// listed in the returned report; they never abort the rest of the
    /// batch. All accepted words are applied atomically with respect to
    /// every other store operation.
    pub fn add_words<I, S>(&self, words: I) -> AddReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical: Vec<String> = Vec::new();
        let mut rejected: Vec<RejectedWord> = Vec::new();

        for word in words {
            let word = word.as_ref();
            match self.normalizer.normalize(word) {
                Ok(c) => canonical.push(c),
                Err(reason) => {
                    tracing::debug!("Skipping word '{}': {}", word, reason);
                    rejected.push(RejectedWord {
                        word: word.to_string(),
                        reason,
                    });
                }
            }
        }

        if !canonical.is_empty() {
            let mut counts = self.counts.write();
            for word in &canonical {
                *counts.entry(word.clone()).or_insert(0) += 1;
            }
        }

        AddReport {
            accepted: canonical.len(),
            rejected,
        }
    }

    /// Adds a single word, returning the canonical form it was counted under.
    pub fn add_word(&self, word: &str) -> Result<String, Rejection> {
        let canonical = self.normalizer.normalize(word)?;
        *self.counts.write().entry(canonical.clone()).or_insert(0) += 1;
        Ok(canonical)
    }

    /// Number of times the canonical form of `word` has been added.
    ///
    /// Returns 0 for words never added and for words the normalizer rejects.
    pub fn get_count(&self, word: &str) -> u64 {
        match self.normalizer.normalize(word) {
            Ok(canonical) => self.counts.read().get(&canonical).copied().unwrap_or(0),
            Err(_) => 0,
        }
    }

    /// Number of distinct canonical words added so far.
    pub fn unique_word_count(&self) -> usize {
        self.counts.read().len()
    }

    /// Number of accepted tokens added so far, across all words.
    pub fn total_word_count(&self) -> u64 {
        self.counts.read().values().sum()
    }

    /// Words ordered by count (highest first, ties by word), paginated.
    ///
    /// Returns the total number of distinct words alongside the requested page.
    pub fn top_words(&self, limit: usize, offset: usize) -> (usize, Vec<WordCount>) {
        let mut entries: Vec<WordCount> = {
            let counts = self.counts.read();
            counts
                .iter()
                .map(|(word, count)| WordCount {
                    word: word.clone(),
                    count: *count,
                })
                .collect()
        };

        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        let total = entries.len();
        let page = entries.into_iter().skip(offset).take(limit).collect();
        (total, page)
    }
}

impl Default for WordStore {
    fn default() -> Self {
        Self::new(Arc::new(PassThrough))
    }
}
