use crate::normalize::Rejection;

use serde::{Deserialize, Serialize};

/// Outcome of adding a batch of words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    /// Number of tokens that were counted.
    pub accepted: usize,
    /// Tokens that the normalizer rejected, in input order.
    pub rejected: Vec<RejectedWord>,
}

impl AddReport {
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    pub fn is_fully_accepted(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// A raw token that was skipped, with the reason it was not accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedWord {
    pub word: String,
    pub reason: Rejection,
}

/// A canonical word and its current count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}
