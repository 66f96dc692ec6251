//! Word Counting Module
//!
//! Implements `WordStore`, a thread-safe mapping from canonical word to the
//! number of times it has been added.
//!
//! ## Core Concepts
//! - **Normalization**: Every token goes through an injected `Normalizer`
//!   before it touches the map, both on insert and on lookup.
//! - **Batches**: `add_words` applies a whole batch under a single write
//!   lock. Rejected tokens are skipped and reported, never counted.
//! - **Queries**: Frequency (`get_count`) and distinct-word totals
//!   (`unique_word_count`) are separate operations.

pub mod store;
pub mod types;

pub use store::WordStore;
pub use types::{AddReport, RejectedWord, WordCount};

#[cfg(test)]
mod tests;
