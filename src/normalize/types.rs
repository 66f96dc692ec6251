//! Normalization Error Types

use thiserror::Error;

/// Why a raw token was not accepted as a word.
///
/// Rejections are an expected outcome, not a failure of the store: a
/// rejected token is skipped and reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The token was empty.
    #[error("empty word")]
    Empty,
    /// The token contained a character that is not alphabetic.
    #[error("'{word}' contains non-alphabetic character {found:?}")]
    NonAlphabetic { word: String, found: char },
}

/// Problems found while building a translation table.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("translation term must be a non-empty alphabetic word, got '{0}'")]
    InvalidTerm(String),
    #[error("'{term}' is both translated (to '{target}') and used as a translation target")]
    ChainedTranslation { term: String, target: String },
    #[error("'{term}' already translates to '{existing}', cannot also map it to '{requested}'")]
    Conflict {
        term: String,
        existing: String,
        requested: String,
    },
    #[error("failed to parse translation table: {0}")]
    Parse(#[source] serde_json::Error),
}
