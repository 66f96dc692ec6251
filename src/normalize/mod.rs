//! Normalization Module
//!
//! Decides whether a raw token is an admissible word and maps it to the
//! canonical form the counting store keys on.
//!
//! ## Stages
//! A normalizer is built from small, independently composable stages:
//! - **`AlphabeticValidator`**: rejects empty input and anything containing a
//!   non-alphabetic character.
//! - **`LowerCase`**: canonical forms are always lower-cased.
//! - **`DictionaryTranslator`**: maps synonyms and translations ("flor",
//!   "Blume") onto one canonical word ("flower").
//! - **`PassThrough`**: accepts everything unchanged (case-sensitive).
//!
//! `Chain` runs stages in order and stops at the first rejection.
//! `standard` builds the lower-case → validator → translator pipeline.
//!
//! ## Submodules
//! - **`normalizer`**: The `Normalizer` trait and the stateless stages.
//! - **`dictionary`**: The translation table stage.
//! - **`types`**: Rejection and dictionary error types.

pub mod dictionary;
pub mod normalizer;
pub mod types;

pub use dictionary::DictionaryTranslator;
pub use normalizer::{AlphabeticValidator, Chain, LowerCase, Normalizer, PassThrough, standard};
pub use types::{DictionaryError, Rejection};
