//! HTTP Adapter Module
//!
//! A thin REST layer over a shared `WordStore`. Handlers tokenize and parse
//! requests, call into the store and serialize the results; they hold no
//! state of their own.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers.
//! - **`protocol`**: Endpoint paths and request/response DTOs.
//! - **`tokenizer`**: Splits submitted text into word tokens.

pub mod handlers;
pub mod protocol;
pub mod tokenizer;

use crate::counting::WordStore;
use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::sync::Arc;

use handlers::{handle_count, handle_unique_count, handle_word_count, handle_words};
use protocol::{ENDPOINT_COUNT, ENDPOINT_UNIQUE_COUNT, ENDPOINT_WORD_COUNT, ENDPOINT_WORDS};

/// Builds the application router around a single shared store.
pub fn router(store: Arc<WordStore>) -> Router {
    Router::new()
        .route(ENDPOINT_COUNT, post(handle_count))
        .route(ENDPOINT_WORD_COUNT, get(handle_word_count))
        .route(ENDPOINT_UNIQUE_COUNT, get(handle_unique_count))
        .route(ENDPOINT_WORDS, get(handle_words))
        .layer(Extension(store))
}
