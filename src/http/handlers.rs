use super::protocol::*;
use super::tokenizer::tokenize_text;
use crate::counting::WordStore;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: impl Into<String>) -> ErrorReply {
    let error = message.into();
    tracing::warn!("Rejecting request: {}", error);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

pub async fn handle_count(
    Extension(store): Extension<Arc<WordStore>>,
    payload: Result<Json<CountRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CountResponse>), ErrorReply> {
    let Json(req) = payload.map_err(|e| bad_request(e.body_text()))?;

    let tokens = tokenize_text(&req.text);
    let report = store.add_words(&tokens);
    tracing::debug!(
        "Counted {} of {} tokens ({} rejected)",
        report.accepted,
        tokens.len(),
        report.rejected_count()
    );

    Ok((StatusCode::OK, Json(CountResponse::from(report))))
}

pub async fn handle_word_count(
    Extension(store): Extension<Arc<WordStore>>,
    params: Result<Query<WordCountParams>, QueryRejection>,
) -> Result<(StatusCode, Json<WordCountResponse>), ErrorReply> {
    let Query(params) = params.map_err(|e| bad_request(e.body_text()))?;

    let word = match params.word {
        Some(word) if !word.trim().is_empty() => word.trim().to_string(),
        _ => return Err(bad_request("missing query parameter 'word'")),
    };

    let count = store.get_count(&word);
    tracing::debug!("Count for '{}': {}", word, count);

    Ok((StatusCode::OK, Json(WordCountResponse { word, count })))
}

pub async fn handle_unique_count(
    Extension(store): Extension<Arc<WordStore>>,
) -> (StatusCode, Json<UniqueCountResponse>) {
    (
        StatusCode::OK,
        Json(UniqueCountResponse {
            unique_words: store.unique_word_count(),
            total_words: store.total_word_count(),
        }),
    )
}

pub async fn handle_words(
    Extension(store): Extension<Arc<WordStore>>,
    params: Result<Query<WordsParams>, QueryRejection>,
) -> Result<(StatusCode, Json<WordsResponse>), ErrorReply> {
    let Query(params) = params.map_err(|e| bad_request(e.body_text()))?;
    let limit = params.limit.unwrap_or(DEFAULT_WORDS_LIMIT);
    let offset = params.offset.unwrap_or(0);

    let (total_count, words) = store.top_words(limit, offset);

    Ok((
        StatusCode::OK,
        Json(WordsResponse {
            total_count,
            count: words.len(),
            words,
        }),
    ))
}
