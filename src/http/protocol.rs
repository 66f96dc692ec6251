//! HTTP Protocol
//!
//! Endpoint paths and the JSON Data Transfer Objects exchanged with clients.

use crate::counting::{AddReport, WordCount};

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Submit text to be tokenized and counted.
pub const ENDPOINT_COUNT: &str = "/count";
/// Frequency of a single word (`?word=`).
pub const ENDPOINT_WORD_COUNT: &str = "/word_count";
/// Number of distinct words and total accepted tokens.
pub const ENDPOINT_UNIQUE_COUNT: &str = "/unique_count";
/// Most frequent words (`?limit=&offset=`).
pub const ENDPOINT_WORDS: &str = "/words";

pub const DEFAULT_WORDS_LIMIT: usize = 10;

// --- Data Transfer Objects ---

/// Body of `POST /count`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountRequest {
    pub text: String,
}

/// Confirmation returned after a text submission.
///
/// Rejected tokens are listed so the client can tell which parts of the
/// text were not counted.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub status: String,
    pub accepted: usize,
    pub rejected: Vec<RejectedToken>,
}

impl From<AddReport> for CountResponse {
    fn from(report: AddReport) -> Self {
        Self {
            status: "counted".to_string(),
            accepted: report.accepted,
            rejected: report
                .rejected
                .into_iter()
                .map(|r| RejectedToken {
                    word: r.word,
                    reason: r.reason.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RejectedToken {
    pub word: String,
    pub reason: String,
}

#[derive(Debug, Deserialize)]
pub struct WordCountParams {
    pub word: Option<String>,
}

/// Frequency of a single word. `word` echoes the query as submitted.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCountResponse {
    pub word: String,
    pub count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UniqueCountResponse {
    pub unique_words: usize,
    pub total_words: u64,
}

#[derive(Debug, Deserialize)]
pub struct WordsParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordsResponse {
    pub total_count: usize,
    pub count: usize,
    pub words: Vec<WordCount>,
}

/// Body of every `4xx` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
