//! Word Counter Library
//!
//! Core modules of the word counting service. The binary (`main.rs`) wires
//! them into an HTTP server.
//!
//! ## Modules
//! - **`counting`**: `WordStore`, the thread-safe mapping from canonical word
//!   to occurrence count.
//! - **`normalize`**: The `Normalizer` capability and its stages (alphabetic
//!   validation, lower-casing, translation tables).
//! - **`http`**: Axum handlers exposing the store over REST.
//! - **`config`**: Command-line configuration for the server binary.

pub mod config;
pub mod counting;
pub mod http;
pub mod normalize;
