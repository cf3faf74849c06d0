//! Error types for the MCP serve loop

use thiserror::Error;

/// Result type alias for server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, routing, or writing protocol
/// messages. Tool failures are not errors at this layer; the dispatcher
/// folds them into result payloads before they reach the serve loop.
#[derive(Debug, Error)]
pub enum Error {
    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error on the stdio transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
