//! Error types for the tool dispatch core

use thiserror::Error;

/// Result type alias for tool operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while dispatching or executing a tool
///
/// Display strings double as the message text embedded in failure results
/// by the dispatch boundary, so they are written for the calling agent.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested tool name is not in the registry
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool arguments rejected by schema validation
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// IO error from a tool handler
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
