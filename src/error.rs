// src/error.rs

use thiserror::Error;

/// Fatal error raised while reading composition text.
///
/// Aborts the whole conversion; no partial results are produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A `;`-separated segment of a data line is not `[number][unit%][type]`.
    #[error("Invalid part format: {fragment}")]
    MalformedPart { fragment: String },
}

/// Errors surfaced by the hosts (file input, JSON export) around the pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
