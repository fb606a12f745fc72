use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for acquiring and decoding pangowho data sources.
///
/// None of these are retried: a run that hits one stops before computing or
/// writing anything.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A local source does not exist.
    #[error("Source not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The server answered with a non-success status.
    #[error("HTTP status {code} when fetching {url}")]
    HttpStatus { url: String, code: u16 },

    /// The request could not be completed (DNS, TLS, connection, ...).
    #[error("Request error when fetching {url}: {reason}")]
    Request { url: String, reason: String },

    /// IO error occurred while reading or writing a file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON document could not be decoded or encoded.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV document could not be decoded or encoded.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A core table row without both a prefix and a label.
    #[error("Malformed core table row {row}: expected 2 columns, found {found}")]
    MalformedRow { row: usize, found: usize },
}

/// Result type alias for pangowho-io operations.
pub type Result<T> = std::result::Result<T, SourceError>;
