//! Error types for format and migration operations
//!
//! Content conversion itself has no error type: both serializers are total and
//! degrade malformed input to empty output. Errors only exist at the edges,
//! where text has to be parsed or files read.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

/// Errors raised while importing legacy Markdown posts
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
    #[error("front matter is missing required field '{0}'")]
    MissingField(&'static str),
    #[error("invalid date '{0}': expected RFC 3339 or YYYY-MM-DD")]
    InvalidDate(String),
}
