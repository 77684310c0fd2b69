//! Error types for clipvault-core

use thiserror::Error;

/// Result type alias using clipvault-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in clipvault-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persisted slot holds data that cannot be parsed as an entry list
    #[error("Stored entries under '{key}' are unreadable: {source}")]
    CorruptData {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Persisted slot holds bytes that are not valid UTF-8
    #[error("Stored entries under '{key}' are not valid UTF-8: {source}")]
    InvalidEncoding {
        key: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Clipboard write rejected by the host
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
