use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] clipvault_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Entry ID cannot be empty")]
    EmptyEntryId,
    #[error("Invalid entry ID: {0}")]
    InvalidEntryId(String),
    #[error("Entry not found for id: {0}")]
    EntryNotFound(String),
    #[error("Failed to copy text: {0}")]
    CopyFailed(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
