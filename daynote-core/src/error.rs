//! Error types for daynote.

use thiserror::Error;

/// Errors that can occur in daynote operations.
#[derive(Error, Debug)]
pub enum DayNoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid date '{0}'. Expected YEAR-MONTH-DAY, e.g. 2024-8-15")]
    InvalidDateKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for daynote operations.
pub type DayNoteResult<T> = Result<T, DayNoteError>;
