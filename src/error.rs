use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed input value (negative page count, non-positive goal value, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Date string that is neither `YYYY-MM-DD` nor RFC 3339.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Book not found in the loaded records.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for the application.
pub type Result<T> = std::result::Result<T, AppError>;
