use thiserror::Error;

/// spendtrack error types
#[derive(Error, Debug)]
pub enum SpendtrackError {
    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read or write JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Store operation failed
    #[error("store error: {0}")]
    Store(String),

    /// No entry with the given id
    #[error("entry not found: {0}")]
    NotFound(String),

    /// Entry draft rejected at the boundary
    #[error("invalid entry: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Reasons an entry draft is rejected before it reaches the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("date `{0}` is not a valid YYYY-MM-DD calendar date")]
    InvalidDate(String),

    #[error("amount `{0}` is not a number")]
    InvalidAmount(String),

    #[error("amount `{0}` must not be negative")]
    NegativeAmount(String),
}

/// Result type alias for spendtrack
pub type Result<T> = std::result::Result<T, SpendtrackError>;
