//! Store error types

use thiserror::Error;

/// Result type alias for backend operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Backend error types
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Lock error: {0}")]
    Lock(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
