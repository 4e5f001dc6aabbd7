//! API error taxonomy

use arbor_core::CoreError;
use arbor_store::StoreError;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Caller sent a request that can never succeed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A backend collaborator failed; the request is aborted as a whole
    #[error(transparent)]
    Upstream(#[from] StoreError),

    /// Server-side data is inconsistent
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Stable status label for transports
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Upstream(_) => "upstream",
            Self::Internal(_) => "internal",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        if e.is_invalid_argument() {
            Self::InvalidArgument(e.to_string())
        } else {
            Self::Internal(e.to_string())
        }
    }
}
