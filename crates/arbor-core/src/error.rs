//! Error types for Arbor Core

use thiserror::Error;

/// Result type alias using Arbor's core error
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid continuation token: {0}")]
    InvalidToken(String),

    #[error("Invalid property expression '{expression}': {reason}")]
    InvalidExpression { expression: String, reason: String },

    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Hierarchy cycle detected at {node} while walking from {start}")]
    HierarchyCycle { start: String, node: String },

    #[error("Hierarchy walk from {start} exceeded {max_hops} hops")]
    HierarchyTooDeep { start: String, max_hops: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Whether this error was caused by caller input rather than server state
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(
            self,
            Self::HierarchyCycle { .. } | Self::HierarchyTooDeep { .. } | Self::Serialization(_)
        )
    }
}
