//! Error types for the UI layer
//!
//! Failures here are recoverable: the app logs them and falls back to a
//! signed-out session.

use thiserror::Error;

/// Errors raised by browser integration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("window is not available")]
    WindowUnavailable,

    #[error("local storage is not available: {0}")]
    StorageUnavailable(String),

    #[error("storage operation failed: {0}")]
    StorageFailed(String),

    #[error("invalid session record: {0}")]
    InvalidSession(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
