//! Core error types for TravelConnect view-model operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for TravelConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    // Routing errors
    #[error("invalid route '{path}': {reason}")]
    InvalidRoute { path: String, reason: String },

    // Styling errors
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },

    #[error("unknown icon '{name}'")]
    UnknownIcon { name: String },

    // Configuration errors
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("failed to read file '{path}': {reason}")]
    FileReadFailed { path: PathBuf, reason: String },

    // Parsing errors
    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },
}

impl Error {
    /// Create an invalid route error.
    pub fn invalid_route(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRoute {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid color error.
    pub fn invalid_color(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown icon error.
    pub fn unknown_icon(name: impl Into<String>) -> Self {
        Self::UnknownIcon { name: name.into() }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a file read error.
    pub fn file_read_failed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::FileReadFailed {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_route_display() {
        let err = Error::invalid_route("cards", "must start with '/'");
        assert_eq!(
            err.to_string(),
            "invalid route 'cards': must start with '/'"
        );
    }

    #[test]
    fn test_unknown_icon_display() {
        let err = Error::unknown_icon("rocket-ship");
        assert_eq!(err.to_string(), "unknown icon 'rocket-ship'");
    }

    #[test]
    fn test_file_read_failed_keeps_path() {
        let err = Error::file_read_failed("/tmp/missing.toml", "not found");
        assert!(err.to_string().contains("/tmp/missing.toml"));
        assert!(matches!(err, Error::FileReadFailed { .. }));
    }
}
