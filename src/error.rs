//! Error types for promise-state operations.
//!
//! This module defines [`PromiseStateError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! The tagging operations themselves never fail. Errors come from raw
//! responses missing the fields the merge reads, from loading config, and
//! from the CLI's JSON input.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for promise-state operations.
#[derive(Debug, Error)]
pub enum PromiseStateError {
    /// A raw response is missing a field the merge needs.
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Tagger config file not found.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse tagger config.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A promise state name that is not one of the five variants.
    #[error("Invalid promise state: {value}")]
    InvalidState { value: String },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for promise-state operations.
pub type Result<T> = std::result::Result<T, PromiseStateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_response_displays_message() {
        let err = PromiseStateError::MalformedResponse {
            message: "missing payload".into(),
        };
        assert!(err.to_string().contains("missing payload"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = PromiseStateError::ConfigNotFound {
            path: PathBuf::from("/etc/tagger.yml"),
        };
        assert!(err.to_string().contains("/etc/tagger.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PromiseStateError::ConfigParseError {
            path: PathBuf::from("/tagger.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tagger.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_state_displays_value() {
        let err = PromiseStateError::InvalidState {
            value: "PENDING".into(),
        };
        assert!(err.to_string().contains("PENDING"));
    }

    #[test]
    fn json_error_converts_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PromiseStateError = json_err.into();
        assert!(matches!(err, PromiseStateError::Json(_)));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PromiseStateError = io_err.into();
        assert!(matches!(err, PromiseStateError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PromiseStateError::MalformedResponse {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
