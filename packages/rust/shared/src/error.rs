//! Error types for the take-home builder.
//!
//! Library crates use [`TakehomeError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all takehome operations.
#[derive(Debug, thiserror::Error)]
pub enum TakehomeError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP error during extraction, publishing, or self-test.
    #[error("network error: {0}")]
    Network(String),

    /// HTML or document parsing error.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Dataset reading or decoding error.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Workspace publishing error.
    #[error("publish error: {0}")]
    Publish(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (schema mismatch, invalid format, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TakehomeError>;

impl TakehomeError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = TakehomeError::config("missing workspace token");
        assert_eq!(err.to_string(), "config error: missing workspace token");

        let err = TakehomeError::Publish("HTTP 403".into());
        assert!(err.to_string().contains("403"));
    }
}
