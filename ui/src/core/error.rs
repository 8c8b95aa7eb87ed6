//! Error types shared by the core modules and the browser glue.
//!
//! None of these ever reach the visitor: callers log them through `tracing`
//! and fall back to a harmless default.

use thiserror::Error;

/// Failures talking to the host page (window, document, DOM calls).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("`{operation}` failed: {message}")]
    Dom {
        operation: &'static str,
        message: String,
    },
    #[error("not supported outside the browser")]
    Unsupported,
}

impl PlatformError {
    pub fn dom(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Dom {
            operation,
            message: message.into(),
        }
    }
}

/// Rejected language codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unsupported language code `{0}`")]
    Unsupported(String),
}

/// Durable preference storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error(transparent)]
    Platform(#[from] PlatformError),
}
