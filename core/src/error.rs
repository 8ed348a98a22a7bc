//! Error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown field '{field}' for form '{form}'")]
    UnknownField { form: String, field: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Reasons a dashboard submission is blocked
///
/// Mirrors the browser's native `required` check: the only guard a
/// submission ever has.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Required field '{field}' is empty")]
    MissingRequired { field: &'static str },
}
