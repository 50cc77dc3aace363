//! Structured error types shared across the crate.

use thiserror::Error;

/// Unified error type for all matchwork operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchworkError {
    /// A constructor argument fell outside its allowed range; names the
    /// offending parameter.
    #[error("{param} is out of range: expected a non-negative value, got {value}")]
    OutOfRange { param: &'static str, value: isize },

    /// A notation tag other than `"S"` or `"T"` was requested.
    #[error("unsupported notation `{0}`, expected \"S\" or \"T\"")]
    UnsupportedNotation(String),

    /// A context element in a hunk disagreed with the sequence being patched.
    #[error("context mismatch at line {line}: expected `{expected}`, found `{found}`")]
    ContextMismatch {
        line: usize,
        expected: String,
        found: String,
    },

    /// A patch could not be parsed or anchored against its input.
    #[error("invalid patch: {0}")]
    InvalidPatch(String),

    /// An edit line did not start with ` `, `+` or `-`.
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchworkError>;
