//! Cross-cutting error types for the HealthAid shell.
//!
//! Shell-specific errors (e.g. `ShellError`) and configuration errors live
//! in their own crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised by core type parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A strict parse met a value outside the known set.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl CoreError {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
