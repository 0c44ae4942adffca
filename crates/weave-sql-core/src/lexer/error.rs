//! Lexer error type.

use super::{Location, Span};

/// Input that could not be split into tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{message} at line {line}, column {column}",
    line = .location.line,
    column = .location.column
)]
pub struct LexError {
    /// What went wrong.
    pub message: String,
    /// Bytes from the start of the offending token to where scanning stopped.
    pub span: Span,
    /// Line and column of `span.start`.
    pub location: Location,
}

impl LexError {
    /// Creates a lexer error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span, location: Location) -> Self {
        Self {
            message: message.into(),
            span,
            location,
        }
    }
}
