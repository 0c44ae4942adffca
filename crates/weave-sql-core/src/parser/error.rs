//! Parser error types.

use serde::{Deserialize, Serialize};

use crate::lexer::{LexError, Location, Span, TokenKind};

/// Whether an error came from the lexer or from the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseErrorKind {
    /// The input could not be split into tokens.
    Lexical,
    /// The tokens match no production.
    Syntax,
}

/// A parse error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error(
    "{message} at line {line}, column {column}",
    line = .location.line,
    column = .location.column
)]
pub struct ParseError {
    /// Lexical or syntax error.
    pub kind: ParseErrorKind,
    /// The error message.
    pub message: String,
    /// Byte range of the offending token.
    pub span: Span,
    /// Line and column of `span.start`.
    pub location: Location,
    /// Token descriptions that would have been accepted.
    pub expected: Vec<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a syntax error located at `span` within `input`.
    #[must_use]
    pub fn new(message: impl Into<String>, input: &str, span: Span) -> Self {
        Self {
            kind: ParseErrorKind::Syntax,
            message: message.into(),
            span,
            location: Location::from_offset(input, span.start),
            expected: Vec::new(),
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(expected: &[&str], found: TokenKind, input: &str, span: Span) -> Self {
        let message = if matches!(found, TokenKind::Eof) {
            format!("Unexpected end of input: expected {}", expected.join(" or "))
        } else {
            format!(
                "Unexpected token: expected {}, found {found}",
                expected.join(" or ")
            )
        };
        Self {
            expected: expected.iter().map(|e| (*e).to_string()).collect(),
            found: Some(found),
            ..Self::new(message, input, span)
        }
    }

    /// Returns true for errors raised by the lexer.
    #[must_use]
    pub fn is_lexical(&self) -> bool {
        self.kind == ParseErrorKind::Lexical
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        Self {
            kind: ParseErrorKind::Lexical,
            message: err.message,
            span: err.span,
            location: err.location,
            expected: Vec::new(),
            found: None,
        }
    }
}
