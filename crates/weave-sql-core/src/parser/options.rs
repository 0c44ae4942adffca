//! Parser configuration.

use serde::Deserialize;

use crate::dialect::DialectKind;

/// Options controlling how SQL text is parsed.
///
/// Deserializable so callers can embed it in their own configuration files:
///
/// ```toml
/// dialect = "bigquery"
/// unsupported_fallback = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Dialect whose syntax is accepted.
    pub dialect: DialectKind,
    /// Keep statements with no structural grammar as verbatim text instead of
    /// failing.
    pub unsupported_fallback: bool,
}

impl ParserOptions {
    /// Creates options for `dialect` with the remaining settings defaulted.
    #[must_use]
    pub fn new(dialect: DialectKind) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    /// Sets the dialect.
    #[must_use]
    pub const fn with_dialect(mut self, dialect: DialectKind) -> Self {
        self.dialect = dialect;
        self
    }

    /// Enables or disables the verbatim fallback for unknown statements.
    #[must_use]
    pub const fn with_unsupported_fallback(mut self, enabled: bool) -> Self {
        self.unsupported_fallback = enabled;
        self
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            dialect: DialectKind::Generic,
            unsupported_fallback: true,
        }
    }
}

impl From<DialectKind> for ParserOptions {
    fn from(dialect: DialectKind) -> Self {
        Self::new(dialect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.dialect, DialectKind::Generic);
        assert!(options.unsupported_fallback);
    }

    #[test]
    fn test_builder_methods() {
        let options = ParserOptions::new(DialectKind::DuckDb).with_unsupported_fallback(false);
        assert_eq!(options.dialect, DialectKind::DuckDb);
        assert!(!options.unsupported_fallback);
    }
}
