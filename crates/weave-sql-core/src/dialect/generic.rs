//! Generic SQL dialect.

use super::{Dialect, DialectKind};

/// A generic SQL dialect using ANSI SQL plus the non-conflicting extensions.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::Generic
    }

    fn supports_limit_by(&self) -> bool {
        true
    }

    fn supports_wildcard_except(&self) -> bool {
        true
    }

    fn supports_wildcard_exclude(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::StructDialect;

    #[test]
    fn test_generic_dialect() {
        let dialect = GenericDialect::new();
        assert_eq!(dialect.name(), "generic");
        assert!(!dialect.double_quoted_strings());
        assert_eq!(dialect.struct_dialect(), StructDialect::BigQuery);
        assert!(dialect.supports_limit_by());
        assert!(dialect.supports_wildcard_replace());
    }
}
