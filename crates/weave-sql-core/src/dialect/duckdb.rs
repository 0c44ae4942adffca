//! DuckDB dialect.
//!
//! - Struct values use braces: `{ 'x': 1, 'y': 'a' }`.
//! - Struct types use parentheses: `::STRUCT(x INTEGER, y VARCHAR)`.
//! - Wildcards are narrowed with `* EXCLUDE (col)`.

use super::{Dialect, DialectKind, StructDialect};

/// DuckDB SQL.
#[derive(Debug, Default, Clone, Copy)]
pub struct DuckDbDialect;

impl DuckDbDialect {
    /// Creates a new DuckDB dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for DuckDbDialect {
    fn name(&self) -> &'static str {
        "duckdb"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::DuckDb
    }

    fn struct_dialect(&self) -> StructDialect {
        StructDialect::DuckDb
    }

    fn supports_wildcard_exclude(&self) -> bool {
        true
    }
}
