//! ClickHouse dialect.

use super::{Dialect, DialectKind};

/// ClickHouse SQL. Adds `LIMIT n BY expr` (top-n rows per group).
#[derive(Debug, Default, Clone, Copy)]
pub struct ClickHouseDialect;

impl ClickHouseDialect {
    /// Creates a new ClickHouse dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for ClickHouseDialect {
    fn name(&self) -> &'static str {
        "clickhouse"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::ClickHouse
    }

    fn supports_limit_by(&self) -> bool {
        true
    }

    fn supports_wildcard_except(&self) -> bool {
        true
    }
}
