//! BigQuery dialect.
//!
//! - `"..."` and `'...'` are both string literals; identifiers use backticks.
//! - Structs are written `STRUCT<x INT64>(1 AS x)` or `STRUCT(1 AS x)`.
//! - `SELECT * EXCEPT (a) REPLACE (b + 1 AS b)` narrows a wildcard.

use super::{Dialect, DialectKind};

/// Google BigQuery standard SQL.
#[derive(Debug, Default, Clone, Copy)]
pub struct BigQueryDialect;

impl BigQueryDialect {
    /// Creates a new BigQuery dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for BigQueryDialect {
    fn name(&self) -> &'static str {
        "bigquery"
    }

    fn kind(&self) -> DialectKind {
        DialectKind::BigQuery
    }

    fn double_quoted_strings(&self) -> bool {
        true
    }

    fn supports_wildcard_except(&self) -> bool {
        true
    }
}
