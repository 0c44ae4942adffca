//! SQL Dialect support.
//!
//! Different databases have slightly different SQL syntax. The parser asks a
//! [`Dialect`] which production to commit to whenever two dialects diverge on
//! the same tokens. Dialect-sensitive syntax-tree nodes carry their own
//! closed tag (see [`StructDialect`]) so rendering never depends on a global
//! mode.

mod bigquery;
mod clickhouse;
mod duckdb;
mod generic;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

pub use bigquery::BigQueryDialect;
pub use clickhouse::ClickHouseDialect;
pub use duckdb::DuckDbDialect;
pub use generic::GenericDialect;

/// Trait for SQL dialect-specific parsing behavior.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the selector value for this dialect.
    fn kind(&self) -> DialectKind;

    /// Returns whether `"..."` is a string literal rather than a quoted
    /// identifier.
    fn double_quoted_strings(&self) -> bool {
        false
    }

    /// Returns which STRUCT syntax the parser accepts.
    fn struct_dialect(&self) -> StructDialect {
        StructDialect::BigQuery
    }

    /// Returns whether `LIMIT n BY expr, ...` is accepted.
    fn supports_limit_by(&self) -> bool {
        false
    }

    /// Returns whether `* EXCEPT (col, ...)` is accepted.
    fn supports_wildcard_except(&self) -> bool {
        false
    }

    /// Returns whether `* EXCLUDE (col, ...)` is accepted.
    fn supports_wildcard_exclude(&self) -> bool {
        false
    }

    /// Returns whether `* REPLACE (expr AS col, ...)` is accepted.
    fn supports_wildcard_replace(&self) -> bool {
        self.supports_wildcard_except() || self.supports_wildcard_exclude()
    }
}

/// The closed set of dialects a caller can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// ANSI-flavored SQL accepting the union of the supported extensions
    /// that do not conflict.
    #[default]
    Generic,
    /// Google BigQuery.
    BigQuery,
    /// DuckDB.
    DuckDb,
    /// ClickHouse.
    ClickHouse,
}

static GENERIC: GenericDialect = GenericDialect::new();
static BIGQUERY: BigQueryDialect = BigQueryDialect::new();
static DUCKDB: DuckDbDialect = DuckDbDialect::new();
static CLICKHOUSE: ClickHouseDialect = ClickHouseDialect::new();

impl DialectKind {
    /// Returns every selectable dialect.
    pub const ALL: [Self; 4] = [Self::Generic, Self::BigQuery, Self::DuckDb, Self::ClickHouse];

    /// Returns the dialect implementation for this selector.
    #[must_use]
    pub fn dialect(self) -> &'static dyn Dialect {
        match self {
            Self::Generic => &GENERIC,
            Self::BigQuery => &BIGQUERY,
            Self::DuckDb => &DUCKDB,
            Self::ClickHouse => &CLICKHOUSE,
        }
    }

    /// Returns the lowercase name of the dialect.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::BigQuery => "bigquery",
            Self::DuckDb => "duckdb",
            Self::ClickHouse => "clickhouse",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown SQL dialect: {0}")]
pub struct UnknownDialect(pub String);

impl FromStr for DialectKind {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "generic" | "ansi" => Ok(Self::Generic),
            "bigquery" => Ok(Self::BigQuery),
            "duckdb" => Ok(Self::DuckDb),
            "clickhouse" => Ok(Self::ClickHouse),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

/// Dialect tag stored on STRUCT nodes. Rendering branches only on this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StructDialect {
    /// `STRUCT<name type, ...>(expr [AS name], ...)`.
    #[default]
    BigQuery,
    /// `{ name: expr, ... }` values and `::STRUCT(name type, ...)` ascription.
    DuckDb,
}
