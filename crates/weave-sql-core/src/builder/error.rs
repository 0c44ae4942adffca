//! Builder errors.

use thiserror::Error;

/// Misuse of a builder that the typestate cannot rule out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A DuckDB struct value argument without a field name.
    #[error("struct argument {position} has no field name")]
    UnnamedStructArgument {
        /// 1-based argument position.
        position: usize,
    },
    /// A DuckDB struct type field without a name.
    #[error("struct type field {position} has no name")]
    UnnamedStructField {
        /// 1-based field position.
        position: usize,
    },
    /// Typed struct fields and values of different lengths.
    #[error("struct declares {fields} typed fields but has {arguments} arguments")]
    StructArityMismatch {
        /// Number of typed fields.
        fields: usize,
        /// Number of values.
        arguments: usize,
    },
    /// An INSERT row whose width differs from the column list or first row.
    #[error("row {row} has {found} values, expected {expected}")]
    RowWidthMismatch {
        /// 1-based row number.
        row: usize,
        /// Expected number of values.
        expected: usize,
        /// Actual number of values.
        found: usize,
    },
}
