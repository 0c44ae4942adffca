//! SQL data type definitions.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::expression::Expr;
use super::ident::{Ident, ObjectName};

/// How a STRUCT type lists its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructTypeSyntax {
    /// `STRUCT<a INT64, b STRING>` (BigQuery).
    AngleBrackets,
    /// `STRUCT(a INTEGER, b VARCHAR)` (DuckDB).
    Parentheses,
}

/// How an ARRAY type is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrayTypeSyntax {
    /// `ARRAY<INT64>`.
    AngleBrackets,
    /// `INTEGER[]`.
    SquareSuffix,
}

/// A field of a STRUCT type: an optional name and a mandatory type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructField {
    /// Field name (BigQuery allows anonymous fields).
    pub name: Option<Ident>,
    /// Field type.
    pub data_type: DataType,
}

impl StructField {
    /// Creates a named field.
    #[must_use]
    pub fn new(name: impl Into<Ident>, data_type: DataType) -> Self {
        Self {
            name: Some(name.into()),
            data_type,
        }
    }

    /// Creates an anonymous field.
    #[must_use]
    pub const fn anonymous(data_type: DataType) -> Self {
        Self {
            name: None,
            data_type,
        }
    }
}

impl fmt::Display for StructField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        f.write_str(&self.data_type.to_sql())
    }
}

/// SQL data types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    // Integer types
    /// Small integer (2 bytes).
    Smallint,
    /// `INT`.
    Int,
    /// `INTEGER`.
    Integer,
    /// Big integer (8 bytes).
    Bigint,

    // Floating point
    /// Real (4-byte float).
    Real,
    /// Double precision (8-byte float).
    Double,
    /// `FLOAT` with optional precision.
    Float(Option<u32>),
    /// Decimal with precision and scale.
    Decimal {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },
    /// Numeric (alias for Decimal).
    Numeric {
        /// Total number of digits.
        precision: Option<u16>,
        /// Number of digits after decimal point.
        scale: Option<u16>,
    },

    // String types
    /// Fixed-length character string.
    Char(Option<u32>),
    /// Variable-length character string.
    Varchar(Option<u32>),
    /// Text (variable length, no limit).
    Text,

    // Binary types
    /// Binary large object.
    Blob,

    // Date/time types
    /// Date.
    Date,
    /// Time.
    Time,
    /// Timestamp.
    Timestamp,
    /// DateTime.
    Datetime,

    // Boolean
    /// Boolean.
    Boolean,

    // Nested types
    /// STRUCT type.
    Struct {
        /// Written form.
        syntax: StructTypeSyntax,
        /// Fields in order.
        fields: Vec<StructField>,
    },
    /// ARRAY type.
    Array {
        /// Element type.
        element: Box<DataType>,
        /// Written form.
        syntax: ArrayTypeSyntax,
    },

    /// Any other named type, e.g. `INT64` or `STRING(10)`.
    Custom {
        /// Type name as written.
        name: String,
        /// Parenthesized modifiers, as written.
        modifiers: Vec<String>,
    },
}

impl DataType {
    /// Creates a custom type without modifiers.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom {
            name: name.into(),
            modifiers: Vec::new(),
        }
    }

    /// Returns the SQL representation of the data type.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Smallint => String::from("SMALLINT"),
            Self::Int => String::from("INT"),
            Self::Integer => String::from("INTEGER"),
            Self::Bigint => String::from("BIGINT"),
            Self::Real => String::from("REAL"),
            Self::Double => String::from("DOUBLE"),
            Self::Float(precision) => with_length("FLOAT", *precision),
            Self::Decimal { precision, scale } => with_precision("DECIMAL", *precision, *scale),
            Self::Numeric { precision, scale } => with_precision("NUMERIC", *precision, *scale),
            Self::Char(len) => with_length("CHAR", *len),
            Self::Varchar(len) => with_length("VARCHAR", *len),
            Self::Text => String::from("TEXT"),
            Self::Blob => String::from("BLOB"),
            Self::Date => String::from("DATE"),
            Self::Time => String::from("TIME"),
            Self::Timestamp => String::from("TIMESTAMP"),
            Self::Datetime => String::from("DATETIME"),
            Self::Boolean => String::from("BOOLEAN"),
            Self::Struct { syntax, fields } => {
                let body = fields
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                match syntax {
                    StructTypeSyntax::AngleBrackets => format!("STRUCT<{body}>"),
                    StructTypeSyntax::Parentheses => format!("STRUCT({body})"),
                }
            }
            Self::Array { element, syntax } => match syntax {
                ArrayTypeSyntax::AngleBrackets => format!("ARRAY<{}>", element.to_sql()),
                ArrayTypeSyntax::SquareSuffix => format!("{}[]", element.to_sql()),
            },
            Self::Custom { name, modifiers } => {
                if modifiers.is_empty() {
                    name.clone()
                } else {
                    format!("{name}({})", modifiers.join(", "))
                }
            }
        }
    }
}

fn with_length(name: &str, len: Option<u32>) -> String {
    match len {
        Some(n) => format!("{name}({n})"),
        None => String::from(name),
    }
}

fn with_precision(name: &str, precision: Option<u16>, scale: Option<u16>) -> String {
    match (precision, scale) {
        (Some(p), Some(s)) => format!("{name}({p}, {s})"),
        (Some(p), None) => format!("{name}({p})"),
        _ => String::from(name),
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// `REFERENCES table [(col, ...)]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignKeyRef {
    /// Referenced table.
    pub table: ObjectName,
    /// Referenced columns (may be empty).
    pub columns: Vec<Ident>,
}

/// A column definition for CREATE TABLE and ALTER TABLE ADD COLUMN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name.
    pub name: Ident,
    /// Data type.
    pub data_type: DataType,
    /// Whether the column is nullable.
    pub nullable: bool,
    /// Default value expression.
    pub default: Option<Expr>,
    /// Whether this is a primary key.
    pub primary_key: bool,
    /// Whether this column is unique.
    pub unique: bool,
    /// Whether this column auto-increments.
    pub autoincrement: bool,
    /// Inline foreign key reference.
    pub references: Option<ForeignKeyRef>,
}

impl ColumnDef {
    /// Creates a new column definition.
    #[must_use]
    pub fn new(name: impl Into<Ident>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            default: None,
            primary_key: false,
            unique: false,
            autoincrement: false,
            references: None,
        }
    }

    /// Sets the column as NOT NULL.
    #[must_use]
    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets the column as PRIMARY KEY.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Sets the column as UNIQUE.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Sets the column as AUTOINCREMENT.
    #[must_use]
    pub const fn autoincrement(mut self) -> Self {
        self.autoincrement = true;
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default(mut self, expr: Expr) -> Self {
        self.default = Some(expr);
        self
    }

    /// Sets an inline `REFERENCES` clause.
    #[must_use]
    pub fn references(mut self, table: impl Into<ObjectName>, columns: Vec<Ident>) -> Self {
        self.references = Some(ForeignKeyRef {
            table: table.into(),
            columns,
        });
        self
    }
}

/// A table-level constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableConstraint {
    /// `[CONSTRAINT name] PRIMARY KEY (cols)`.
    PrimaryKey {
        /// Constraint name.
        name: Option<Ident>,
        /// Key columns.
        columns: Vec<Ident>,
    },
    /// `[CONSTRAINT name] UNIQUE (cols)`.
    Unique {
        /// Constraint name.
        name: Option<Ident>,
        /// Unique columns.
        columns: Vec<Ident>,
    },
    /// `[CONSTRAINT name] FOREIGN KEY (cols) REFERENCES t (cols)`.
    ForeignKey {
        /// Constraint name.
        name: Option<Ident>,
        /// Referencing columns.
        columns: Vec<Ident>,
        /// Referenced table and columns.
        references: ForeignKeyRef,
    },
    /// `[CONSTRAINT name] CHECK (expr)`.
    Check {
        /// Constraint name.
        name: Option<Ident>,
        /// The condition.
        expr: Expr,
    },
}

impl TableConstraint {
    /// Returns the constraint name, if any.
    #[must_use]
    pub const fn name(&self) -> Option<&Ident> {
        match self {
            Self::PrimaryKey { name, .. }
            | Self::Unique { name, .. }
            | Self::ForeignKey { name, .. }
            | Self::Check { name, .. } => name.as_ref(),
        }
    }
}
