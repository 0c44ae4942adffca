//! SQL statement AST types.

use serde::{Deserialize, Serialize};

use super::expression::Expr;
use super::from_item::{FromItem, Join, Values};
use super::ident::{Alias, Ident, ObjectName};
use super::query::Query;
use super::types::{ColumnDef, DataType, TableConstraint};

/// Source of data for INSERT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InsertSource {
    /// VALUES (...), (...), ...
    Values(Values),
    /// SELECT ...
    Query(Box<Query>),
    /// DEFAULT VALUES
    DefaultValues,
}

/// An assignment in UPDATE SET or ON CONFLICT DO UPDATE SET.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Target column.
    pub column: Ident,
    /// Value expression.
    pub value: Expr,
}

/// Action to take on conflict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConflictAction {
    /// DO NOTHING
    DoNothing,
    /// DO UPDATE SET ...
    DoUpdate(Vec<Assignment>),
}

/// ON CONFLICT clause for UPSERT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnConflict {
    /// Conflict target columns.
    pub columns: Vec<Ident>,
    /// Action to take on conflict.
    pub action: ConflictAction,
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertStatement {
    /// Whether INTO was written.
    pub into: bool,
    /// Target table.
    pub table: ObjectName,
    /// Column names (optional).
    pub columns: Vec<Ident>,
    /// Rows to insert.
    pub source: InsertSource,
    /// ON CONFLICT clause.
    pub on_conflict: Option<OnConflict>,
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStatement {
    /// Target table.
    pub table: ObjectName,
    /// Alias.
    pub alias: Option<Alias>,
    /// SET assignments.
    pub assignments: Vec<Assignment>,
    /// FROM clause.
    pub from: Option<FromItem>,
    /// Joins applied to `from`.
    pub joins: Vec<Join>,
    /// WHERE clause.
    pub selection: Option<Expr>,
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteStatement {
    /// Whether FROM was written.
    pub from_keyword: bool,
    /// Target table.
    pub table: ObjectName,
    /// Alias.
    pub alias: Option<Alias>,
    /// WHERE clause.
    pub selection: Option<Expr>,
}

/// A CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTableStatement {
    /// TEMPORARY table.
    pub temporary: bool,
    /// IF NOT EXISTS.
    pub if_not_exists: bool,
    /// Table name.
    pub name: ObjectName,
    /// Column definitions.
    pub columns: Vec<ColumnDef>,
    /// Table-level constraints.
    pub constraints: Vec<TableConstraint>,
    /// `AS query` body.
    pub query: Option<Box<Query>>,
}

/// A change made by `ALTER COLUMN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlterColumnAction {
    /// SET DEFAULT expr
    SetDefault(Expr),
    /// DROP DEFAULT
    DropDefault,
    /// SET NOT NULL
    SetNotNull,
    /// DROP NOT NULL
    DropNotNull,
    /// SET DATA TYPE type
    SetDataType(DataType),
}

/// One operation of an ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlterTableOperation {
    /// ADD [COLUMN] [IF NOT EXISTS] def
    AddColumn {
        /// Whether COLUMN was written.
        column_keyword: bool,
        /// IF NOT EXISTS.
        if_not_exists: bool,
        /// The new column.
        column: ColumnDef,
    },
    /// DROP [COLUMN] [IF EXISTS] name
    DropColumn {
        /// Whether COLUMN was written.
        column_keyword: bool,
        /// IF EXISTS.
        if_exists: bool,
        /// Column to drop.
        name: Ident,
    },
    /// RENAME COLUMN old TO new
    RenameColumn {
        /// Current name.
        old_name: Ident,
        /// New name.
        new_name: Ident,
    },
    /// RENAME TO new
    RenameTable {
        /// New table name.
        new_name: ObjectName,
    },
    /// ALTER [COLUMN] name action
    AlterColumn {
        /// Column to alter.
        name: Ident,
        /// The change.
        action: AlterColumnAction,
    },
    /// ADD constraint
    AddConstraint(TableConstraint),
    /// DROP CONSTRAINT [IF EXISTS] name
    DropConstraint {
        /// IF EXISTS.
        if_exists: bool,
        /// Constraint name.
        name: Ident,
    },
}

/// An ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTableStatement {
    /// Table name.
    pub name: ObjectName,
    /// Operations in order.
    pub operations: Vec<AlterTableOperation>,
}

/// The word naming the index listing in `SHOW INDEXES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKeyword {
    /// INDEX
    Index,
    /// INDEXES
    Indexes,
    /// KEYS
    Keys,
}

impl IndexKeyword {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "INDEX",
            Self::Indexes => "INDEXES",
            Self::Keys => "KEYS",
        }
    }
}

/// What a SHOW statement asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShowTarget {
    /// `SHOW name`: a setting, variable or database.
    Variable(Ident),
    /// `SHOW INDEXES FROM table`.
    Indexes {
        /// Which keyword was written.
        keyword: IndexKeyword,
        /// Table whose indexes are listed.
        table: ObjectName,
    },
}

/// A SHOW statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShowStatement {
    /// What to show.
    pub target: ShowTarget,
}

/// A statement kept as verbatim source text because no structural grammar
/// covers it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnsupportedStatement {
    /// The source text, without the terminating `;`.
    pub text: String,
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// SELECT (or any other query) statement.
    Select(Query),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// CREATE TABLE statement.
    CreateTable(CreateTableStatement),
    /// ALTER TABLE statement.
    AlterTable(AlterTableStatement),
    /// SHOW statement.
    Show(ShowStatement),
    /// Unrecognized statement.
    Unsupported(UnsupportedStatement),
}

impl Statement {
    /// Returns the query if this is a SELECT statement.
    #[must_use]
    pub const fn as_query(&self) -> Option<&Query> {
        match self {
            Self::Select(query) => Some(query),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_keyword() {
        assert_eq!(IndexKeyword::Indexes.as_str(), "INDEXES");
        assert_eq!(IndexKeyword::Keys.as_str(), "KEYS");
    }

    #[test]
    fn test_as_query() {
        let unsupported = Statement::Unsupported(UnsupportedStatement {
            text: String::from("VACUUM"),
        });
        assert!(unsupported.as_query().is_none());
    }
}
