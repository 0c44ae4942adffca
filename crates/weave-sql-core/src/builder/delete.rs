//! DELETE builders.
//!
//! [`SafeDelete`] only builds once a WHERE clause is present.

use std::marker::PhantomData;

use super::state::{HasTable, NoTable};
use crate::ast::{DeleteStatement, Expr, ObjectName, Statement};

fn empty_statement() -> DeleteStatement {
    DeleteStatement {
        from_keyword: true,
        table: ObjectName::new([]),
        alias: None,
        selection: None,
    }
}

/// A DELETE statement builder.
pub struct Delete<Table> {
    statement: DeleteStatement,
    _state: PhantomData<Table>,
}

impl Delete<NoTable> {
    /// Creates a new DELETE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            statement: empty_statement(),
            _state: PhantomData,
        }
    }

    /// Specifies the table to delete from.
    #[must_use]
    pub fn from(mut self, table: &str) -> Delete<HasTable> {
        self.statement.table = ObjectName::from(table);
        Delete {
            statement: self.statement,
            _state: PhantomData,
        }
    }
}

impl Default for Delete<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl Delete<HasTable> {
    /// Adds a WHERE condition; repeated calls are combined with AND.
    #[must_use]
    pub fn where_clause(mut self, expr: Expr) -> Self {
        self.statement.selection = Some(match self.statement.selection.take() {
            Some(existing) => existing.and(expr),
            None => expr,
        });
        self
    }

    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::Delete(self.statement)
    }
}

/// A DELETE builder that refuses to build without WHERE.
pub struct SafeDelete<Table> {
    statement: DeleteStatement,
    _state: PhantomData<Table>,
}

impl SafeDelete<NoTable> {
    /// Creates a new safe DELETE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            statement: empty_statement(),
            _state: PhantomData,
        }
    }

    /// Specifies the table to delete from.
    #[must_use]
    pub fn from(mut self, table: &str) -> SafeDelete<HasTable> {
        self.statement.table = ObjectName::from(table);
        SafeDelete {
            statement: self.statement,
            _state: PhantomData,
        }
    }
}

impl Default for SafeDelete<NoTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeDelete<HasTable> {
    /// Adds the WHERE clause that unlocks `build()`.
    #[must_use]
    pub fn where_clause(mut self, expr: Expr) -> SafeDeleteWithWhere {
        self.statement.selection = Some(expr);
        SafeDeleteWithWhere {
            statement: self.statement,
        }
    }
}

/// A safe DELETE with its WHERE clause in place.
pub struct SafeDeleteWithWhere {
    statement: DeleteStatement,
}

impl SafeDeleteWithWhere {
    /// Builds the statement.
    #[must_use]
    pub fn build(self) -> Statement {
        Statement::Delete(self.statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{col, lit};

    #[test]
    fn test_simple_delete() {
        let statement = Delete::new()
            .from("users")
            .where_clause(col("id").eq(lit(1)))
            .build();
        assert_eq!(statement.to_string(), "DELETE FROM users WHERE id = 1");
    }

    #[test]
    fn test_delete_all() {
        let statement = Delete::new().from("sessions").build();
        assert_eq!(statement.to_string(), "DELETE FROM sessions");
    }

    #[test]
    fn test_safe_delete() {
        let statement = SafeDelete::new()
            .from("users")
            .where_clause(col("deleted").eq(lit(true)))
            .build();
        assert_eq!(
            statement.to_string(),
            "DELETE FROM users WHERE deleted = TRUE"
        );
    }

    // This would fail to compile: SafeDelete without WHERE
    // let _ = SafeDelete::new().from("users").build();
}
