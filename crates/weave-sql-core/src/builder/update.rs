//! UPDATE builder using the typestate pattern.

use std::marker::PhantomData;

use super::state::{HasTable, NoTable};
use super::value::IntoExpr;
use crate::ast::{
    Alias, Assignment, Expr, FromItem, Ident, Join, ObjectName, Statement, UpdateStatement,
};

/// Marker: no SET assignments yet.
pub struct NoSet;
/// Marker: at least one SET assignment.
pub struct HasSet;

/// An UPDATE statement builder.
pub struct Update<Table, Set> {
    statement: UpdateStatement,
    _state: PhantomData<(Table, Set)>,
}

impl Update<NoTable, NoSet> {
    /// Creates a new UPDATE builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            statement: UpdateStatement {
                table: ObjectName::new([]),
                alias: None,
                assignments: Vec::new(),
                from: None,
                joins: Vec::new(),
                selection: None,
            },
            _state: PhantomData,
        }
    }
}

impl Default for Update<NoTable, NoSet> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Table, Set> Update<Table, Set> {
    fn into_state<T, S>(self) -> Update<T, S> {
        Update {
            statement: self.statement,
            _state: PhantomData,
        }
    }
}

// Transition: NoTable -> HasTable
impl Update<NoTable, NoSet> {
    /// Specifies the table to update.
    #[must_use]
    pub fn table(mut self, table: &str) -> Update<HasTable, NoSet> {
        self.statement.table = ObjectName::from(table);
        self.into_state()
    }
}

impl<Set> Update<HasTable, Set> {
    /// Sets a table alias, written without `AS`.
    #[must_use]
    pub fn alias(mut self, alias: &str) -> Self {
        self.statement.alias = Some(Alias::implicit(alias));
        self
    }

    /// Adds a `column = value` assignment.
    #[must_use]
    pub fn set<T: IntoExpr>(mut self, column: &str, value: T) -> Update<HasTable, HasSet> {
        self.statement.assignments.push(Assignment {
            column: Ident::new(column),
            value: value.into_expr(),
        });
        self.into_state()
    }
}

impl Update<HasTable, HasSet> {
    /// Adds a FROM clause.
    #[must_use]
    pub fn from(mut self, item: FromItem) -> Self {
        self.statement.from = Some(item);
        self
    }

    /// Adds a join to the FROM clause.
    #[must_use]
    pub fn join(mut self, join: Join) -> Self {
        self.statement.joins.push(join);
        self
    }

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
        Statement::Update(self.statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{col, lit, named_param};

    #[test]
    fn test_simple_update() {
        let statement = Update::new()
            .table("users")
            .set("name", "Bob")
            .where_clause(col("id").eq(lit(1)))
            .build();
        assert_eq!(
            statement.to_string(),
            "UPDATE users SET name = 'Bob' WHERE id = 1"
        );
    }

    #[test]
    fn test_update_multiple_columns() {
        let statement = Update::new()
            .table("users")
            .set("name", named_param("name"))
            .set("active", false)
            .build();
        assert_eq!(
            statement.to_string(),
            "UPDATE users SET name = :name, active = FALSE"
        );
    }

    #[test]
    fn test_update_from() {
        let statement = Update::new()
            .table("orders")
            .alias("o")
            .set("total", col("s.total"))
            .from(FromItem::table("staging"))
            .where_clause(col("o.id").eq(col("staging.id")))
            .build();
        assert_eq!(
            statement.to_string(),
            "UPDATE orders o SET total = s.total FROM staging WHERE o.id = staging.id"
        );
    }

    // This would fail to compile: UPDATE without SET
    // let _ = Update::new().table("users").build();
}
