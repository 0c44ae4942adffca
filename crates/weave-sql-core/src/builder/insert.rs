//! INSERT builder using the typestate pattern.

use std::marker::PhantomData;

use super::error::BuildError;
use super::state::{HasTable, NoTable};
use super::value::IntoExpr;
use crate::ast::{
    Assignment, ConflictAction, ExpressionList, Ident, InsertSource, InsertStatement, ObjectName,
    OnConflict, Query, Statement, Values,
};

/// Marker: no rows or source specified yet.
pub struct NoValues;
/// Marker: a row source has been specified.
pub struct HasValues;

/// An INSERT statement builder.
///
/// `build()` is available once both the table and a row source (VALUES,
/// a query or DEFAULT VALUES) are present.
pub struct Insert<Table, Values> {
    table: Option<ObjectName>,
    columns: Vec<Ident>,
    source: InsertSource,
    on_conflict: Option<OnConflict>,
    _state: PhantomData<(Table, Values)>,
}

impl Insert<NoTable, NoValues> {
    /// Creates a new INSERT builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            table: None,
            columns: Vec::new(),
            source: InsertSource::DefaultValues,
            on_conflict: None,
            _state: PhantomData,
        }
    }
}

impl Default for Insert<NoTable, NoValues> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Table, Vals> Insert<Table, Vals> {
    fn into_state<T, V>(self) -> Insert<T, V> {
        Insert {
            table: self.table,
            columns: self.columns,
            source: self.source,
            on_conflict: self.on_conflict,
            _state: PhantomData,
        }
    }
}

// Transition: NoTable -> HasTable
impl<Vals> Insert<NoTable, Vals> {
    /// Specifies the table to insert into.
    #[must_use]
    pub fn into_table(mut self, table: &str) -> Insert<HasTable, Vals> {
        self.table = Some(ObjectName::from(table));
        self.into_state()
    }
}

impl<Vals> Insert<HasTable, Vals> {
    /// Specifies the target columns.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Self {
        self.columns = cols.iter().map(|name| Ident::new(*name)).collect();
        self
    }
}

// Transition: NoValues -> HasValues
impl Insert<HasTable, NoValues> {
    /// Adds the first row of values.
    #[must_use]
    pub fn values<T: IntoExpr>(mut self, row: Vec<T>) -> Insert<HasTable, HasValues> {
        self.source = InsertSource::Values(Values {
            rows: vec![into_row(row)],
        });
        self.into_state()
    }

    /// Adds several rows at once.
    #[must_use]
    pub fn values_many<T: IntoExpr>(mut self, rows: Vec<Vec<T>>) -> Insert<HasTable, HasValues> {
        self.source = InsertSource::Values(Values {
            rows: rows.into_iter().map(into_row).collect(),
        });
        self.into_state()
    }

    /// Inserts the rows produced by a query.
    #[must_use]
    pub fn select(mut self, query: Query) -> Insert<HasTable, HasValues> {
        self.source = InsertSource::Query(Box::new(query));
        self.into_state()
    }

    /// Inserts a single row of column defaults.
    #[must_use]
    pub fn default_values(mut self) -> Insert<HasTable, HasValues> {
        self.source = InsertSource::DefaultValues;
        self.into_state()
    }
}

impl Insert<HasTable, HasValues> {
    /// Adds another row of values.
    ///
    /// Has no effect when the source is a query or DEFAULT VALUES.
    #[must_use]
    pub fn and_values<T: IntoExpr>(mut self, row: Vec<T>) -> Self {
        if let InsertSource::Values(values) = &mut self.source {
            values.rows.push(into_row(row));
        }
        self
    }

    /// Adds `ON CONFLICT (cols) DO NOTHING`.
    #[must_use]
    pub fn on_conflict_do_nothing(mut self, conflict_columns: &[&str]) -> Self {
        self.on_conflict = Some(OnConflict {
            columns: idents(conflict_columns),
            action: ConflictAction::DoNothing,
        });
        self
    }

    /// Adds `ON CONFLICT (cols) DO UPDATE SET ...`.
    #[must_use]
    pub fn on_conflict_do_update<T: IntoExpr>(
        mut self,
        conflict_columns: &[&str],
        assignments: Vec<(&str, T)>,
    ) -> Self {
        let assignments = assignments
            .into_iter()
            .map(|(column, value)| Assignment {
                column: Ident::new(column),
                value: value.into_expr(),
            })
            .collect();
        self.on_conflict = Some(OnConflict {
            columns: idents(conflict_columns),
            action: ConflictAction::DoUpdate(assignments),
        });
        self
    }

    /// Builds the statement.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::RowWidthMismatch`] if a VALUES row does not
    /// match the column list, or the first row when no columns are named.
    pub fn build(self) -> Result<Statement, BuildError> {
        if let InsertSource::Values(values) = &self.source {
            let expected = if self.columns.is_empty() {
                values.rows.first().map_or(0, ExpressionList::len)
            } else {
                self.columns.len()
            };
            for (index, row) in values.rows.iter().enumerate() {
                if row.len() != expected {
                    return Err(BuildError::RowWidthMismatch {
                        row: index + 1,
                        expected,
                        found: row.len(),
                    });
                }
            }
        }

        Ok(Statement::Insert(InsertStatement {
            into: true,
            table: self.table.unwrap_or_else(|| ObjectName::new([])),
            columns: self.columns,
            source: self.source,
            on_conflict: self.on_conflict,
        }))
    }
}

fn into_row<T: IntoExpr>(row: Vec<T>) -> ExpressionList {
    row.into_iter().map(IntoExpr::into_expr).collect::<Vec<_>>().into()
}

fn idents(names: &[&str]) -> Vec<Ident> {
    names.iter().map(|name| Ident::new(*name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Expr;
    use crate::builder::{param, Select};

    #[test]
    fn test_simple_insert() {
        let statement = Insert::new()
            .into_table("users")
            .columns(&["name", "email"])
            .values(vec!["Alice", "alice@example.com"])
            .build()
            .unwrap();
        assert_eq!(
            statement.to_string(),
            "INSERT INTO users (name, email) VALUES ('Alice', 'alice@example.com')"
        );
    }

    #[test]
    fn test_insert_multiple_rows() {
        let statement = Insert::new()
            .into_table("users")
            .columns(&["id", "name"])
            .values(vec![Expr::integer(1), Expr::string("Alice")])
            .and_values(vec![Expr::integer(2), Expr::string("Bob")])
            .build()
            .unwrap();
        assert_eq!(
            statement.to_string(),
            "INSERT INTO users (id, name) VALUES (1, 'Alice'), (2, 'Bob')"
        );
    }

    #[test]
    fn test_insert_with_params() {
        let statement = Insert::new()
            .into_table("users")
            .columns(&["id", "name"])
            .values(vec![param(1), param(2)])
            .build()
            .unwrap();
        assert_eq!(
            statement.to_string(),
            "INSERT INTO users (id, name) VALUES (?, ?)"
        );
    }

    #[test]
    fn test_insert_row_width_mismatch() {
        let result = Insert::new()
            .into_table("users")
            .columns(&["id", "name"])
            .values(vec![1, 2])
            .and_values(vec![3])
            .build();
        assert_eq!(
            result,
            Err(BuildError::RowWidthMismatch {
                row: 2,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_insert_from_select() {
        let query = Select::new().all().from("staging").build();
        let statement = Insert::new()
            .into_table("users")
            .select(query)
            .build()
            .unwrap();
        assert_eq!(statement.to_string(), "INSERT INTO users SELECT * FROM staging");
    }

    #[test]
    fn test_insert_default_values_on_conflict() {
        let statement = Insert::new()
            .into_table("counters")
            .default_values()
            .on_conflict_do_nothing(&["id"])
            .build()
            .unwrap();
        assert_eq!(
            statement.to_string(),
            "INSERT INTO counters DEFAULT VALUES ON CONFLICT (id) DO NOTHING"
        );
    }

    #[test]
    fn test_insert_on_conflict_do_update() {
        let statement = Insert::new()
            .into_table("counters")
            .columns(&["id", "hits"])
            .values(vec![1, 1])
            .on_conflict_do_update(&["id"], vec![("hits", 2)])
            .build()
            .unwrap();
        assert_eq!(
            statement.to_string(),
            "INSERT INTO counters (id, hits) VALUES (1, 1) ON CONFLICT (id) DO UPDATE SET hits = 2"
        );
    }

    // This would fail to compile: INSERT without a row source
    // let _ = Insert::new().into_table("users").build();
}
