//! SELECT builder using the typestate pattern.
//!
//! Invalid SQL constructs are caught at compile time.

use std::marker::PhantomData;

use super::expr::col;
use crate::ast::{
    Alias, Expr, FromItem, Join, JoinConstraint, JoinKind, Limit, Offset, OffsetRows, OrderBy,
    Query, Select as SelectBlock, SelectItem, SetExpr, Statement,
};

// Typestate markers (zero-sized types)

/// Marker: No columns specified yet.
pub struct NoColumns;
/// Marker: Columns have been specified.
pub struct HasColumns;
/// Marker: No FROM clause specified yet.
pub struct NoFrom;
/// Marker: FROM clause has been specified.
pub struct HasFrom;

/// A SELECT query builder.
///
/// Uses the typestate pattern to ensure that:
/// - `build()` is only available once columns are specified
/// - `where_clause()` and joins are only available after FROM is specified
/// - `group_by()` and `having()` need both
pub struct Select<Cols, From> {
    block: SelectBlock,
    order_by: Vec<OrderBy>,
    limit_by: Option<Limit>,
    limit: Option<Limit>,
    offset: Option<Offset>,
    _state: PhantomData<(Cols, From)>,
}

impl Select<NoColumns, NoFrom> {
    /// Creates a new SELECT builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            block: SelectBlock::default(),
            order_by: vec![],
            limit_by: None,
            limit: None,
            offset: None,
            _state: PhantomData,
        }
    }
}

impl Default for Select<NoColumns, NoFrom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Cols, From> Select<Cols, From> {
    fn into_state<C, F>(self) -> Select<C, F> {
        Select {
            block: self.block,
            order_by: self.order_by,
            limit_by: self.limit_by,
            limit: self.limit,
            offset: self.offset,
            _state: PhantomData,
        }
    }

    /// Adds a projected expression.
    #[must_use]
    pub fn item(mut self, expr: Expr) -> Select<HasColumns, From> {
        self.block.projection.push(SelectItem::new(expr));
        self.into_state()
    }

    /// Adds a projected expression with an `AS` alias.
    #[must_use]
    pub fn item_as(mut self, expr: Expr, alias: &str) -> Select<HasColumns, From> {
        self.block
            .projection
            .push(SelectItem::with_alias(expr, alias));
        self.into_state()
    }
}

// Transition: NoColumns -> HasColumns
impl<From> Select<NoColumns, From> {
    /// Specifies the columns to select.
    #[must_use]
    pub fn columns(mut self, cols: &[&str]) -> Select<HasColumns, From> {
        self.block.projection = cols.iter().map(|name| SelectItem::new(col(name))).collect();
        self.into_state()
    }

    /// Selects all columns (*).
    #[must_use]
    pub fn all(mut self) -> Select<HasColumns, From> {
        self.block.projection = vec![SelectItem::new(Expr::wildcard())];
        self.into_state()
    }
}

// Transition: NoFrom -> HasFrom
impl<Cols> Select<Cols, NoFrom> {
    /// Specifies the table to select from.
    #[must_use]
    pub fn from(self, table: &str) -> Select<Cols, HasFrom> {
        self.from_item(FromItem::table(table))
    }

    /// Specifies any FROM item (subquery, table function, VALUES ...).
    #[must_use]
    pub fn from_item(mut self, item: FromItem) -> Select<Cols, HasFrom> {
        self.block.from = Some(item);
        self.into_state()
    }
}

// Methods available after FROM
impl<Cols> Select<Cols, HasFrom> {
    /// Adds a WHERE condition; repeated calls are combined with AND.
    #[must_use]
    pub fn where_clause(mut self, expr: Expr) -> Self {
        self.block.selection = Some(match self.block.selection.take() {
            Some(existing) => existing.and(expr),
            None => expr,
        });
        self
    }

    /// Adds an INNER JOIN.
    #[must_use]
    pub fn join(self, table: &str, on: Expr) -> Self {
        self.join_with(JoinKind::InnerExplicit, table, on)
    }

    /// Adds a LEFT JOIN.
    #[must_use]
    pub fn left_join(self, table: &str, on: Expr) -> Self {
        self.join_with(JoinKind::Left, table, on)
    }

    /// Adds a RIGHT JOIN.
    #[must_use]
    pub fn right_join(self, table: &str, on: Expr) -> Self {
        self.join_with(JoinKind::Right, table, on)
    }

    /// Adds a FULL JOIN.
    #[must_use]
    pub fn full_join(self, table: &str, on: Expr) -> Self {
        self.join_with(JoinKind::Full, table, on)
    }

    /// Adds a CROSS JOIN.
    #[must_use]
    pub fn cross_join(mut self, table: &str) -> Self {
        self.block.joins.push(Join {
            kind: JoinKind::Cross,
            item: FromItem::table(table),
            constraint: JoinConstraint::None,
        });
        self
    }

    /// Adds an arbitrary join.
    #[must_use]
    pub fn join_item(mut self, join: Join) -> Self {
        self.block.joins.push(join);
        self
    }

    fn join_with(mut self, kind: JoinKind, table: &str, on: Expr) -> Self {
        self.block.joins.push(Join {
            kind,
            item: FromItem::table(table),
            constraint: JoinConstraint::On(on),
        });
        self
    }
}

// Methods available with columns
impl<From> Select<HasColumns, From> {
    /// Sets DISTINCT.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.block.distinct = true;
        self
    }

    /// Adds an ORDER BY entry.
    #[must_use]
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by.push(order_by);
        self
    }

    /// Sets the LIMIT clause.
    #[must_use]
    pub fn limit(mut self, limit: Limit) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets a ClickHouse `LIMIT n BY ...` clause, rendered before LIMIT.
    #[must_use]
    pub fn limit_by(mut self, limit: Limit) -> Self {
        self.limit_by = Some(limit);
        self
    }

    /// Adds an OFFSET clause.
    #[must_use]
    pub fn offset(mut self, n: i64) -> Self {
        self.offset = Some(Offset {
            value: Expr::integer(n),
            rows: OffsetRows::None,
        });
        self
    }

    /// Builds the query.
    #[must_use]
    pub fn build(self) -> Query {
        Query {
            order_by: self.order_by,
            limit_by: self.limit_by,
            limit: self.limit,
            offset: self.offset,
            ..Query::new(SetExpr::Select(Box::new(self.block)))
        }
    }

    /// Builds the query wrapped as a statement.
    #[must_use]
    pub fn build_statement(self) -> Statement {
        Statement::Select(self.build())
    }

    /// Builds the query and uses it as a parenthesized FROM item.
    #[must_use]
    pub fn build_subquery(self, alias: &str) -> FromItem {
        use crate::ast::{Decorated, FromItemDecorations, ParenthesedSelect};

        FromItem::ParenthesedSelect(ParenthesedSelect {
            query: Box::new(self.build()),
            decorations: FromItemDecorations::default(),
        })
        .with_alias(Some(Alias::new(alias)))
    }
}

// Methods available with FROM (for grouping)
impl Select<HasColumns, HasFrom> {
    /// Adds a GROUP BY clause.
    #[must_use]
    pub fn group_by(mut self, exprs: Vec<Expr>) -> Self {
        self.block.group_by = exprs.into();
        self
    }

    /// Adds a HAVING clause.
    #[must_use]
    pub fn having(mut self, expr: Expr) -> Self {
        self.block.having = Some(expr);
        self
    }

    /// Adds a QUALIFY clause.
    #[must_use]
    pub fn qualify(mut self, expr: Expr) -> Self {
        self.block.qualify = Some(expr);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Decorated;
    use crate::builder::{func, lit, star};

    #[test]
    fn test_simple_select() {
        let query = Select::new().columns(&["id", "name"]).from("users").build();
        assert_eq!(query.to_string(), "SELECT id, name FROM users");
    }

    #[test]
    fn test_select_without_from() {
        let query = Select::new().item(lit(1).binary(crate::ast::BinaryOp::Add, lit(1))).build();
        assert_eq!(query.to_string(), "SELECT 1 + 1");
    }

    #[test]
    fn test_select_distinct() {
        let query = Select::new()
            .columns(&["status"])
            .distinct()
            .from("orders")
            .build();
        assert_eq!(query.to_string(), "SELECT DISTINCT status FROM orders");
    }

    #[test]
    fn test_where_clauses_are_combined() {
        let query = Select::new()
            .all()
            .from("users")
            .where_clause(col("active").eq(lit(true)))
            .where_clause(col("age").gt(lit(18)))
            .build();
        assert_eq!(
            query.to_string(),
            "SELECT * FROM users WHERE active = TRUE AND age > 18"
        );
    }

    #[test]
    fn test_complex_select() {
        let query = Select::new()
            .columns(&["u.id", "u.name"])
            .item_as(func("COUNT", vec![col("o.id")]), "order_count")
            .from_item(FromItem::table("users").with_alias(Some(Alias::new("u"))))
            .left_join("orders", col("u.id").eq(col("o.user_id")))
            .group_by(vec![col("u.id"), col("u.name")])
            .having(func("COUNT", vec![star()]).gt(lit(1)))
            .order_by(OrderBy::new(col("order_count")).desc())
            .limit(Limit::new(10))
            .offset(20)
            .build();

        assert_eq!(
            query.to_string(),
            "SELECT u.id, u.name, COUNT(o.id) AS order_count FROM users AS u \
             LEFT JOIN orders ON u.id = o.user_id GROUP BY u.id, u.name \
             HAVING COUNT(*) > 1 ORDER BY order_count DESC LIMIT 10 OFFSET 20"
        );
    }

    #[test]
    fn test_limit_by() {
        let query = Select::new()
            .all()
            .from("events")
            .limit_by(Limit::new(1).by(vec![col("user_id")]))
            .limit(Limit::new(100))
            .build();
        assert_eq!(
            query.to_string(),
            "SELECT * FROM events LIMIT 1 BY user_id LIMIT 100"
        );
    }

    // This would fail to compile: WHERE without FROM
    // let _ = Select::new().columns(&["id"]).where_clause(col("id").eq(lit(1)));

    // This would fail to compile: SELECT without columns
    // let _ = Select::new().from("users").build();
}
