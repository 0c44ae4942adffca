//! Query AST types: SELECT bodies, set operations and row limiting.

use serde::{Deserialize, Serialize};

use super::expression::{Expr, ExpressionList, SelectItem};
use super::from_item::{FromItem, Join, Values};
use super::ident::Ident;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending order (default).
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Null ordering for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NullOrdering {
    /// NULLs come first.
    First,
    /// NULLs come last.
    Last,
}

impl NullOrdering {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::First => "NULLS FIRST",
            Self::Last => "NULLS LAST",
        }
    }
}

/// An ORDER BY clause entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    /// The expression to order by.
    pub expr: Expr,
    /// The direction, if written.
    pub direction: Option<OrderDirection>,
    /// Null ordering (optional).
    pub nulls: Option<NullOrdering>,
}

impl OrderBy {
    /// Creates an entry without direction.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self {
            expr,
            direction: None,
            nulls: None,
        }
    }

    /// Sets ascending order.
    #[must_use]
    pub const fn asc(mut self) -> Self {
        self.direction = Some(OrderDirection::Asc);
        self
    }

    /// Sets descending order.
    #[must_use]
    pub const fn desc(mut self) -> Self {
        self.direction = Some(OrderDirection::Desc);
        self
    }

    /// Sets the placement of NULLs.
    #[must_use]
    pub const fn nulls(mut self, nulls: NullOrdering) -> Self {
        self.nulls = Some(nulls);
        self
    }
}

/// A row-count limit.
///
/// Exactly one of `limit_null`, `limit_all` or `row_count` is active. `offset`
/// only accompanies `row_count` (`LIMIT offset, count`). `by` turns the limit
/// into a per-group limit (`LIMIT n BY expr, ...`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Limit {
    /// Maximum number of rows.
    pub row_count: Option<Expr>,
    /// Rows to skip, from the `LIMIT offset, count` form.
    pub offset: Option<Expr>,
    /// `LIMIT ALL`.
    pub limit_all: bool,
    /// `LIMIT NULL`.
    pub limit_null: bool,
    /// `BY` expressions.
    pub by: Option<ExpressionList>,
}

/// Keyword following an `OFFSET` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OffsetRows {
    /// No keyword.
    #[default]
    None,
    /// `ROW`.
    Row,
    /// `ROWS`.
    Rows,
}

/// `OFFSET n [ROW|ROWS]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Rows to skip.
    pub value: Expr,
    /// Trailing keyword.
    pub rows: OffsetRows,
}

/// A common table expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cte {
    /// CTE name.
    pub name: Ident,
    /// Optional column list.
    pub columns: Vec<Ident>,
    /// The CTE body.
    pub query: Box<Query>,
}

/// `WITH [RECURSIVE] cte, ...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct With {
    /// Whether RECURSIVE was specified.
    pub recursive: bool,
    /// The CTEs in order.
    pub ctes: Vec<Cte>,
}

/// A plain SELECT block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Select {
    /// Whether to select DISTINCT values.
    pub distinct: bool,
    /// The columns to select.
    pub projection: Vec<SelectItem>,
    /// The first FROM item.
    pub from: Option<FromItem>,
    /// Joins applied to `from`, in order.
    pub joins: Vec<Join>,
    /// WHERE clause.
    pub selection: Option<Expr>,
    /// GROUP BY expressions.
    pub group_by: ExpressionList,
    /// HAVING clause.
    pub having: Option<Expr>,
    /// QUALIFY clause.
    pub qualify: Option<Expr>,
}

/// Set operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SetOperator {
    /// UNION.
    Union,
    /// INTERSECT.
    Intersect,
    /// EXCEPT.
    Except,
}

impl SetOperator {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
        }
    }
}

/// `ALL` / `DISTINCT` after a set operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SetQuantifier {
    /// Nothing written.
    #[default]
    None,
    /// ALL.
    All,
    /// DISTINCT.
    Distinct,
}

/// `left <op> [ALL|DISTINCT] right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetOperation {
    /// Operator.
    pub op: SetOperator,
    /// Quantifier.
    pub quantifier: SetQuantifier,
    /// Left operand.
    pub left: Box<SetExpr>,
    /// Right operand.
    pub right: Box<SetExpr>,
}

/// The body of a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SetExpr {
    /// A SELECT block.
    Select(Box<Select>),
    /// A parenthesized query.
    Parenthesized(Box<Query>),
    /// A set operation.
    SetOperation(SetOperation),
    /// A VALUES list.
    Values(Values),
}

/// A full query: optional WITH, a body and the row-limiting tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// WITH clause.
    pub with: Option<With>,
    /// The body.
    pub body: SetExpr,
    /// ORDER BY clauses.
    pub order_by: Vec<OrderBy>,
    /// Per-group limit (`LIMIT n BY ...`), rendered before `limit`.
    pub limit_by: Option<Limit>,
    /// LIMIT clause.
    pub limit: Option<Limit>,
    /// OFFSET clause.
    pub offset: Option<Offset>,
}

impl Query {
    /// Wraps a body in a query without any tail clauses.
    #[must_use]
    pub const fn new(body: SetExpr) -> Self {
        Self {
            with: None,
            body,
            order_by: Vec::new(),
            limit_by: None,
            limit: None,
            offset: None,
        }
    }

    /// Wraps a SELECT block in a query.
    #[must_use]
    pub fn select(select: Select) -> Self {
        Self::new(SetExpr::Select(Box::new(select)))
    }

    /// Returns the SELECT block if the body is a plain SELECT.
    #[must_use]
    pub fn as_select(&self) -> Option<&Select> {
        match &self.body {
            SetExpr::Select(select) => Some(select),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_direction() {
        assert_eq!(OrderDirection::Asc.as_str(), "ASC");
        assert_eq!(OrderDirection::Desc.as_str(), "DESC");
    }

    #[test]
    fn test_query_as_select() {
        let query = Query::select(Select {
            distinct: true,
            ..Select::default()
        });
        assert!(query.as_select().is_some_and(|s| s.distinct));

        let values = Query::new(SetExpr::Values(Values::default()));
        assert!(values.as_select().is_none());
    }
}
