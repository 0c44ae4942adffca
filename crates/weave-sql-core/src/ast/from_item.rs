//! FROM clause items, joins and PIVOT/UNPIVOT decorations.

use serde::{Deserialize, Serialize};

use super::expression::{Column, Expr, ExpressionList, FunctionCall, SelectItem};
use super::ident::{Alias, Ident, ObjectName};
use super::query::Query;

/// `PIVOT (agg, ... FOR col IN (item, ...)) [alias]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    /// Aggregate expressions.
    pub aggregates: Vec<SelectItem>,
    /// Pivot columns; more than one renders as a parenthesized list.
    pub for_columns: Vec<Column>,
    /// Values that become output columns.
    pub in_items: Vec<SelectItem>,
    /// Alias of the pivoted relation.
    pub alias: Option<Alias>,
}

/// `UNPIVOT [INCLUDE|EXCLUDE NULLS] (value FOR name IN (item, ...)) [alias]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnPivot {
    /// `Some(true)` for INCLUDE NULLS, `Some(false)` for EXCLUDE NULLS.
    pub include_nulls: Option<bool>,
    /// Value columns; more than one renders as a parenthesized list.
    pub value_columns: Vec<Ident>,
    /// Name columns; more than one renders as a parenthesized list.
    pub name_columns: Vec<Ident>,
    /// Source columns being unpivoted.
    pub in_items: Vec<SelectItem>,
    /// Alias of the unpivoted relation.
    pub alias: Option<Alias>,
}

/// Decorations shared by every kind of FROM item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FromItemDecorations {
    /// Alias.
    pub alias: Option<Alias>,
    /// PIVOT clause.
    pub pivot: Option<Pivot>,
    /// UNPIVOT clause.
    pub unpivot: Option<UnPivot>,
}

/// Uniform access to alias, pivot and unpivot on any FROM item.
///
/// Setters consume the node and return it with the child replaced.
pub trait Decorated: Sized {
    /// Returns the decorations.
    fn decorations(&self) -> &FromItemDecorations;

    /// Returns the decorations mutably.
    fn decorations_mut(&mut self) -> &mut FromItemDecorations;

    /// Returns the alias.
    fn alias(&self) -> Option<&Alias> {
        self.decorations().alias.as_ref()
    }

    /// Returns the PIVOT clause.
    fn pivot(&self) -> Option<&Pivot> {
        self.decorations().pivot.as_ref()
    }

    /// Returns the UNPIVOT clause.
    fn unpivot(&self) -> Option<&UnPivot> {
        self.decorations().unpivot.as_ref()
    }

    /// Replaces the alias.
    #[must_use]
    fn with_alias(mut self, alias: Option<Alias>) -> Self {
        self.decorations_mut().alias = alias;
        self
    }

    /// Replaces the PIVOT clause.
    #[must_use]
    fn with_pivot(mut self, pivot: Option<Pivot>) -> Self {
        self.decorations_mut().pivot = pivot;
        self
    }

    /// Replaces the UNPIVOT clause.
    #[must_use]
    fn with_unpivot(mut self, unpivot: Option<UnPivot>) -> Self {
        self.decorations_mut().unpivot = unpivot;
        self
    }
}

macro_rules! impl_decorated {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Decorated for $ty {
                fn decorations(&self) -> &FromItemDecorations {
                    &self.decorations
                }

                fn decorations_mut(&mut self) -> &mut FromItemDecorations {
                    &mut self.decorations
                }
            }
        )*
    };
}

/// A named table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name.
    pub name: ObjectName,
    /// Alias, pivot and unpivot.
    pub decorations: FromItemDecorations,
}

impl Table {
    /// Creates an undecorated table reference.
    #[must_use]
    pub fn new(name: impl Into<ObjectName>) -> Self {
        Self {
            name: name.into(),
            decorations: FromItemDecorations::default(),
        }
    }
}

/// `(SELECT ...)` used as a relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesedSelect {
    /// The subquery.
    pub query: Box<Query>,
    /// Alias, pivot and unpivot.
    pub decorations: FromItemDecorations,
}

/// `LATERAL (SELECT ...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateralSubSelect {
    /// The correlated subquery.
    pub query: Box<Query>,
    /// Alias, pivot and unpivot.
    pub decorations: FromItemDecorations,
}

/// A function producing rows, e.g. `UNNEST(arr)` or `LATERAL generate_series(1, 3)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFunction {
    /// Keyword written before the call (`LATERAL`).
    pub prefix: Option<String>,
    /// The call.
    pub function: FunctionCall,
    /// Alias, pivot and unpivot.
    pub decorations: FromItemDecorations,
}

/// A parenthesized join tree: `(a JOIN b ON ...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenthesedFromItem {
    /// Leftmost item.
    pub item: Box<FromItem>,
    /// Joins applied to `item`, in order.
    pub joins: Vec<Join>,
    /// Alias, pivot and unpivot.
    pub decorations: FromItemDecorations,
}

/// `(VALUES (..), (..))` used as a relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuesTable {
    /// The rows.
    pub values: Values,
    /// Alias, pivot and unpivot.
    pub decorations: FromItemDecorations,
}

impl_decorated!(
    Table,
    ParenthesedSelect,
    LateralSubSelect,
    TableFunction,
    ParenthesedFromItem,
    ValuesTable,
);

/// A `VALUES` row list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Values {
    /// The rows, in order.
    pub rows: Vec<ExpressionList>,
}

/// Anything that can appear in a FROM clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FromItem {
    /// A named table.
    Table(Table),
    /// A parenthesized subquery.
    ParenthesedSelect(ParenthesedSelect),
    /// A LATERAL subquery.
    LateralSubSelect(LateralSubSelect),
    /// A table-valued function.
    TableFunction(TableFunction),
    /// A parenthesized join tree.
    ParenthesedFromItem(ParenthesedFromItem),
    /// A VALUES list.
    Values(ValuesTable),
}

impl FromItem {
    /// Creates a simple table reference.
    #[must_use]
    pub fn table(name: impl Into<ObjectName>) -> Self {
        Self::Table(Table::new(name))
    }
}

impl Decorated for FromItem {
    fn decorations(&self) -> &FromItemDecorations {
        match self {
            Self::Table(t) => t.decorations(),
            Self::ParenthesedSelect(s) => s.decorations(),
            Self::LateralSubSelect(l) => l.decorations(),
            Self::TableFunction(t) => t.decorations(),
            Self::ParenthesedFromItem(p) => p.decorations(),
            Self::Values(v) => v.decorations(),
        }
    }

    fn decorations_mut(&mut self) -> &mut FromItemDecorations {
        match self {
            Self::Table(t) => t.decorations_mut(),
            Self::ParenthesedSelect(s) => s.decorations_mut(),
            Self::LateralSubSelect(l) => l.decorations_mut(),
            Self::TableFunction(t) => t.decorations_mut(),
            Self::ParenthesedFromItem(p) => p.decorations_mut(),
            Self::Values(v) => v.decorations_mut(),
        }
    }
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoinKind {
    /// `, item`.
    Comma,
    /// Plain `JOIN`.
    Inner,
    /// `INNER JOIN`.
    InnerExplicit,
    /// LEFT OUTER JOIN.
    Left,
    /// RIGHT OUTER JOIN.
    Right,
    /// FULL OUTER JOIN.
    Full,
    /// CROSS JOIN.
    Cross,
}

impl JoinKind {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Inner => "JOIN",
            Self::InnerExplicit => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
            Self::Full => "FULL JOIN",
            Self::Cross => "CROSS JOIN",
        }
    }
}

/// How a join matches rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JoinConstraint {
    /// `ON expr`.
    On(Expr),
    /// `USING (col, ...)`.
    Using(Vec<Ident>),
    /// No constraint.
    None,
}

/// A join applied to the preceding FROM item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    /// The type of join.
    pub kind: JoinKind,
    /// The joined item.
    pub item: FromItem,
    /// The join condition.
    pub constraint: JoinConstraint,
}
