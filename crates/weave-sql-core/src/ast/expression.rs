//! Expression AST types.

use serde::{Deserialize, Serialize};

use super::ident::{Alias, Ident, ObjectName};
use super::query::Query;
use super::types::{DataType, StructField};
use crate::dialect::StructDialect;

/// A literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Integer literal, kept as written.
    Integer(String),
    /// Float literal, kept as written.
    Float(String),
    /// String literal.
    String(String),
    /// Blob literal (`X'..'`).
    Blob(Vec<u8>),
    /// Boolean literal.
    Boolean(bool),
    /// NULL literal.
    Null,
}

impl Literal {
    /// Returns the value of an integer literal that fits in an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(text) => text.parse().ok(),
            _ => None,
        }
    }

    /// Returns the value of a numeric literal as an `f64`.
    ///
    /// Out-of-range floats come back infinite, as Rust's parser gives them.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(text) | Self::Float(text) => text.parse().ok(),
            _ => None,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    /// `&>`, left operand contains the right one.
    Contains,
    /// `<&`, left operand is contained by the right one.
    ContainedBy,

    // Logical
    And,
    Or,

    // String
    Concat,

    // Bitwise
    BitAnd,
    BitOr,
    LeftShift,
    RightShift,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Contains => "&>",
            Self::ContainedBy => "<&",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Concat => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
        }
    }

    /// Returns the binding strength of the operator; higher binds tighter.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Eq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq
            | Self::Contains
            | Self::ContainedBy => 3,
            Self::BitOr => 4,
            Self::BitAnd => 5,
            Self::LeftShift | Self::RightShift => 6,
            Self::Add | Self::Sub | Self::Concat => 7,
            Self::Mul | Self::Div | Self::Mod => 8,
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Negation (-)
    Neg,
    /// Unary plus (+)
    Plus,
    /// Logical NOT
    Not,
    /// Bitwise NOT (~)
    BitNot,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Plus => "+",
            Self::Not => "NOT",
            Self::BitNot => "~",
        }
    }
}

/// An ordered list of expressions. Order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpressionList(pub Vec<Expr>);

impl ExpressionList {
    /// Creates a list from expressions.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = Expr>) -> Self {
        Self(items.into_iter().collect())
    }

    /// Returns the number of expressions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list holds no expressions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the expressions in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Expr> {
        self.0.iter()
    }
}

impl From<Vec<Expr>> for ExpressionList {
    fn from(items: Vec<Expr>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a ExpressionList {
    type Item = &'a Expr;
    type IntoIter = core::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An expression with an optional alias, as used in projections, struct
/// arguments, PIVOT lists and wildcard `REPLACE` lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    /// The expression.
    pub expr: Expr,
    /// The alias.
    pub alias: Option<Alias>,
}

impl SelectItem {
    /// Creates an unaliased item.
    #[must_use]
    pub const fn new(expr: Expr) -> Self {
        Self { expr, alias: None }
    }

    /// Creates an item with an `AS` alias.
    #[must_use]
    pub fn with_alias(expr: Expr, alias: impl Into<Ident>) -> Self {
        Self {
            expr,
            alias: Some(Alias::new(alias)),
        }
    }
}

/// A column reference (optionally qualified).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    /// Table name or alias (optional).
    pub table: Option<ObjectName>,
    /// Column name.
    pub name: Ident,
}

impl Column {
    /// Creates an unqualified column.
    #[must_use]
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Creates a qualified column.
    #[must_use]
    pub fn qualified(table: impl Into<ObjectName>, name: impl Into<Ident>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }
}

/// A binary expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    /// Left operand.
    pub left: Box<Expr>,
    /// Operator.
    pub op: BinaryOp,
    /// Right operand.
    pub right: Box<Expr>,
}

/// A unary expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    /// Operator.
    pub op: UnaryOp,
    /// Operand.
    pub operand: Box<Expr>,
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// The function name.
    pub name: ObjectName,
    /// The arguments.
    pub args: ExpressionList,
    /// Whether DISTINCT was specified.
    pub distinct: bool,
}

impl FunctionCall {
    /// Creates a call without DISTINCT.
    #[must_use]
    pub fn new(name: impl Into<ObjectName>, args: Vec<Expr>) -> Self {
        Self {
            name: name.into(),
            args: ExpressionList(args),
            distinct: false,
        }
    }
}

/// An array value: `ARRAY[1,2,3]` or `[1,2,3]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayConstructor {
    /// The elements in order.
    pub elements: ExpressionList,
    /// Whether the `ARRAY` keyword prefixes the brackets.
    pub array_keyword: bool,
}

/// A struct value, written differently per dialect.
///
/// BigQuery: `STRUCT<a INT64, b STRING>(1, 'x')`, `STRUCT(1 AS a)`.
/// DuckDB: `{ a:1,b:'x' }`, optionally ascribed `::STRUCT( a INTEGER,b VARCHAR)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructType {
    /// The syntax family this value was written in.
    pub dialect: StructDialect,
    /// The introducing keyword (`STRUCT`), BigQuery only.
    pub keyword: Option<String>,
    /// Typed fields.
    pub parameters: Option<Vec<StructField>>,
    /// Field values. DuckDB values always carry the field name as alias.
    pub arguments: Option<Vec<SelectItem>>,
}

/// `[NOT] IN (expr, ...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InListExpr {
    /// The expression to check.
    pub expr: Box<Expr>,
    /// The candidate values.
    pub list: ExpressionList,
    /// Whether this is NOT IN.
    pub negated: bool,
}

/// `[NOT] IN (SELECT ...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InSubqueryExpr {
    /// The expression to check.
    pub expr: Box<Expr>,
    /// The subquery.
    pub query: Box<Query>,
    /// Whether this is NOT IN.
    pub negated: bool,
}

/// `[NOT] BETWEEN low AND high`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetweenExpr {
    /// The expression to check.
    pub expr: Box<Expr>,
    /// Lower bound.
    pub low: Box<Expr>,
    /// Upper bound.
    pub high: Box<Expr>,
    /// Whether this is NOT BETWEEN.
    pub negated: bool,
}

/// `IS [NOT] NULL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsNullExpr {
    /// The expression to check.
    pub expr: Box<Expr>,
    /// Whether this is IS NOT NULL.
    pub negated: bool,
}

/// `[NOT] LIKE` / `[NOT] ILIKE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LikeExpr {
    /// The expression to match.
    pub expr: Box<Expr>,
    /// The pattern.
    pub pattern: Box<Expr>,
    /// Whether this is NOT LIKE.
    pub negated: bool,
    /// Whether this is ILIKE.
    pub case_insensitive: bool,
}

/// A `WHEN ... THEN ...` arm of a CASE expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhenClause {
    /// The condition (or comparand for a simple CASE).
    pub condition: Expr,
    /// The result.
    pub result: Expr,
}

/// CASE expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseExpr {
    /// The operand (if any).
    pub operand: Option<Box<Expr>>,
    /// WHEN/THEN clauses.
    pub when_clauses: Vec<WhenClause>,
    /// ELSE clause.
    pub else_result: Option<Box<Expr>>,
}

/// How a cast was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CastStyle {
    /// `CAST(expr AS type)`.
    #[default]
    Function,
    /// `expr::type`.
    DoubleColon,
}

/// CAST expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastExpr {
    /// Expression to cast.
    pub expr: Box<Expr>,
    /// Target type.
    pub data_type: DataType,
    /// Written form.
    pub style: CastStyle,
}

/// A parameter placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Parameter {
    /// `?`, numbered from 1 in order of appearance.
    Positional(usize),
    /// `:name` or `@name`.
    Named {
        /// The sigil (`:` or `@`).
        prefix: char,
        /// The parameter name.
        name: String,
    },
}

/// The keyword introducing a wildcard column exclusion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExceptKeyword {
    /// BigQuery `EXCEPT`.
    Except,
    /// DuckDB `EXCLUDE`.
    Exclude,
}

impl ExceptKeyword {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Except => "EXCEPT",
            Self::Exclude => "EXCLUDE",
        }
    }
}

/// `EXCEPT (col, ...)` / `EXCLUDE (col, ...)` after a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WildcardExcept {
    /// Which keyword was written.
    pub keyword: ExceptKeyword,
    /// The excluded columns.
    pub columns: Vec<Ident>,
}

/// `*` or `t.*`, with optional exclusion and replacement lists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AllColumns {
    /// Table qualifier (optional).
    pub table: Option<ObjectName>,
    /// Excluded columns.
    pub except: Option<WildcardExcept>,
    /// Replaced columns, `REPLACE (expr AS col, ...)`.
    pub replace: Option<Vec<SelectItem>>,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),
    /// A column reference.
    Column(Column),
    /// A binary expression.
    Binary(BinaryExpr),
    /// A unary expression.
    Unary(UnaryExpr),
    /// A function call.
    Function(FunctionCall),
    /// An array constructor.
    Array(ArrayConstructor),
    /// A struct value.
    Struct(StructType),
    /// A scalar subquery.
    Subquery(Box<Query>),
    /// `EXISTS (subquery)`.
    Exists(Box<Query>),
    /// `[NOT] IN (list)`.
    InList(InListExpr),
    /// `[NOT] IN (subquery)`.
    InSubquery(InSubqueryExpr),
    /// `[NOT] BETWEEN`.
    Between(BetweenExpr),
    /// `IS [NOT] NULL`.
    IsNull(IsNullExpr),
    /// `[NOT] LIKE` / `ILIKE`.
    Like(LikeExpr),
    /// CASE expression.
    Case(CaseExpr),
    /// CAST expression.
    Cast(CastExpr),
    /// Parenthesized expression.
    Nested(Box<Expr>),
    /// Row constructor `(a, b, ...)`.
    Tuple(ExpressionList),
    /// A parameter placeholder.
    Parameter(Parameter),
    /// Wildcard in SELECT or a function argument.
    AllColumns(AllColumns),
}

impl Expr {
    /// Creates a new column reference.
    #[must_use]
    pub fn column(name: impl Into<Ident>) -> Self {
        Self::Column(Column::new(name))
    }

    /// Creates a new qualified column reference.
    #[must_use]
    pub fn qualified_column(table: impl Into<ObjectName>, name: impl Into<Ident>) -> Self {
        Self::Column(Column::qualified(table, name))
    }

    /// Creates a new integer literal.
    #[must_use]
    pub fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value.to_string()))
    }

    /// Creates a new float literal.
    ///
    /// The text always carries a `.` or an exponent so it reads back as a float.
    #[must_use]
    pub fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(format!("{value:?}")))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates an unqualified `*`.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::AllColumns(AllColumns::default())
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<ObjectName>, args: Vec<Self>) -> Self {
        Self::Function(FunctionCall::new(name, args))
    }

    /// Wraps the expression in parentheses.
    #[must_use]
    pub fn nested(self) -> Self {
        Self::Nested(Box::new(self))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary(BinaryExpr {
            left: Box::new(self),
            op,
            right: Box::new(right),
        })
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::NotEq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::LtEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: Self) -> Self {
        self.binary(BinaryOp::GtEq, right)
    }

    /// Creates a `&>` (contains) expression.
    #[must_use]
    pub fn contains(self, right: Self) -> Self {
        self.binary(BinaryOp::Contains, right)
    }

    /// Creates a `<&` (contained by) expression.
    #[must_use]
    pub fn contained_by(self, right: Self) -> Self {
        self.binary(BinaryOp::ContainedBy, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates a NOT expression.
    #[must_use]
    pub fn logical_not(self) -> Self {
        Self::Unary(UnaryExpr {
            op: UnaryOp::Not,
            operand: Box::new(self),
        })
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull(IsNullExpr {
            expr: Box::new(self),
            negated: false,
        })
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::IsNull(IsNullExpr {
            expr: Box::new(self),
            negated: true,
        })
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: Self) -> Self {
        Self::Like(LikeExpr {
            expr: Box::new(self),
            pattern: Box::new(pattern),
            negated: false,
            case_insensitive: false,
        })
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::Between(BetweenExpr {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
            negated: false,
        })
    }

    /// Creates a NOT BETWEEN expression.
    #[must_use]
    pub fn not_between(self, low: Self, high: Self) -> Self {
        Self::Between(BetweenExpr {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
            negated: true,
        })
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::InList(InListExpr {
            expr: Box::new(self),
            list: ExpressionList(list),
            negated: false,
        })
    }

    /// Creates a NOT IN expression.
    #[must_use]
    pub fn not_in_list(self, list: Vec<Self>) -> Self {
        Self::InList(InListExpr {
            expr: Box::new(self),
            list: ExpressionList(list),
            negated: true,
        })
    }

    /// Creates a `CAST(self AS data_type)` expression.
    #[must_use]
    pub fn cast(self, data_type: DataType) -> Self {
        Self::Cast(CastExpr {
            expr: Box::new(self),
            data_type,
            style: CastStyle::Function,
        })
    }
}
