//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Nodes are plain owned values. Every child is exclusively owned by its
//! parent, so a tree can be cloned, compared and serialized as a whole.

mod expression;
mod from_item;
mod ident;
mod query;
mod statement;
mod types;

pub use expression::{
    AllColumns, ArrayConstructor, BetweenExpr, BinaryExpr, BinaryOp, CaseExpr, CastExpr,
    CastStyle, Column, ExceptKeyword, Expr, ExpressionList, FunctionCall, InListExpr,
    InSubqueryExpr, IsNullExpr, LikeExpr, Literal, Parameter, SelectItem, StructType, UnaryExpr,
    UnaryOp, WhenClause, WildcardExcept,
};
pub use from_item::{
    Decorated, FromItem, FromItemDecorations, Join, JoinConstraint, JoinKind, LateralSubSelect,
    ParenthesedFromItem, ParenthesedSelect, Pivot, Table, TableFunction, UnPivot, Values,
    ValuesTable,
};
pub use ident::{Alias, Ident, ObjectName};
pub use query::{
    Cte, Limit, NullOrdering, Offset, OffsetRows, OrderBy, OrderDirection, Query, Select,
    SetExpr, SetOperation, SetOperator, SetQuantifier, With,
};
pub use statement::{
    AlterColumnAction, AlterTableOperation, AlterTableStatement, Assignment, ConflictAction,
    CreateTableStatement, DeleteStatement, IndexKeyword, InsertSource, InsertStatement,
    OnConflict, ShowStatement, ShowTarget, Statement, UnsupportedStatement, UpdateStatement,
};
pub use types::{
    ArrayTypeSyntax, ColumnDef, DataType, ForeignKeyRef, StructField, StructTypeSyntax,
    TableConstraint,
};

pub use crate::dialect::StructDialect;
