//! Visitor traits over the closed node families.
//!
//! Each family (`Expr`, `FromItem`, `SetExpr`, `Statement`) has a visitor
//! trait with one method per variant and an `accept` method that dispatches
//! with an exhaustive `match`. A new variant therefore has to be handled by
//! every visitor before the crate compiles again.
//!
//! ```rust
//! use weave_sql_core::ast::*;
//! use weave_sql_core::visitor::StatementVisitor;
//!
//! struct Kind;
//!
//! impl StatementVisitor for Kind {
//!     type Output = &'static str;
//!     fn visit_query(&mut self, _: &Query) -> &'static str { "query" }
//!     fn visit_insert(&mut self, _: &InsertStatement) -> &'static str { "insert" }
//!     fn visit_update(&mut self, _: &UpdateStatement) -> &'static str { "update" }
//!     fn visit_delete(&mut self, _: &DeleteStatement) -> &'static str { "delete" }
//!     fn visit_create_table(&mut self, _: &CreateTableStatement) -> &'static str { "create" }
//!     fn visit_alter_table(&mut self, _: &AlterTableStatement) -> &'static str { "alter" }
//!     fn visit_show(&mut self, _: &ShowStatement) -> &'static str { "show" }
//!     fn visit_unsupported(&mut self, _: &UnsupportedStatement) -> &'static str { "other" }
//! }
//!
//! let stmt = weave_sql_core::parse("SHOW search_path", Default::default()).unwrap();
//! assert_eq!(stmt.accept(&mut Kind), "show");
//! ```

use crate::ast::{
    AllColumns, AlterTableStatement, ArrayConstructor, BetweenExpr, BinaryExpr, CaseExpr,
    CastExpr, Column, CreateTableStatement, DeleteStatement, Expr, ExpressionList, FromItem,
    FunctionCall, InListExpr, InSubqueryExpr, InsertStatement, IsNullExpr, LateralSubSelect,
    LikeExpr, Literal, Parameter, ParenthesedFromItem, ParenthesedSelect, Query, Select, SetExpr,
    SetOperation, ShowStatement, Statement, StructType, Table, TableFunction, UnaryExpr,
    UnsupportedStatement, UpdateStatement, Values, ValuesTable,
};

/// Visits each [`Expr`] variant.
pub trait ExpressionVisitor {
    /// Result of a visit.
    type Output;

    fn visit_literal(&mut self, literal: &Literal) -> Self::Output;
    fn visit_column(&mut self, column: &Column) -> Self::Output;
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output;
    fn visit_function(&mut self, function: &FunctionCall) -> Self::Output;
    fn visit_array(&mut self, array: &ArrayConstructor) -> Self::Output;
    fn visit_struct(&mut self, value: &StructType) -> Self::Output;
    fn visit_subquery(&mut self, query: &Query) -> Self::Output;
    fn visit_exists(&mut self, query: &Query) -> Self::Output;
    fn visit_in_list(&mut self, expr: &InListExpr) -> Self::Output;
    fn visit_in_subquery(&mut self, expr: &InSubqueryExpr) -> Self::Output;
    fn visit_between(&mut self, expr: &BetweenExpr) -> Self::Output;
    fn visit_is_null(&mut self, expr: &IsNullExpr) -> Self::Output;
    fn visit_like(&mut self, expr: &LikeExpr) -> Self::Output;
    fn visit_case(&mut self, expr: &CaseExpr) -> Self::Output;
    fn visit_cast(&mut self, expr: &CastExpr) -> Self::Output;
    fn visit_nested(&mut self, expr: &Expr) -> Self::Output;
    fn visit_tuple(&mut self, items: &ExpressionList) -> Self::Output;
    fn visit_parameter(&mut self, parameter: &Parameter) -> Self::Output;
    fn visit_all_columns(&mut self, all: &AllColumns) -> Self::Output;
}

/// Visits each [`FromItem`] variant.
pub trait FromItemVisitor {
    /// Result of a visit.
    type Output;

    fn visit_table(&mut self, table: &Table) -> Self::Output;
    fn visit_parenthesed_select(&mut self, select: &ParenthesedSelect) -> Self::Output;
    fn visit_lateral_sub_select(&mut self, select: &LateralSubSelect) -> Self::Output;
    fn visit_table_function(&mut self, function: &TableFunction) -> Self::Output;
    fn visit_parenthesed_from_item(&mut self, item: &ParenthesedFromItem) -> Self::Output;
    fn visit_values_table(&mut self, values: &ValuesTable) -> Self::Output;
}

/// Visits each [`SetExpr`] variant.
pub trait SetExprVisitor {
    /// Result of a visit.
    type Output;

    fn visit_select(&mut self, select: &Select) -> Self::Output;
    fn visit_parenthesized(&mut self, query: &Query) -> Self::Output;
    fn visit_set_operation(&mut self, operation: &SetOperation) -> Self::Output;
    fn visit_values(&mut self, values: &Values) -> Self::Output;
}

/// Visits each [`Statement`] variant.
pub trait StatementVisitor {
    /// Result of a visit.
    type Output;

    fn visit_query(&mut self, query: &Query) -> Self::Output;
    fn visit_insert(&mut self, insert: &InsertStatement) -> Self::Output;
    fn visit_update(&mut self, update: &UpdateStatement) -> Self::Output;
    fn visit_delete(&mut self, delete: &DeleteStatement) -> Self::Output;
    fn visit_create_table(&mut self, create: &CreateTableStatement) -> Self::Output;
    fn visit_alter_table(&mut self, alter: &AlterTableStatement) -> Self::Output;
    fn visit_show(&mut self, show: &ShowStatement) -> Self::Output;
    fn visit_unsupported(&mut self, statement: &UnsupportedStatement) -> Self::Output;
}

impl Expr {
    /// Dispatches to the visitor method for this variant.
    pub fn accept<V: ExpressionVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Literal(literal) => visitor.visit_literal(literal),
            Self::Column(column) => visitor.visit_column(column),
            Self::Binary(expr) => visitor.visit_binary(expr),
            Self::Unary(expr) => visitor.visit_unary(expr),
            Self::Function(function) => visitor.visit_function(function),
            Self::Array(array) => visitor.visit_array(array),
            Self::Struct(value) => visitor.visit_struct(value),
            Self::Subquery(query) => visitor.visit_subquery(query),
            Self::Exists(query) => visitor.visit_exists(query),
            Self::InList(expr) => visitor.visit_in_list(expr),
            Self::InSubquery(expr) => visitor.visit_in_subquery(expr),
            Self::Between(expr) => visitor.visit_between(expr),
            Self::IsNull(expr) => visitor.visit_is_null(expr),
            Self::Like(expr) => visitor.visit_like(expr),
            Self::Case(expr) => visitor.visit_case(expr),
            Self::Cast(expr) => visitor.visit_cast(expr),
            Self::Nested(expr) => visitor.visit_nested(expr),
            Self::Tuple(items) => visitor.visit_tuple(items),
            Self::Parameter(parameter) => visitor.visit_parameter(parameter),
            Self::AllColumns(all) => visitor.visit_all_columns(all),
        }
    }
}

impl FromItem {
    /// Dispatches to the visitor method for this variant.
    pub fn accept<V: FromItemVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Table(table) => visitor.visit_table(table),
            Self::ParenthesedSelect(select) => visitor.visit_parenthesed_select(select),
            Self::LateralSubSelect(select) => visitor.visit_lateral_sub_select(select),
            Self::TableFunction(function) => visitor.visit_table_function(function),
            Self::ParenthesedFromItem(item) => visitor.visit_parenthesed_from_item(item),
            Self::Values(values) => visitor.visit_values_table(values),
        }
    }
}

impl SetExpr {
    /// Dispatches to the visitor method for this variant.
    pub fn accept<V: SetExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Select(select) => visitor.visit_select(select),
            Self::Parenthesized(query) => visitor.visit_parenthesized(query),
            Self::SetOperation(operation) => visitor.visit_set_operation(operation),
            Self::Values(values) => visitor.visit_values(values),
        }
    }
}

impl Statement {
    /// Dispatches to the visitor method for this variant.
    pub fn accept<V: StatementVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Select(query) => visitor.visit_query(query),
            Self::Insert(insert) => visitor.visit_insert(insert),
            Self::Update(update) => visitor.visit_update(update),
            Self::Delete(delete) => visitor.visit_delete(delete),
            Self::CreateTable(create) => visitor.visit_create_table(create),
            Self::AlterTable(alter) => visitor.visit_alter_table(alter),
            Self::Show(show) => visitor.visit_show(show),
            Self::Unsupported(statement) => visitor.visit_unsupported(statement),
        }
    }
}
