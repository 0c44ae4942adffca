//! Consumers built on the visitor traits.

use crate::ast::{
    AllColumns, AlterTableOperation, AlterTableStatement, ArrayConstructor, BetweenExpr,
    BinaryExpr, CaseExpr, CastExpr, Column, ConflictAction, CreateTableStatement,
    DeleteStatement, Expr, ExpressionList, FunctionCall, Ident, InListExpr, InSubqueryExpr,
    InsertSource, InsertStatement, IsNullExpr, Join, JoinConstraint, LateralSubSelect, LikeExpr,
    Literal, ObjectName, Parameter, ParenthesedFromItem, ParenthesedSelect, Query, Select,
    SelectItem, SetOperation, ShowStatement, ShowTarget, Statement, StructType, Table,
    TableConstraint, TableFunction, UnaryExpr, UnsupportedStatement, UpdateStatement, Values,
    ValuesTable,
};
use crate::visitor::{ExpressionVisitor, FromItemVisitor, SetExprVisitor, StatementVisitor};

/// Collects the names of the tables a statement reads or writes.
///
/// Names are returned in order of first appearance, without duplicates.
/// Common table expression names are not tables and are left out.
/// Unsupported statements contribute nothing.
///
/// # Example
///
/// ```rust
/// use weave_sql_core::analysis::TableNamesFinder;
/// use weave_sql_core::{parse, DialectKind};
///
/// let statement = parse(
///     "SELECT * FROM orders o JOIN customers c ON o.customer_id = c.id",
///     DialectKind::Generic,
/// )
/// .unwrap();
/// let names: Vec<String> = TableNamesFinder::find(&statement)
///     .iter()
///     .map(ToString::to_string)
///     .collect();
/// assert_eq!(names, ["orders", "customers"]);
/// ```
#[derive(Debug, Default)]
pub struct TableNamesFinder {
    tables: Vec<ObjectName>,
    cte_names: Vec<Ident>,
}

impl TableNamesFinder {
    /// Creates an empty finder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table names used by `statement`.
    #[must_use]
    pub fn find(statement: &Statement) -> Vec<ObjectName> {
        let mut finder = Self::new();
        statement.accept(&mut finder);
        finder.into_tables()
    }

    /// Returns the collected names, excluding CTE references.
    #[must_use]
    pub fn into_tables(self) -> Vec<ObjectName> {
        let cte_names = self.cte_names;
        self.tables
            .into_iter()
            .filter(|name| match name.0.as_slice() {
                [single] => !cte_names
                    .iter()
                    .any(|cte| cte.value.eq_ignore_ascii_case(&single.value)),
                _ => true,
            })
            .collect()
    }

    fn add(&mut self, name: &ObjectName) {
        if !self.tables.contains(name) {
            self.tables.push(name.clone());
        }
    }

    fn query(&mut self, query: &Query) {
        if let Some(with) = &query.with {
            for cte in &with.ctes {
                self.cte_names.push(cte.name.clone());
                self.query(&cte.query);
            }
        }
        query.body.accept(self);
        for order_by in &query.order_by {
            order_by.expr.accept(self);
        }
    }

    fn exprs<'a>(&mut self, exprs: impl IntoIterator<Item = &'a Expr>) {
        for expr in exprs {
            expr.accept(self);
        }
    }

    fn items(&mut self, items: &[SelectItem]) {
        self.exprs(items.iter().map(|item| &item.expr));
    }

    fn joins(&mut self, joins: &[Join]) {
        for join in joins {
            join.item.accept(self);
            if let JoinConstraint::On(expr) = &join.constraint {
                expr.accept(self);
            }
        }
    }
}

impl ExpressionVisitor for TableNamesFinder {
    type Output = ();

    fn visit_literal(&mut self, _: &Literal) {}

    fn visit_column(&mut self, _: &Column) {}

    fn visit_binary(&mut self, expr: &BinaryExpr) {
        expr.left.accept(self);
        expr.right.accept(self);
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) {
        expr.operand.accept(self);
    }

    fn visit_function(&mut self, function: &FunctionCall) {
        self.exprs(&function.args);
    }

    fn visit_array(&mut self, array: &ArrayConstructor) {
        self.exprs(&array.elements);
    }

    fn visit_struct(&mut self, value: &StructType) {
        if let Some(arguments) = &value.arguments {
            self.items(arguments);
        }
    }

    fn visit_subquery(&mut self, query: &Query) {
        self.query(query);
    }

    fn visit_exists(&mut self, query: &Query) {
        self.query(query);
    }

    fn visit_in_list(&mut self, expr: &InListExpr) {
        expr.expr.accept(self);
        self.exprs(&expr.list);
    }

    fn visit_in_subquery(&mut self, expr: &InSubqueryExpr) {
        expr.expr.accept(self);
        self.query(&expr.query);
    }

    fn visit_between(&mut self, expr: &BetweenExpr) {
        expr.expr.accept(self);
        expr.low.accept(self);
        expr.high.accept(self);
    }

    fn visit_is_null(&mut self, expr: &IsNullExpr) {
        expr.expr.accept(self);
    }

    fn visit_like(&mut self, expr: &LikeExpr) {
        expr.expr.accept(self);
        expr.pattern.accept(self);
    }

    fn visit_case(&mut self, expr: &CaseExpr) {
        if let Some(operand) = &expr.operand {
            operand.accept(self);
        }
        for when in &expr.when_clauses {
            when.condition.accept(self);
            when.result.accept(self);
        }
        if let Some(else_result) = &expr.else_result {
            else_result.accept(self);
        }
    }

    fn visit_cast(&mut self, expr: &CastExpr) {
        expr.expr.accept(self);
    }

    fn visit_nested(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    fn visit_tuple(&mut self, items: &ExpressionList) {
        self.exprs(items);
    }

    fn visit_parameter(&mut self, _: &Parameter) {}

    fn visit_all_columns(&mut self, all: &AllColumns) {
        if let Some(replace) = &all.replace {
            self.items(replace);
        }
    }
}

impl FromItemVisitor for TableNamesFinder {
    type Output = ();

    fn visit_table(&mut self, table: &Table) {
        self.add(&table.name);
    }

    fn visit_parenthesed_select(&mut self, select: &ParenthesedSelect) {
        self.query(&select.query);
    }

    fn visit_lateral_sub_select(&mut self, select: &LateralSubSelect) {
        self.query(&select.query);
    }

    fn visit_table_function(&mut self, function: &TableFunction) {
        self.exprs(&function.function.args);
    }

    fn visit_parenthesed_from_item(&mut self, item: &ParenthesedFromItem) {
        item.item.accept(self);
        self.joins(&item.joins);
    }

    fn visit_values_table(&mut self, values: &ValuesTable) {
        self.visit_values(&values.values);
    }
}

impl SetExprVisitor for TableNamesFinder {
    type Output = ();

    fn visit_select(&mut self, select: &Select) {
        self.items(&select.projection);
        if let Some(from) = &select.from {
            from.accept(self);
        }
        self.joins(&select.joins);
        self.exprs(&select.selection);
        self.exprs(&select.group_by);
        self.exprs(&select.having);
        self.exprs(&select.qualify);
    }

    fn visit_parenthesized(&mut self, query: &Query) {
        self.query(query);
    }

    fn visit_set_operation(&mut self, operation: &SetOperation) {
        operation.left.accept(self);
        operation.right.accept(self);
    }

    fn visit_values(&mut self, values: &Values) {
        for row in &values.rows {
            self.exprs(row);
        }
    }
}

impl StatementVisitor for TableNamesFinder {
    type Output = ();

    fn visit_query(&mut self, query: &Query) {
        self.query(query);
    }

    fn visit_insert(&mut self, insert: &InsertStatement) {
        self.add(&insert.table);
        match &insert.source {
            InsertSource::Values(values) => self.visit_values(values),
            InsertSource::Query(query) => self.query(query),
            InsertSource::DefaultValues => {}
        }
        if let Some(on_conflict) = &insert.on_conflict {
            if let ConflictAction::DoUpdate(assignments) = &on_conflict.action {
                self.exprs(assignments.iter().map(|a| &a.value));
            }
        }
    }

    fn visit_update(&mut self, update: &UpdateStatement) {
        self.add(&update.table);
        self.exprs(update.assignments.iter().map(|a| &a.value));
        if let Some(from) = &update.from {
            from.accept(self);
        }
        self.joins(&update.joins);
        self.exprs(&update.selection);
    }

    fn visit_delete(&mut self, delete: &DeleteStatement) {
        self.add(&delete.table);
        self.exprs(&delete.selection);
    }

    fn visit_create_table(&mut self, create: &CreateTableStatement) {
        self.add(&create.name);
        for column in &create.columns {
            if let Some(references) = &column.references {
                self.add(&references.table);
            }
        }
        for constraint in &create.constraints {
            if let TableConstraint::ForeignKey { references, .. } = constraint {
                self.add(&references.table);
            }
        }
        if let Some(query) = &create.query {
            self.query(query);
        }
    }

    fn visit_alter_table(&mut self, alter: &AlterTableStatement) {
        self.add(&alter.name);
        for operation in &alter.operations {
            match operation {
                AlterTableOperation::AddColumn { column, .. } => {
                    if let Some(references) = &column.references {
                        self.add(&references.table);
                    }
                }
                AlterTableOperation::AddConstraint(TableConstraint::ForeignKey {
                    references,
                    ..
                }) => self.add(&references.table),
                _ => {}
            }
        }
    }

    fn visit_show(&mut self, show: &ShowStatement) {
        if let ShowTarget::Indexes { table, .. } = &show.target {
            self.add(table);
        }
    }

    fn visit_unsupported(&mut self, _: &UnsupportedStatement) {}
}
