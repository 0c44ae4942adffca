//! Expression rendering.

use super::dialect::{render_struct_bigquery, render_struct_duckdb};
use super::{push_display_list, push_list, SelectDeparser};
use crate::ast::{
    AllColumns, ArrayConstructor, BetweenExpr, BinaryExpr, CaseExpr, CastExpr, CastStyle, Column,
    Expr, ExpressionList, FunctionCall, InListExpr, InSubqueryExpr, IsNullExpr, LikeExpr,
    Literal, Parameter, Query, SelectItem, StructDialect, StructType, UnaryExpr, UnaryOp,
};
use crate::visitor::ExpressionVisitor;

/// Renders expressions into a shared buffer.
pub struct ExpressionDeparser<'a> {
    buffer: &'a mut String,
}

impl<'a> ExpressionDeparser<'a> {
    /// Creates a deparser appending to `buffer`.
    pub fn new(buffer: &'a mut String) -> Self {
        Self { buffer }
    }

    /// Renders one expression.
    pub fn deparse(&mut self, expr: &Expr) {
        expr.accept(self);
    }

    /// Renders `expr [AS alias]`.
    pub fn deparse_select_item(&mut self, item: &SelectItem) {
        self.deparse(&item.expr);
        if let Some(alias) = &item.alias {
            self.buffer.push(' ');
            self.buffer.push_str(&alias.to_string());
        }
    }

    /// Renders select items separated by `separator`.
    pub fn deparse_select_items(&mut self, items: &[SelectItem], separator: &str) {
        push_list(self.buffer, items, separator, |buffer, item| {
            ExpressionDeparser::new(buffer).deparse_select_item(item);
        });
    }

    /// Renders an expression list separated by `separator`.
    pub fn deparse_list(&mut self, list: &ExpressionList, separator: &str) {
        push_list(self.buffer, &list.0, separator, |buffer, expr| {
            ExpressionDeparser::new(buffer).deparse(expr);
        });
    }

    /// Renders a possibly qualified column name.
    pub fn deparse_column(&mut self, column: &Column) {
        self.visit_column(column);
    }

    /// Renders `name([DISTINCT ]args)`.
    pub fn deparse_function(&mut self, function: &FunctionCall) {
        self.visit_function(function);
    }

    /// Appends raw text.
    pub fn push_str(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn query(&mut self, query: &Query) {
        SelectDeparser::new(self.buffer).deparse_query(query);
    }

    /// Renders `expr`, parenthesized when `wrap` holds.
    fn operand(&mut self, expr: &Expr, wrap: bool) {
        if wrap {
            self.buffer.push('(');
            self.deparse(expr);
            self.buffer.push(')');
        } else {
            self.deparse(expr);
        }
    }

    fn negated(&mut self, negated: bool) {
        if negated {
            self.buffer.push_str(" NOT");
        }
    }
}

/// Returns the precedence of a binary expression, if `expr` is one.
fn binary_precedence(expr: &Expr) -> Option<u8> {
    match expr {
        Expr::Binary(binary) => Some(binary.op.precedence()),
        _ => None,
    }
}

/// Whether `expr` must be parenthesized before a postfix `::type`.
const fn needs_parens_before_cast(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Binary(_)
            | Expr::Unary(_)
            | Expr::InList(_)
            | Expr::InSubquery(_)
            | Expr::Between(_)
            | Expr::IsNull(_)
            | Expr::Like(_)
    )
}

fn render_literal(buffer: &mut String, literal: &Literal) {
    match literal {
        Literal::Integer(text) | Literal::Float(text) => buffer.push_str(text),
        Literal::String(s) => {
            buffer.push('\'');
            buffer.push_str(&s.replace('\'', "''"));
            buffer.push('\'');
        }
        Literal::Blob(bytes) => {
            buffer.push_str("X'");
            for byte in bytes {
                buffer.push_str(&format!("{byte:02X}"));
            }
            buffer.push('\'');
        }
        Literal::Boolean(true) => buffer.push_str("TRUE"),
        Literal::Boolean(false) => buffer.push_str("FALSE"),
        Literal::Null => buffer.push_str("NULL"),
    }
}

impl ExpressionVisitor for ExpressionDeparser<'_> {
    type Output = ();

    fn visit_literal(&mut self, literal: &Literal) {
        render_literal(self.buffer, literal);
    }

    fn visit_column(&mut self, column: &Column) {
        if let Some(table) = &column.table {
            self.buffer.push_str(&table.to_string());
            self.buffer.push('.');
        }
        self.buffer.push_str(&column.name.to_string());
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) {
        let precedence = expr.op.precedence();
        let wrap_left = binary_precedence(&expr.left).is_some_and(|p| p < precedence);
        let wrap_right = binary_precedence(&expr.right).is_some_and(|p| p <= precedence);

        self.operand(&expr.left, wrap_left);
        self.buffer.push(' ');
        self.buffer.push_str(expr.op.as_str());
        self.buffer.push(' ');
        self.operand(&expr.right, wrap_right);
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) {
        if expr.op == UnaryOp::Not {
            self.buffer.push_str("NOT ");
            let wrap = binary_precedence(&expr.operand).is_some_and(|p| p <= 2);
            self.operand(&expr.operand, wrap);
            return;
        }

        let mut operand = String::new();
        ExpressionDeparser::new(&mut operand)
            .operand(&expr.operand, binary_precedence(&expr.operand).is_some());
        self.buffer.push_str(expr.op.as_str());
        // `--` and `++` would start a comment or merge the signs
        if operand.starts_with(|c| c == '-' || c == '+') {
            self.buffer.push(' ');
        }
        self.buffer.push_str(&operand);
    }

    fn visit_function(&mut self, function: &FunctionCall) {
        self.buffer.push_str(&function.name.to_string());
        self.buffer.push('(');
        if function.distinct {
            self.buffer.push_str("DISTINCT ");
        }
        self.deparse_list(&function.args, ", ");
        self.buffer.push(')');
    }

    fn visit_array(&mut self, array: &ArrayConstructor) {
        if array.array_keyword {
            self.buffer.push_str("ARRAY");
        }
        self.buffer.push('[');
        self.deparse_list(&array.elements, ",");
        self.buffer.push(']');
    }

    fn visit_struct(&mut self, value: &StructType) {
        match value.dialect {
            StructDialect::BigQuery => render_struct_bigquery(self, value),
            StructDialect::DuckDb => render_struct_duckdb(self, value),
        }
    }

    fn visit_subquery(&mut self, query: &Query) {
        self.buffer.push('(');
        self.query(query);
        self.buffer.push(')');
    }

    fn visit_exists(&mut self, query: &Query) {
        self.buffer.push_str("EXISTS (");
        self.query(query);
        self.buffer.push(')');
    }

    fn visit_in_list(&mut self, expr: &InListExpr) {
        self.deparse(&expr.expr);
        self.negated(expr.negated);
        self.buffer.push_str(" IN (");
        self.deparse_list(&expr.list, ", ");
        self.buffer.push(')');
    }

    fn visit_in_subquery(&mut self, expr: &InSubqueryExpr) {
        self.deparse(&expr.expr);
        self.negated(expr.negated);
        self.buffer.push_str(" IN (");
        self.query(&expr.query);
        self.buffer.push(')');
    }

    fn visit_between(&mut self, expr: &BetweenExpr) {
        self.deparse(&expr.expr);
        self.negated(expr.negated);
        self.buffer.push_str(" BETWEEN ");
        self.deparse(&expr.low);
        self.buffer.push_str(" AND ");
        self.deparse(&expr.high);
    }

    fn visit_is_null(&mut self, expr: &IsNullExpr) {
        self.deparse(&expr.expr);
        self.buffer.push_str(if expr.negated {
            " IS NOT NULL"
        } else {
            " IS NULL"
        });
    }

    fn visit_like(&mut self, expr: &LikeExpr) {
        self.deparse(&expr.expr);
        self.negated(expr.negated);
        self.buffer.push_str(if expr.case_insensitive {
            " ILIKE "
        } else {
            " LIKE "
        });
        self.deparse(&expr.pattern);
    }

    fn visit_case(&mut self, expr: &CaseExpr) {
        self.buffer.push_str("CASE");
        if let Some(operand) = &expr.operand {
            self.buffer.push(' ');
            self.deparse(operand);
        }
        for clause in &expr.when_clauses {
            self.buffer.push_str(" WHEN ");
            self.deparse(&clause.condition);
            self.buffer.push_str(" THEN ");
            self.deparse(&clause.result);
        }
        if let Some(else_result) = &expr.else_result {
            self.buffer.push_str(" ELSE ");
            self.deparse(else_result);
        }
        self.buffer.push_str(" END");
    }

    fn visit_cast(&mut self, expr: &CastExpr) {
        match expr.style {
            CastStyle::Function => {
                self.buffer.push_str("CAST(");
                self.deparse(&expr.expr);
                self.buffer.push_str(" AS ");
                self.buffer.push_str(&expr.data_type.to_sql());
                self.buffer.push(')');
            }
            CastStyle::DoubleColon => {
                self.operand(&expr.expr, needs_parens_before_cast(&expr.expr));
                self.buffer.push_str("::");
                self.buffer.push_str(&expr.data_type.to_sql());
            }
        }
    }

    fn visit_nested(&mut self, expr: &Expr) {
        self.operand(expr, true);
    }

    fn visit_tuple(&mut self, items: &ExpressionList) {
        self.buffer.push('(');
        self.deparse_list(items, ", ");
        self.buffer.push(')');
    }

    fn visit_parameter(&mut self, parameter: &Parameter) {
        match parameter {
            Parameter::Positional(_) => self.buffer.push('?'),
            Parameter::Named { prefix, name } => {
                self.buffer.push(*prefix);
                self.buffer.push_str(name);
            }
        }
    }

    fn visit_all_columns(&mut self, all: &AllColumns) {
        if let Some(table) = &all.table {
            self.buffer.push_str(&table.to_string());
            self.buffer.push('.');
        }
        self.buffer.push('*');
        if let Some(except) = &all.except {
            self.buffer.push(' ');
            self.buffer.push_str(except.keyword.as_str());
            self.buffer.push_str(" (");
            push_display_list(self.buffer, &except.columns, ", ");
            self.buffer.push(')');
        }
        if let Some(replace) = &all.replace {
            self.buffer.push_str(" REPLACE (");
            self.deparse_select_items(replace, ", ");
            self.buffer.push(')');
        }
    }
}
