//! Query, SELECT block and set operation rendering.

use super::{push_display_list, push_list, ExpressionDeparser, FromItemDeparser, LimitDeparser};
use crate::ast::{
    OffsetRows, OrderBy, Query, Select, SetExpr, SetOperation, SetQuantifier, Values, With,
};
use crate::visitor::SetExprVisitor;

/// Renders queries and their set-expression bodies.
pub struct SelectDeparser<'a> {
    buffer: &'a mut String,
}

impl<'a> SelectDeparser<'a> {
    /// Creates a deparser appending to `buffer`.
    pub fn new(buffer: &'a mut String) -> Self {
        Self { buffer }
    }

    /// Renders a full query: WITH, body, ORDER BY, LIMIT ... BY, LIMIT, OFFSET.
    pub fn deparse_query(&mut self, query: &Query) {
        if let Some(with) = &query.with {
            self.with(with);
        }

        query.body.accept(self);

        if !query.order_by.is_empty() {
            self.buffer.push_str(" ORDER BY ");
            push_list(self.buffer, &query.order_by, ", ", render_order_by);
        }

        if let Some(limit_by) = &query.limit_by {
            LimitDeparser::new(self.buffer).deparse(limit_by);
        }
        if let Some(limit) = &query.limit {
            LimitDeparser::new(self.buffer).deparse(limit);
        }

        if let Some(offset) = &query.offset {
            self.buffer.push_str(" OFFSET ");
            ExpressionDeparser::new(self.buffer).deparse(&offset.value);
            match offset.rows {
                OffsetRows::None => {}
                OffsetRows::Row => self.buffer.push_str(" ROW"),
                OffsetRows::Rows => self.buffer.push_str(" ROWS"),
            }
        }
    }

    /// Renders a SELECT block.
    pub fn deparse_select(&mut self, select: &Select) {
        self.visit_select(select);
    }

    /// Renders a set expression.
    pub fn deparse_set_expr(&mut self, body: &SetExpr) {
        body.accept(self);
    }

    /// Renders `VALUES (..), (..)`.
    pub fn deparse_values(&mut self, values: &Values) {
        self.buffer.push_str("VALUES ");
        push_list(self.buffer, &values.rows, ", ", |buffer, row| {
            buffer.push('(');
            ExpressionDeparser::new(buffer).deparse_list(row, ", ");
            buffer.push(')');
        });
    }

    fn with(&mut self, with: &With) {
        self.buffer.push_str("WITH ");
        if with.recursive {
            self.buffer.push_str("RECURSIVE ");
        }
        push_list(self.buffer, &with.ctes, ", ", |buffer, cte| {
            buffer.push_str(&cte.name.to_string());
            if !cte.columns.is_empty() {
                buffer.push_str(" (");
                push_display_list(buffer, &cte.columns, ", ");
                buffer.push(')');
            }
            buffer.push_str(" AS (");
            SelectDeparser::new(buffer).deparse_query(&cte.query);
            buffer.push(')');
        });
        self.buffer.push(' ');
    }
}

fn render_order_by(buffer: &mut String, order_by: &OrderBy) {
    ExpressionDeparser::new(buffer).deparse(&order_by.expr);
    if let Some(direction) = order_by.direction {
        buffer.push(' ');
        buffer.push_str(direction.as_str());
    }
    if let Some(nulls) = order_by.nulls {
        buffer.push(' ');
        buffer.push_str(nulls.as_str());
    }
}

impl SetExprVisitor for SelectDeparser<'_> {
    type Output = ();

    fn visit_select(&mut self, select: &Select) {
        self.buffer.push_str("SELECT ");
        if select.distinct {
            self.buffer.push_str("DISTINCT ");
        }
        ExpressionDeparser::new(self.buffer).deparse_select_items(&select.projection, ", ");

        if let Some(from) = &select.from {
            self.buffer.push_str(" FROM ");
            let mut from_deparser = FromItemDeparser::new(self.buffer);
            from_deparser.deparse(from);
            from_deparser.deparse_joins(&select.joins);
        }

        if let Some(selection) = &select.selection {
            self.buffer.push_str(" WHERE ");
            ExpressionDeparser::new(self.buffer).deparse(selection);
        }

        if !select.group_by.is_empty() {
            self.buffer.push_str(" GROUP BY ");
            ExpressionDeparser::new(self.buffer).deparse_list(&select.group_by, ", ");
        }

        if let Some(having) = &select.having {
            self.buffer.push_str(" HAVING ");
            ExpressionDeparser::new(self.buffer).deparse(having);
        }

        if let Some(qualify) = &select.qualify {
            self.buffer.push_str(" QUALIFY ");
            ExpressionDeparser::new(self.buffer).deparse(qualify);
        }
    }

    fn visit_parenthesized(&mut self, query: &Query) {
        self.buffer.push('(');
        self.deparse_query(query);
        self.buffer.push(')');
    }

    fn visit_set_operation(&mut self, operation: &SetOperation) {
        operation.left.accept(self);
        self.buffer.push(' ');
        self.buffer.push_str(operation.op.as_str());
        match operation.quantifier {
            SetQuantifier::None => {}
            SetQuantifier::All => self.buffer.push_str(" ALL"),
            SetQuantifier::Distinct => self.buffer.push_str(" DISTINCT"),
        }
        self.buffer.push(' ');
        operation.right.accept(self);
    }

    fn visit_values(&mut self, values: &Values) {
        self.deparse_values(values);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Expr, FromItem, Limit, OrderDirection, SelectItem};

    #[test]
    fn test_select_clauses_in_order() {
        let select = Select {
            distinct: true,
            projection: vec![SelectItem::new(Expr::column("a"))],
            from: Some(FromItem::table("t")),
            selection: Some(Expr::column("a").gt(Expr::integer(1))),
            group_by: vec![Expr::column("a")].into(),
            having: Some(Expr::function("COUNT", vec![Expr::wildcard()]).gt(Expr::integer(2))),
            ..Select::default()
        };
        let mut query = Query::select(select);
        query.order_by = vec![OrderBy::new(Expr::column("a")).desc()];
        query.limit = Some(Limit {
            row_count: Some(Expr::integer(10)),
            ..Limit::default()
        });

        let mut buffer = String::new();
        SelectDeparser::new(&mut buffer).deparse_query(&query);
        assert_eq!(
            buffer,
            "SELECT DISTINCT a FROM t WHERE a > 1 GROUP BY a HAVING COUNT(*) > 2 \
             ORDER BY a DESC LIMIT 10"
        );
        assert_eq!(query.order_by[0].direction, Some(OrderDirection::Desc));
    }

    #[test]
    fn test_values_body() {
        let values = Values {
            rows: vec![
                vec![Expr::integer(1), Expr::string("a")].into(),
                vec![Expr::integer(2), Expr::string("b")].into(),
            ],
        };
        let mut buffer = String::new();
        SelectDeparser::new(&mut buffer).deparse_values(&values);
        assert_eq!(buffer, "VALUES (1, 'a'), (2, 'b')");
    }
}
