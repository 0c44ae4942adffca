//! FROM item and join rendering.

use super::{push_display_list, ExpressionDeparser, SelectDeparser};
use crate::ast::{
    FromItem, FromItemDecorations, Join, JoinConstraint, JoinKind, LateralSubSelect,
    ParenthesedFromItem, ParenthesedSelect, Pivot, Table, TableFunction, UnPivot, ValuesTable,
};
use crate::visitor::FromItemVisitor;

/// Renders FROM items with their alias, PIVOT and UNPIVOT decorations.
pub struct FromItemDeparser<'a> {
    buffer: &'a mut String,
}

impl<'a> FromItemDeparser<'a> {
    /// Creates a deparser appending to `buffer`.
    pub fn new(buffer: &'a mut String) -> Self {
        Self { buffer }
    }

    /// Renders one FROM item.
    pub fn deparse(&mut self, item: &FromItem) {
        item.accept(self);
    }

    /// Renders joins, each with its leading separator.
    pub fn deparse_joins(&mut self, joins: &[Join]) {
        for join in joins {
            if join.kind == JoinKind::Comma {
                self.buffer.push_str(", ");
            } else {
                self.buffer.push(' ');
                self.buffer.push_str(join.kind.as_str());
                self.buffer.push(' ');
            }
            self.deparse(&join.item);
            match &join.constraint {
                JoinConstraint::On(expr) => {
                    self.buffer.push_str(" ON ");
                    ExpressionDeparser::new(self.buffer).deparse(expr);
                }
                JoinConstraint::Using(columns) => {
                    self.buffer.push_str(" USING (");
                    push_display_list(self.buffer, columns, ", ");
                    self.buffer.push(')');
                }
                JoinConstraint::None => {}
            }
        }
    }

    fn decorations(&mut self, decorations: &FromItemDecorations) {
        if let Some(alias) = &decorations.alias {
            self.buffer.push(' ');
            self.buffer.push_str(&alias.to_string());
        }
        if let Some(pivot) = &decorations.pivot {
            self.pivot(pivot);
        }
        if let Some(unpivot) = &decorations.unpivot {
            self.unpivot(unpivot);
        }
    }

    fn pivot(&mut self, pivot: &Pivot) {
        self.buffer.push_str(" PIVOT (");
        ExpressionDeparser::new(self.buffer).deparse_select_items(&pivot.aggregates, ", ");
        self.buffer.push_str(" FOR ");
        if pivot.for_columns.len() == 1 {
            ExpressionDeparser::new(self.buffer).deparse_column(&pivot.for_columns[0]);
        } else {
            self.buffer.push('(');
            for (i, column) in pivot.for_columns.iter().enumerate() {
                if i > 0 {
                    self.buffer.push_str(", ");
                }
                ExpressionDeparser::new(self.buffer).deparse_column(column);
            }
            self.buffer.push(')');
        }
        self.buffer.push_str(" IN (");
        ExpressionDeparser::new(self.buffer).deparse_select_items(&pivot.in_items, ", ");
        self.buffer.push_str("))");
        if let Some(alias) = &pivot.alias {
            self.buffer.push(' ');
            self.buffer.push_str(&alias.to_string());
        }
    }

    fn unpivot(&mut self, unpivot: &UnPivot) {
        self.buffer.push_str(" UNPIVOT");
        match unpivot.include_nulls {
            Some(true) => self.buffer.push_str(" INCLUDE NULLS"),
            Some(false) => self.buffer.push_str(" EXCLUDE NULLS"),
            None => {}
        }
        self.buffer.push_str(" (");
        self.one_or_more(&unpivot.value_columns);
        self.buffer.push_str(" FOR ");
        self.one_or_more(&unpivot.name_columns);
        self.buffer.push_str(" IN (");
        ExpressionDeparser::new(self.buffer).deparse_select_items(&unpivot.in_items, ", ");
        self.buffer.push_str("))");
        if let Some(alias) = &unpivot.alias {
            self.buffer.push(' ');
            self.buffer.push_str(&alias.to_string());
        }
    }

    /// Renders `a` or `(a, b)`.
    fn one_or_more(&mut self, idents: &[crate::ast::Ident]) {
        if idents.len() == 1 {
            push_display_list(self.buffer, idents, ", ");
        } else {
            self.buffer.push('(');
            push_display_list(self.buffer, idents, ", ");
            self.buffer.push(')');
        }
    }
}

impl FromItemVisitor for FromItemDeparser<'_> {
    type Output = ();

    fn visit_table(&mut self, table: &Table) {
        self.buffer.push_str(&table.name.to_string());
        self.decorations(&table.decorations);
    }

    fn visit_parenthesed_select(&mut self, select: &ParenthesedSelect) {
        self.buffer.push('(');
        SelectDeparser::new(self.buffer).deparse_query(&select.query);
        self.buffer.push(')');
        self.decorations(&select.decorations);
    }

    fn visit_lateral_sub_select(&mut self, select: &LateralSubSelect) {
        self.buffer.push_str("LATERAL (");
        SelectDeparser::new(self.buffer).deparse_query(&select.query);
        self.buffer.push(')');
        self.decorations(&select.decorations);
    }

    fn visit_table_function(&mut self, function: &TableFunction) {
        if let Some(prefix) = &function.prefix {
            self.buffer.push_str(prefix);
            self.buffer.push(' ');
        }
        ExpressionDeparser::new(self.buffer).deparse_function(&function.function);
        self.decorations(&function.decorations);
    }

    fn visit_parenthesed_from_item(&mut self, item: &ParenthesedFromItem) {
        self.buffer.push('(');
        self.deparse(&item.item);
        self.deparse_joins(&item.joins);
        self.buffer.push(')');
        self.decorations(&item.decorations);
    }

    fn visit_values_table(&mut self, values: &ValuesTable) {
        self.buffer.push('(');
        SelectDeparser::new(self.buffer).deparse_values(&values.values);
        self.buffer.push(')');
        self.decorations(&values.decorations);
    }
}
