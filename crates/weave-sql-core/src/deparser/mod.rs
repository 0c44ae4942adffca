//! SQL Deparser
//!
//! Renders syntax trees back to SQL text. Each rendering unit holds a
//! `&mut String` and implements the visitor trait of the node family it
//! renders; nested nodes are rendered by handing the same buffer to the
//! matching unit. Rendering never fails: a tree that violates a rendering
//! precondition (a LIMIT with nothing to limit by, a DuckDB struct value
//! without field names) panics with a message naming the problem.
//!
//! Output is syntactically equivalent to the parsed input, not a canonical
//! formatting: `parse(deparse(parse(s))) == parse(s)`.

pub mod dialect;
mod expression;
mod from_item;
mod limit;
mod select;
mod statement;

use core::fmt;

pub use expression::ExpressionDeparser;
pub use from_item::FromItemDeparser;
pub use limit::LimitDeparser;
pub use select::SelectDeparser;
pub use statement::StatementDeparser;

use crate::ast::{
    Expr, FromItem, Limit, Query, Select, SelectItem, SetExpr, Statement,
};

/// Renders a statement as SQL text.
#[must_use]
pub fn deparse(statement: &Statement) -> String {
    let mut buffer = String::new();
    StatementDeparser::new(&mut buffer).deparse(statement);
    buffer
}

/// Pushes `items` separated by `separator`.
fn push_list<T>(
    buffer: &mut String,
    items: &[T],
    separator: &str,
    mut render: impl FnMut(&mut String, &T),
) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            buffer.push_str(separator);
        }
        render(buffer, item);
    }
}

/// Pushes the `Display` form of each item separated by `separator`.
fn push_display_list<T: fmt::Display>(buffer: &mut String, items: &[T], separator: &str) {
    push_list(buffer, items, separator, |buffer, item| {
        buffer.push_str(&item.to_string());
    });
}

macro_rules! display_via {
    ($ty:ty, $deparser:ident, $method:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut buffer = String::new();
                $deparser::new(&mut buffer).$method(self);
                f.write_str(&buffer)
            }
        }
    };
}

display_via!(Statement, StatementDeparser, deparse);
display_via!(Query, SelectDeparser, deparse_query);
display_via!(Select, SelectDeparser, deparse_select);
display_via!(SetExpr, SelectDeparser, deparse_set_expr);
display_via!(Expr, ExpressionDeparser, deparse);
display_via!(SelectItem, ExpressionDeparser, deparse_select_item);
display_via!(FromItem, FromItemDeparser, deparse);
display_via!(Limit, LimitDeparser, deparse);
