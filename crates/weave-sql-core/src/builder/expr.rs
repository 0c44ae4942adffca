//! Expression helpers.

use super::value::IntoExpr;
use crate::ast::{ArrayConstructor, Expr, ExpressionList, ObjectName, Parameter};

/// Creates a column reference. `"t.id"` becomes a qualified column.
#[must_use]
pub fn col(name: &str) -> Expr {
    match name.rsplit_once('.') {
        Some((table, column)) => Expr::qualified_column(table, column),
        None => Expr::column(name),
    }
}

/// Creates a function call.
#[must_use]
pub fn func(name: &str, args: Vec<Expr>) -> Expr {
    Expr::function(ObjectName::from(name), args)
}

/// Creates `*`.
#[must_use]
pub fn star() -> Expr {
    Expr::wildcard()
}

/// Creates `ARRAY[...]`.
pub fn array<T: IntoExpr>(elements: impl IntoIterator<Item = T>) -> Expr {
    Expr::Array(ArrayConstructor {
        elements: ExpressionList(elements.into_iter().map(IntoExpr::into_expr).collect()),
        array_keyword: true,
    })
}

/// Creates the `?` placeholder with the given 1-based position.
#[must_use]
pub const fn param(position: usize) -> Expr {
    Expr::Parameter(Parameter::Positional(position))
}

/// Creates a `:name` placeholder.
#[must_use]
pub fn named_param(name: &str) -> Expr {
    Expr::Parameter(Parameter::Named {
        prefix: ':',
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::lit;

    #[test]
    fn test_col_qualified() {
        assert_eq!(col("u.id").to_string(), "u.id");
        assert_eq!(col("id"), Expr::column("id"));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(col("age").gt_eq(lit(18)).to_string(), "age >= 18");
        assert_eq!(
            col("status").in_list(vec![lit("a"), lit("b")]).to_string(),
            "status IN ('a', 'b')"
        );
        assert_eq!(col("deleted_at").is_null().to_string(), "deleted_at IS NULL");
    }

    #[test]
    fn test_function_and_array() {
        assert_eq!(func("COUNT", vec![star()]).to_string(), "COUNT(*)");
        assert_eq!(array([1, 2, 3]).to_string(), "ARRAY[1,2,3]");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(col("id").eq(param(1)).to_string(), "id = ?");
        assert_eq!(named_param("user").to_string(), ":user");
    }
}
