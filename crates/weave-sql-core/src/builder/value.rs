//! Conversions from Rust values into literal expressions.

use crate::ast::{Expr, Literal};

/// Types that can be turned into an expression.
///
/// Rust scalars become literals; an [`Expr`] passes through unchanged.
pub trait IntoExpr {
    /// Converts the value to an expression.
    fn into_expr(self) -> Expr;
}

impl IntoExpr for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoExpr for Literal {
    fn into_expr(self) -> Expr {
        Expr::Literal(self)
    }
}

impl IntoExpr for bool {
    fn into_expr(self) -> Expr {
        Expr::boolean(self)
    }
}

macro_rules! impl_into_expr_integer {
    ($($ty:ty),*) => {
        $(
            impl IntoExpr for $ty {
                fn into_expr(self) -> Expr {
                    Expr::integer(i64::from(self))
                }
            }
        )*
    };
}

impl_into_expr_integer!(i8, i16, i32, i64, u8, u16, u32);

impl IntoExpr for u64 {
    fn into_expr(self) -> Expr {
        Expr::Literal(Literal::Integer(self.to_string()))
    }
}

impl IntoExpr for f64 {
    fn into_expr(self) -> Expr {
        Expr::float(self)
    }
}

impl IntoExpr for f32 {
    fn into_expr(self) -> Expr {
        Expr::float(f64::from(self))
    }
}

impl IntoExpr for &str {
    fn into_expr(self) -> Expr {
        Expr::string(self)
    }
}

impl IntoExpr for String {
    fn into_expr(self) -> Expr {
        Expr::string(self)
    }
}

impl IntoExpr for Vec<u8> {
    fn into_expr(self) -> Expr {
        Expr::Literal(Literal::Blob(self))
    }
}

impl IntoExpr for &[u8] {
    fn into_expr(self) -> Expr {
        Expr::Literal(Literal::Blob(self.to_vec()))
    }
}

impl<T: IntoExpr> IntoExpr for Option<T> {
    fn into_expr(self) -> Expr {
        self.map_or_else(Expr::null, IntoExpr::into_expr)
    }
}

/// Creates a literal (or passes an expression through).
pub fn lit<T: IntoExpr>(value: T) -> Expr {
    value.into_expr()
}
