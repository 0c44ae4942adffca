//! Constructors for LIMIT clauses.
//!
//! Each constructor yields one of the three exclusive forms, so a built
//! limit always renders.

use crate::ast::{Expr, ExpressionList, Limit};

impl Limit {
    /// `LIMIT n`.
    #[must_use]
    pub fn new(row_count: i64) -> Self {
        Self {
            row_count: Some(Expr::integer(row_count)),
            ..Self::default()
        }
    }

    /// `LIMIT expr`, e.g. a parameter.
    #[must_use]
    pub fn expr(row_count: Expr) -> Self {
        Self {
            row_count: Some(row_count),
            ..Self::default()
        }
    }

    /// `LIMIT ALL`.
    #[must_use]
    pub fn all() -> Self {
        Self {
            limit_all: true,
            ..Self::default()
        }
    }

    /// `LIMIT NULL`.
    #[must_use]
    pub fn null() -> Self {
        Self {
            limit_null: true,
            ..Self::default()
        }
    }

    /// Adds the MySQL-style offset, rendered as `LIMIT offset, n`.
    ///
    /// Ignored by the ALL and NULL forms.
    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        if self.row_count.is_some() {
            self.offset = Some(Expr::integer(offset));
        }
        self
    }

    /// Turns the limit into a per-group limit, `LIMIT n BY exprs`.
    #[must_use]
    pub fn by(mut self, exprs: Vec<Expr>) -> Self {
        self.by = Some(ExpressionList::from(exprs));
        self
    }
}
