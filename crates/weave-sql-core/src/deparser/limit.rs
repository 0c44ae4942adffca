//! LIMIT rendering.

use super::ExpressionDeparser;
use crate::ast::Limit;

/// Renders LIMIT clauses, including ClickHouse `LIMIT n BY ...`.
pub struct LimitDeparser<'a> {
    buffer: &'a mut String,
}

impl<'a> LimitDeparser<'a> {
    /// Creates a deparser appending to `buffer`.
    pub fn new(buffer: &'a mut String) -> Self {
        Self { buffer }
    }

    /// Renders ` LIMIT NULL`, ` LIMIT ALL` or ` LIMIT [offset, ]rowcount`,
    /// followed by ` BY list` when present.
    ///
    /// # Panics
    ///
    /// Panics if the limit has neither NULL, ALL nor a row count.
    pub fn deparse(&mut self, limit: &Limit) {
        if limit.limit_null {
            self.buffer.push_str(" LIMIT NULL");
        } else if limit.limit_all {
            self.buffer.push_str(" LIMIT ALL");
        } else if let Some(row_count) = &limit.row_count {
            self.buffer.push_str(" LIMIT ");
            if let Some(offset) = &limit.offset {
                ExpressionDeparser::new(self.buffer).deparse(offset);
                self.buffer.push_str(", ");
            }
            ExpressionDeparser::new(self.buffer).deparse(row_count);
        } else {
            panic!("LIMIT needs a row count, ALL or NULL");
        }

        if let Some(by) = &limit.by {
            self.buffer.push_str(" BY ");
            ExpressionDeparser::new(self.buffer).deparse_list(by, ", ");
        }
    }
}
