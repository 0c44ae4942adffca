//! Programmatic construction of syntax trees.
//!
//! Statement builders use the typestate pattern: a builder only offers
//! `build()` once the clauses a statement cannot do without are present,
//! so an incomplete statement does not compile. The result is an AST node,
//! rendered with `Display` or [`deparse`](crate::deparse) like any parsed
//! tree.
//!
//! # Example
//!
//! ```rust
//! use weave_sql_core::builder::{col, lit, Select};
//!
//! let query = Select::new()
//!     .columns(&["id", "name"])
//!     .from("users")
//!     .where_clause(col("active").eq(lit(true)))
//!     .build();
//!
//! assert_eq!(query.to_string(), "SELECT id, name FROM users WHERE active = TRUE");
//! ```

mod delete;
mod error;
mod expr;
mod insert;
mod limit;
mod select;
mod structs;
mod update;
mod value;

pub use delete::{Delete, SafeDelete, SafeDeleteWithWhere};
pub use error::BuildError;
pub use expr::{array, col, func, named_param, param, star};
pub use insert::Insert;
pub use select::Select;
pub use structs::{BigQueryStruct, DuckDbStruct};
pub use update::Update;
pub use value::{lit, IntoExpr};

/// Typestate markers shared by the statement builders.
pub mod state {
    pub use super::insert::{HasValues, NoValues};
    pub use super::select::{HasColumns, HasFrom, NoColumns, NoFrom};
    pub use super::update::{HasSet, NoSet};

    /// Marker: no table specified yet.
    pub struct NoTable;
    /// Marker: table has been specified.
    pub struct HasTable;
}
