//! SQL Parser
//!
//! A hand-written recursive descent parser with Pratt expression parsing.
//! Statements, queries, expressions and DDL each live in their own file as
//! `impl Parser` blocks over a shared token cursor.

mod ddl;
mod error;
mod expression;
mod options;
#[allow(clippy::module_inception)]
mod parser;
mod pratt;
mod query;

pub use error::{ParseError, ParseErrorKind};
pub use options::ParserOptions;
pub use parser::Parser;
