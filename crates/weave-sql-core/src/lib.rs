//! # weave-sql-core
//!
//! A multi-dialect SQL parser and deparser.
//!
//! This crate provides:
//! - A hand-written lexer and recursive descent parser with Pratt expression
//!   parsing, covering generic SQL plus BigQuery, DuckDB and ClickHouse
//!   extensions
//! - A typed syntax tree with visitor traits for analysis and rewriting
//! - A deparser that turns any tree back into SQL text
//! - Typestate builders for constructing trees in code
//!
//! ## Round trip
//!
//! Deparsing a parsed statement and parsing the result again yields an
//! equal tree:
//!
//! ```rust
//! use weave_sql_core::{deparse, parse, DialectKind};
//!
//! let sql = "SELECT STRUCT<a INT64,b STRING>(1,'x') AS s FROM t LIMIT 10";
//! let statement = parse(sql, DialectKind::BigQuery).unwrap();
//! let text = deparse(&statement);
//! assert_eq!(text, sql);
//! assert_eq!(parse(&text, DialectKind::BigQuery).unwrap(), statement);
//! ```
//!
//! ## Dialects
//!
//! Dialect-specific syntax is accepted only under the dialect that owns it:
//!
//! ```rust
//! use weave_sql_core::{parse, DialectKind};
//!
//! assert!(parse("SELECT { a: 1 }", DialectKind::DuckDb).is_ok());
//! assert!(parse("SELECT { a: 1 }", DialectKind::BigQuery).is_err());
//! ```
//!
//! ## Building statements
//!
//! ```rust
//! use weave_sql_core::builder::{col, lit, Select};
//! use weave_sql_core::ast::Limit;
//!
//! let query = Select::new()
//!     .columns(&["id"])
//!     .from("users")
//!     .where_clause(col("name").eq(lit("O'Brien")))
//!     .limit(Limit::new(1))
//!     .build();
//!
//! assert_eq!(
//!     query.to_string(),
//!     "SELECT id FROM users WHERE name = 'O''Brien' LIMIT 1"
//! );
//! ```

pub mod analysis;
pub mod ast;
pub mod builder;
pub mod deparser;
pub mod dialect;
pub mod lexer;
pub mod parser;
pub mod visitor;

pub use ast::{Expr, Query, Statement};
pub use deparser::deparse;
pub use dialect::{DialectKind, UnknownDialect};
pub use lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::{ParseError, ParseErrorKind, Parser, ParserOptions};

/// Parses exactly one statement written in `dialect`.
///
/// # Errors
///
/// Returns a [`ParseError`] on invalid input or when the text holds more
/// than one statement.
pub fn parse(sql: &str, dialect: DialectKind) -> Result<Statement, ParseError> {
    Parser::with_options(sql, ParserOptions::new(dialect)).parse_statement()
}

/// Parses `;`-separated statements written in `dialect`, in source order.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_statements(sql: &str, dialect: DialectKind) -> Result<Vec<Statement>, ParseError> {
    Parser::with_options(sql, ParserOptions::new(dialect)).parse_statements()
}
