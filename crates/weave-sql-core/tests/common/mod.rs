#![allow(dead_code)]

use weave_sql_core::ast::{Query, Select, Statement};
use weave_sql_core::{DialectKind, ParseError, Parser, ParserOptions};

pub fn parse_in(sql: &str, dialect: DialectKind) -> Statement {
    Parser::with_options(sql, ParserOptions::new(dialect))
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse(sql: &str) -> Statement {
    parse_in(sql, DialectKind::Generic)
}

pub fn parse_err_in(sql: &str, dialect: DialectKind) -> ParseError {
    Parser::with_options(sql, ParserOptions::new(dialect))
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_err_in(sql, DialectKind::Generic)
}

pub fn parse_query_in(sql: &str, dialect: DialectKind) -> Query {
    match parse_in(sql, dialect) {
        Statement::Select(q) => q,
        other => panic!("Expected query, got {other:?}"),
    }
}

pub fn parse_select(sql: &str) -> Select {
    let query = parse_query_in(sql, DialectKind::Generic);
    match query.as_select() {
        Some(select) => select.clone(),
        None => panic!("Expected SELECT block, got {:?}", query.body),
    }
}

/// Verifies the round-trip law under `dialect`: rendering is a fixed point
/// and re-parsing the rendered text yields the same tree. Returns the
/// rendered text.
pub fn round_trip_in(sql: &str, dialect: DialectKind) -> String {
    let ast1 = parse_in(sql, dialect);
    let rendered1 = ast1.to_string();
    let ast2 = parse_in(&rendered1, dialect);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
    assert_eq!(ast1, ast2, "Re-parsed tree differs for: {sql}");
    rendered1
}

pub fn round_trip(sql: &str) -> String {
    round_trip_in(sql, DialectKind::Generic)
}

/// Asserts that `sql` renders back to exactly itself.
pub fn assert_verbatim_in(sql: &str, dialect: DialectKind) {
    assert_eq!(round_trip_in(sql, dialect), sql);
}

pub fn assert_verbatim(sql: &str) {
    assert_verbatim_in(sql, DialectKind::Generic);
}
