//! Visitor dispatch and the table-name collector.

mod common;
use common::*;

use weave_sql_core::analysis::TableNamesFinder;
use weave_sql_core::ast::{
    AlterTableStatement, CreateTableStatement, DeleteStatement, InsertStatement, Query,
    ShowStatement, UnsupportedStatement, UpdateStatement,
};
use weave_sql_core::visitor::StatementVisitor;
use weave_sql_core::DialectKind;

/// Counts statements by kind.
#[derive(Default)]
struct StatementCounter {
    reads: usize,
    writes: usize,
    other: usize,
}

impl StatementVisitor for StatementCounter {
    type Output = ();

    fn visit_query(&mut self, _: &Query) {
        self.reads += 1;
    }
    fn visit_insert(&mut self, _: &InsertStatement) {
        self.writes += 1;
    }
    fn visit_update(&mut self, _: &UpdateStatement) {
        self.writes += 1;
    }
    fn visit_delete(&mut self, _: &DeleteStatement) {
        self.writes += 1;
    }
    fn visit_create_table(&mut self, _: &CreateTableStatement) {
        self.other += 1;
    }
    fn visit_alter_table(&mut self, _: &AlterTableStatement) {
        self.other += 1;
    }
    fn visit_show(&mut self, _: &ShowStatement) {
        self.reads += 1;
    }
    fn visit_unsupported(&mut self, _: &UnsupportedStatement) {
        self.other += 1;
    }
}

#[test]
fn statement_visitor_dispatches_each_kind() {
    let statements = weave_sql_core::parse_statements(
        "SELECT 1; INSERT INTO t VALUES (1); UPDATE t SET a = 2; DELETE FROM t; \
         CREATE TABLE u (id INT); ALTER TABLE u DROP COLUMN id; SHOW tables; VACUUM",
        DialectKind::Generic,
    )
    .unwrap();
    let mut counter = StatementCounter::default();
    for statement in &statements {
        statement.accept(&mut counter);
    }
    assert_eq!(counter.reads, 2);
    assert_eq!(counter.writes, 3);
    assert_eq!(counter.other, 3);
}

fn table_names(sql: &str, dialect: DialectKind) -> Vec<String> {
    TableNamesFinder::find(&parse_in(sql, dialect))
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[test]
fn finds_tables_in_nested_queries() {
    assert_eq!(
        table_names(
            "SELECT a FROM db.orders WHERE customer_id IN (SELECT id FROM customers) \
             AND EXISTS (SELECT 1 FROM refunds r WHERE r.order_id = orders.id)",
            DialectKind::Generic,
        ),
        ["db.orders", "customers", "refunds"]
    );
}

#[test]
fn skips_cte_names_and_duplicates() {
    assert_eq!(
        table_names(
            "WITH recent AS (SELECT * FROM orders) \
             SELECT * FROM recent JOIN orders ON recent.id = orders.id UNION SELECT * FROM archive",
            DialectKind::Generic,
        ),
        ["orders", "archive"]
    );
}

#[test]
fn finds_tables_in_statements() {
    assert_eq!(
        table_names("INSERT INTO audit SELECT * FROM events", DialectKind::Generic),
        ["audit", "events"]
    );
    assert_eq!(
        table_names(
            "UPDATE orders SET total = s.total FROM sums s WHERE orders.id = s.id",
            DialectKind::Generic,
        ),
        ["orders", "sums"]
    );
    assert_eq!(
        table_names("SHOW INDEXES FROM accounts", DialectKind::Generic),
        ["accounts"]
    );
    assert!(table_names("GRANT SELECT ON secrets TO bob", DialectKind::Generic).is_empty());
}

#[test]
fn finds_tables_inside_dialect_structs() {
    assert_eq!(
        table_names(
            "SELECT STRUCT((SELECT MAX(x) FROM limits) AS top) FROM events",
            DialectKind::BigQuery,
        ),
        ["limits", "events"]
    );
}
