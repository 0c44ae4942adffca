//! INSERT, UPDATE, DELETE, DDL, SHOW and the unsupported-statement fallback.

mod common;
use common::*;

use weave_sql_core::ast::{
    ConflictAction, IndexKeyword, InsertSource, ObjectName, ShowTarget, Statement,
};
use weave_sql_core::{DialectKind, Parser, ParserOptions};

#[test]
fn insert_values() {
    let Statement::Insert(insert) = parse("INSERT INTO users (id, name) VALUES (1, 'a'), (2, 'b')")
    else {
        panic!("Expected INSERT");
    };
    assert!(insert.into);
    assert_eq!(insert.table, ObjectName::from("users"));
    assert_eq!(insert.columns.len(), 2);
    let InsertSource::Values(values) = &insert.source else {
        panic!("Expected VALUES");
    };
    assert_eq!(values.rows.len(), 2);
    assert_verbatim("INSERT INTO users (id, name) VALUES (1, 'a'), (2, 'b')");
}

#[test]
fn insert_from_query_and_defaults() {
    assert_verbatim("INSERT INTO archive SELECT * FROM users WHERE active = FALSE");
    assert_verbatim("INSERT INTO archive (id) SELECT id FROM users");
    assert_verbatim("INSERT INTO counters DEFAULT VALUES");
    assert_verbatim("INSERT t VALUES (1)");
}

#[test]
fn insert_on_conflict() {
    let Statement::Insert(insert) = parse(
        "INSERT INTO users (id, name) VALUES (1, 'a') ON CONFLICT (id) DO UPDATE SET name = 'a'",
    ) else {
        panic!("Expected INSERT");
    };
    let on_conflict = insert.on_conflict.unwrap();
    assert_eq!(on_conflict.columns.len(), 1);
    assert!(matches!(on_conflict.action, ConflictAction::DoUpdate(ref a) if a.len() == 1));

    assert_verbatim(
        "INSERT INTO users (id, name) VALUES (1, 'a') ON CONFLICT (id) DO UPDATE SET name = 'a'",
    );
    assert_verbatim("INSERT INTO users (id) VALUES (1) ON CONFLICT DO NOTHING");
}

#[test]
fn update_statement() {
    let Statement::Update(update) =
        parse("UPDATE users u SET name = 'b', visits = visits + 1 WHERE id = 1")
    else {
        panic!("Expected UPDATE");
    };
    assert_eq!(update.assignments.len(), 2);
    assert!(update.alias.is_some());
    assert!(update.selection.is_some());
    assert_verbatim("UPDATE users SET name = 'b', visits = visits + 1 WHERE id = 1");
    assert_verbatim(
        "UPDATE orders SET total = s.total FROM sums AS s JOIN x ON x.id = s.id WHERE orders.id = s.id",
    );
}

#[test]
fn delete_statement() {
    let Statement::Delete(delete) = parse("DELETE FROM users WHERE id = 1") else {
        panic!("Expected DELETE");
    };
    assert!(delete.from_keyword);
    assert!(delete.selection.is_some());
    assert_verbatim("DELETE FROM users WHERE id = 1");
    assert_verbatim("DELETE FROM users");
    assert_verbatim("DELETE users WHERE id IN (SELECT id FROM banned)");
}

#[test]
fn create_table() {
    assert_verbatim(
        "CREATE TABLE IF NOT EXISTS users (id BIGINT PRIMARY KEY AUTOINCREMENT, \
         email VARCHAR(255) NOT NULL UNIQUE, team_id INT REFERENCES teams (id), \
         active BOOLEAN DEFAULT TRUE, CONSTRAINT email_check CHECK (email != ''))",
    );
    assert_verbatim("CREATE TEMPORARY TABLE recent AS SELECT * FROM t");
    assert_verbatim(
        "CREATE TABLE memberships (user_id INT, team_id INT, PRIMARY KEY (user_id, team_id), \
         FOREIGN KEY (team_id) REFERENCES teams (id))",
    );
}

#[test]
fn alter_table() {
    assert_verbatim(
        "ALTER TABLE users ADD COLUMN IF NOT EXISTS age INT, DROP COLUMN legacy, \
         RENAME COLUMN name TO full_name, ALTER COLUMN age SET DATA TYPE BIGINT",
    );
    assert_verbatim("ALTER TABLE users ALTER COLUMN age DROP NOT NULL");
    assert_verbatim("ALTER TABLE a RENAME TO b");
}

#[test]
fn show_variable() {
    let Statement::Show(show) = parse("SHOW search_path") else {
        panic!("Expected SHOW");
    };
    assert!(matches!(show.target, ShowTarget::Variable(ref name) if name.value == "search_path"));
    assert_verbatim("SHOW search_path");
}

#[test]
fn show_indexes() {
    let Statement::Show(show) = parse("SHOW INDEXES IN db.users") else {
        panic!("Expected SHOW");
    };
    assert_eq!(
        show.target,
        ShowTarget::Indexes {
            keyword: IndexKeyword::Indexes,
            table: ObjectName::from("db.users"),
        }
    );
    assert_eq!(round_trip("SHOW INDEXES IN db.users"), "SHOW INDEXES FROM db.users");
    assert_verbatim("SHOW KEYS FROM users");
}

#[test]
fn other_show_forms_are_kept_verbatim() {
    let statement = parse("SHOW CREATE TABLE my_table");
    assert!(matches!(
        statement,
        Statement::Unsupported(ref s) if s.text == "SHOW CREATE TABLE my_table"
    ));
    assert_eq!(statement.to_string(), "SHOW CREATE TABLE my_table");
}

#[test]
fn unknown_statements_fall_back_to_text() {
    let statement = parse("GRANT SELECT ON users TO   reporting;");
    assert!(matches!(
        statement,
        Statement::Unsupported(ref s) if s.text == "GRANT SELECT ON users TO   reporting"
    ));
    assert!(matches!(parse("CREATE VIEW v AS SELECT 1"), Statement::Unsupported(_)));
}

#[test]
fn fallback_can_be_disabled() {
    let options = ParserOptions::new(DialectKind::Generic).with_unsupported_fallback(false);
    let err = Parser::with_options("GRANT SELECT ON users TO reporting", options)
        .parse_statement()
        .unwrap_err();
    assert!(!err.expected.is_empty());
    assert!(err.expected.contains(&"SELECT".to_string()));
    assert!(err.found.is_some());
    assert!(err.message.starts_with("Unexpected token"));
    let result = Parser::with_options("SHOW CREATE TABLE t", options).parse_statement();
    assert!(result.is_err());
}

#[test]
fn multiple_statements_in_order() {
    let statements = weave_sql_core::parse_statements(
        ";SELECT 1;; UPDATE t SET a = 1; GRANT ALL ON t TO u;",
        DialectKind::Generic,
    )
    .unwrap();
    assert_eq!(statements.len(), 3);
    assert!(matches!(statements[0], Statement::Select(_)));
    assert!(matches!(statements[1], Statement::Update(_)));
    assert!(matches!(
        statements[2],
        Statement::Unsupported(ref s) if s.text == "GRANT ALL ON t TO u"
    ));
}

#[test]
fn empty_script_has_no_statements() {
    let statements = weave_sql_core::parse_statements(" ; ;", DialectKind::Generic).unwrap();
    assert!(statements.is_empty());
}

#[test]
fn statements_render_in_every_dialect() {
    for dialect in DialectKind::ALL {
        assert_verbatim_in("DELETE FROM t WHERE a IS NULL", dialect);
        assert_verbatim_in("UPDATE t SET a = 1", dialect);
    }
}

#[test]
fn trees_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Statement>();
    assert_send_sync::<ParserOptions>();

    let statement = parse("SELECT a FROM t WHERE b = 1");
    let rendered = std::thread::spawn(move || statement.to_string())
        .join()
        .unwrap();
    assert_eq!(rendered, "SELECT a FROM t WHERE b = 1");
}

#[test]
fn multi_statement_deparse_rejoin() {
    let sql = "SELECT 1; SELECT 2;";
    let statements = weave_sql_core::parse_statements(sql, DialectKind::Generic).unwrap();
    let rejoined = statements
        .iter()
        .map(weave_sql_core::deparse)
        .collect::<Vec<_>>()
        .join(";");
    assert_eq!(rejoined, "SELECT 1;SELECT 2");
    let reparsed = weave_sql_core::parse_statements(&rejoined, DialectKind::Generic).unwrap();
    assert_eq!(reparsed, statements);
}
