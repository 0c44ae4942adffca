//! Trees built in code render to SQL the parser reads back unchanged.

mod common;
use common::*;

use weave_sql_core::ast::{DataType, Limit, NullOrdering, OrderBy};
use weave_sql_core::builder::{
    col, func, lit, param, BigQueryStruct, BuildError, Delete, DuckDbStruct, Insert, SafeDelete,
    Select, Update,
};
use weave_sql_core::DialectKind;

#[test]
fn select_renders_parseable_sql() {
    let query = Select::new()
        .columns(&["id", "name"])
        .from("users")
        .where_clause(col("age").gt(lit(18)))
        .where_clause(col("status").in_list(vec![lit("active"), lit("trial")]))
        .order_by(OrderBy::new(col("name")).desc().nulls(NullOrdering::Last))
        .limit(Limit::new(10))
        .offset(20)
        .build();

    let sql = query.to_string();
    assert_eq!(
        sql,
        "SELECT id, name FROM users WHERE age > 18 AND status IN ('active', 'trial') \
         ORDER BY name DESC NULLS LAST LIMIT 10 OFFSET 20"
    );
    assert_eq!(round_trip(&sql), sql);
}

#[test]
fn select_with_grouping_and_joins() {
    let sql = Select::new()
        .item(col("u.id"))
        .item_as(func("COUNT", vec![col("o.id")]), "orders")
        .from("users")
        .left_join("orders", col("o.user_id").eq(col("u.id")))
        .group_by(vec![col("u.id")])
        .having(func("COUNT", vec![col("o.id")]).gt(lit(5)))
        .build()
        .to_string();
    assert_eq!(round_trip(&sql), sql);
}

#[test]
fn subquery_from_item() {
    let inner = Select::new()
        .columns(&["id"])
        .from("users")
        .where_clause(col("active").eq(lit(true)))
        .build_subquery("active_users");
    let sql = Select::new().all().from_item(inner).build().to_string();
    assert_eq!(
        sql,
        "SELECT * FROM (SELECT id FROM users WHERE active = TRUE) AS active_users"
    );
    assert_eq!(round_trip(&sql), sql);
}

#[test]
fn limit_by_renders_for_clickhouse() {
    let sql = Select::new()
        .columns(&["domain", "path"])
        .from("hits")
        .limit_by(Limit::new(2).by(vec![col("domain")]))
        .limit(Limit::new(10))
        .build()
        .to_string();
    assert_eq!(sql, "SELECT domain, path FROM hits LIMIT 2 BY domain LIMIT 10");
    assert_eq!(round_trip_in(&sql, DialectKind::ClickHouse), sql);
}

#[test]
fn insert_renders_parseable_sql() {
    let statement = Insert::new()
        .into_table("users")
        .columns(&["id", "name"])
        .values(vec![lit(1), lit("O'Brien")])
        .and_values(vec![lit(2), lit("Smith")])
        .on_conflict_do_nothing(&["id"])
        .build()
        .unwrap();
    let sql = statement.to_string();
    assert_eq!(
        sql,
        "INSERT INTO users (id, name) VALUES (1, 'O''Brien'), (2, 'Smith') ON CONFLICT (id) DO NOTHING"
    );
    assert_eq!(round_trip(&sql), sql);
}

#[test]
fn insert_rejects_ragged_rows() {
    let result = Insert::new()
        .into_table("t")
        .values(vec![1, 2])
        .and_values(vec![3])
        .build();
    assert_eq!(
        result,
        Err(BuildError::RowWidthMismatch {
            row: 2,
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn update_and_delete_render_parseable_sql() {
    let update = Update::new()
        .table("users")
        .set("name", param(1))
        .set("visits", col("visits").binary(weave_sql_core::ast::BinaryOp::Add, lit(1)))
        .where_clause(col("id").eq(lit(7)))
        .build()
        .to_string();
    assert_eq!(update, "UPDATE users SET name = ?, visits = visits + 1 WHERE id = 7");
    assert_eq!(round_trip(&update), update);

    let delete = Delete::new()
        .from("sessions")
        .where_clause(col("expires_at").lt(func("NOW", vec![])))
        .build()
        .to_string();
    assert_eq!(delete, "DELETE FROM sessions WHERE expires_at < NOW()");
    assert_eq!(round_trip(&delete), delete);

    let safe = SafeDelete::new()
        .from("sessions")
        .where_clause(col("id").eq(lit(1)))
        .build()
        .to_string();
    assert_eq!(safe, "DELETE FROM sessions WHERE id = 1");
}

#[test]
fn bigquery_struct_builder_matches_parser() {
    let value = BigQueryStruct::new()
        .field("a", DataType::custom("INT64"))
        .field("b", DataType::custom("STRING"))
        .argument(1)
        .argument("x")
        .build()
        .unwrap();
    let sql = Select::new().item(value).build().to_string();
    assert_eq!(sql, "SELECT STRUCT<a INT64,b STRING>(1,'x')");
    assert_eq!(round_trip_in(&sql, DialectKind::BigQuery), sql);
}

#[test]
fn duckdb_struct_builder_matches_parser() {
    let value = DuckDbStruct::new()
        .quoted_field("a", 1)
        .field("b", "x")
        .build()
        .unwrap();
    let sql = Select::new().item(value).build().to_string();
    assert_eq!(sql, "SELECT { 'a':1,b:'x' }");
    assert_eq!(round_trip_in(&sql, DialectKind::DuckDb), sql);
}
