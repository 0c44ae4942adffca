//! SELECT grammar: projections, FROM items, joins, set operations and the
//! query tail.

mod common;
use common::*;

use weave_sql_core::ast::{
    Decorated, Expr, FromItem, JoinConstraint, JoinKind, NullOrdering, OffsetRows,
    OrderDirection, SetExpr, SetOperator, SetQuantifier,
};
use weave_sql_core::DialectKind;

#[test]
fn select_columns_with_aliases() {
    let select = parse_select("SELECT id, name AS n, price p FROM items");
    assert_eq!(select.projection.len(), 3);
    assert!(select.projection[0].alias.is_none());
    let explicit = select.projection[1].alias.as_ref().unwrap();
    assert!(explicit.use_as);
    assert_eq!(explicit.name.value, "n");
    let implicit = select.projection[2].alias.as_ref().unwrap();
    assert!(!implicit.use_as);
}

#[test]
fn select_without_from() {
    let select = parse_select("SELECT 1 + 1");
    assert!(select.from.is_none());
    assert_verbatim("SELECT 1 + 1");
}

#[test]
fn select_distinct_keeps_flag() {
    assert!(parse_select("SELECT DISTINCT a FROM t").distinct);
    assert!(!parse_select("SELECT ALL a FROM t").distinct);
    assert_eq!(round_trip("SELECT ALL a FROM t"), "SELECT a FROM t");
}

#[test]
fn select_qualified_names() {
    let select = parse_select("SELECT t.id, s.t.name FROM project.dataset.t");
    let Some(FromItem::Table(table)) = &select.from else {
        panic!("Expected table");
    };
    assert_eq!(table.name.0.len(), 3);
    assert_verbatim("SELECT t.id, s.t.name FROM project.dataset.t");
}

#[test]
fn quoted_identifiers_keep_their_quotes() {
    assert_verbatim("SELECT \"Order Id\" FROM \"My Table\"");
    assert_verbatim_in("SELECT `order id` FROM `p.d.t`", DialectKind::BigQuery);
}

#[test]
fn where_group_having_qualify() {
    let sql = "SELECT dept, COUNT(*) AS n FROM emp WHERE active = TRUE GROUP BY dept \
               HAVING COUNT(*) > 1 QUALIFY n > 2";
    let select = parse_select(sql);
    assert!(select.selection.is_some());
    assert_eq!(select.group_by.len(), 1);
    assert!(select.having.is_some());
    assert!(select.qualify.is_some());
    assert_verbatim(sql);
}

#[test]
fn joins_keep_kind_and_constraint() {
    let sql = "SELECT * FROM a INNER JOIN b ON a.id = b.id LEFT JOIN c USING (id) \
               RIGHT JOIN d ON TRUE FULL JOIN e ON FALSE CROSS JOIN f, g";
    let select = parse_select(sql);
    let kinds: Vec<_> = select.joins.iter().map(|j| j.kind).collect();
    assert_eq!(
        kinds,
        vec![
            JoinKind::InnerExplicit,
            JoinKind::Left,
            JoinKind::Right,
            JoinKind::Full,
            JoinKind::Cross,
            JoinKind::Comma,
        ]
    );
    assert!(matches!(&select.joins[1].constraint, JoinConstraint::Using(cols) if cols.len() == 1));
    assert_verbatim(sql);
}

#[test]
fn outer_keyword_is_dropped() {
    assert_eq!(
        round_trip("SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id"),
        "SELECT * FROM a LEFT JOIN b ON a.id = b.id"
    );
}

#[test]
fn subquery_in_from_with_alias() {
    let sql = "SELECT s.x FROM (SELECT x FROM t) AS s";
    let select = parse_select(sql);
    let from = select.from.as_ref().unwrap();
    assert!(matches!(from, FromItem::ParenthesedSelect(_)));
    assert_eq!(from.alias().unwrap().name.value, "s");
    assert_verbatim(sql);
}

#[test]
fn derived_column_alias() {
    assert_verbatim("SELECT a, b FROM (VALUES (1, 2), (3, 4)) AS v(a, b)");
}

#[test]
fn parenthesized_from_item_with_joins() {
    let sql = "SELECT * FROM (a JOIN b ON a.id = b.id) AS ab";
    let select = parse_select(sql);
    let Some(FromItem::ParenthesedFromItem(item)) = &select.from else {
        panic!("Expected parenthesized from item");
    };
    assert_eq!(item.joins.len(), 1);
    assert_verbatim(sql);
}

#[test]
fn lateral_forms() {
    assert_verbatim("SELECT * FROM t, LATERAL (SELECT t.x) AS l");
    assert_verbatim("SELECT * FROM LATERAL generate_series(1, 3) AS g");
}

#[test]
fn table_function_without_prefix() {
    let sql = "SELECT * FROM unnest(ARRAY[1,2,3]) AS u";
    let select = parse_select(sql);
    let Some(FromItem::TableFunction(function)) = &select.from else {
        panic!("Expected table function");
    };
    assert!(function.prefix.is_none());
    assert_verbatim(sql);
}

#[test]
fn with_clause_and_recursive() {
    assert_verbatim("WITH a AS (SELECT 1), b (x) AS (SELECT 2) SELECT * FROM a, b");
    let query = parse_query_in(
        "WITH RECURSIVE r AS (SELECT 1 UNION ALL SELECT n + 1 FROM r) SELECT * FROM r",
        DialectKind::Generic,
    );
    assert!(query.with.as_ref().is_some_and(|w| w.recursive));
}

#[test]
fn set_operations_preserve_order_and_quantifier() {
    let sql = "SELECT a FROM t1 UNION ALL SELECT a FROM t2 EXCEPT DISTINCT SELECT a FROM t3";
    let query = parse_query_in(sql, DialectKind::Generic);
    let SetExpr::SetOperation(outer) = &query.body else {
        panic!("Expected set operation");
    };
    assert_eq!(outer.op, SetOperator::Except);
    assert_eq!(outer.quantifier, SetQuantifier::Distinct);
    assert!(matches!(
        outer.left.as_ref(),
        SetExpr::SetOperation(inner) if inner.op == SetOperator::Union
            && inner.quantifier == SetQuantifier::All
    ));
    assert_verbatim(sql);
}

#[test]
fn parenthesized_query_body() {
    assert_verbatim("(SELECT 1) UNION (SELECT 2) ORDER BY 1");
}

#[test]
fn order_by_direction_and_nulls() {
    let query = parse_query_in(
        "SELECT a FROM t ORDER BY a DESC NULLS LAST, b, c ASC",
        DialectKind::Generic,
    );
    assert_eq!(query.order_by.len(), 3);
    assert_eq!(query.order_by[0].direction, Some(OrderDirection::Desc));
    assert_eq!(query.order_by[0].nulls, Some(NullOrdering::Last));
    assert_eq!(query.order_by[1].direction, None);
    assert_eq!(query.order_by[2].direction, Some(OrderDirection::Asc));
    assert_verbatim("SELECT a FROM t ORDER BY a DESC NULLS LAST, b, c ASC");
}

#[test]
fn limit_and_offset() {
    let query = parse_query_in("SELECT a FROM t LIMIT 10 OFFSET 20 ROWS", DialectKind::Generic);
    let offset = query.offset.as_ref().unwrap();
    assert_eq!(offset.value, Expr::integer(20));
    assert_eq!(offset.rows, OffsetRows::Rows);
    assert_verbatim("SELECT a FROM t LIMIT 10 OFFSET 20 ROWS");
    assert_verbatim("SELECT a FROM t OFFSET 1 ROW");
    assert_verbatim("SELECT a FROM t LIMIT ALL");
}

#[test]
fn values_as_query() {
    let query = parse_query_in("VALUES (1, 'a'), (2, 'b')", DialectKind::Generic);
    let SetExpr::Values(values) = &query.body else {
        panic!("Expected VALUES");
    };
    assert_eq!(values.rows.len(), 2);
    assert_verbatim("VALUES (1, 'a'), (2, 'b')");
}

#[test]
fn trailing_semicolon_is_accepted() {
    let statement = parse("SELECT 1;");
    assert_eq!(statement.to_string(), "SELECT 1");
}

#[test]
fn pivot_decoration() {
    let sql = "SELECT * FROM sales AS s PIVOT (SUM(amount) AS total FOR quarter IN ('Q1', 'Q2' AS second)) AS p";
    let select = parse_select(sql);
    let from = select.from.as_ref().unwrap();
    assert!(from.alias().is_some());
    let pivot = from.pivot().unwrap();
    assert_eq!(pivot.aggregates.len(), 1);
    assert_eq!(pivot.for_columns.len(), 1);
    assert_eq!(pivot.in_items.len(), 2);
    assert!(pivot.alias.is_some());
    assert_verbatim(sql);
    assert_verbatim("SELECT * FROM t PIVOT (COUNT(*) FOR (a, b) IN ((1, 2) AS x))");
}

#[test]
fn unpivot_decoration() {
    let sql = "SELECT * FROM quarterly UNPIVOT INCLUDE NULLS (amount FOR quarter IN (q1, q2)) AS u";
    let select = parse_select(sql);
    let unpivot = select.from.as_ref().unwrap().unpivot().unwrap();
    assert_eq!(unpivot.include_nulls, Some(true));
    assert_eq!(unpivot.in_items.len(), 2);
    assert_verbatim(sql);
    assert_verbatim("SELECT * FROM t UNPIVOT ((a, b) FOR (x, y) IN ((c, d), (e, f)))");
    assert_verbatim("SELECT * FROM t UNPIVOT EXCLUDE NULLS (v FOR n IN (a, b))");
}
