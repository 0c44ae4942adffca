//! Dialect-specific rendering of struct values.
//!
//! The branch is chosen by the `dialect` tag carried on the node, never by a
//! dialect in effect at rendering time.

use super::push_display_list;
use super::ExpressionDeparser;
use crate::ast::StructType;

/// Renders `[keyword][<name type,...>][(arg,...)]`.
///
/// Arguments render as select items (`expr [AS alias]`). Parentheses are
/// emitted whenever `arguments` is present, even when it is empty.
pub fn render_struct_bigquery(deparser: &mut ExpressionDeparser<'_>, value: &StructType) {
    if let Some(keyword) = &value.keyword {
        deparser.push_str(keyword);
    }
    if let Some(parameters) = &value.parameters {
        let mut fields = String::new();
        push_display_list(&mut fields, parameters, ",");
        deparser.push_str("<");
        deparser.push_str(&fields);
        deparser.push_str(">");
    }
    if let Some(arguments) = &value.arguments {
        deparser.push_str("(");
        deparser.deparse_select_items(arguments, ",");
        deparser.push_str(")");
    }
}

/// Renders `{ name:expr,... }` when the value has arguments, followed by
/// `::STRUCT( name type,...)` when it has typed fields.
///
/// # Panics
///
/// Panics if an argument has no alias; DuckDB struct fields are always named.
pub fn render_struct_duckdb(deparser: &mut ExpressionDeparser<'_>, value: &StructType) {
    if let Some(arguments) = &value.arguments {
        deparser.push_str("{ ");
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                deparser.push_str(",");
            }
            let Some(alias) = &argument.alias else {
                panic!("DuckDB struct argument {} has no field name", i + 1);
            };
            deparser.push_str(&alias.name.to_string());
            deparser.push_str(":");
            deparser.deparse(&argument.expr);
        }
        deparser.push_str(" }");
    }

    if let Some(parameters) = &value.parameters {
        let mut fields = String::new();
        push_display_list(&mut fields, parameters, ",");
        deparser.push_str("::STRUCT( ");
        deparser.push_str(&fields);
        deparser.push_str(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        Alias, DataType, Expr, Ident, SelectItem, StructDialect, StructField,
    };

    fn render(value: &StructType) -> String {
        let mut buffer = String::new();
        let mut deparser = ExpressionDeparser::new(&mut buffer);
        match value.dialect {
            StructDialect::BigQuery => render_struct_bigquery(&mut deparser, value),
            StructDialect::DuckDb => render_struct_duckdb(&mut deparser, value),
        }
        buffer
    }

    #[test]
    fn test_bigquery_typed_struct() {
        let value = StructType {
            dialect: StructDialect::BigQuery,
            keyword: Some("STRUCT".into()),
            parameters: Some(vec![
                StructField::new("a", DataType::custom("INT64")),
                StructField::new("b", DataType::custom("STRING")),
            ]),
            arguments: Some(vec![
                SelectItem::new(Expr::integer(1)),
                SelectItem::new(Expr::string("x")),
            ]),
        };
        assert_eq!(render(&value), "STRUCT<a INT64,b STRING>(1,'x')");
    }

    #[test]
    fn test_bigquery_empty_arguments_keep_parentheses() {
        let value = StructType {
            dialect: StructDialect::BigQuery,
            keyword: Some("STRUCT".into()),
            parameters: None,
            arguments: Some(vec![]),
        };
        assert_eq!(render(&value), "STRUCT()");
    }

    #[test]
    fn test_duckdb_struct_with_fields() {
        let value = StructType {
            dialect: StructDialect::DuckDb,
            keyword: None,
            parameters: Some(vec![
                StructField::new("a", DataType::Integer),
                StructField::new("b", DataType::Varchar(None)),
            ]),
            arguments: Some(vec![
                SelectItem {
                    expr: Expr::integer(1),
                    alias: Some(Alias::implicit(Ident::with_quote('\'', "a"))),
                },
                SelectItem {
                    expr: Expr::string("x"),
                    alias: Some(Alias::implicit("b")),
                },
            ]),
        };
        assert_eq!(
            render(&value),
            "{ 'a':1,b:'x' }::STRUCT( a INTEGER,b VARCHAR)"
        );
    }

    #[test]
    fn test_duckdb_struct_without_arguments() {
        let value = StructType {
            dialect: StructDialect::DuckDb,
            keyword: None,
            parameters: Some(vec![StructField::new("a", DataType::Integer)]),
            arguments: None,
        };
        assert_eq!(render(&value), "::STRUCT( a INTEGER)");

        let empty = StructType {
            parameters: None,
            ..value
        };
        assert_eq!(render(&empty), "");
    }

    #[test]
    #[should_panic(expected = "has no field name")]
    fn test_duckdb_struct_requires_names() {
        let value = StructType {
            dialect: StructDialect::DuckDb,
            keyword: None,
            parameters: None,
            arguments: Some(vec![SelectItem::new(Expr::integer(1))]),
        };
        render(&value);
    }
}
