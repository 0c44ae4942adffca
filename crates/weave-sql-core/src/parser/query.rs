//! Query grammar: WITH, set operations, SELECT blocks, FROM items and the
//! ORDER BY / LIMIT / OFFSET tail.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    Alias, Column, Cte, Expr, ExpressionList, FromItem, FromItemDecorations, FunctionCall, Ident, Join,
    JoinConstraint, JoinKind, LateralSubSelect, Limit, NullOrdering, ObjectName, Offset,
    OffsetRows, OrderBy, OrderDirection, ParenthesedFromItem, ParenthesedSelect, Pivot, Query,
    Select, SelectItem, SetExpr, SetOperation, SetOperator, SetQuantifier, Table, TableFunction,
    UnPivot, Values, ValuesTable, With,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses a full query including its tail clauses.
    pub(super) fn parse_query(&mut self) -> Result<Query, ParseError> {
        let with = if self.check_keyword(Keyword::With) {
            Some(self.parse_with()?)
        } else {
            None
        };

        let body = self.parse_set_expr(0)?;

        let order_by = if self.consume_keyword(Keyword::Order) {
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_list()?
        } else {
            vec![]
        };

        let mut limit_by = None;
        let mut limit = None;
        if self.check_keyword(Keyword::Limit) {
            let first = self.parse_limit()?;
            if first.by.is_some() {
                limit_by = Some(first);
                if self.check_keyword(Keyword::Limit) {
                    limit = Some(self.parse_limit()?);
                }
            } else {
                limit = Some(first);
            }
        }

        let offset = if self.consume_keyword(Keyword::Offset) {
            let value = self.parse_expression(0)?;
            let rows = if self.consume_keyword(Keyword::Row) {
                OffsetRows::Row
            } else if self.consume_keyword(Keyword::Rows) {
                OffsetRows::Rows
            } else {
                OffsetRows::None
            };
            Some(Offset { value, rows })
        } else {
            None
        };

        Ok(Query {
            with,
            body,
            order_by,
            limit_by,
            limit,
            offset,
        })
    }

    fn parse_with(&mut self) -> Result<With, ParseError> {
        self.expect_keyword(Keyword::With)?;
        let recursive = self.consume_keyword(Keyword::Recursive);
        let mut ctes = vec![];
        loop {
            let name = self.parse_identifier()?;
            let columns = if self.check(&TokenKind::LeftParen) {
                self.parse_parenthesized_identifiers()?
            } else {
                vec![]
            };
            self.expect_keyword(Keyword::As)?;
            self.expect(&TokenKind::LeftParen, "(")?;
            let query = self.parse_query()?;
            self.expect(&TokenKind::RightParen, ")")?;
            ctes.push(Cte {
                name,
                columns,
                query: Box::new(query),
            });
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(With { recursive, ctes })
    }

    /// Parses set operations; INTERSECT binds tighter than UNION and EXCEPT.
    fn parse_set_expr(&mut self, min_precedence: u8) -> Result<SetExpr, ParseError> {
        let mut left = self.parse_set_primary()?;

        loop {
            let (op, precedence) = match self.current().kind {
                TokenKind::Keyword(Keyword::Union) => (SetOperator::Union, 1),
                TokenKind::Keyword(Keyword::Except) => (SetOperator::Except, 1),
                TokenKind::Keyword(Keyword::Intersect) => (SetOperator::Intersect, 2),
                _ => break,
            };
            if precedence < min_precedence {
                break;
            }
            self.advance();

            let quantifier = if self.consume_keyword(Keyword::All) {
                SetQuantifier::All
            } else if self.consume_keyword(Keyword::Distinct) {
                SetQuantifier::Distinct
            } else {
                SetQuantifier::None
            };

            let right = self.parse_set_expr(precedence + 1)?;
            left = SetExpr::SetOperation(SetOperation {
                op,
                quantifier,
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        Ok(left)
    }

    fn parse_set_primary(&mut self) -> Result<SetExpr, ParseError> {
        match self.current().kind {
            TokenKind::Keyword(Keyword::Select) => {
                Ok(SetExpr::Select(Box::new(self.parse_select()?)))
            }
            TokenKind::Keyword(Keyword::Values) => Ok(SetExpr::Values(self.parse_values()?)),
            TokenKind::LeftParen => {
                self.advance();
                let query = self.parse_query()?;
                self.expect(&TokenKind::RightParen, ")")?;
                Ok(SetExpr::Parenthesized(Box::new(query)))
            }
            _ => Err(self.unexpected(&["SELECT", "VALUES", "("])),
        }
    }

    /// Parses a SELECT block.
    fn parse_select(&mut self) -> Result<Select, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        // DISTINCT or ALL
        let distinct = if self.consume_keyword(Keyword::Distinct) {
            true
        } else {
            self.consume_keyword(Keyword::All);
            false
        };

        let projection = self.parse_select_items()?;

        // FROM clause (optional for expressions like SELECT 1+1)
        let (from, joins) = if self.consume_keyword(Keyword::From) {
            let item = self.parse_from_item()?;
            (Some(item), self.parse_joins()?)
        } else {
            (None, vec![])
        };

        let selection = if self.consume_keyword(Keyword::Where) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        let group_by = if self.consume_keyword(Keyword::Group) {
            self.expect_keyword(Keyword::By)?;
            self.parse_expression_list()?
        } else {
            ExpressionList::default()
        };

        let having = if self.consume_keyword(Keyword::Having) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        let qualify = if self.consume_keyword(Keyword::Qualify) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        Ok(Select {
            distinct,
            projection,
            from,
            joins,
            selection,
            group_by,
            having,
            qualify,
        })
    }

    /// Parses a comma-separated list of possibly aliased expressions.
    pub(super) fn parse_select_items(&mut self) -> Result<Vec<SelectItem>, ParseError> {
        let mut items = vec![];
        loop {
            items.push(self.parse_select_item()?);
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    pub(super) fn parse_select_item(&mut self) -> Result<SelectItem, ParseError> {
        let expr = self.parse_expression(0)?;
        let alias = if matches!(expr, Expr::AllColumns(_)) {
            None
        } else {
            self.parse_optional_alias()?
        };
        Ok(SelectItem { expr, alias })
    }

    /// Parses `VALUES (..), (..)`.
    pub(super) fn parse_values(&mut self) -> Result<Values, ParseError> {
        self.expect_keyword(Keyword::Values)?;
        let mut rows = vec![];
        loop {
            self.expect(&TokenKind::LeftParen, "(")?;
            let row = if self.check(&TokenKind::RightParen) {
                ExpressionList::default()
            } else {
                self.parse_expression_list()?
            };
            self.expect(&TokenKind::RightParen, ")")?;
            rows.push(row);
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(Values { rows })
    }

    fn parse_order_by_list(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        let mut items = vec![];
        loop {
            let expr = self.parse_expression(0)?;

            let direction = if self.consume_keyword(Keyword::Asc) {
                Some(OrderDirection::Asc)
            } else if self.consume_keyword(Keyword::Desc) {
                Some(OrderDirection::Desc)
            } else {
                None
            };

            let nulls = if self.consume_keyword(Keyword::Nulls) {
                if self.consume_keyword(Keyword::First) {
                    Some(NullOrdering::First)
                } else {
                    self.expect_keyword(Keyword::Last)?;
                    Some(NullOrdering::Last)
                }
            } else {
                None
            };

            items.push(OrderBy {
                expr,
                direction,
                nulls,
            });

            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    /// Parses `LIMIT NULL | ALL | [offset,] count [BY expr, ...]`.
    fn parse_limit(&mut self) -> Result<Limit, ParseError> {
        self.expect_keyword(Keyword::Limit)?;
        let mut limit = Limit::default();

        if self.consume_keyword(Keyword::Null) {
            limit.limit_null = true;
        } else if self.consume_keyword(Keyword::All) {
            limit.limit_all = true;
        } else {
            let first = self.parse_expression(0)?;
            if self.consume(&TokenKind::Comma) {
                limit.offset = Some(first);
                limit.row_count = Some(self.parse_expression(0)?);
            } else {
                limit.row_count = Some(first);
            }
        }

        if self.dialect().supports_limit_by() && self.consume_keyword(Keyword::By) {
            limit.by = Some(self.parse_expression_list()?);
        }

        Ok(limit)
    }

    // --- FROM clause ---

    /// Parses one FROM item with its alias, PIVOT and UNPIVOT.
    pub(super) fn parse_from_item(&mut self) -> Result<FromItem, ParseError> {
        let item = match self.current().kind {
            TokenKind::LeftParen => match self.peek_kind(1) {
                TokenKind::Keyword(Keyword::Select | Keyword::With) => {
                    self.advance();
                    let query = self.parse_query()?;
                    self.expect(&TokenKind::RightParen, ")")?;
                    FromItem::ParenthesedSelect(ParenthesedSelect {
                        query: Box::new(query),
                        decorations: FromItemDecorations::default(),
                    })
                }
                TokenKind::Keyword(Keyword::Values) => {
                    self.advance();
                    let values = self.parse_values()?;
                    self.expect(&TokenKind::RightParen, ")")?;
                    FromItem::Values(ValuesTable {
                        values,
                        decorations: FromItemDecorations::default(),
                    })
                }
                _ => {
                    self.advance();
                    let item = self.parse_from_item()?;
                    let joins = self.parse_joins()?;
                    self.expect(&TokenKind::RightParen, ")")?;
                    FromItem::ParenthesedFromItem(ParenthesedFromItem {
                        item: Box::new(item),
                        joins,
                        decorations: FromItemDecorations::default(),
                    })
                }
            },
            TokenKind::Keyword(Keyword::Lateral) => {
                self.advance();
                if self.consume(&TokenKind::LeftParen) {
                    let query = self.parse_query()?;
                    self.expect(&TokenKind::RightParen, ")")?;
                    FromItem::LateralSubSelect(LateralSubSelect {
                        query: Box::new(query),
                        decorations: FromItemDecorations::default(),
                    })
                } else {
                    let name = self.parse_object_name()?;
                    let function = self.parse_function_call(name)?;
                    FromItem::TableFunction(TableFunction {
                        prefix: Some(Keyword::Lateral.as_str().to_string()),
                        function,
                        decorations: FromItemDecorations::default(),
                    })
                }
            }
            _ => {
                let name = self.parse_object_name()?;
                if self.check(&TokenKind::LeftParen) {
                    FromItem::TableFunction(TableFunction {
                        prefix: None,
                        function: self.parse_function_call(name)?,
                        decorations: FromItemDecorations::default(),
                    })
                } else {
                    FromItem::Table(Table::new(name))
                }
            }
        };

        let decorations = self.parse_from_item_decorations()?;
        Ok(match item {
            FromItem::Table(t) => FromItem::Table(Table { decorations, ..t }),
            FromItem::ParenthesedSelect(s) => {
                FromItem::ParenthesedSelect(ParenthesedSelect { decorations, ..s })
            }
            FromItem::LateralSubSelect(l) => {
                FromItem::LateralSubSelect(LateralSubSelect { decorations, ..l })
            }
            FromItem::TableFunction(t) => {
                FromItem::TableFunction(TableFunction { decorations, ..t })
            }
            FromItem::ParenthesedFromItem(p) => {
                FromItem::ParenthesedFromItem(ParenthesedFromItem { decorations, ..p })
            }
            FromItem::Values(v) => FromItem::Values(ValuesTable { decorations, ..v }),
        })
    }

    fn parse_from_item_decorations(&mut self) -> Result<FromItemDecorations, ParseError> {
        let alias = self.parse_table_alias()?;
        let pivot = if self.check_keyword(Keyword::Pivot) {
            Some(self.parse_pivot()?)
        } else {
            None
        };
        let unpivot = if self.check_keyword(Keyword::Unpivot) {
            Some(self.parse_unpivot()?)
        } else {
            None
        };
        Ok(FromItemDecorations {
            alias,
            pivot,
            unpivot,
        })
    }

    /// Parses an alias with an optional derived column list.
    fn parse_table_alias(&mut self) -> Result<Option<Alias>, ParseError> {
        let Some(alias) = self.parse_optional_alias()? else {
            return Ok(None);
        };
        if self.check(&TokenKind::LeftParen) && self.is_identifier_start(1) {
            let columns = self.parse_parenthesized_identifiers()?;
            return Ok(Some(alias.with_columns(columns)));
        }
        Ok(Some(alias))
    }

    /// Parses `PIVOT (agg, ... FOR col IN (item, ...)) [alias]`.
    fn parse_pivot(&mut self) -> Result<Pivot, ParseError> {
        self.expect_keyword(Keyword::Pivot)?;
        self.expect(&TokenKind::LeftParen, "(")?;
        let aggregates = self.parse_select_items()?;
        self.expect_keyword(Keyword::For)?;

        let for_columns = if self.consume(&TokenKind::LeftParen) {
            let mut columns = vec![self.parse_column()?];
            while self.consume(&TokenKind::Comma) {
                columns.push(self.parse_column()?);
            }
            self.expect(&TokenKind::RightParen, ")")?;
            columns
        } else {
            vec![self.parse_column()?]
        };

        self.expect_keyword(Keyword::In)?;
        self.expect(&TokenKind::LeftParen, "(")?;
        let in_items = self.parse_select_items()?;
        self.expect(&TokenKind::RightParen, ")")?;
        self.expect(&TokenKind::RightParen, ")")?;
        let alias = self.parse_optional_alias()?;

        Ok(Pivot {
            aggregates,
            for_columns,
            in_items,
            alias,
        })
    }

    /// Parses `UNPIVOT [INCLUDE|EXCLUDE NULLS] (v FOR n IN (item, ...)) [alias]`.
    fn parse_unpivot(&mut self) -> Result<UnPivot, ParseError> {
        self.expect_keyword(Keyword::Unpivot)?;
        let include_nulls = if self.consume_keyword(Keyword::Include) {
            self.expect_keyword(Keyword::Nulls)?;
            Some(true)
        } else if self.consume_keyword(Keyword::Exclude) {
            self.expect_keyword(Keyword::Nulls)?;
            Some(false)
        } else {
            None
        };

        self.expect(&TokenKind::LeftParen, "(")?;
        let value_columns = self.parse_one_or_more_identifiers()?;
        self.expect_keyword(Keyword::For)?;
        let name_columns = self.parse_one_or_more_identifiers()?;
        self.expect_keyword(Keyword::In)?;
        self.expect(&TokenKind::LeftParen, "(")?;
        let in_items = self.parse_select_items()?;
        self.expect(&TokenKind::RightParen, ")")?;
        self.expect(&TokenKind::RightParen, ")")?;
        let alias = self.parse_optional_alias()?;

        Ok(UnPivot {
            include_nulls,
            value_columns,
            name_columns,
            in_items,
            alias,
        })
    }

    /// Parses `ident` or `(ident, ...)`.
    fn parse_one_or_more_identifiers(&mut self) -> Result<Vec<Ident>, ParseError> {
        if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_identifiers()
        } else {
            Ok(vec![self.parse_identifier()?])
        }
    }

    /// Parses a possibly qualified column name.
    fn parse_column(&mut self) -> Result<Column, ParseError> {
        let ObjectName(mut parts) = self.parse_object_name()?;
        let name = parts.pop().ok_or_else(|| self.unexpected(&["column"]))?;
        let table = if parts.is_empty() {
            None
        } else {
            Some(ObjectName(parts))
        };
        Ok(Column { table, name })
    }

    /// Parses the joins following a FROM item.
    pub(super) fn parse_joins(&mut self) -> Result<Vec<Join>, ParseError> {
        let mut joins = vec![];

        loop {
            let kind = match self.current().kind {
                TokenKind::Comma => {
                    self.advance();
                    JoinKind::Comma
                }
                TokenKind::Keyword(Keyword::Join) => {
                    self.advance();
                    JoinKind::Inner
                }
                TokenKind::Keyword(Keyword::Inner) => {
                    self.advance();
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::InnerExplicit
                }
                TokenKind::Keyword(Keyword::Left) => {
                    self.advance();
                    self.consume_keyword(Keyword::Outer);
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Left
                }
                TokenKind::Keyword(Keyword::Right) => {
                    self.advance();
                    self.consume_keyword(Keyword::Outer);
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Right
                }
                TokenKind::Keyword(Keyword::Full) => {
                    self.advance();
                    self.consume_keyword(Keyword::Outer);
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Full
                }
                TokenKind::Keyword(Keyword::Cross) => {
                    self.advance();
                    self.expect_keyword(Keyword::Join)?;
                    JoinKind::Cross
                }
                _ => break,
            };

            let item = self.parse_from_item()?;

            let constraint = if self.consume_keyword(Keyword::On) {
                JoinConstraint::On(self.parse_expression(0)?)
            } else if self.consume_keyword(Keyword::Using) {
                JoinConstraint::Using(self.parse_parenthesized_identifiers()?)
            } else {
                JoinConstraint::None
            };

            joins.push(Join {
                kind,
                item,
                constraint,
            });
        }

        Ok(joins)
    }

    /// Parses the argument list of a call whose name has been consumed.
    pub(super) fn parse_function_call(
        &mut self,
        name: ObjectName,
    ) -> Result<FunctionCall, ParseError> {
        self.expect(&TokenKind::LeftParen, "(")?;
        let distinct = self.consume_keyword(Keyword::Distinct);

        let mut args = vec![];
        if !self.check(&TokenKind::RightParen) {
            loop {
                let arg = if matches!(
                    self.current().kind,
                    TokenKind::Keyword(Keyword::Select | Keyword::With)
                ) {
                    Expr::Subquery(Box::new(self.parse_query()?))
                } else {
                    self.parse_expression(0)?
                };
                args.push(arg);
                if !self.consume(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RightParen, ")")?;

        Ok(FunctionCall {
            name,
            args: ExpressionList(args),
            distinct,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Decorated, Expr, FromItem, JoinKind, Query, SetExpr, SetOperator, Statement};
    use crate::dialect::DialectKind;
    use crate::parser::{Parser, ParserOptions};

    fn parse_query(sql: &str, dialect: DialectKind) -> Query {
        match Parser::with_options(sql, ParserOptions::new(dialect))
            .parse_statement()
            .unwrap()
        {
            Statement::Select(query) => query,
            other => panic!("Expected query, got {other:?}"),
        }
    }

    #[test]
    fn test_union_and_intersect_precedence() {
        let query = parse_query("SELECT 1 UNION SELECT 2 INTERSECT SELECT 3", DialectKind::Generic);
        let SetExpr::SetOperation(op) = &query.body else {
            panic!("Expected set operation");
        };
        assert_eq!(op.op, SetOperator::Union);
        assert!(matches!(
            op.right.as_ref(),
            SetExpr::SetOperation(inner) if inner.op == SetOperator::Intersect
        ));
    }

    #[test]
    fn test_joins_in_order() {
        let query = parse_query(
            "SELECT * FROM a, b JOIN c ON b.id = c.id LEFT OUTER JOIN d USING (id)",
            DialectKind::Generic,
        );
        let select = query.as_select().unwrap();
        let kinds: Vec<_> = select.joins.iter().map(|j| j.kind).collect();
        assert_eq!(kinds, vec![JoinKind::Comma, JoinKind::Inner, JoinKind::Left]);
    }

    #[test]
    fn test_limit_offset_forms() {
        let query = parse_query("SELECT a FROM t LIMIT 5, 10", DialectKind::Generic);
        let limit = query.limit.unwrap();
        assert_eq!(limit.offset, Some(Expr::integer(5)));
        assert_eq!(limit.row_count, Some(Expr::integer(10)));

        let query = parse_query("SELECT a FROM t LIMIT NULL", DialectKind::Generic);
        assert!(query.limit.unwrap().limit_null);

        let query = parse_query("SELECT a FROM t LIMIT 10 OFFSET 20 ROWS", DialectKind::Generic);
        assert!(query.offset.is_some());
    }

    #[test]
    fn test_limit_by_then_limit() {
        let query = parse_query(
            "SELECT a FROM t LIMIT 2 BY a LIMIT 10",
            DialectKind::ClickHouse,
        );
        assert!(query.limit_by.is_some_and(|l| l.by.is_some()));
        assert!(query.limit.is_some_and(|l| l.by.is_none()));
    }

    #[test]
    fn test_table_function_with_prefix_and_alias() {
        let query = parse_query(
            "SELECT * FROM LATERAL generate_series(1, 3) AS g",
            DialectKind::Generic,
        );
        let from = query.as_select().unwrap().from.as_ref().unwrap();
        let FromItem::TableFunction(function) = from else {
            panic!("Expected table function");
        };
        assert_eq!(function.prefix.as_deref(), Some("LATERAL"));
        assert!(function.alias().is_some());
    }

    #[test]
    fn test_pivot_decoration() {
        let query = parse_query(
            "SELECT * FROM sales PIVOT (SUM(amount) FOR quarter IN ('Q1', 'Q2')) AS p",
            DialectKind::Generic,
        );
        let from = query.as_select().unwrap().from.as_ref().unwrap();
        let pivot = from.pivot().unwrap();
        assert_eq!(pivot.in_items.len(), 2);
        assert!(pivot.alias.is_some());
        assert!(from.alias().is_none());
    }
}
