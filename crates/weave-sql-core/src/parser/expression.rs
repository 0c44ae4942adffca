//! Expression grammar: Pratt loop, primaries, dialect struct/array values
//! and data types.

use super::error::ParseError;
use super::parser::Parser;
use super::pratt::{
    infix_binding_power, prefix_binding_power, token_to_binary_op, token_to_unary_op,
    CAST_BINDING_POWER,
};
use crate::ast::{
    Alias, AllColumns, ArrayConstructor, ArrayTypeSyntax, BetweenExpr, BinaryExpr, CaseExpr,
    CastExpr, CastStyle, Column, DataType, ExceptKeyword, Expr, ExpressionList, Ident,
    InListExpr, InSubqueryExpr, IsNullExpr, LikeExpr, Literal, ObjectName, Parameter, SelectItem,
    StructField, StructType, StructTypeSyntax, UnaryExpr, WhenClause, WildcardExcept,
};
use crate::dialect::StructDialect;
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses an expression using Pratt parsing.
    pub(super) fn parse_expression(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        // Parse prefix (primary expression or unary operator)
        let mut lhs = self.parse_prefix()?;

        loop {
            // Postfix cast
            if self.check(&TokenKind::DoubleColon) {
                if CAST_BINDING_POWER < min_bp {
                    break;
                }
                self.advance();
                let data_type = self.parse_data_type()?;
                lhs = apply_double_colon(lhs, data_type);
                continue;
            }

            let Some((l_bp, r_bp)) = infix_binding_power(&self.current().kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }

            // NOT only continues an expression as NOT IN / NOT LIKE / NOT BETWEEN
            let negated = if self.check_keyword(Keyword::Not) {
                if !matches!(
                    self.peek_kind(1),
                    TokenKind::Keyword(Keyword::In | Keyword::Like | Keyword::Ilike | Keyword::Between)
                ) {
                    break;
                }
                self.advance();
                true
            } else {
                false
            };

            match self.current().kind {
                TokenKind::Keyword(Keyword::Is) => {
                    self.advance();
                    let negated = self.consume_keyword(Keyword::Not);
                    self.expect_keyword(Keyword::Null)?;
                    lhs = Expr::IsNull(IsNullExpr {
                        expr: Box::new(lhs),
                        negated,
                    });
                }
                TokenKind::Keyword(Keyword::In) => {
                    lhs = self.parse_in(lhs, negated)?;
                }
                TokenKind::Keyword(Keyword::Between) => {
                    self.advance();
                    let low = self.parse_expression(r_bp)?;
                    self.expect_keyword(Keyword::And)?;
                    let high = self.parse_expression(r_bp)?;
                    lhs = Expr::Between(BetweenExpr {
                        expr: Box::new(lhs),
                        low: Box::new(low),
                        high: Box::new(high),
                        negated,
                    });
                }
                TokenKind::Keyword(kw @ (Keyword::Like | Keyword::Ilike)) => {
                    self.advance();
                    let pattern = self.parse_expression(r_bp)?;
                    lhs = Expr::Like(LikeExpr {
                        expr: Box::new(lhs),
                        pattern: Box::new(pattern),
                        negated,
                        case_insensitive: kw == Keyword::Ilike,
                    });
                }
                _ => {
                    // Standard binary operator
                    let Some(op) = token_to_binary_op(&self.current().kind) else {
                        break;
                    };
                    self.advance();
                    let rhs = self.parse_expression(r_bp)?;
                    lhs = Expr::Binary(BinaryExpr {
                        left: Box::new(lhs),
                        op,
                        right: Box::new(rhs),
                    });
                }
            }
        }

        Ok(lhs)
    }

    /// Parses a prefix expression.
    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = token_to_unary_op(&self.current().kind) {
            let bp = prefix_binding_power(&self.current().kind).unwrap_or(CAST_BINDING_POWER);
            self.advance();
            let operand = self.parse_expression(bp)?;
            return Ok(Expr::Unary(UnaryExpr {
                op,
                operand: Box::new(operand),
            }));
        }

        self.parse_primary()
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.current().clone();

        match &token.kind {
            // Literals
            TokenKind::Integer(text) => {
                self.advance();
                Ok(Expr::Literal(Literal::Integer(text.clone())))
            }
            TokenKind::Float(text) => {
                self.advance();
                Ok(Expr::Literal(Literal::Float(text.clone())))
            }
            TokenKind::String(s) => {
                self.advance();
                Ok(Expr::Literal(Literal::String(s.clone())))
            }
            TokenKind::Blob(b) => {
                self.advance();
                Ok(Expr::Literal(Literal::Blob(b.clone())))
            }
            TokenKind::Keyword(Keyword::True) => {
                self.advance();
                Ok(Expr::Literal(Literal::Boolean(true)))
            }
            TokenKind::Keyword(Keyword::False) => {
                self.advance();
                Ok(Expr::Literal(Literal::Boolean(false)))
            }
            TokenKind::Keyword(Keyword::Null) => {
                self.advance();
                Ok(Expr::Literal(Literal::Null))
            }

            // Parameter placeholders
            TokenKind::Question => {
                self.advance();
                Ok(Expr::Parameter(Parameter::Positional(
                    self.next_param_position(),
                )))
            }
            TokenKind::Colon | TokenKind::At => {
                let prefix = if matches!(token.kind, TokenKind::Colon) {
                    ':'
                } else {
                    '@'
                };
                self.advance();
                let name = self.parse_identifier()?;
                Ok(Expr::Parameter(Parameter::Named {
                    prefix,
                    name: name.value,
                }))
            }

            // Wildcard
            TokenKind::Star => {
                self.advance();
                Ok(Expr::AllColumns(self.parse_wildcard_options(None)?))
            }

            // Parenthesized expression, row constructor or subquery
            TokenKind::LeftParen => self.parse_parenthesized_expression(),

            // Array constructors
            TokenKind::LeftBracket => {
                self.advance();
                self.parse_array_elements(false)
            }
            TokenKind::Keyword(Keyword::Array)
                if matches!(self.peek_kind(1), TokenKind::LeftBracket) =>
            {
                self.advance();
                self.advance();
                self.parse_array_elements(true)
            }

            // Struct values
            TokenKind::LeftBrace
                if self.dialect().struct_dialect() == StructDialect::DuckDb =>
            {
                self.parse_duckdb_struct()
            }
            TokenKind::Keyword(Keyword::Struct)
                if self.dialect().struct_dialect() == StructDialect::BigQuery =>
            {
                self.parse_bigquery_struct()
            }

            TokenKind::Keyword(Keyword::Case) => self.parse_case_expression(),
            TokenKind::Keyword(Keyword::Cast) => self.parse_cast_expression(),

            TokenKind::Keyword(Keyword::Exists) => {
                self.advance();
                self.expect(&TokenKind::LeftParen, "(")?;
                let query = self.parse_query()?;
                self.expect(&TokenKind::RightParen, ")")?;
                Ok(Expr::Exists(Box::new(query)))
            }

            // Reserved words that double as function names
            TokenKind::Keyword(Keyword::Left | Keyword::Right | Keyword::Array)
                if matches!(self.peek_kind(1), TokenKind::LeftParen) =>
            {
                let name = Ident::new(self.source(token.span));
                self.advance();
                Ok(Expr::Function(self.parse_function_call(ObjectName(vec![name]))?))
            }

            // Column reference or function call
            TokenKind::Identifier { .. } | TokenKind::Keyword(_) if self.is_identifier_start(0) => {
                self.parse_identifier_expression()
            }

            _ => Err(self.unexpected(&["expression"])),
        }
    }

    /// Parses `name`, `t.name`, `t.*` or `name(args)`.
    fn parse_identifier_expression(&mut self) -> Result<Expr, ParseError> {
        let mut parts = vec![self.parse_identifier()?];

        while self.check(&TokenKind::Dot) {
            if matches!(self.peek_kind(1), TokenKind::Star) {
                self.advance();
                self.advance();
                let options = self.parse_wildcard_options(Some(ObjectName(parts)))?;
                return Ok(Expr::AllColumns(options));
            }
            if !self.is_identifier_start(1) {
                break;
            }
            self.advance();
            parts.push(self.parse_identifier()?);
        }

        if self.check(&TokenKind::LeftParen) {
            return Ok(Expr::Function(self.parse_function_call(ObjectName(parts))?));
        }

        let name = parts.pop().ok_or_else(|| self.unexpected(&["identifier"]))?;
        let table = if parts.is_empty() {
            None
        } else {
            Some(ObjectName(parts))
        };
        Ok(Expr::Column(Column { table, name }))
    }

    /// Parses `EXCEPT (..)` / `EXCLUDE (..)` and `REPLACE (..)` after a
    /// wildcard, as far as the dialect allows them.
    fn parse_wildcard_options(
        &mut self,
        table: Option<ObjectName>,
    ) -> Result<AllColumns, ParseError> {
        let dialect = self.dialect();
        let paren_follows = matches!(self.peek_kind(1), TokenKind::LeftParen);

        let except = if dialect.supports_wildcard_except()
            && self.check_keyword(Keyword::Except)
            && paren_follows
            && !matches!(
                self.peek_kind(2),
                TokenKind::Keyword(Keyword::Select | Keyword::With)
            ) {
            self.advance();
            Some(WildcardExcept {
                keyword: ExceptKeyword::Except,
                columns: self.parse_parenthesized_identifiers()?,
            })
        } else if dialect.supports_wildcard_exclude()
            && self.check_keyword(Keyword::Exclude)
            && paren_follows
        {
            self.advance();
            Some(WildcardExcept {
                keyword: ExceptKeyword::Exclude,
                columns: self.parse_parenthesized_identifiers()?,
            })
        } else {
            None
        };

        let replace = if dialect.supports_wildcard_replace()
            && self.check_keyword(Keyword::Replace)
            && matches!(self.peek_kind(1), TokenKind::LeftParen)
        {
            self.advance();
            self.advance();
            let items = self.parse_select_items()?;
            self.expect(&TokenKind::RightParen, ")")?;
            Some(items)
        } else {
            None
        };

        Ok(AllColumns {
            table,
            except,
            replace,
        })
    }

    fn parse_parenthesized_expression(&mut self) -> Result<Expr, ParseError> {
        if matches!(
            self.peek_kind(1),
            TokenKind::Keyword(Keyword::Select | Keyword::With)
        ) {
            self.advance();
            let query = self.parse_query()?;
            self.expect(&TokenKind::RightParen, ")")?;
            return Ok(Expr::Subquery(Box::new(query)));
        }

        self.expect(&TokenKind::LeftParen, "(")?;
        let first = self.parse_expression(0)?;
        if self.consume(&TokenKind::Comma) {
            let mut items = vec![first];
            loop {
                items.push(self.parse_expression(0)?);
                if !self.consume(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen, ")")?;
            return Ok(Expr::Tuple(ExpressionList(items)));
        }
        self.expect(&TokenKind::RightParen, ")")?;
        Ok(Expr::Nested(Box::new(first)))
    }

    /// Parses array elements after the opening `[` up to the closing `]`.
    fn parse_array_elements(&mut self, array_keyword: bool) -> Result<Expr, ParseError> {
        let elements = if self.check(&TokenKind::RightBracket) {
            ExpressionList::default()
        } else {
            self.parse_expression_list()?
        };
        self.expect(&TokenKind::RightBracket, "]")?;
        Ok(Expr::Array(ArrayConstructor {
            elements,
            array_keyword,
        }))
    }

    /// Parses `STRUCT[<fields>][(args)]`.
    fn parse_bigquery_struct(&mut self) -> Result<Expr, ParseError> {
        let keyword = self.advance();
        let keyword = self.source(keyword.span).to_string();

        let parameters = if self.consume(&TokenKind::Lt) {
            let fields = self.parse_struct_fields(true)?;
            self.expect_closing_angle()?;
            Some(fields)
        } else {
            None
        };

        let arguments = if self.consume(&TokenKind::LeftParen) {
            let items = if self.check(&TokenKind::RightParen) {
                vec![]
            } else {
                self.parse_select_items()?
            };
            self.expect(&TokenKind::RightParen, ")")?;
            Some(items)
        } else if parameters.is_none() {
            return Err(self.unexpected(&["<", "("]));
        } else {
            None
        };

        Ok(Expr::Struct(StructType {
            dialect: StructDialect::BigQuery,
            keyword: Some(keyword),
            parameters,
            arguments,
        }))
    }

    /// Parses `{ key: expr, ... }`. Keys are identifiers or string literals.
    fn parse_duckdb_struct(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftBrace, "{")?;
        let mut arguments = vec![];

        if !self.check(&TokenKind::RightBrace) {
            loop {
                let name = if let TokenKind::String(key) = &self.current().kind {
                    let name = Ident::with_quote('\'', key.clone());
                    self.advance();
                    name
                } else {
                    self.parse_identifier()?
                };
                self.expect(&TokenKind::Colon, ":")?;
                let expr = self.parse_expression(0)?;
                arguments.push(SelectItem {
                    expr,
                    alias: Some(Alias::implicit(name)),
                });
                if !self.consume(&TokenKind::Comma) {
                    break;
                }
            }
        }

        self.expect(&TokenKind::RightBrace, "}")?;
        Ok(Expr::Struct(StructType {
            dialect: StructDialect::DuckDb,
            keyword: None,
            parameters: None,
            arguments: Some(arguments),
        }))
    }

    /// Parses `[name] type, ...`.
    fn parse_struct_fields(&mut self, allow_anonymous: bool) -> Result<Vec<StructField>, ParseError> {
        let mut fields = vec![];
        loop {
            let named = !allow_anonymous
                || (self.is_identifier_start(0) && self.starts_data_type(1));
            let name = if named {
                Some(self.parse_identifier()?)
            } else {
                None
            };
            let data_type = self.parse_data_type()?;
            fields.push(StructField { name, data_type });
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(fields)
    }

    fn starts_data_type(&self, n: usize) -> bool {
        matches!(
            self.peek_kind(n),
            TokenKind::Identifier { .. }
                | TokenKind::Keyword(
                    Keyword::Int
                        | Keyword::Integer
                        | Keyword::Smallint
                        | Keyword::Bigint
                        | Keyword::Real
                        | Keyword::Double
                        | Keyword::Float
                        | Keyword::Decimal
                        | Keyword::Numeric
                        | Keyword::Char
                        | Keyword::Varchar
                        | Keyword::Text
                        | Keyword::Blob
                        | Keyword::Boolean
                        | Keyword::Date
                        | Keyword::Time
                        | Keyword::Timestamp
                        | Keyword::Datetime
                        | Keyword::Array
                        | Keyword::Struct
                )
        )
    }

    /// Parses `[NOT] IN (list)` or `[NOT] IN (subquery)`; NOT is already consumed.
    fn parse_in(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::In)?;
        self.expect(&TokenKind::LeftParen, "(")?;
        let result = if matches!(
            self.current().kind,
            TokenKind::Keyword(Keyword::Select | Keyword::With)
        ) {
            Expr::InSubquery(InSubqueryExpr {
                expr: Box::new(expr),
                query: Box::new(self.parse_query()?),
                negated,
            })
        } else {
            Expr::InList(InListExpr {
                expr: Box::new(expr),
                list: self.parse_expression_list()?,
                negated,
            })
        };
        self.expect(&TokenKind::RightParen, ")")?;
        Ok(result)
    }

    /// Parses a CAST expression.
    fn parse_cast_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Cast)?;
        self.expect(&TokenKind::LeftParen, "(")?;
        let expr = self.parse_expression(0)?;
        self.expect_keyword(Keyword::As)?;
        let data_type = self.parse_data_type()?;
        self.expect(&TokenKind::RightParen, ")")?;

        Ok(Expr::Cast(CastExpr {
            expr: Box::new(expr),
            data_type,
            style: CastStyle::Function,
        }))
    }

    /// Parses a CASE expression.
    fn parse_case_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect_keyword(Keyword::Case)?;

        // Check for simple CASE (CASE expr WHEN ...)
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(Box::new(self.parse_expression(0)?))
        };

        let mut when_clauses = vec![];
        while self.consume_keyword(Keyword::When) {
            let condition = self.parse_expression(0)?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.parse_expression(0)?;
            when_clauses.push(WhenClause { condition, result });
        }
        if when_clauses.is_empty() {
            return Err(self.unexpected(&["WHEN"]));
        }

        let else_result = if self.consume_keyword(Keyword::Else) {
            Some(Box::new(self.parse_expression(0)?))
        } else {
            None
        };

        self.expect_keyword(Keyword::End)?;

        Ok(Expr::Case(CaseExpr {
            operand,
            when_clauses,
            else_result,
        }))
    }

    /// Parses a data type.
    pub(super) fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
        let base = match &self.current().kind {
            TokenKind::Keyword(Keyword::Int) => {
                self.advance();
                DataType::Int
            }
            TokenKind::Keyword(Keyword::Integer) => {
                self.advance();
                DataType::Integer
            }
            TokenKind::Keyword(Keyword::Smallint) => {
                self.advance();
                DataType::Smallint
            }
            TokenKind::Keyword(Keyword::Bigint) => {
                self.advance();
                DataType::Bigint
            }
            TokenKind::Keyword(Keyword::Real) => {
                self.advance();
                DataType::Real
            }
            TokenKind::Keyword(Keyword::Double) => {
                self.advance();
                if matches!(
                    &self.current().kind,
                    TokenKind::Identifier { value, quote: None } if value.eq_ignore_ascii_case("PRECISION")
                ) {
                    self.advance();
                }
                DataType::Double
            }
            TokenKind::Keyword(Keyword::Float) => {
                self.advance();
                DataType::Float(self.parse_optional_length()?)
            }
            TokenKind::Keyword(Keyword::Decimal) => {
                self.advance();
                let (precision, scale) = self.parse_optional_precision_scale()?;
                DataType::Decimal { precision, scale }
            }
            TokenKind::Keyword(Keyword::Numeric) => {
                self.advance();
                let (precision, scale) = self.parse_optional_precision_scale()?;
                DataType::Numeric { precision, scale }
            }
            TokenKind::Keyword(Keyword::Char) => {
                self.advance();
                DataType::Char(self.parse_optional_length()?)
            }
            TokenKind::Keyword(Keyword::Varchar) => {
                self.advance();
                DataType::Varchar(self.parse_optional_length()?)
            }
            TokenKind::Keyword(Keyword::Text) => {
                self.advance();
                DataType::Text
            }
            TokenKind::Keyword(Keyword::Blob) => {
                self.advance();
                DataType::Blob
            }
            TokenKind::Keyword(Keyword::Boolean) => {
                self.advance();
                DataType::Boolean
            }
            TokenKind::Keyword(Keyword::Date) => {
                self.advance();
                DataType::Date
            }
            TokenKind::Keyword(Keyword::Time) => {
                self.advance();
                DataType::Time
            }
            TokenKind::Keyword(Keyword::Timestamp) => {
                self.advance();
                DataType::Timestamp
            }
            TokenKind::Keyword(Keyword::Datetime) => {
                self.advance();
                DataType::Datetime
            }
            TokenKind::Keyword(Keyword::Struct) => {
                self.advance();
                if self.consume(&TokenKind::Lt) {
                    let fields = self.parse_struct_fields(true)?;
                    self.expect_closing_angle()?;
                    DataType::Struct {
                        syntax: StructTypeSyntax::AngleBrackets,
                        fields,
                    }
                } else {
                    self.expect(&TokenKind::LeftParen, "(")?;
                    let fields = self.parse_struct_fields(false)?;
                    self.expect(&TokenKind::RightParen, ")")?;
                    DataType::Struct {
                        syntax: StructTypeSyntax::Parentheses,
                        fields,
                    }
                }
            }
            TokenKind::Keyword(Keyword::Array) => {
                self.advance();
                self.expect(&TokenKind::Lt, "<")?;
                let element = self.parse_data_type()?;
                self.expect_closing_angle()?;
                DataType::Array {
                    element: Box::new(element),
                    syntax: ArrayTypeSyntax::AngleBrackets,
                }
            }
            TokenKind::Identifier { value, .. } => {
                let name = value.clone();
                self.advance();
                DataType::Custom {
                    name,
                    modifiers: self.parse_type_modifiers()?,
                }
            }
            _ => return Err(self.unexpected(&["data type"])),
        };

        let mut data_type = base;
        while self.check(&TokenKind::LeftBracket)
            && matches!(self.peek_kind(1), TokenKind::RightBracket)
        {
            self.advance();
            self.advance();
            data_type = DataType::Array {
                element: Box::new(data_type),
                syntax: ArrayTypeSyntax::SquareSuffix,
            };
        }
        Ok(data_type)
    }

    /// Parses `(m, ...)` after a custom type name, keeping each modifier as written.
    fn parse_type_modifiers(&mut self) -> Result<Vec<String>, ParseError> {
        let mut modifiers = vec![];
        if !self.consume(&TokenKind::LeftParen) {
            return Ok(modifiers);
        }
        loop {
            match self.current().kind {
                TokenKind::Integer(_) | TokenKind::Identifier { .. } | TokenKind::Keyword(_) => {
                    let token = self.advance();
                    modifiers.push(self.source(token.span).to_string());
                }
                _ => return Err(self.unexpected(&["type modifier"])),
            }
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        self.expect(&TokenKind::RightParen, ")")?;
        Ok(modifiers)
    }

    /// Parses optional precision and scale (for DECIMAL/NUMERIC).
    fn parse_optional_precision_scale(&mut self) -> Result<(Option<u16>, Option<u16>), ParseError> {
        if !self.consume(&TokenKind::LeftParen) {
            return Ok((None, None));
        }

        let precision = self.parse_small_integer("Precision too large")?;
        let scale = if self.consume(&TokenKind::Comma) {
            Some(self.parse_small_integer("Scale too large")?)
        } else {
            None
        };

        self.expect(&TokenKind::RightParen, ")")?;
        Ok((Some(precision), scale))
    }

    fn parse_small_integer(&mut self, overflow: &str) -> Result<u16, ParseError> {
        match &self.current().kind {
            TokenKind::Integer(text) => {
                let value = text.parse::<u16>().map_err(|_| self.error(overflow))?;
                self.advance();
                Ok(value)
            }
            _ => Err(self.unexpected(&["integer"])),
        }
    }

    /// Parses optional length (for CHAR/VARCHAR/FLOAT).
    fn parse_optional_length(&mut self) -> Result<Option<u32>, ParseError> {
        if !self.consume(&TokenKind::LeftParen) {
            return Ok(None);
        }

        let length = match &self.current().kind {
            TokenKind::Integer(text) => {
                let len = text.parse::<u32>().map_err(|_| self.error("Length too large"))?;
                self.advance();
                len
            }
            _ => return Err(self.unexpected(&["integer"])),
        };

        self.expect(&TokenKind::RightParen, ")")?;
        Ok(Some(length))
    }

    /// Parses a comma-separated list of expressions.
    pub(super) fn parse_expression_list(&mut self) -> Result<ExpressionList, ParseError> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression(0)?);
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(ExpressionList(exprs))
    }
}

/// Folds `x::type`. A DuckDB struct value followed by `::STRUCT(...)` keeps
/// the type as its field list instead of becoming a cast.
fn apply_double_colon(lhs: Expr, data_type: DataType) -> Expr {
    match (lhs, data_type) {
        (
            Expr::Struct(mut value),
            DataType::Struct {
                syntax: StructTypeSyntax::Parentheses,
                fields,
            },
        ) if value.dialect == StructDialect::DuckDb && value.parameters.is_none() => {
            value.parameters = Some(fields);
            Expr::Struct(value)
        }
        (lhs, data_type) => Expr::Cast(CastExpr {
            expr: Box::new(lhs),
            data_type,
            style: CastStyle::DoubleColon,
        }),
    }
}
