//! SQL Parser implementation: token cursor, statement dispatch and DML.

use tracing::{debug, trace};

use super::error::ParseError;
use super::options::ParserOptions;
use crate::ast::{
    Alias, Assignment, ConflictAction, DeleteStatement, Ident, IndexKeyword, InsertSource,
    InsertStatement, ObjectName, OnConflict, ShowStatement, ShowTarget, Statement,
    UnsupportedStatement, UpdateStatement,
};
use crate::dialect::Dialect;
use crate::lexer::{Keyword, LexError, Lexer, Span, Token, TokenKind};

static EOF_TOKEN: Token = Token::new(TokenKind::Eof, Span::new(0, 0));

/// SQL Parser.
///
/// The whole input is tokenized up front; the grammar then walks the token
/// vector with at most two tokens of lookahead.
pub struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    /// Set when tokenizing failed; `tokens` then holds only EOF.
    lex_error: Option<LexError>,
    pos: usize,
    options: ParserOptions,
    dialect: &'static dyn Dialect,
    /// Parameter counter for ? placeholders.
    param_counter: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input using the generic dialect.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParserOptions::default())
    }

    /// Creates a parser with explicit options.
    #[must_use]
    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        let dialect = options.dialect.dialect();
        let (tokens, lex_error) = match Lexer::new(input)
            .with_double_quoted_strings(dialect.double_quoted_strings())
            .tokenize()
        {
            Ok(tokens) => {
                trace!(dialect = dialect.name(), tokens = tokens.len(), "Tokenized SQL input");
                (tokens, None)
            }
            Err(err) => {
                trace!(dialect = dialect.name(), error = %err, "Tokenizing failed");
                let end = Span::new(input.len(), input.len());
                (vec![Token::new(TokenKind::Eof, end)], Some(err))
            }
        };
        Self {
            input,
            tokens,
            lex_error,
            pos: 0,
            options,
            dialect,
            param_counter: 0,
        }
    }

    /// Parses exactly one SQL statement. A trailing `;` is accepted.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one valid statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        self.check_lexical_errors()?;
        if self.check(&TokenKind::Eof) {
            return Err(self.unexpected(&["statement"]));
        }
        let statement = self.parse_statement_inner()?;
        while self.consume(&TokenKind::Semicolon) {}
        if !self.check(&TokenKind::Eof) {
            return Err(self.unexpected(&["end of input"]));
        }
        debug!(dialect = self.dialect.name(), statements = 1, "Parsed SQL");
        Ok(statement)
    }

    /// Parses a `;`-separated sequence of statements, in source order.
    /// Empty statements are skipped.
    ///
    /// # Errors
    ///
    /// Returns the first `ParseError` encountered.
    pub fn parse_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        self.check_lexical_errors()?;
        let mut statements = Vec::new();
        loop {
            while self.consume(&TokenKind::Semicolon) {}
            if self.check(&TokenKind::Eof) {
                break;
            }
            statements.push(self.parse_statement_inner()?);
            if !self.consume(&TokenKind::Semicolon) && !self.check(&TokenKind::Eof) {
                return Err(self.unexpected(&[";", "end of input"]));
            }
        }
        debug!(
            dialect = self.dialect.name(),
            statements = statements.len(),
            "Parsed SQL"
        );
        Ok(statements)
    }

    /// Surfaces the first lexer error before any grammar work.
    fn check_lexical_errors(&self) -> Result<(), ParseError> {
        match &self.lex_error {
            Some(err) => Err(err.clone().into()),
            None => Ok(()),
        }
    }

    /// Dispatches on the first token of a statement.
    fn parse_statement_inner(&mut self) -> Result<Statement, ParseError> {
        let start = self.pos;
        match &self.current().kind {
            TokenKind::Keyword(Keyword::Select | Keyword::With | Keyword::Values)
            | TokenKind::LeftParen => Ok(Statement::Select(self.parse_query()?)),
            TokenKind::Keyword(Keyword::Insert) => {
                Ok(Statement::Insert(self.parse_insert_statement()?))
            }
            TokenKind::Keyword(Keyword::Update) => {
                Ok(Statement::Update(self.parse_update_statement()?))
            }
            TokenKind::Keyword(Keyword::Delete) => {
                Ok(Statement::Delete(self.parse_delete_statement()?))
            }
            TokenKind::Keyword(Keyword::Create) if self.is_create_table() => {
                Ok(Statement::CreateTable(self.parse_create_table()?))
            }
            TokenKind::Keyword(Keyword::Alter) if self.peek_is_keyword(1, Keyword::Table) => {
                Ok(Statement::AlterTable(self.parse_alter_table()?))
            }
            TokenKind::Keyword(Keyword::Show) => self.parse_show_statement(start),
            TokenKind::Keyword(_) | TokenKind::Identifier { .. } => self.parse_unsupported(start),
            _ => Err(self.unexpected(&["statement"])),
        }
    }

    fn is_create_table(&self) -> bool {
        self.peek_is_keyword(1, Keyword::Table)
            || (matches!(
                self.peek_kind(1),
                TokenKind::Keyword(Keyword::Temp | Keyword::Temporary)
            ) && self.peek_is_keyword(2, Keyword::Table))
    }

    /// Keeps the statement starting at token `start` as verbatim text.
    fn parse_unsupported(&mut self, start: usize) -> Result<Statement, ParseError> {
        self.pos = start;
        if !self.options.unsupported_fallback {
            return Err(self.unexpected(&[
                "SELECT",
                "INSERT",
                "UPDATE",
                "DELETE",
                "CREATE TABLE",
                "ALTER TABLE",
                "SHOW",
            ]));
        }
        let first = self.current().span;
        let mut last = first;
        while !self.at_statement_end() {
            last = self.advance().span;
        }
        let text = first.merge(last).slice(self.input).to_string();
        debug!(statement = %text, "Keeping statement as unsupported text");
        Ok(Statement::Unsupported(UnsupportedStatement { text }))
    }

    /// Parses `SHOW name` and `SHOW INDEX|INDEXES|KEYS FROM|IN table`.
    /// Any other SHOW form is kept as unsupported text.
    fn parse_show_statement(&mut self, start: usize) -> Result<Statement, ParseError> {
        self.expect_keyword(Keyword::Show)?;

        if let Some(keyword) = self.index_keyword() {
            if matches!(
                self.peek_kind(1),
                TokenKind::Keyword(Keyword::From | Keyword::In)
            ) {
                self.advance();
                self.advance();
                if let Ok(table) = self.parse_object_name() {
                    if self.at_statement_end() {
                        return Ok(Statement::Show(ShowStatement {
                            target: ShowTarget::Indexes { keyword, table },
                        }));
                    }
                }
                return self.parse_unsupported(start);
            }
        }

        if self.is_identifier_start(0) && self.peek_is_statement_end(1) {
            let name = self.parse_identifier()?;
            return Ok(Statement::Show(ShowStatement {
                target: ShowTarget::Variable(name),
            }));
        }

        self.parse_unsupported(start)
    }

    fn index_keyword(&self) -> Option<IndexKeyword> {
        match &self.current().kind {
            TokenKind::Keyword(Keyword::Index) => Some(IndexKeyword::Index),
            TokenKind::Identifier { value, quote: None } if value.eq_ignore_ascii_case("INDEXES") => {
                Some(IndexKeyword::Indexes)
            }
            TokenKind::Identifier { value, quote: None } if value.eq_ignore_ascii_case("KEYS") => {
                Some(IndexKeyword::Keys)
            }
            _ => None,
        }
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        let into = self.consume_keyword(Keyword::Into);
        let table = self.parse_object_name()?;

        let columns = if self.check(&TokenKind::LeftParen)
            && !matches!(
                self.peek_kind(1),
                TokenKind::Keyword(Keyword::Select | Keyword::With)
            ) {
            self.parse_parenthesized_identifiers()?
        } else {
            vec![]
        };

        let source = if self.check_keyword(Keyword::Values) {
            InsertSource::Values(self.parse_values()?)
        } else if self.check_keyword(Keyword::Default) {
            self.advance();
            self.expect_keyword(Keyword::Values)?;
            InsertSource::DefaultValues
        } else if matches!(
            self.current().kind,
            TokenKind::Keyword(Keyword::Select | Keyword::With) | TokenKind::LeftParen
        ) {
            InsertSource::Query(Box::new(self.parse_query()?))
        } else {
            return Err(self.unexpected(&["VALUES", "DEFAULT VALUES", "SELECT"]));
        };

        let on_conflict = if self.check_keyword(Keyword::On) {
            Some(self.parse_on_conflict()?)
        } else {
            None
        };

        Ok(InsertStatement {
            into,
            table,
            columns,
            source,
            on_conflict,
        })
    }

    /// Parses `ON CONFLICT [(cols)] DO NOTHING | DO UPDATE SET ...`.
    fn parse_on_conflict(&mut self) -> Result<OnConflict, ParseError> {
        self.expect_keyword(Keyword::On)?;
        self.expect_keyword(Keyword::Conflict)?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_identifiers()?
        } else {
            vec![]
        };
        self.expect_keyword(Keyword::Do)?;
        let action = if self.consume_keyword(Keyword::Nothing) {
            ConflictAction::DoNothing
        } else {
            self.expect_keyword(Keyword::Update)?;
            self.expect_keyword(Keyword::Set)?;
            ConflictAction::DoUpdate(self.parse_assignments()?)
        };
        Ok(OnConflict { columns, action })
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.parse_object_name()?;
        let alias = self.parse_optional_alias()?;
        self.expect_keyword(Keyword::Set)?;
        let assignments = self.parse_assignments()?;

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

        Ok(UpdateStatement {
            table,
            alias,
            assignments,
            from,
            joins,
            selection,
        })
    }

    fn parse_assignments(&mut self) -> Result<Vec<Assignment>, ParseError> {
        let mut assignments = vec![];
        loop {
            let column = self.parse_identifier()?;
            self.expect(&TokenKind::Eq, "=")?;
            let value = self.parse_expression(0)?;
            assignments.push(Assignment { column, value });
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(assignments)
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        let from_keyword = self.consume_keyword(Keyword::From);
        let table = self.parse_object_name()?;
        let alias = self.parse_optional_alias()?;

        let selection = if self.consume_keyword(Keyword::Where) {
            Some(self.parse_expression(0)?)
        } else {
            None
        };

        Ok(DeleteStatement {
            from_keyword,
            table,
            alias,
            selection,
        })
    }

    // --- Names and aliases ---

    /// Parses an identifier. Non-reserved keywords are accepted as written.
    pub(super) fn parse_identifier(&mut self) -> Result<Ident, ParseError> {
        match &self.current().kind {
            TokenKind::Identifier { value, quote } => {
                let ident = Ident {
                    value: value.clone(),
                    quote_style: *quote,
                };
                self.advance();
                Ok(ident)
            }
            TokenKind::Keyword(kw) if !kw.is_reserved() => {
                let text = self.current().span.slice(self.input).to_string();
                self.advance();
                Ok(Ident::new(text))
            }
            _ => Err(self.unexpected(&["identifier"])),
        }
    }

    /// Returns true if the token `n` ahead can be read as an identifier.
    pub(super) fn is_identifier_start(&self, n: usize) -> bool {
        match self.peek_kind(n) {
            TokenKind::Identifier { .. } => true,
            TokenKind::Keyword(kw) => !kw.is_reserved(),
            _ => false,
        }
    }

    /// Parses a dotted name such as `project.dataset.table`.
    pub(super) fn parse_object_name(&mut self) -> Result<ObjectName, ParseError> {
        let mut parts = vec![self.parse_identifier()?];
        while self.check(&TokenKind::Dot) && self.is_identifier_start(1) {
            self.advance();
            parts.push(self.parse_identifier()?);
        }
        Ok(ObjectName(parts))
    }

    /// Parses `(ident, ...)`.
    pub(super) fn parse_parenthesized_identifiers(&mut self) -> Result<Vec<Ident>, ParseError> {
        self.expect(&TokenKind::LeftParen, "(")?;
        let idents = self.parse_identifier_list()?;
        self.expect(&TokenKind::RightParen, ")")?;
        Ok(idents)
    }

    /// Parses a comma-separated list of identifiers.
    pub(super) fn parse_identifier_list(&mut self) -> Result<Vec<Ident>, ParseError> {
        let mut idents = vec![];
        loop {
            idents.push(self.parse_identifier()?);
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(idents)
    }

    /// Parses `AS name` or a bare non-reserved name.
    pub(super) fn parse_optional_alias(&mut self) -> Result<Option<Alias>, ParseError> {
        if self.consume_keyword(Keyword::As) {
            let name = self.parse_identifier()?;
            return Ok(Some(Alias::new(name)));
        }
        if self.is_identifier_start(0) {
            let name = self.parse_identifier()?;
            return Ok(Some(Alias::implicit(name)));
        }
        Ok(None)
    }

    // --- Helper methods ---

    /// Returns the dialect in effect.
    pub(super) fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    /// Returns the next 1-based position for a `?` placeholder.
    pub(super) fn next_param_position(&mut self) -> usize {
        self.param_counter += 1;
        self.param_counter
    }

    /// Returns the source text covered by `span`.
    pub(super) fn source(&self, span: Span) -> &'a str {
        span.slice(self.input)
    }

    /// Returns the current token.
    pub(super) fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Returns the kind of the token `n` positions ahead.
    pub(super) fn peek_kind(&self, n: usize) -> &TokenKind {
        self.tokens
            .get(self.pos + n)
            .map_or(&EOF_TOKEN.kind, |token| &token.kind)
    }

    /// Returns true if the token `n` ahead is the given keyword.
    pub(super) fn peek_is_keyword(&self, n: usize, keyword: Keyword) -> bool {
        matches!(self.peek_kind(n), TokenKind::Keyword(kw) if *kw == keyword)
    }

    fn peek_is_statement_end(&self, n: usize) -> bool {
        matches!(self.peek_kind(n), TokenKind::Semicolon | TokenKind::Eof)
    }

    /// Returns true at `;` or end of input.
    pub(super) fn at_statement_end(&self) -> bool {
        self.peek_is_statement_end(0)
    }

    /// Advances to the next token and returns the one consumed.
    pub(super) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Checks if the current token matches the given kind.
    pub(super) fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    pub(super) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek_is_keyword(0, keyword)
    }

    /// Consumes the current token if it matches the given kind.
    pub(super) fn consume(&mut self, kind: &TokenKind) -> bool {
        let matched = self.check(kind);
        if matched {
            self.advance();
        }
        matched
    }

    /// Consumes the current token if it is the given keyword.
    pub(super) fn consume_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = self.check_keyword(keyword);
        if matched {
            self.advance();
        }
        matched
    }

    /// Expects the current token to be the given kind.
    pub(super) fn expect(
        &mut self,
        kind: &TokenKind,
        description: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&[description]))
        }
    }

    /// Expects the current token to be the given keyword.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.consume_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(&[keyword.as_str()]))
        }
    }

    /// Expects a closing `>`, splitting a `>>` token produced by nested
    /// angle brackets.
    pub(super) fn expect_closing_angle(&mut self) -> Result<(), ParseError> {
        match self.current().kind {
            TokenKind::Gt => {
                self.advance();
                Ok(())
            }
            TokenKind::RightShift => {
                let span = self.current().span;
                if let Some(token) = self.tokens.get_mut(self.pos) {
                    *token = Token::new(TokenKind::Gt, Span::new(span.start + 1, span.end));
                }
                Ok(())
            }
            _ => Err(self.unexpected(&[">"])),
        }
    }

    /// Builds an "unexpected token" error at the current token.
    pub(super) fn unexpected(&self, expected: &[&str]) -> ParseError {
        let token = self.current();
        ParseError::unexpected(expected, token.kind.clone(), self.input, token.span)
    }

    /// Builds an error with a custom message at the current token.
    pub(super) fn error(&self, message: impl Into<String>) -> ParseError {
        let token = self.current();
        ParseError {
            found: Some(token.kind.clone()),
            ..ParseError::new(message, self.input, token.span)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryExpr, BinaryOp, Expr, Parameter, SetExpr};
    use crate::dialect::DialectKind;
    use crate::parser::ParseErrorKind;

    fn parse(sql: &str) -> Result<Statement, ParseError> {
        Parser::new(sql).parse_statement()
    }

    fn first_projection(stmt: &Statement) -> &Expr {
        let Statement::Select(query) = stmt else {
            panic!("Expected SELECT statement");
        };
        let SetExpr::Select(select) = &query.body else {
            panic!("Expected plain SELECT");
        };
        &select.projection[0].expr
    }

    #[test]
    fn test_simple_select() {
        let stmt = parse("SELECT id, name FROM users").unwrap();
        assert!(matches!(stmt, Statement::Select(_)));
    }

    #[test]
    fn test_expression_precedence() {
        // 1 + 2 * 3 should be parsed as 1 + (2 * 3)
        let stmt = parse("SELECT 1 + 2 * 3").unwrap();
        let Expr::Binary(BinaryExpr { op, right, .. }) = first_projection(&stmt) else {
            panic!("Expected binary expression");
        };
        assert_eq!(*op, BinaryOp::Add);
        assert!(matches!(
            right.as_ref(),
            Expr::Binary(BinaryExpr {
                op: BinaryOp::Mul,
                ..
            })
        ));
    }

    #[test]
    fn test_insert_values() {
        let stmt =
            parse("INSERT INTO users (name, email) VALUES ('Alice', 'alice@example.com')").unwrap();
        let Statement::Insert(insert) = stmt else {
            panic!("Expected INSERT statement");
        };
        assert_eq!(insert.table, ObjectName::from("users"));
        assert_eq!(insert.columns.len(), 2);
        assert!(matches!(insert.source, InsertSource::Values(_)));
    }

    #[test]
    fn test_update() {
        let stmt = parse("UPDATE users SET name = 'Bob' WHERE id = 1").unwrap();
        let Statement::Update(update) = stmt else {
            panic!("Expected UPDATE statement");
        };
        assert_eq!(update.table, ObjectName::from("users"));
        assert_eq!(update.assignments.len(), 1);
        assert!(update.selection.is_some());
    }

    #[test]
    fn test_delete() {
        let stmt = parse("DELETE FROM users WHERE id = 1").unwrap();
        let Statement::Delete(delete) = stmt else {
            panic!("Expected DELETE statement");
        };
        assert!(delete.from_keyword);
        assert!(delete.selection.is_some());
    }

    #[test]
    fn test_parameter_placeholders() {
        let stmt = parse("SELECT ?, ?, :name").unwrap();
        let Statement::Select(query) = stmt else {
            panic!("Expected SELECT statement");
        };
        let select = query.as_select().unwrap();
        assert_eq!(select.projection[0].expr, Expr::Parameter(Parameter::Positional(1)));
        assert_eq!(select.projection[1].expr, Expr::Parameter(Parameter::Positional(2)));
        assert_eq!(
            select.projection[2].expr,
            Expr::Parameter(Parameter::Named {
                prefix: ':',
                name: String::from("name")
            })
        );
    }

    #[test]
    fn test_trailing_semicolon_accepted() {
        assert!(parse("SELECT 1;").is_ok());
    }

    #[test]
    fn test_single_statement_rejects_extra_statement() {
        let err = parse("SELECT 1; SELECT 2").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        assert_eq!(err.expected, vec![String::from("end of input")]);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(parse("").is_err());
        assert!(parse(" ; ").is_err());
    }

    #[test]
    fn test_parse_statements_skips_empty() {
        let statements = Parser::new(";SELECT 1;; SELECT 2;").parse_statements().unwrap();
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn test_lexical_error_reported_first() {
        let err = parse("SELECT FROM 'unterminated").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Lexical);
    }

    #[test]
    fn test_show_forms() {
        assert_eq!(
            parse("SHOW transaction_isolation").unwrap(),
            Statement::Show(ShowStatement {
                target: ShowTarget::Variable(Ident::new("transaction_isolation"))
            })
        );
        assert_eq!(
            parse("show indexes from my_table").unwrap(),
            Statement::Show(ShowStatement {
                target: ShowTarget::Indexes {
                    keyword: IndexKeyword::Indexes,
                    table: ObjectName::from("my_table"),
                }
            })
        );
        assert_eq!(
            parse("show create table my_table").unwrap(),
            Statement::Unsupported(UnsupportedStatement {
                text: String::from("show create table my_table")
            })
        );
    }

    #[test]
    fn test_unsupported_fallback_can_be_disabled() {
        let options = ParserOptions::new(DialectKind::Generic).with_unsupported_fallback(false);
        let err = Parser::with_options("GRANT SELECT ON t TO bob", options)
            .parse_statement()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
        assert_eq!(err.found, Some(TokenKind::ident("GRANT")));
        assert!(err.expected.iter().any(|e| e == "CREATE TABLE"));
        assert_eq!(err.span, Span::new(0, 5));
    }

    #[test]
    fn test_non_reserved_keyword_as_identifier() {
        let stmt = parse("SELECT first, type FROM t").unwrap();
        assert_eq!(first_projection(&stmt), &Expr::column("first"));
    }
}
