//! Turns SQL text into tokens.

use super::{Keyword, LexError, Location, Span, Token, TokenKind};

/// Where the token being scanned began.
#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    location: Location,
}

/// A lexer over one SQL string.
///
/// Line and column are tracked while scanning so errors carry their
/// position without rescanning the input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    location: Location,
    /// `"..."` is a string literal instead of a quoted identifier.
    double_quoted_strings: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            location: Location::default(),
            double_quoted_strings: false,
        }
    }

    /// Treats double-quoted text as string literals (BigQuery).
    #[must_use]
    pub fn with_double_quoted_strings(mut self, enabled: bool) -> Self {
        self.double_quoted_strings = enabled;
        self
    }

    fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.rest().chars().nth(1)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.location.line += 1;
            self.location.column = 1;
        } else {
            self.location.column += 1;
        }
        Some(c)
    }

    fn bump_if(&mut self, expected: char) -> bool {
        let matched = self.peek() == Some(expected);
        if matched {
            self.bump();
        }
        matched
    }

    fn bump_while(&mut self, accept: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&accept) {
            self.bump();
        }
    }

    const fn mark(&self) -> Mark {
        Mark {
            offset: self.offset,
            location: self.location,
        }
    }

    fn text(&self, mark: Mark) -> &'a str {
        &self.input[mark.offset..self.offset]
    }

    fn token(&self, kind: TokenKind, mark: Mark) -> Token {
        Token::new(kind, Span::new(mark.offset, self.offset))
    }

    fn error(&self, message: impl Into<String>, mark: Mark) -> LexError {
        LexError::new(message, Span::new(mark.offset, self.offset), mark.location)
    }

    /// Skips whitespace, `-- line` comments and `/* block */` comments.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            self.bump_while(char::is_whitespace);
            match (self.peek(), self.peek_second()) {
                (Some('-'), Some('-')) => self.bump_while(|c| c != '\n'),
                (Some('/'), Some('*')) => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let mark = self.mark();
        self.bump();
        self.bump();
        loop {
            match self.bump() {
                Some('*') if self.bump_if('/') => return Ok(()),
                Some(_) => {}
                None => return Err(self.error("Unterminated block comment", mark)),
            }
        }
    }

    /// Scans the next token, returning [`TokenKind::Eof`] once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for unterminated literals and comments, malformed
    /// blob literals and characters that start no token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_trivia()?;
        let mark = self.mark();
        let Some(c) = self.peek() else {
            return Ok(self.token(TokenKind::Eof, mark));
        };
        match c {
            '\'' => {
                let value = self.scan_delimited(mark, '\'', "string literal")?;
                Ok(self.token(TokenKind::String(value), mark))
            }
            '"' if self.double_quoted_strings => {
                let value = self.scan_delimited(mark, '"', "string literal")?;
                Ok(self.token(TokenKind::String(value), mark))
            }
            '"' | '`' => {
                let value = self.scan_delimited(mark, c, "quoted identifier")?;
                Ok(self.token(
                    TokenKind::Identifier {
                        value,
                        quote: Some(c),
                    },
                    mark,
                ))
            }
            'X' | 'x' if self.peek_second() == Some('\'') => self.scan_blob(mark),
            c if c.is_ascii_digit() => Ok(self.scan_number(mark)),
            c if c.is_alphabetic() || c == '_' => Ok(self.scan_word(mark)),
            c => self.scan_punctuation(mark, c),
        }
    }

    /// Splits the whole input into tokens ending with [`TokenKind::Eof`].
    ///
    /// # Errors
    ///
    /// Stops at the first [`LexError`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Reads `quote ... quote`, where a doubled quote stands for itself.
    fn scan_delimited(&mut self, mark: Mark, quote: char, what: &str) -> Result<String, LexError> {
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => {
                    if !self.bump_if(quote) {
                        return Ok(value);
                    }
                    value.push(quote);
                }
                Some(c) => value.push(c),
                None => return Err(self.error(format!("Unterminated {what}"), mark)),
            }
        }
    }

    fn scan_blob(&mut self, mark: Mark) -> Result<Token, LexError> {
        self.bump();
        let hex = self.scan_delimited(mark, '\'', "blob literal")?;
        let bytes = decode_hex(&hex).map_err(|message| self.error(message, mark))?;
        Ok(self.token(TokenKind::Blob(bytes), mark))
    }

    /// Numbers keep their source text; range checks belong to whoever reads them.
    fn scan_number(&mut self, mark: Mark) -> Token {
        let mut float = false;
        self.bump_while(|c| c.is_ascii_digit());
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            self.bump_while(|c| c.is_ascii_digit());
            float = true;
        }
        if matches!(self.peek(), Some('e' | 'E')) && self.exponent_follows() {
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            self.bump_while(|c| c.is_ascii_digit());
            float = true;
        }
        let text = self.text(mark).to_string();
        let kind = if float {
            TokenKind::Float(text)
        } else {
            TokenKind::Integer(text)
        };
        self.token(kind, mark)
    }

    /// True when the `e` at the cursor is followed by exponent digits.
    fn exponent_follows(&self) -> bool {
        let mut after = self.rest().chars().skip(1).peekable();
        if matches!(after.peek(), Some('+' | '-')) {
            after.next();
        }
        after.next().is_some_and(|c| c.is_ascii_digit())
    }

    fn scan_word(&mut self, mark: Mark) -> Token {
        self.bump_while(|c| c.is_alphanumeric() || c == '_');
        let text = self.text(mark);
        let kind = Keyword::from_str(text).map_or_else(|| TokenKind::ident(text), TokenKind::Keyword);
        self.token(kind, mark)
    }

    fn scan_punctuation(&mut self, mark: Mark, c: char) -> Result<Token, LexError> {
        self.bump();
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '~' => TokenKind::BitNot,
            '?' => TokenKind::Question,
            '@' => TokenKind::At,
            '=' => TokenKind::Eq,
            ':' if self.bump_if(':') => TokenKind::DoubleColon,
            ':' => TokenKind::Colon,
            '<' if self.bump_if('=') => TokenKind::LtEq,
            '<' if self.bump_if('>') => TokenKind::NotEq,
            '<' if self.bump_if('<') => TokenKind::LeftShift,
            '<' if self.bump_if('&') => TokenKind::ContainedBy,
            '<' => TokenKind::Lt,
            '>' if self.bump_if('=') => TokenKind::GtEq,
            '>' if self.bump_if('>') => TokenKind::RightShift,
            '>' => TokenKind::Gt,
            '!' if self.bump_if('=') => TokenKind::NotEq,
            '|' if self.bump_if('|') => TokenKind::Concat,
            '|' => TokenKind::BitOr,
            '&' if self.bump_if('>') => TokenKind::Contains,
            '&' => TokenKind::BitAnd,
            _ => return Err(self.error(format!("Unexpected character: {c}"), mark)),
        };
        Ok(self.token(kind, mark))
    }
}

/// Decodes the body of `X'..'`; whitespace between digits is ignored.
fn decode_hex(text: &str) -> Result<Vec<u8>, &'static str> {
    let nibbles = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| {
            c.to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or("Invalid character in blob literal")
        })
        .collect::<Result<Vec<u8>, _>>()?;
    if nibbles.len() % 2 != 0 {
        return Err("Odd number of hex digits in blob literal");
    }
    Ok(nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex_err(input: &str) -> LexError {
        Lexer::new(input).tokenize().unwrap_err()
    }

    #[test]
    fn test_numbers_keep_source_text() {
        assert_eq!(
            kinds("9223372036854775808 1e400 2.5E-3 007"),
            vec![
                TokenKind::Integer("9223372036854775808".into()),
                TokenKind::Float("1e400".into()),
                TokenKind::Float("2.5E-3".into()),
                TokenKind::Integer("007".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_exponent_needs_digits() {
        assert_eq!(
            kinds("1e 2.x"),
            vec![
                TokenKind::Integer("1".into()),
                TokenKind::ident("e"),
                TokenKind::Integer("2".into()),
                TokenKind::Dot,
                TokenKind::ident("x"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_are_skipped() {
        let input = "-- leading\nSELECT /* a ** b */ 1 -- trailing";
        assert_eq!(
            kinds(input),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Integer("1".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = lex_err("SELECT 1\n  /* open *");
        assert_eq!(err.message, "Unterminated block comment");
        assert_eq!(err.span.start, 11);
        assert_eq!(err.location, Location { line: 2, column: 3 });
    }

    #[test]
    fn test_double_quote_follows_dialect() {
        assert_eq!(
            kinds(r#""a""b""#),
            vec![
                TokenKind::Identifier {
                    value: "a\"b".into(),
                    quote: Some('"'),
                },
                TokenKind::Eof,
            ]
        );
        let tokens = Lexer::new(r#""a""b""#)
            .with_double_quoted_strings(true)
            .tokenize()
            .unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String("a\"b".into()));
    }

    #[test]
    fn test_backtick_identifier() {
        assert_eq!(
            kinds("`my table`"),
            vec![
                TokenKind::Identifier {
                    value: "my table".into(),
                    quote: Some('`'),
                },
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_compound_operators() {
        assert_eq!(
            kinds("a::b <> c != d >> e <& f &> g || h"),
            vec![
                TokenKind::ident("a"),
                TokenKind::DoubleColon,
                TokenKind::ident("b"),
                TokenKind::NotEq,
                TokenKind::ident("c"),
                TokenKind::NotEq,
                TokenKind::ident("d"),
                TokenKind::RightShift,
                TokenKind::ident("e"),
                TokenKind::ContainedBy,
                TokenKind::ident("f"),
                TokenKind::Contains,
                TokenKind::ident("g"),
                TokenKind::Concat,
                TokenKind::ident("h"),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lone_bang_is_rejected() {
        let err = lex_err("a ! b");
        assert_eq!(err.message, "Unexpected character: !");
        assert_eq!(err.location.column, 3);
    }

    #[test]
    fn test_blob_literals() {
        assert_eq!(kinds("x'0aFf'")[0], TokenKind::Blob(vec![0x0A, 0xFF]));
        assert_eq!(kinds("X'01 23'")[0], TokenKind::Blob(vec![0x01, 0x23]));
        assert_eq!(kinds("xylophone")[0], TokenKind::ident("xylophone"));
        assert_eq!(lex_err("X'abc'").message, "Odd number of hex digits in blob literal");
        assert_eq!(lex_err("X'zz'").message, "Invalid character in blob literal");
        assert_eq!(lex_err("X'ab").message, "Unterminated blob literal");
    }

    #[test]
    fn test_location_counts_characters() {
        let err = lex_err("SELECT 'é',\n ¤");
        assert_eq!(err.message, "Unexpected character: ¤");
        assert_eq!(err.span.start, 14);
        assert_eq!(err.location, Location { line: 2, column: 2 });
    }

    #[test]
    fn test_unterminated_string_points_at_quote() {
        let err = lex_err("SELECT 'abc");
        assert_eq!(err.message, "Unterminated string literal");
        assert_eq!(err.span, Span::new(7, 11));
        assert_eq!(err.location, Location { line: 1, column: 8 });
        assert_eq!(err.to_string(), "Unterminated string literal at line 1, column 8");
    }

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(
            kinds("select From"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = Lexer::new("a <= 'b'").tokenize().unwrap();
        let spans: Vec<_> = tokens.iter().map(|t| (t.span.start, t.span.end)).collect();
        assert_eq!(spans, vec![(0, 1), (2, 4), (5, 8), (8, 8)]);
    }
}
