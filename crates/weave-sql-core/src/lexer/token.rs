//! Token types for the SQL lexer.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Span;

/// SQL keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keyword {
    // Queries
    Select,
    From,
    Where,
    Order,
    By,
    Group,
    Having,
    Limit,
    Offset,
    Distinct,
    All,
    Qualify,

    // Joins and from-item extensions
    Join,
    Inner,
    Left,
    Right,
    Full,
    Outer,
    Cross,
    On,
    Using,
    Lateral,
    Pivot,
    Unpivot,
    For,

    // Set operations
    Union,
    Intersect,
    Except,

    // Data manipulation
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // Data definition
    Create,
    Drop,
    Alter,
    Table,
    Index,
    View,
    Show,
    Add,
    Column,
    Rename,
    To,

    // Constraints
    Primary,
    Key,
    Foreign,
    References,
    Unique,
    Check,
    Default,
    Constraint,
    Cascade,
    Restrict,

    // Logical operators and predicates
    And,
    Or,
    Not,
    In,
    Between,
    Like,
    Ilike,
    Is,
    Null,
    True,
    False,
    Exists,

    // Ordering
    Asc,
    Desc,
    Nulls,
    First,
    Last,

    // Data types
    Int,
    Integer,
    Smallint,
    Bigint,
    Real,
    Double,
    Float,
    Decimal,
    Numeric,
    Char,
    Varchar,
    Text,
    Blob,
    Boolean,
    Date,
    Time,
    Timestamp,
    Datetime,
    Array,
    Struct,

    // Dialect extras
    Autoincrement,
    If,
    Temporary,
    Temp,
    Conflict,
    Do,
    Nothing,
    Replace,
    Exclude,
    Include,
    Type,

    // Common clauses
    As,
    Case,
    When,
    Then,
    Else,
    End,
    Cast,

    // Misc
    With,
    Recursive,
    Window,
    Row,
    Rows,
}

impl Keyword {
    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "ORDER" => Some(Self::Order),
            "BY" => Some(Self::By),
            "GROUP" => Some(Self::Group),
            "HAVING" => Some(Self::Having),
            "LIMIT" => Some(Self::Limit),
            "OFFSET" => Some(Self::Offset),
            "DISTINCT" => Some(Self::Distinct),
            "ALL" => Some(Self::All),
            "QUALIFY" => Some(Self::Qualify),
            "JOIN" => Some(Self::Join),
            "INNER" => Some(Self::Inner),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "FULL" => Some(Self::Full),
            "OUTER" => Some(Self::Outer),
            "CROSS" => Some(Self::Cross),
            "ON" => Some(Self::On),
            "USING" => Some(Self::Using),
            "LATERAL" => Some(Self::Lateral),
            "PIVOT" => Some(Self::Pivot),
            "UNPIVOT" => Some(Self::Unpivot),
            "FOR" => Some(Self::For),
            "UNION" => Some(Self::Union),
            "INTERSECT" => Some(Self::Intersect),
            "EXCEPT" => Some(Self::Except),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "CREATE" => Some(Self::Create),
            "DROP" => Some(Self::Drop),
            "ALTER" => Some(Self::Alter),
            "TABLE" => Some(Self::Table),
            "INDEX" => Some(Self::Index),
            "VIEW" => Some(Self::View),
            "SHOW" => Some(Self::Show),
            "ADD" => Some(Self::Add),
            "COLUMN" => Some(Self::Column),
            "RENAME" => Some(Self::Rename),
            "TO" => Some(Self::To),
            "PRIMARY" => Some(Self::Primary),
            "KEY" => Some(Self::Key),
            "FOREIGN" => Some(Self::Foreign),
            "REFERENCES" => Some(Self::References),
            "UNIQUE" => Some(Self::Unique),
            "CHECK" => Some(Self::Check),
            "DEFAULT" => Some(Self::Default),
            "CONSTRAINT" => Some(Self::Constraint),
            "CASCADE" => Some(Self::Cascade),
            "RESTRICT" => Some(Self::Restrict),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "IN" => Some(Self::In),
            "BETWEEN" => Some(Self::Between),
            "LIKE" => Some(Self::Like),
            "ILIKE" => Some(Self::Ilike),
            "IS" => Some(Self::Is),
            "NULL" => Some(Self::Null),
            "TRUE" => Some(Self::True),
            "FALSE" => Some(Self::False),
            "EXISTS" => Some(Self::Exists),
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            "NULLS" => Some(Self::Nulls),
            "FIRST" => Some(Self::First),
            "LAST" => Some(Self::Last),
            "INT" => Some(Self::Int),
            "INTEGER" => Some(Self::Integer),
            "SMALLINT" => Some(Self::Smallint),
            "BIGINT" => Some(Self::Bigint),
            "REAL" => Some(Self::Real),
            "DOUBLE" => Some(Self::Double),
            "FLOAT" => Some(Self::Float),
            "DECIMAL" => Some(Self::Decimal),
            "NUMERIC" => Some(Self::Numeric),
            "CHAR" => Some(Self::Char),
            "VARCHAR" => Some(Self::Varchar),
            "TEXT" => Some(Self::Text),
            "BLOB" => Some(Self::Blob),
            "BOOLEAN" => Some(Self::Boolean),
            "DATE" => Some(Self::Date),
            "TIME" => Some(Self::Time),
            "TIMESTAMP" => Some(Self::Timestamp),
            "DATETIME" => Some(Self::Datetime),
            "ARRAY" => Some(Self::Array),
            "STRUCT" => Some(Self::Struct),
            "AUTOINCREMENT" => Some(Self::Autoincrement),
            "IF" => Some(Self::If),
            "TEMPORARY" => Some(Self::Temporary),
            "TEMP" => Some(Self::Temp),
            "CONFLICT" => Some(Self::Conflict),
            "DO" => Some(Self::Do),
            "NOTHING" => Some(Self::Nothing),
            "REPLACE" => Some(Self::Replace),
            "EXCLUDE" => Some(Self::Exclude),
            "INCLUDE" => Some(Self::Include),
            "TYPE" => Some(Self::Type),
            "AS" => Some(Self::As),
            "CASE" => Some(Self::Case),
            "WHEN" => Some(Self::When),
            "THEN" => Some(Self::Then),
            "ELSE" => Some(Self::Else),
            "END" => Some(Self::End),
            "CAST" => Some(Self::Cast),
            "WITH" => Some(Self::With),
            "RECURSIVE" => Some(Self::Recursive),
            "WINDOW" => Some(Self::Window),
            "ROW" => Some(Self::Row),
            "ROWS" => Some(Self::Rows),
            _ => None,
        }
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Order => "ORDER",
            Self::By => "BY",
            Self::Group => "GROUP",
            Self::Having => "HAVING",
            Self::Limit => "LIMIT",
            Self::Offset => "OFFSET",
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::Qualify => "QUALIFY",
            Self::Join => "JOIN",
            Self::Inner => "INNER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Full => "FULL",
            Self::Outer => "OUTER",
            Self::Cross => "CROSS",
            Self::On => "ON",
            Self::Using => "USING",
            Self::Lateral => "LATERAL",
            Self::Pivot => "PIVOT",
            Self::Unpivot => "UNPIVOT",
            Self::For => "FOR",
            Self::Union => "UNION",
            Self::Intersect => "INTERSECT",
            Self::Except => "EXCEPT",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Drop => "DROP",
            Self::Alter => "ALTER",
            Self::Table => "TABLE",
            Self::Index => "INDEX",
            Self::View => "VIEW",
            Self::Show => "SHOW",
            Self::Add => "ADD",
            Self::Column => "COLUMN",
            Self::Rename => "RENAME",
            Self::To => "TO",
            Self::Primary => "PRIMARY",
            Self::Key => "KEY",
            Self::Foreign => "FOREIGN",
            Self::References => "REFERENCES",
            Self::Unique => "UNIQUE",
            Self::Check => "CHECK",
            Self::Default => "DEFAULT",
            Self::Constraint => "CONSTRAINT",
            Self::Cascade => "CASCADE",
            Self::Restrict => "RESTRICT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::Between => "BETWEEN",
            Self::Like => "LIKE",
            Self::Ilike => "ILIKE",
            Self::Is => "IS",
            Self::Null => "NULL",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Exists => "EXISTS",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::Nulls => "NULLS",
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::Int => "INT",
            Self::Integer => "INTEGER",
            Self::Smallint => "SMALLINT",
            Self::Bigint => "BIGINT",
            Self::Real => "REAL",
            Self::Double => "DOUBLE",
            Self::Float => "FLOAT",
            Self::Decimal => "DECIMAL",
            Self::Numeric => "NUMERIC",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::Text => "TEXT",
            Self::Blob => "BLOB",
            Self::Boolean => "BOOLEAN",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Datetime => "DATETIME",
            Self::Array => "ARRAY",
            Self::Struct => "STRUCT",
            Self::Autoincrement => "AUTOINCREMENT",
            Self::If => "IF",
            Self::Temporary => "TEMPORARY",
            Self::Temp => "TEMP",
            Self::Conflict => "CONFLICT",
            Self::Do => "DO",
            Self::Nothing => "NOTHING",
            Self::Replace => "REPLACE",
            Self::Exclude => "EXCLUDE",
            Self::Include => "INCLUDE",
            Self::Type => "TYPE",
            Self::As => "AS",
            Self::Case => "CASE",
            Self::When => "WHEN",
            Self::Then => "THEN",
            Self::Else => "ELSE",
            Self::End => "END",
            Self::Cast => "CAST",
            Self::With => "WITH",
            Self::Recursive => "RECURSIVE",
            Self::Window => "WINDOW",
            Self::Row => "ROW",
            Self::Rows => "ROWS",
        }
    }

    /// Returns true if the keyword can never be used as a bare identifier
    /// or alias.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(
            self,
            Self::Select
                | Self::From
                | Self::Where
                | Self::Order
                | Self::By
                | Self::Group
                | Self::Having
                | Self::Limit
                | Self::Offset
                | Self::Distinct
                | Self::All
                | Self::Qualify
                | Self::Join
                | Self::Inner
                | Self::Left
                | Self::Right
                | Self::Full
                | Self::Outer
                | Self::Cross
                | Self::On
                | Self::Using
                | Self::Lateral
                | Self::Pivot
                | Self::Unpivot
                | Self::For
                | Self::Union
                | Self::Intersect
                | Self::Except
                | Self::Insert
                | Self::Into
                | Self::Values
                | Self::Update
                | Self::Set
                | Self::Delete
                | Self::Create
                | Self::Drop
                | Self::Alter
                | Self::Table
                | Self::Primary
                | Self::Foreign
                | Self::References
                | Self::Unique
                | Self::Check
                | Self::Default
                | Self::Constraint
                | Self::And
                | Self::Or
                | Self::Not
                | Self::In
                | Self::Between
                | Self::Like
                | Self::Ilike
                | Self::Is
                | Self::Null
                | Self::True
                | Self::False
                | Self::Exists
                | Self::Asc
                | Self::Desc
                | Self::Array
                | Self::Struct
                | Self::As
                | Self::Case
                | Self::When
                | Self::Then
                | Self::Else
                | Self::End
                | Self::Cast
                | Self::With
                | Self::Window
        )
    }
}

/// The kind of token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Integer literal, as written (e.g., 42)
    Integer(String),
    /// Float literal, as written (e.g., 3.14, 1e400)
    Float(String),
    /// String literal (e.g., 'hello')
    String(String),
    /// Blob literal (e.g., X'1234')
    Blob(Vec<u8>),

    // Identifiers and keywords
    /// Identifier; `quote` is the delimiter when the identifier was quoted.
    Identifier {
        /// The unescaped identifier text.
        value: String,
        /// The quote character, if any.
        quote: Option<char>,
    },
    /// SQL keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// != or <>
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,
    /// ||
    Concat,
    /// &
    BitAnd,
    /// |
    BitOr,
    /// ~
    BitNot,
    /// <<
    LeftShift,
    /// >>
    RightShift,
    /// &>
    Contains,
    /// <&
    ContainedBy,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// {
    LeftBrace,
    /// }
    RightBrace,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
    /// :
    Colon,
    /// ::
    DoubleColon,
    /// ?
    Question,
    /// @
    At,

    // Special
    /// End of input
    Eof,
}

impl TokenKind {
    /// Creates an unquoted identifier token kind.
    #[must_use]
    pub fn ident(value: impl Into<String>) -> Self {
        Self::Identifier {
            value: value.into(),
            quote: None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Integer(text) | Self::Float(text) => return f.write_str(text),
            Self::String(s) => return write!(f, "'{s}'"),
            Self::Blob(_) => "blob literal",
            Self::Identifier { value, .. } => return write!(f, "identifier {value}"),
            Self::Keyword(kw) => kw.as_str(),
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Concat => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitNot => "~",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
            Self::Contains => "&>",
            Self::ContainedBy => "<&",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::DoubleColon => "::",
            Self::Question => "?",
            Self::At => "@",
            Self::Eof => "end of input",
        };
        f.write_str(symbol)
    }
}

/// A token with its span in the source code.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The location in the source code.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind_display() {
        assert_eq!(TokenKind::Contains.to_string(), "&>");
        assert_eq!(TokenKind::Keyword(Keyword::Select).to_string(), "SELECT");
        assert_eq!(TokenKind::ident("users").to_string(), "identifier users");
        assert_eq!(TokenKind::Eof.to_string(), "end of input");
        assert_eq!(TokenKind::Float("1e400".into()).to_string(), "1e400");
    }

    #[test]
    fn test_keyword_from_str() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("SeLeCt"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("struct"), Some(Keyword::Struct));
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
    }

    #[test]
    fn test_keyword_as_str() {
        assert_eq!(Keyword::Select.as_str(), "SELECT");
        assert_eq!(Keyword::Unpivot.as_str(), "UNPIVOT");
        assert_eq!(Keyword::Where.as_str(), "WHERE");
    }

    #[test]
    fn test_keyword_round_trips_through_text() {
        for kw in [Keyword::Lateral, Keyword::Exclude, Keyword::Ilike, Keyword::Nothing] {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_reserved_keywords() {
        assert!(Keyword::From.is_reserved());
        assert!(Keyword::Pivot.is_reserved());
        assert!(!Keyword::Index.is_reserved());
        assert!(!Keyword::Date.is_reserved());
        assert!(!Keyword::Key.is_reserved());
    }

    #[test]
    fn test_token_is_eof() {
        let eof = Token::new(TokenKind::Eof, Span::new(0, 0));
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        assert!(eof.is_eof());
        assert!(!select.is_eof());
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), Span::new(0, 6));
        let plus = Token::new(TokenKind::Plus, Span::new(0, 1));
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert_eq!(plus.as_keyword(), None);
    }
}
