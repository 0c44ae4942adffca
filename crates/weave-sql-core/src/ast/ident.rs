//! Identifiers, dotted object names and aliases.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An SQL identifier, optionally quoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ident {
    /// The identifier text with quotes removed and escapes resolved.
    pub value: String,
    /// The opening quote character, if the identifier was quoted.
    pub quote_style: Option<char>,
}

impl Ident {
    /// Creates an unquoted identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quote_style: None,
        }
    }

    /// Creates an identifier quoted with `quote`.
    #[must_use]
    pub fn with_quote(quote: char, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            quote_style: Some(quote),
        }
    }

    /// Returns the closing quote matching `open`.
    #[must_use]
    pub const fn closing_quote(open: char) -> char {
        match open {
            '[' => ']',
            c => c,
        }
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.quote_style {
            Some(open) => {
                let close = Self::closing_quote(open);
                let escaped = self.value.replace(close, &format!("{close}{close}"));
                write!(f, "{open}{escaped}{close}")
            }
            None => f.write_str(&self.value),
        }
    }
}

/// A possibly qualified name such as `project.dataset.table`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectName(pub Vec<Ident>);

impl ObjectName {
    /// Creates a name from its parts.
    #[must_use]
    pub fn new(parts: impl IntoIterator<Item = Ident>) -> Self {
        Self(parts.into_iter().collect())
    }

    /// Returns the last (unqualified) part of the name.
    #[must_use]
    pub fn base(&self) -> Option<&Ident> {
        self.0.last()
    }
}

/// Splits on `.` and creates unquoted parts.
impl From<&str> for ObjectName {
    fn from(value: &str) -> Self {
        Self(value.split('.').map(Ident::new).collect())
    }
}

impl From<Ident> for ObjectName {
    fn from(value: Ident) -> Self {
        Self(vec![value])
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// An alias attached to a select item or a from item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alias {
    /// The alias name.
    pub name: Ident,
    /// Whether the `AS` keyword was written.
    pub use_as: bool,
    /// Derived column names, as in `AS t(a, b)`.
    pub columns: Vec<Ident>,
}

impl Alias {
    /// Creates an alias rendered with `AS`.
    #[must_use]
    pub fn new(name: impl Into<Ident>) -> Self {
        Self {
            name: name.into(),
            use_as: true,
            columns: Vec::new(),
        }
    }

    /// Creates an alias rendered without `AS`.
    #[must_use]
    pub fn implicit(name: impl Into<Ident>) -> Self {
        Self {
            use_as: false,
            ..Self::new(name)
        }
    }

    /// Sets the derived column list.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<Ident>) -> Self {
        self.columns = columns;
        self
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.use_as {
            f.write_str("AS ")?;
        }
        write!(f, "{}", self.name)?;
        if !self.columns.is_empty() {
            f.write_str("(")?;
            for (i, column) in self.columns.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{column}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_display() {
        assert_eq!(Ident::new("users").to_string(), "users");
        assert_eq!(Ident::with_quote('"', "user name").to_string(), "\"user name\"");
        assert_eq!(Ident::with_quote('`', "a`b").to_string(), "`a``b`");
        assert_eq!(Ident::with_quote('[', "x").to_string(), "[x]");
    }

    #[test]
    fn test_object_name_from_dotted() {
        let name = ObjectName::from("project.dataset.table");
        assert_eq!(name.0.len(), 3);
        assert_eq!(name.base(), Some(&Ident::new("table")));
        assert_eq!(name.to_string(), "project.dataset.table");
    }

    #[test]
    fn test_alias_display() {
        assert_eq!(Alias::new("t").to_string(), "AS t");
        assert_eq!(Alias::implicit("t").to_string(), "t");
        assert_eq!(
            Alias::new("t")
                .with_columns(vec![Ident::new("a"), Ident::new("b")])
                .to_string(),
            "AS t(a, b)"
        );
    }
}
