//! Builders for dialect-tagged struct values.

use super::error::BuildError;
use super::value::IntoExpr;
use crate::ast::{Alias, DataType, Expr, Ident, SelectItem, StructDialect, StructField, StructType};

/// Builds a BigQuery `STRUCT<...>(...)` value.
#[derive(Debug, Default)]
pub struct BigQueryStruct {
    fields: Vec<StructField>,
    arguments: Vec<SelectItem>,
}

impl BigQueryStruct {
    /// Creates an empty struct, rendered `STRUCT()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a typed field.
    #[must_use]
    pub fn field(mut self, name: &str, data_type: DataType) -> Self {
        self.fields.push(StructField::new(name, data_type));
        self
    }

    /// Declares a typed field without a name.
    #[must_use]
    pub fn anonymous_field(mut self, data_type: DataType) -> Self {
        self.fields.push(StructField::anonymous(data_type));
        self
    }

    /// Adds a value.
    #[must_use]
    pub fn argument<T: IntoExpr>(mut self, value: T) -> Self {
        self.arguments.push(SelectItem::new(value.into_expr()));
        self
    }

    /// Adds a value named with `AS`.
    #[must_use]
    pub fn named_argument<T: IntoExpr>(mut self, value: T, name: &str) -> Self {
        self.arguments
            .push(SelectItem::with_alias(value.into_expr(), name));
        self
    }

    /// Builds the struct expression.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::StructArityMismatch`] when typed fields are
    /// declared and the number of values differs.
    pub fn build(self) -> Result<Expr, BuildError> {
        if !self.fields.is_empty() && self.fields.len() != self.arguments.len() {
            return Err(BuildError::StructArityMismatch {
                fields: self.fields.len(),
                arguments: self.arguments.len(),
            });
        }
        Ok(Expr::Struct(StructType {
            dialect: StructDialect::BigQuery,
            keyword: Some("STRUCT".into()),
            parameters: (!self.fields.is_empty()).then_some(self.fields),
            arguments: Some(self.arguments),
        }))
    }
}

/// Builds a DuckDB `{ name:value,... }` value, optionally ascribed with
/// `::STRUCT(...)`.
#[derive(Debug, Default)]
pub struct DuckDbStruct {
    fields: Vec<StructField>,
    arguments: Vec<SelectItem>,
}

impl DuckDbStruct {
    /// Creates an empty struct, rendered `{  }`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `name:value` entry.
    #[must_use]
    pub fn field<T: IntoExpr>(mut self, name: &str, value: T) -> Self {
        self.arguments.push(SelectItem {
            expr: value.into_expr(),
            alias: Some(Alias::implicit(name)),
        });
        self
    }

    /// Adds a `'name':value` entry with a quoted key.
    #[must_use]
    pub fn quoted_field<T: IntoExpr>(mut self, name: &str, value: T) -> Self {
        self.arguments.push(SelectItem {
            expr: value.into_expr(),
            alias: Some(Alias::implicit(Ident::with_quote('\'', name))),
        });
        self
    }

    /// Adds a prepared entry; it must carry an alias.
    #[must_use]
    pub fn item(mut self, item: SelectItem) -> Self {
        self.arguments.push(item);
        self
    }

    /// Declares a field type for the `::STRUCT(...)` ascription.
    #[must_use]
    pub fn typed(mut self, name: &str, data_type: DataType) -> Self {
        self.fields.push(StructField::new(name, data_type));
        self
    }

    /// Declares a prepared field type; it must carry a name.
    #[must_use]
    pub fn typed_field(mut self, field: StructField) -> Self {
        self.fields.push(field);
        self
    }

    /// Builds the struct expression.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnnamedStructArgument`] or
    /// [`BuildError::UnnamedStructField`] when an entry lacks its name.
    pub fn build(self) -> Result<Expr, BuildError> {
        if let Some(position) = self.arguments.iter().position(|item| item.alias.is_none()) {
            return Err(BuildError::UnnamedStructArgument {
                position: position + 1,
            });
        }
        if let Some(position) = self.fields.iter().position(|field| field.name.is_none()) {
            return Err(BuildError::UnnamedStructField {
                position: position + 1,
            });
        }
        Ok(Expr::Struct(StructType {
            dialect: StructDialect::DuckDb,
            keyword: None,
            parameters: (!self.fields.is_empty()).then_some(self.fields),
            arguments: Some(self.arguments),
        }))
    }
}
