//! CREATE TABLE and ALTER TABLE.

use super::error::ParseError;
use super::parser::Parser;
use crate::ast::{
    AlterColumnAction, AlterTableOperation, AlterTableStatement, ColumnDef,
    CreateTableStatement, ForeignKeyRef, TableConstraint,
};
use crate::lexer::{Keyword, TokenKind};

impl Parser<'_> {
    /// Parses `CREATE [TEMP|TEMPORARY] TABLE [IF NOT EXISTS] name (...) [AS query]`
    /// or `CREATE TABLE name AS query`.
    pub(super) fn parse_create_table(&mut self) -> Result<CreateTableStatement, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        let temporary =
            self.consume_keyword(Keyword::Temporary) || self.consume_keyword(Keyword::Temp);
        self.expect_keyword(Keyword::Table)?;

        let if_not_exists = self.parse_if_not_exists()?;
        let name = self.parse_object_name()?;

        let mut columns = vec![];
        let mut constraints = vec![];
        if self.consume(&TokenKind::LeftParen) {
            loop {
                if self.starts_table_constraint() {
                    constraints.push(self.parse_table_constraint()?);
                } else {
                    columns.push(self.parse_column_def()?);
                }
                if !self.consume(&TokenKind::Comma) {
                    break;
                }
            }
            self.expect(&TokenKind::RightParen, ")")?;
        }

        let query = if self.consume_keyword(Keyword::As) {
            Some(Box::new(self.parse_query()?))
        } else {
            None
        };

        if columns.is_empty() && constraints.is_empty() && query.is_none() {
            return Err(self.unexpected(&["(", "AS"]));
        }

        Ok(CreateTableStatement {
            temporary,
            if_not_exists,
            name,
            columns,
            constraints,
            query,
        })
    }

    fn parse_if_not_exists(&mut self) -> Result<bool, ParseError> {
        if self.consume_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Exists)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn parse_if_exists(&mut self) -> Result<bool, ParseError> {
        if self.consume_keyword(Keyword::If) {
            self.expect_keyword(Keyword::Exists)?;
            return Ok(true);
        }
        Ok(false)
    }

    fn starts_table_constraint(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Keyword(
                Keyword::Constraint
                    | Keyword::Primary
                    | Keyword::Unique
                    | Keyword::Foreign
                    | Keyword::Check
            )
        )
    }

    /// Parses `name type [column constraints...]`.
    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.parse_identifier()?;
        let data_type = self.parse_data_type()?;
        let mut column = ColumnDef::new(name, data_type);

        loop {
            if self.consume_keyword(Keyword::Not) {
                self.expect_keyword(Keyword::Null)?;
                column.nullable = false;
            } else if self.consume_keyword(Keyword::Null) {
                column.nullable = true;
            } else if self.consume_keyword(Keyword::Default) {
                column.default = Some(self.parse_expression(0)?);
            } else if self.consume_keyword(Keyword::Primary) {
                self.expect_keyword(Keyword::Key)?;
                column.primary_key = true;
            } else if self.consume_keyword(Keyword::Unique) {
                column.unique = true;
            } else if self.consume_keyword(Keyword::Autoincrement) {
                column.autoincrement = true;
            } else if self.consume_keyword(Keyword::References) {
                column.references = Some(self.parse_foreign_key_ref()?);
            } else {
                break;
            }
        }

        Ok(column)
    }

    /// Parses `table [(cols)]` after REFERENCES.
    fn parse_foreign_key_ref(&mut self) -> Result<ForeignKeyRef, ParseError> {
        let table = self.parse_object_name()?;
        let columns = if self.check(&TokenKind::LeftParen) {
            self.parse_parenthesized_identifiers()?
        } else {
            vec![]
        };
        Ok(ForeignKeyRef { table, columns })
    }

    fn parse_table_constraint(&mut self) -> Result<TableConstraint, ParseError> {
        let name = if self.consume_keyword(Keyword::Constraint) {
            Some(self.parse_identifier()?)
        } else {
            None
        };

        if self.consume_keyword(Keyword::Primary) {
            self.expect_keyword(Keyword::Key)?;
            let columns = self.parse_parenthesized_identifiers()?;
            Ok(TableConstraint::PrimaryKey { name, columns })
        } else if self.consume_keyword(Keyword::Unique) {
            let columns = self.parse_parenthesized_identifiers()?;
            Ok(TableConstraint::Unique { name, columns })
        } else if self.consume_keyword(Keyword::Foreign) {
            self.expect_keyword(Keyword::Key)?;
            let columns = self.parse_parenthesized_identifiers()?;
            self.expect_keyword(Keyword::References)?;
            let references = self.parse_foreign_key_ref()?;
            Ok(TableConstraint::ForeignKey {
                name,
                columns,
                references,
            })
        } else if self.consume_keyword(Keyword::Check) {
            self.expect(&TokenKind::LeftParen, "(")?;
            let expr = self.parse_expression(0)?;
            self.expect(&TokenKind::RightParen, ")")?;
            Ok(TableConstraint::Check { name, expr })
        } else {
            Err(self.unexpected(&["PRIMARY KEY", "UNIQUE", "FOREIGN KEY", "CHECK"]))
        }
    }

    /// Parses `ALTER TABLE name operation, ...`.
    pub(super) fn parse_alter_table(&mut self) -> Result<AlterTableStatement, ParseError> {
        self.expect_keyword(Keyword::Alter)?;
        self.expect_keyword(Keyword::Table)?;
        let name = self.parse_object_name()?;

        let mut operations = vec![];
        loop {
            operations.push(self.parse_alter_table_operation()?);
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }

        Ok(AlterTableStatement { name, operations })
    }

    fn parse_alter_table_operation(&mut self) -> Result<AlterTableOperation, ParseError> {
        if self.consume_keyword(Keyword::Add) {
            if self.starts_table_constraint() {
                return Ok(AlterTableOperation::AddConstraint(
                    self.parse_table_constraint()?,
                ));
            }
            let column_keyword = self.consume_keyword(Keyword::Column);
            let if_not_exists = self.parse_if_not_exists()?;
            let column = self.parse_column_def()?;
            return Ok(AlterTableOperation::AddColumn {
                column_keyword,
                if_not_exists,
                column,
            });
        }

        if self.consume_keyword(Keyword::Drop) {
            if self.consume_keyword(Keyword::Constraint) {
                let if_exists = self.parse_if_exists()?;
                let name = self.parse_identifier()?;
                return Ok(AlterTableOperation::DropConstraint { if_exists, name });
            }
            let column_keyword = self.consume_keyword(Keyword::Column);
            let if_exists = self.parse_if_exists()?;
            let name = self.parse_identifier()?;
            return Ok(AlterTableOperation::DropColumn {
                column_keyword,
                if_exists,
                name,
            });
        }

        if self.consume_keyword(Keyword::Rename) {
            if self.consume_keyword(Keyword::To) {
                let new_name = self.parse_object_name()?;
                return Ok(AlterTableOperation::RenameTable { new_name });
            }
            self.consume_keyword(Keyword::Column);
            let old_name = self.parse_identifier()?;
            self.expect_keyword(Keyword::To)?;
            let new_name = self.parse_identifier()?;
            return Ok(AlterTableOperation::RenameColumn { old_name, new_name });
        }

        if self.consume_keyword(Keyword::Alter) {
            self.consume_keyword(Keyword::Column);
            let name = self.parse_identifier()?;
            let action = self.parse_alter_column_action()?;
            return Ok(AlterTableOperation::AlterColumn { name, action });
        }

        Err(self.unexpected(&["ADD", "DROP", "RENAME", "ALTER"]))
    }

    fn parse_alter_column_action(&mut self) -> Result<AlterColumnAction, ParseError> {
        if self.consume_keyword(Keyword::Set) {
            if self.consume_keyword(Keyword::Default) {
                return Ok(AlterColumnAction::SetDefault(self.parse_expression(0)?));
            }
            if self.consume_keyword(Keyword::Not) {
                self.expect_keyword(Keyword::Null)?;
                return Ok(AlterColumnAction::SetNotNull);
            }
            if self.is_data_word() {
                self.advance();
                self.expect_keyword(Keyword::Type)?;
                return Ok(AlterColumnAction::SetDataType(self.parse_data_type()?));
            }
            return Err(self.unexpected(&["DEFAULT", "NOT NULL", "DATA TYPE"]));
        }

        if self.consume_keyword(Keyword::Drop) {
            if self.consume_keyword(Keyword::Default) {
                return Ok(AlterColumnAction::DropDefault);
            }
            self.expect_keyword(Keyword::Not)?;
            self.expect_keyword(Keyword::Null)?;
            return Ok(AlterColumnAction::DropNotNull);
        }

        if self.consume_keyword(Keyword::Type) {
            return Ok(AlterColumnAction::SetDataType(self.parse_data_type()?));
        }

        Err(self.unexpected(&["SET", "DROP", "TYPE"]))
    }

    /// `DATA` is not a keyword; match it as an unquoted identifier.
    fn is_data_word(&self) -> bool {
        matches!(
            &self.current().kind,
            TokenKind::Identifier { value, quote: None } if value.eq_ignore_ascii_case("DATA")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Ident;
    use crate::ast::{DataType, Expr, ObjectName, Statement};

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap()
    }

    #[test]
    fn test_create_table_with_constraints() {
        let Statement::CreateTable(create) = parse(
            "CREATE TABLE IF NOT EXISTS users (
                id BIGINT PRIMARY KEY AUTOINCREMENT,
                email VARCHAR(255) NOT NULL UNIQUE,
                team_id INT REFERENCES teams (id),
                active BOOLEAN DEFAULT TRUE,
                CONSTRAINT email_check CHECK (email <> '')
            )",
        ) else {
            panic!("Expected CREATE TABLE");
        };
        assert!(create.if_not_exists);
        assert!(!create.temporary);
        assert_eq!(create.columns.len(), 4);
        assert!(create.columns[0].primary_key && create.columns[0].autoincrement);
        assert_eq!(create.columns[1].data_type, DataType::Varchar(Some(255)));
        assert!(!create.columns[1].nullable);
        assert_eq!(
            create.columns[2].references.as_ref().map(|r| r.table.clone()),
            Some(ObjectName::from("teams"))
        );
        assert_eq!(create.columns[3].default, Some(Expr::boolean(true)));
        assert_eq!(
            create.constraints[0].name(),
            Some(&Ident::new("email_check"))
        );
    }

    #[test]
    fn test_create_temporary_table_as_select() {
        let Statement::CreateTable(create) = parse("CREATE TEMP TABLE recent AS SELECT * FROM t")
        else {
            panic!("Expected CREATE TABLE");
        };
        assert!(create.temporary);
        assert!(create.columns.is_empty());
        assert!(create.query.is_some());
    }

    #[test]
    fn test_create_table_requires_body() {
        assert!(Parser::new("CREATE TABLE t").parse_statement().is_err());
    }

    #[test]
    fn test_alter_table_operations() {
        let Statement::AlterTable(alter) = parse(
            "ALTER TABLE users ADD COLUMN IF NOT EXISTS age INT, DROP COLUMN legacy, \
             RENAME COLUMN name TO full_name, ALTER COLUMN age SET DATA TYPE BIGINT, \
             ALTER age DROP NOT NULL, DROP CONSTRAINT IF EXISTS old_fk",
        ) else {
            panic!("Expected ALTER TABLE");
        };
        assert_eq!(alter.operations.len(), 6);
        assert!(matches!(
            alter.operations[0],
            AlterTableOperation::AddColumn {
                column_keyword: true,
                if_not_exists: true,
                ..
            }
        ));
        assert_eq!(
            alter.operations[3],
            AlterTableOperation::AlterColumn {
                name: Ident::new("age"),
                action: AlterColumnAction::SetDataType(DataType::Bigint),
            }
        );
        assert!(matches!(
            alter.operations[5],
            AlterTableOperation::DropConstraint {
                if_exists: true,
                ..
            }
        ));
    }

    #[test]
    fn test_alter_table_rename_to() {
        let Statement::AlterTable(alter) = parse("ALTER TABLE a RENAME TO b") else {
            panic!("Expected ALTER TABLE");
        };
        assert_eq!(
            alter.operations,
            vec![AlterTableOperation::RenameTable {
                new_name: ObjectName::from("b")
            }]
        );
    }
}
