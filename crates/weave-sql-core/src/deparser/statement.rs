//! Statement rendering.

use super::{push_display_list, push_list, ExpressionDeparser, FromItemDeparser, SelectDeparser};
use crate::ast::{
    AlterColumnAction, AlterTableOperation, AlterTableStatement, Assignment, ColumnDef,
    ConflictAction, CreateTableStatement, DeleteStatement, ForeignKeyRef, InsertSource,
    InsertStatement, Query, ShowStatement, ShowTarget, Statement, TableConstraint,
    UnsupportedStatement, UpdateStatement,
};
use crate::visitor::StatementVisitor;

/// Renders whole statements.
pub struct StatementDeparser<'a> {
    buffer: &'a mut String,
}

impl<'a> StatementDeparser<'a> {
    /// Creates a deparser appending to `buffer`.
    pub fn new(buffer: &'a mut String) -> Self {
        Self { buffer }
    }

    /// Renders one statement.
    pub fn deparse(&mut self, statement: &Statement) {
        statement.accept(self);
    }

    fn expr(&mut self, expr: &crate::ast::Expr) {
        ExpressionDeparser::new(self.buffer).deparse(expr);
    }

    fn assignments(&mut self, assignments: &[Assignment]) {
        push_list(self.buffer, assignments, ", ", |buffer, assignment| {
            buffer.push_str(&assignment.column.to_string());
            buffer.push_str(" = ");
            ExpressionDeparser::new(buffer).deparse(&assignment.value);
        });
    }

    fn parenthesized_idents(&mut self, idents: &[crate::ast::Ident]) {
        self.buffer.push('(');
        push_display_list(self.buffer, idents, ", ");
        self.buffer.push(')');
    }

    fn references(&mut self, references: &ForeignKeyRef) {
        self.buffer.push_str("REFERENCES ");
        self.buffer.push_str(&references.table.to_string());
        if !references.columns.is_empty() {
            self.buffer.push(' ');
            self.parenthesized_idents(&references.columns);
        }
    }

    fn column_def(&mut self, column: &ColumnDef) {
        self.buffer.push_str(&column.name.to_string());
        self.buffer.push(' ');
        self.buffer.push_str(&column.data_type.to_sql());
        if !column.nullable {
            self.buffer.push_str(" NOT NULL");
        }
        if let Some(default) = &column.default {
            self.buffer.push_str(" DEFAULT ");
            self.expr(default);
        }
        if column.primary_key {
            self.buffer.push_str(" PRIMARY KEY");
        }
        if column.unique {
            self.buffer.push_str(" UNIQUE");
        }
        if column.autoincrement {
            self.buffer.push_str(" AUTOINCREMENT");
        }
        if let Some(references) = &column.references {
            self.buffer.push(' ');
            self.references(references);
        }
    }

    fn table_constraint(&mut self, constraint: &TableConstraint) {
        if let Some(name) = constraint.name() {
            self.buffer.push_str("CONSTRAINT ");
            self.buffer.push_str(&name.to_string());
            self.buffer.push(' ');
        }
        match constraint {
            TableConstraint::PrimaryKey { columns, .. } => {
                self.buffer.push_str("PRIMARY KEY ");
                self.parenthesized_idents(columns);
            }
            TableConstraint::Unique { columns, .. } => {
                self.buffer.push_str("UNIQUE ");
                self.parenthesized_idents(columns);
            }
            TableConstraint::ForeignKey {
                columns,
                references,
                ..
            } => {
                self.buffer.push_str("FOREIGN KEY ");
                self.parenthesized_idents(columns);
                self.buffer.push(' ');
                self.references(references);
            }
            TableConstraint::Check { expr, .. } => {
                self.buffer.push_str("CHECK (");
                self.expr(expr);
                self.buffer.push(')');
            }
        }
    }

    fn alter_table_operation(&mut self, operation: &AlterTableOperation) {
        match operation {
            AlterTableOperation::AddColumn {
                column_keyword,
                if_not_exists,
                column,
            } => {
                self.buffer.push_str("ADD ");
                if *column_keyword {
                    self.buffer.push_str("COLUMN ");
                }
                if *if_not_exists {
                    self.buffer.push_str("IF NOT EXISTS ");
                }
                self.column_def(column);
            }
            AlterTableOperation::DropColumn {
                column_keyword,
                if_exists,
                name,
            } => {
                self.buffer.push_str("DROP ");
                if *column_keyword {
                    self.buffer.push_str("COLUMN ");
                }
                if *if_exists {
                    self.buffer.push_str("IF EXISTS ");
                }
                self.buffer.push_str(&name.to_string());
            }
            AlterTableOperation::RenameColumn { old_name, new_name } => {
                self.buffer.push_str("RENAME COLUMN ");
                self.buffer.push_str(&old_name.to_string());
                self.buffer.push_str(" TO ");
                self.buffer.push_str(&new_name.to_string());
            }
            AlterTableOperation::RenameTable { new_name } => {
                self.buffer.push_str("RENAME TO ");
                self.buffer.push_str(&new_name.to_string());
            }
            AlterTableOperation::AlterColumn { name, action } => {
                self.buffer.push_str("ALTER COLUMN ");
                self.buffer.push_str(&name.to_string());
                match action {
                    AlterColumnAction::SetDefault(expr) => {
                        self.buffer.push_str(" SET DEFAULT ");
                        self.expr(expr);
                    }
                    AlterColumnAction::DropDefault => self.buffer.push_str(" DROP DEFAULT"),
                    AlterColumnAction::SetNotNull => self.buffer.push_str(" SET NOT NULL"),
                    AlterColumnAction::DropNotNull => self.buffer.push_str(" DROP NOT NULL"),
                    AlterColumnAction::SetDataType(data_type) => {
                        self.buffer.push_str(" SET DATA TYPE ");
                        self.buffer.push_str(&data_type.to_sql());
                    }
                }
            }
            AlterTableOperation::AddConstraint(constraint) => {
                self.buffer.push_str("ADD ");
                self.table_constraint(constraint);
            }
            AlterTableOperation::DropConstraint { if_exists, name } => {
                self.buffer.push_str("DROP CONSTRAINT ");
                if *if_exists {
                    self.buffer.push_str("IF EXISTS ");
                }
                self.buffer.push_str(&name.to_string());
            }
        }
    }
}

impl StatementVisitor for StatementDeparser<'_> {
    type Output = ();

    fn visit_query(&mut self, query: &Query) {
        SelectDeparser::new(self.buffer).deparse_query(query);
    }

    fn visit_insert(&mut self, insert: &InsertStatement) {
        self.buffer.push_str("INSERT ");
        if insert.into {
            self.buffer.push_str("INTO ");
        }
        self.buffer.push_str(&insert.table.to_string());
        if !insert.columns.is_empty() {
            self.buffer.push(' ');
            self.parenthesized_idents(&insert.columns);
        }

        match &insert.source {
            InsertSource::Values(values) => {
                self.buffer.push(' ');
                SelectDeparser::new(self.buffer).deparse_values(values);
            }
            InsertSource::Query(query) => {
                self.buffer.push(' ');
                SelectDeparser::new(self.buffer).deparse_query(query);
            }
            InsertSource::DefaultValues => self.buffer.push_str(" DEFAULT VALUES"),
        }

        if let Some(on_conflict) = &insert.on_conflict {
            self.buffer.push_str(" ON CONFLICT");
            if !on_conflict.columns.is_empty() {
                self.buffer.push(' ');
                self.parenthesized_idents(&on_conflict.columns);
            }
            match &on_conflict.action {
                ConflictAction::DoNothing => self.buffer.push_str(" DO NOTHING"),
                ConflictAction::DoUpdate(assignments) => {
                    self.buffer.push_str(" DO UPDATE SET ");
                    self.assignments(assignments);
                }
            }
        }
    }

    fn visit_update(&mut self, update: &UpdateStatement) {
        self.buffer.push_str("UPDATE ");
        self.buffer.push_str(&update.table.to_string());
        if let Some(alias) = &update.alias {
            self.buffer.push(' ');
            self.buffer.push_str(&alias.to_string());
        }
        self.buffer.push_str(" SET ");
        self.assignments(&update.assignments);

        if let Some(from) = &update.from {
            self.buffer.push_str(" FROM ");
            let mut from_deparser = FromItemDeparser::new(self.buffer);
            from_deparser.deparse(from);
            from_deparser.deparse_joins(&update.joins);
        }

        if let Some(selection) = &update.selection {
            self.buffer.push_str(" WHERE ");
            self.expr(selection);
        }
    }

    fn visit_delete(&mut self, delete: &DeleteStatement) {
        self.buffer.push_str("DELETE ");
        if delete.from_keyword {
            self.buffer.push_str("FROM ");
        }
        self.buffer.push_str(&delete.table.to_string());
        if let Some(alias) = &delete.alias {
            self.buffer.push(' ');
            self.buffer.push_str(&alias.to_string());
        }
        if let Some(selection) = &delete.selection {
            self.buffer.push_str(" WHERE ");
            self.expr(selection);
        }
    }

    fn visit_create_table(&mut self, create: &CreateTableStatement) {
        self.buffer.push_str("CREATE ");
        if create.temporary {
            self.buffer.push_str("TEMPORARY ");
        }
        self.buffer.push_str("TABLE ");
        if create.if_not_exists {
            self.buffer.push_str("IF NOT EXISTS ");
        }
        self.buffer.push_str(&create.name.to_string());

        if !create.columns.is_empty() || !create.constraints.is_empty() {
            self.buffer.push_str(" (");
            for (i, column) in create.columns.iter().enumerate() {
                if i > 0 {
                    self.buffer.push_str(", ");
                }
                self.column_def(column);
            }
            for (i, constraint) in create.constraints.iter().enumerate() {
                if i > 0 || !create.columns.is_empty() {
                    self.buffer.push_str(", ");
                }
                self.table_constraint(constraint);
            }
            self.buffer.push(')');
        }

        if let Some(query) = &create.query {
            self.buffer.push_str(" AS ");
            SelectDeparser::new(self.buffer).deparse_query(query);
        }
    }

    fn visit_alter_table(&mut self, alter: &AlterTableStatement) {
        self.buffer.push_str("ALTER TABLE ");
        self.buffer.push_str(&alter.name.to_string());
        self.buffer.push(' ');
        for (i, operation) in alter.operations.iter().enumerate() {
            if i > 0 {
                self.buffer.push_str(", ");
            }
            self.alter_table_operation(operation);
        }
    }

    fn visit_show(&mut self, show: &ShowStatement) {
        self.buffer.push_str("SHOW ");
        match &show.target {
            ShowTarget::Variable(name) => self.buffer.push_str(&name.to_string()),
            ShowTarget::Indexes { keyword, table } => {
                self.buffer.push_str(keyword.as_str());
                self.buffer.push_str(" FROM ");
                self.buffer.push_str(&table.to_string());
            }
        }
    }

    fn visit_unsupported(&mut self, statement: &UnsupportedStatement) {
        self.buffer.push_str(&statement.text);
    }
}
