//! Table assembly and rendering.
//!
//! [`TableSpec::assemble`] walks a record type's fields once and collects
//! every statement the type needs. [`TableSpec::render`] is the only place
//! that decides layout: line breaks, indentation and the ` ,` separator are
//! consumed verbatim by downstream tooling and must not drift.

use tracing::trace;

use crate::ddl::CompileError;
use crate::ddl::column::{
    CREATED_AT_COLUMN, ColumnDef, ColumnLine, ForeignKeyConstraint, ID_COLUMN, OnDelete,
    SYNTHESIZED_NAMES, UPDATED_AT_COLUMN,
};
use crate::ddl::relation::{ClassifiedField, classify_field};
use crate::naming;
use crate::schema::TypeDefinition;

const INDENT: &str = "    ";
const LINE_SEPARATOR: &str = " ,\n    ";

/// `CREATE TABLE <name>(` ... `);` around the given body lines.
fn create_table(name: &str, lines: &[String]) -> String {
    format!("CREATE TABLE {}(\n{}{}\n);", name, INDENT, lines.join(LINE_SEPARATOR))
}

/// Join table for a many-to-many relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTable {
    pub name: String,
    pub owner_table: String,
    pub owner_key: String,
    pub target_table: String,
    pub target_key: String,
}

impl JoinTable {
    /// Join table linking `owner_table` rows to `target_table` rows, named
    /// `<singular owner>_<target>`.
    pub fn between(owner_table: &str, target_table: &str) -> Self {
        Self {
            name: format!("{}_{}", naming::singularize(owner_table), target_table),
            owner_table: owner_table.to_string(),
            owner_key: naming::foreign_key(owner_table),
            target_table: target_table.to_string(),
            target_key: naming::foreign_key(target_table),
        }
    }

    pub fn render(&self) -> String {
        let columns = [
            ColumnLine::ForeignKey {
                name: self.owner_key.clone(),
                non_null: true,
            },
            ColumnLine::ForeignKey {
                name: self.target_key.clone(),
                non_null: true,
            },
            ColumnLine::Column(ColumnDef {
                name: "weight".to_string(),
                sql_type: "REAL".to_string(),
                clauses: Vec::new(),
                non_null: false,
                auto_increment: false,
            }),
        ];
        let constraints = [
            ForeignKeyConstraint {
                column: self.owner_key.clone(),
                references: self.owner_table.clone(),
                on_delete: OnDelete::Cascade,
            },
            ForeignKeyConstraint {
                column: self.target_key.clone(),
                references: self.target_table.clone(),
                on_delete: OnDelete::Cascade,
            },
        ];

        let lines: Vec<String> = columns
            .iter()
            .map(ColumnLine::render)
            .chain(constraints.iter().map(ForeignKeyConstraint::render))
            .collect();
        create_table(&self.name, &lines)
    }
}

/// `CREATE [UNIQUE] INDEX idx_<table>_<column> ON <table> (<column>);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub table: String,
    pub column: String,
    pub unique: bool,
}

impl IndexSpec {
    pub fn render(&self) -> String {
        format!(
            "{} idx_{}_{} ON {} ({});",
            if self.unique { "CREATE UNIQUE INDEX" } else { "CREATE INDEX" },
            self.table,
            self.column,
            self.table,
            self.column
        )
    }
}

/// Trigger that re-stamps `updated_at` after an update.
///
/// The `WHEN` guard keeps the trigger's own `UPDATE` from firing it again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTrigger {
    pub table: String,
}

impl UpdateTrigger {
    pub fn render(&self) -> String {
        format!(
            "CREATE TRIGGER {t}_updated_at AFTER UPDATE ON {t} WHEN old.updated_at < CURRENT_TIMESTAMP BEGIN\n{indent}UPDATE {t} SET updated_at = CURRENT_TIMESTAMP WHERE id = old.id;\nEND;",
            t = self.table,
            indent = INDENT,
        )
    }
}

/// Everything one record type compiles to.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub name: String,
    /// Column lines, synthesized columns first.
    pub columns: Vec<ColumnLine>,
    /// Foreign key constraints in field order.
    pub constraints: Vec<ForeignKeyConstraint>,
    pub trigger: Option<UpdateTrigger>,
    pub join_tables: Vec<JoinTable>,
    pub indexes: Vec<IndexSpec>,
}

impl TableSpec {
    /// Collect everything one record type compiles to.
    ///
    /// With `use_default_model`, the identity and timestamp columns are
    /// synthesized, declared fields of the same names are dropped and an
    /// update trigger is attached.
    pub fn assemble(definition: &TypeDefinition, use_default_model: bool) -> Result<Self, CompileError> {
        let name = naming::table_name(&definition.name);
        let mut columns = Vec::new();
        let mut constraints = Vec::new();
        let mut join_tables = Vec::new();
        let mut indexes = Vec::new();

        if use_default_model {
            columns.push(ColumnLine::Synthesized(ID_COLUMN));
            columns.push(ColumnLine::Synthesized(CREATED_AT_COLUMN));
            columns.push(ColumnLine::Synthesized(UPDATED_AT_COLUMN));
        }

        for field in &definition.fields {
            if use_default_model && SYNTHESIZED_NAMES.contains(&field.name.as_str()) {
                trace!(table = %name, field = %field.name, "dropping field replaced by default model");
                continue;
            }

            match classify_field(&definition.name, &name, field)? {
                ClassifiedField::Scalar { column, primary, index } => {
                    let column_name = column.name.clone();
                    columns.push(ColumnLine::Column(column));
                    if primary {
                        columns.push(ColumnLine::PrimaryKey(column_name.clone()));
                    }
                    if let Some(unique) = index {
                        indexes.push(IndexSpec {
                            table: name.clone(),
                            column: column_name,
                            unique,
                        });
                    }
                }
                ClassifiedField::BelongsTo(fk) => {
                    columns.push(ColumnLine::ForeignKey {
                        name: fk.column.clone(),
                        non_null: true,
                    });
                    constraints.push(fk.constraint(OnDelete::Cascade));
                }
                ClassifiedField::AssociateTo(fk) => {
                    columns.push(ColumnLine::ForeignKey {
                        name: fk.column.clone(),
                        non_null: false,
                    });
                    constraints.push(fk.constraint(OnDelete::SetNull));
                }
                ClassifiedField::HasAndBelongsToMany(join) => join_tables.push(join),
            }
        }

        let trigger = use_default_model.then(|| UpdateTrigger { table: name.clone() });

        Ok(Self {
            name,
            columns,
            constraints,
            trigger,
            join_tables,
            indexes,
        })
    }

    /// Render the full block: a leading line break, the table, then trigger,
    /// join tables and indexes each on their own lines, and a trailing line
    /// break.
    pub fn render(&self) -> String {
        let lines: Vec<String> = self
            .columns
            .iter()
            .map(ColumnLine::render)
            .chain(self.constraints.iter().map(ForeignKeyConstraint::render))
            .collect();

        let mut out = String::from("\n");
        out.push_str(&create_table(&self.name, &lines));

        if let Some(trigger) = &self.trigger {
            out.push('\n');
            out.push_str(&trigger.render());
        }
        if !self.join_tables.is_empty() {
            let joins: Vec<String> = self.join_tables.iter().map(JoinTable::render).collect();
            out.push('\n');
            out.push_str(&joins.join("\n"));
        }
        if !self.indexes.is_empty() {
            let indexes: Vec<String> = self.indexes.iter().map(IndexSpec::render).collect();
            out.push('\n');
            out.push_str(&indexes.join("\n"));
        }

        out.push('\n');
        out
    }
}
