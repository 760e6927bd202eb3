//! Column rendering.
//!
//! Each line inside a `CREATE TABLE` body is a [`ColumnLine`]: a declared
//! column, a relation's foreign key column, a `PRIMARY KEY` line or one of the
//! synthesized default-model columns.

use crate::schema::ScalarKind;

/// Vendor keyword appended to auto-incrementing columns.
pub const AUTO_INCREMENT: &str = "AUTO_INCREMENT";

/// Synthesized identity column. The default is a time-based expression that
/// increases monotonically with a random low part.
pub const ID_COLUMN: &str = "id INTEGER UNIQUE DEFAULT ((( strftime('%s','now') - 1563741060 ) * 100000) + (RANDOM() & 65535)) NOT NULL";
pub const CREATED_AT_COLUMN: &str = "created_at DATETIME DEFAULT CURRENT_TIMESTAMP NOT NULL";
pub const UPDATED_AT_COLUMN: &str = "updated_at DATETIME DEFAULT CURRENT_TIMESTAMP NOT NULL";

/// Field names replaced by the synthesized columns.
pub const SYNTHESIZED_NAMES: &[&str] = &["id", "created_at", "updated_at"];

/// Column type token for a named field type.
///
/// Built-in scalars map to their SQL type; any other name is passed through
/// unchanged (`JSON` stays `JSON`).
pub fn column_type(type_name: &str) -> String {
    ScalarKind::from_name(type_name)
        .map(|kind| kind.sql_type().to_string())
        .unwrap_or_else(|| type_name.to_string())
}

/// A declared, non-relation column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub sql_type: String,
    /// `DEFAULT`/`UNIQUE` clauses in directive order.
    pub clauses: Vec<String>,
    pub non_null: bool,
    pub auto_increment: bool,
}

impl ColumnDef {
    /// `<name> <TYPE>[ <clauses>][ NOT NULL][ AUTO_INCREMENT]`
    pub fn render(&self) -> String {
        let mut line = format!("{} {}", self.name, self.sql_type);
        if !self.clauses.is_empty() {
            line.push(' ');
            line.push_str(&self.clauses.join(" "));
        }
        if self.non_null {
            line.push_str(" NOT NULL");
        }
        if self.auto_increment {
            line.push(' ');
            line.push_str(AUTO_INCREMENT);
        }
        line
    }
}

/// What happens to referencing rows when the referenced row is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Cascade,
    SetNull,
}

impl OnDelete {
    pub fn as_sql(&self) -> &'static str {
        match self {
            OnDelete::Cascade => "CASCADE",
            OnDelete::SetNull => "SET NULL",
        }
    }
}

/// `FOREIGN KEY (<column>) REFERENCES <table> (id) ON DELETE ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyConstraint {
    pub column: String,
    pub references: String,
    pub on_delete: OnDelete,
}

impl ForeignKeyConstraint {
    pub fn render(&self) -> String {
        format!(
            "FOREIGN KEY ({}) REFERENCES {} (id) ON DELETE {}",
            self.column,
            self.references,
            self.on_delete.as_sql()
        )
    }
}

/// One line of a `CREATE TABLE` column list.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnLine {
    /// Synthesized default-model column, rendered verbatim.
    Synthesized(&'static str),
    Column(ColumnDef),
    /// Integer foreign key column of a relation.
    ForeignKey { name: String, non_null: bool },
    /// `PRIMARY KEY (<column>)`, placed right after its column.
    PrimaryKey(String),
}

impl ColumnLine {
    pub fn render(&self) -> String {
        match self {
            ColumnLine::Synthesized(line) => line.to_string(),
            ColumnLine::Column(column) => column.render(),
            ColumnLine::ForeignKey { name, non_null: true } => format!("{} INTEGER NOT NULL", name),
            ColumnLine::ForeignKey { name, non_null: false } => format!("{} INTEGER", name),
            ColumnLine::PrimaryKey(column) => format!("PRIMARY KEY ({})", column),
        }
    }
}
