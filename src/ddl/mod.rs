//! DDL generation.
//!
//! Compiles record types into `CREATE TABLE` statements, foreign key
//! constraints, join tables, indexes and update triggers.
//!
//! # Pipeline
//!
//! For each field of a record type:
//! 1. **Directives** (`directives.rs`) - typed modifiers from `@default`,
//!    `@unique`, `@index`, `@primary`, `@autoIncrement`, `@foreignKey`
//! 2. **Classification** (`relation.rs`) - scalar column, belongsTo,
//!    associateTo or hasAndBelongsToMany, from the field name prefix
//! 3. **Columns** (`column.rs`) - column and constraint fragments
//!
//! `table.rs` assembles the fragments into a `TableSpec` and renders it;
//! `compiler.rs` runs that for every type in the catalog.

mod column;
mod compiler;
mod directives;
mod relation;
mod table;

pub use column::{
    AUTO_INCREMENT, ColumnDef, ColumnLine, ForeignKeyConstraint, OnDelete, column_type,
};
pub use compiler::DdlCompiler;
pub use directives::{ColumnModifiers, FieldDirective};
pub use relation::{ClassifiedField, ForeignKeyRef, RelationKind, classify_field};
pub use table::{IndexSpec, JoinTable, TableSpec, UpdateTrigger};

use thiserror::Error;

use crate::schema::SchemaError;

/// Compile error types
#[derive(Error, Debug)]
pub enum CompileError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Unsupported type reference '{kind}' on field {type_name}.{field}")]
    UnsupportedTypeReference {
        type_name: String,
        field: String,
        kind: String,
    },

    #[error("Directive '@{directive}' on field {type_name}.{field} is missing its 'value' argument")]
    MissingDirectiveArgument {
        type_name: String,
        field: String,
        directive: String,
    },
}
