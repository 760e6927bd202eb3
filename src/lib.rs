//! schema_ddl library - Schema-to-SQL compiler
//!
//! Turns a parsed schema of record types into SQLite-flavored DDL (tables,
//! foreign keys, join tables, indexes and update triggers) and turns
//! in-memory record batches into bulk `INSERT` statements.
//!
//! ```ignore
//! use schema_ddl::{Schema, parse};
//!
//! let schema = Schema::from_json(json)?;
//! let ddl = parse(&schema, true)?;
//! ```

pub mod config;
pub mod ddl;
pub mod dml;
pub mod id;
pub mod naming;
pub mod schema;

#[cfg(test)]
#[macro_use]
mod test_macros;

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod test_utils;

pub use config::CompileOptions;
pub use ddl::{CompileError, DdlCompiler};
pub use dml::{InsertCompiler, InsertError, Record, RecordBatches, RecordValue};
pub use id::{IdError, generate_id, generate_id_at};
pub use schema::{
    Directive, FieldDefinition, Literal, SCHEMA_HEADER, Schema, SchemaError, TypeDefinition,
    TypeRef,
};

/// Compile every record type of `schema` into DDL text.
///
/// With `use_default_model`, each table gets the synthesized identity and
/// timestamp columns plus an update trigger.
pub fn parse(schema: &Schema, use_default_model: bool) -> Result<String, CompileError> {
    parse_with(schema, &CompileOptions::new(use_default_model))
}

/// Compile `schema` with explicit options.
pub fn parse_with(schema: &Schema, options: &CompileOptions) -> Result<String, CompileError> {
    DdlCompiler::new(*options).compile(schema)
}

/// Render record batches as bulk `INSERT` statements, one per entity.
pub fn insert<V: RecordValue>(batches: &RecordBatches<V>) -> Result<String, InsertError> {
    InsertCompiler::compile(batches)
}

/// Like [`insert`], reading batches from a JSON object of entity arrays.
pub fn insert_json(json: &str) -> Result<String, InsertError> {
    InsertCompiler::compile_json(json)
}
