//! Input schema model.
//!
//! The compiler consumes an already-parsed schema: an ordered collection of
//! named type definitions. Parsing schema source text is the job of an upstream
//! parser; this module only describes the resulting structure and narrows it
//! to the record types that become tables.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `TypeDefinition`, `FieldDefinition`, `TypeRef`, `Directive`, `Literal`
//!    - `ScalarKind` - built-in scalars and their column type tokens
//!
//! 2. **Catalog** (`catalog.rs`):
//!    - `extract_catalog` - keeps only user-defined record types
//!
//! 3. **Header** (`header.rs`):
//!    - `SCHEMA_HEADER` - directive declarations for the upstream parser

mod catalog;
mod definition;
mod header;

pub use catalog::{TypeCatalog, extract_catalog};
pub use definition::{
    Argument, DefinitionKind, Directive, FieldDefinition, Literal, ResolvedType, ScalarKind,
    TypeDefinition, TypeRef,
};
pub use header::SCHEMA_HEADER;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema error types
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Invalid schema JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown definition kind '{kind}' for type '{name}'")]
    UnknownDefinitionKind { name: String, kind: String },
}

/// A parsed schema: every type definition in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub definitions: Vec<TypeDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper that appends a definition.
    pub fn with_type(mut self, definition: TypeDefinition) -> Self {
        self.definitions.push(definition);
        self
    }

    /// Deserialize a schema from its JSON AST form.
    ///
    /// ```ignore
    /// { "definitions": [
    ///     { "kind": "ObjectTypeDefinition", "name": "Users", "fields": [
    ///         { "name": "name", "type": { "kind": "NamedType", "name": "String" } }
    ///     ] }
    /// ] }
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }
}
