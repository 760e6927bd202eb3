//! Schema-to-DDL compiler.
//!
//! Output is deterministic: the same catalog and options always produce the
//! same text. The identity column default is emitted as SQL source and never
//! evaluated here.

use tracing::debug;

use crate::config::CompileOptions;
use crate::ddl::CompileError;
use crate::ddl::table::TableSpec;
use crate::schema::{Schema, TypeCatalog, TypeDefinition, extract_catalog};

/// Compiler for generating DDL from record type definitions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdlCompiler {
    options: CompileOptions,
}

impl DdlCompiler {
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Generate the DDL block for a single record type.
    ///
    /// Produces output in the format:
    /// ```sql
    ///
    /// CREATE TABLE blogs(
    ///     handle TEXT UNIQUE ,
    ///     user_id INTEGER NOT NULL ,
    ///     FOREIGN KEY (user_id) REFERENCES users (id) ON DELETE CASCADE
    /// );
    /// CREATE UNIQUE INDEX idx_blogs_handle ON blogs (handle);
    /// ```
    pub fn compile_type(&self, definition: &TypeDefinition) -> Result<String, CompileError> {
        let spec = TableSpec::assemble(definition, self.options.use_default_model)?;
        debug!(
            table = %spec.name,
            columns = spec.columns.len(),
            constraints = spec.constraints.len(),
            join_tables = spec.join_tables.len(),
            indexes = spec.indexes.len(),
            "compiled table"
        );
        Ok(spec.render())
    }

    /// Generate DDL for every type in the catalog, in catalog order, with
    /// blocks separated by a single line break.
    pub fn compile_catalog(&self, catalog: &TypeCatalog<'_>) -> Result<String, CompileError> {
        let blocks = catalog
            .values()
            .map(|definition| self.compile_type(definition))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(blocks.join("\n"))
    }

    /// Extract the record types of `schema` and compile them.
    pub fn compile(&self, schema: &Schema) -> Result<String, CompileError> {
        let catalog = extract_catalog(schema)?;
        debug!(types = catalog.len(), "extracted type catalog");
        self.compile_catalog(&catalog)
    }
}
