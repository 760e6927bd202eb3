//! Shared test utilities for compiler tests.

use crate::config::CompileOptions;
use crate::ddl::{CompileError, DdlCompiler};
use crate::schema::Schema;

/// Parse a JSON schema fixture.
pub fn load_schema(json: &str) -> Schema {
    Schema::from_json(json).expect("Fixture should be valid schema JSON")
}

/// Compile a JSON schema fixture, panicking on failure.
pub fn compile_fixture(json: &str, use_default_model: bool) -> String {
    try_compile_fixture(json, use_default_model).expect("Compile should succeed")
}

/// Compile a JSON schema fixture.
pub fn try_compile_fixture(json: &str, use_default_model: bool) -> Result<String, CompileError> {
    let schema = load_schema(json);
    DdlCompiler::new(CompileOptions::new(use_default_model)).compile(&schema)
}
