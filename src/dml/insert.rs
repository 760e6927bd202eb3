//! Bulk INSERT generation.
//!
//! Every value is stringified and single-quoted, numbers and booleans
//! included. Column names come from the first record of a batch; each row
//! then renders its own values in its own key order, so records shaped
//! differently from the first one misalign.

use indexmap::IndexMap;
use tracing::debug;

use crate::dml::InsertError;
use crate::dml::escape::quote_single;
use crate::dml::value::RecordValue;
use crate::naming;

/// One record: column name to value, in insertion order.
pub type Record<V> = IndexMap<String, V>;

/// Entity name to its ordered batch of records.
pub type RecordBatches<V> = IndexMap<String, Vec<Record<V>>>;

/// Compiler for generating INSERT statements from record batches.
pub struct InsertCompiler;

impl InsertCompiler {
    /// Generate one INSERT statement for a batch.
    ///
    /// Produces output in the format:
    /// ```sql
    /// INSERT INTO persons (id, first_name) VALUES ('1', 'Alice'),
    /// ('2', 'Bob');
    /// ```
    pub fn compile_batch<V: RecordValue>(entity: &str, records: &[Record<V>]) -> Result<String, InsertError> {
        let first = records.first().ok_or_else(|| InsertError::EmptyBatch {
            entity: entity.to_string(),
        })?;

        let table = naming::snake_case(entity);
        let columns = first.keys().map(String::as_str).collect::<Vec<_>>().join(", ");
        let rows = records
            .iter()
            .map(|record| {
                let values = record
                    .values()
                    .map(|value| quote_single(&value.to_text()))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({})", values)
            })
            .collect::<Vec<_>>()
            .join(",\n");

        debug!(table = %table, rows = records.len(), "compiled insert");
        Ok(format!("INSERT INTO {} ({}) VALUES {};", table, columns, rows))
    }

    /// Generate INSERT statements for every batch, joined by line breaks.
    pub fn compile<V: RecordValue>(batches: &RecordBatches<V>) -> Result<String, InsertError> {
        let statements = batches
            .iter()
            .map(|(entity, records)| Self::compile_batch(entity, records))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(statements.join("\n"))
    }

    /// Parse batches from a JSON object and generate INSERT statements.
    ///
    /// ```ignore
    /// { "persons": [{ "id": "1", "first_name": "Alice" }] }
    /// ```
    pub fn compile_json(json: &str) -> Result<String, InsertError> {
        let batches: RecordBatches<serde_json::Value> = serde_json::from_str(json)?;
        Self::compile(&batches)
    }
}
