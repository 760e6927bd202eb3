//! DML generation.
//!
//! Renders in-memory record batches into bulk `INSERT` statements. Shares only
//! the naming convention with the DDL side.

mod escape;
mod insert;
mod value;

pub use escape::{escape_string_for_quote, escape_string_single, quote_single};
pub use insert::{InsertCompiler, Record, RecordBatches};
pub use value::RecordValue;

use thiserror::Error;

/// Insert generation error types
#[derive(Error, Debug)]
pub enum InsertError {
    #[error("Invalid record batch JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Record batch for '{entity}' is empty")]
    EmptyBatch { entity: String },
}
