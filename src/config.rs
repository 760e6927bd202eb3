//! Compile options.
//!
//! Options can be built in code or read from a JSON document such as
//! `{ "use_default_model": false }`.

use serde::{Deserialize, Serialize};

use crate::schema::SchemaError;

fn default_true() -> bool {
    true
}

/// Options for DDL compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompileOptions {
    /// Synthesize `id`, `created_at` and `updated_at` columns plus an
    /// `updated_at` trigger for every table.
    #[serde(default = "default_true")]
    pub use_default_model: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            use_default_model: true,
        }
    }
}

impl CompileOptions {
    pub fn new(use_default_model: bool) -> Self {
        Self { use_default_model }
    }

    /// Parse options from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or carries unknown fields.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }
}
