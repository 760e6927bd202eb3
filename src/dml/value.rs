//! Trait abstraction for record values.
//!
//! Insert generation only needs the text form of each value, so any type
//! that can be stringified can be used as a record cell.

/// A value that can appear in a record passed to the insert generator.
pub trait RecordValue {
    /// Text form of the value, before quoting.
    ///
    /// Strings are returned verbatim; numbers and booleans use their display
    /// form.
    fn to_text(&self) -> String;
}

/// JSON values: `null` becomes the text `null`, arrays and objects their
/// compact JSON encoding.
impl RecordValue for serde_json::Value {
    fn to_text(&self) -> String {
        match self {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl RecordValue for String {
    fn to_text(&self) -> String {
        self.clone()
    }
}

impl RecordValue for &str {
    fn to_text(&self) -> String {
        (*self).to_string()
    }
}

impl RecordValue for i64 {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl RecordValue for f64 {
    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl RecordValue for bool {
    fn to_text(&self) -> String {
        self.to_string()
    }
}
