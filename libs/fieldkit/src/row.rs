//! The fetched-row boundary.
//!
//! Hydration consumes rows the enclosing engine already fetched. The row is
//! a loose column map with typed getters; a column that is absent or null
//! simply reads as `None` (an absent aggregate column means an empty
//! association set, never an error).

use serde_json::Value;

/// One fetched result row.
#[derive(Debug, Clone, Default)]
pub struct Row {
    columns: serde_json::Map<String, Value>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, replacing any previous one.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.columns.insert(column.into(), value.into());
        self
    }

    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    /// Read a column as text.
    #[must_use]
    pub fn text(&self, column: &str) -> Option<&str> {
        self.columns.get(column).and_then(Value::as_str)
    }

    /// Read a column as an integer. Numeric strings count: drivers for some
    /// dialects hand integer columns back as text.
    #[must_use]
    pub fn integer(&self, column: &str) -> Option<i64> {
        let value = self.columns.get(column)?;
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}
