//! Column representation
//!
//! This module provides the host-facing column types and the raw column
//! value exchanged with the persistence layer.

use serde::{Deserialize, Serialize};

/// Host column types a submodel attribute can be declared on
///
/// Anything outside the key-value and JSON families stores the generic
/// plain-text document form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Generic character column holding a structured text document
    Text,
    /// Semi-structured key-value column
    KeyValue,
    /// JSON document column
    Json,
    /// Binary JSON document column
    Jsonb,
}

/// Raw column value exchanged with the host persistence layer
///
/// `Map` and `Json` are the already-decoded in-memory forms a database
/// driver hands back for key-value and JSON columns; `Text` is on-column
/// text still to be decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnValue {
    Null,
    Text(String),
    Map(Vec<(String, String)>),
    Json(serde_json::Value),
}

impl ColumnValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ColumnValue::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ColumnValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Convert basic host values to ColumnValue
impl From<String> for ColumnValue {
    fn from(val: String) -> Self {
        ColumnValue::Text(val)
    }
}

impl From<&str> for ColumnValue {
    fn from(val: &str) -> Self {
        ColumnValue::Text(val.to_string())
    }
}

impl From<serde_json::Value> for ColumnValue {
    fn from(val: serde_json::Value) -> Self {
        ColumnValue::Json(val)
    }
}

impl From<Vec<(String, String)>> for ColumnValue {
    fn from(val: Vec<(String, String)>) -> Self {
        ColumnValue::Map(val)
    }
}

impl<T> From<Option<T>> for ColumnValue
where
    T: Into<ColumnValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => ColumnValue::Null,
        }
    }
}
