//! Storage encoding dispatch
//!
//! This module models the closed set of on-column representation
//! strategies. Adding an encoding means adding a variant here, not
//! branching at call sites.

use crate::column::{ColumnType, ColumnValue};
use crate::errors::CodecError;
use crate::{hstore, yaml};
use serde_json::{Map, Value};

/// On-column representation strategy for a declared submodel attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageEncoding {
    /// Structured plain-text document in a generic character column
    PlainText,
    /// Engine-native key-value column
    KeyValue,
    /// JSON document column
    Json,
}

impl StorageEncoding {
    /// Encoding for a host column type
    ///
    /// Column types outside the key-value and JSON families store the
    /// generic plain-text document.
    pub const fn for_column(column: ColumnType) -> Self {
        match column {
            ColumnType::KeyValue => StorageEncoding::KeyValue,
            ColumnType::Json | ColumnType::Jsonb => StorageEncoding::Json,
            ColumnType::Text => StorageEncoding::PlainText,
        }
    }

    /// Decode on-column text into a string-keyed mapping
    pub fn decode(self, text: &str) -> Result<Map<String, Value>, CodecError> {
        match self {
            StorageEncoding::PlainText => yaml::decode(text),
            StorageEncoding::KeyValue => {
                let pairs = hstore::parse(text)?;
                Ok(pairs
                    .into_iter()
                    .map(|(key, value)| {
                        (key, value.map_or(Value::Null, Value::String))
                    })
                    .collect())
            }
            StorageEncoding::Json => {
                let document: Value = serde_json::from_str(text)?;
                match document {
                    Value::Null => Ok(Map::new()),
                    Value::Object(entries) => Ok(entries),
                    other => Err(CodecError::not_a_mapping(&other)),
                }
            }
        }
    }

    /// Encode ordered attribute values into the stored column value
    ///
    /// Key-value and JSON columns keep the mapping itself; the host
    /// persistence layer serializes those natively. Plain text serializes
    /// here.
    pub fn encode(self, values: &[(&'static str, Value)]) -> Result<ColumnValue, CodecError> {
        match self {
            StorageEncoding::PlainText => Ok(ColumnValue::Text(yaml::encode(values)?)),
            StorageEncoding::KeyValue => Ok(ColumnValue::Map(
                values
                    .iter()
                    .map(|(name, value)| ((*name).to_string(), stringify(value)))
                    .collect(),
            )),
            StorageEncoding::Json => Ok(ColumnValue::Json(Value::Object(
                values
                    .iter()
                    .map(|(name, value)| ((*name).to_string(), value.clone()))
                    .collect(),
            ))),
        }
    }
}

// Key-value columns hold string values only.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
