//! Plain-text document form
//!
//! Encoder and decoder for the generic structured-text serialization used
//! by plain character columns: a block-style document with a `---` header
//! and one `key: value` line per attribute.

use crate::errors::CodecError;
use serde_json::{Map, Value};

/// Decode a plain-text document into a string-keyed mapping
///
/// An empty or null document decodes to an empty mapping; any other
/// non-mapping document is rejected.
pub fn decode(text: &str) -> Result<Map<String, Value>, CodecError> {
    let document: serde_yaml::Value = serde_yaml::from_str(text)?;
    match document {
        serde_yaml::Value::Null => Ok(Map::new()),
        serde_yaml::Value::Mapping(mapping) => {
            let mut values = Map::new();
            for (key, value) in mapping {
                let serde_yaml::Value::String(key) = key else {
                    return Err(CodecError::NonStringKey);
                };
                values.insert(key, yaml_to_json(value)?);
            }
            Ok(values)
        }
        serde_yaml::Value::Bool(_) | serde_yaml::Value::Number(_) => {
            Err(CodecError::NotAMapping("scalar"))
        }
        serde_yaml::Value::String(_) => Err(CodecError::NotAMapping("string")),
        serde_yaml::Value::Sequence(_) => Err(CodecError::NotAMapping("sequence")),
        serde_yaml::Value::Tagged(_) => Err(CodecError::NotAMapping("tagged value")),
    }
}

/// Encode ordered attribute values as a plain-text document
pub fn encode(values: &[(&'static str, Value)]) -> Result<String, CodecError> {
    let mut mapping = serde_yaml::Mapping::new();
    for (name, value) in values {
        mapping.insert(
            serde_yaml::Value::String((*name).to_string()),
            json_to_yaml(value),
        );
    }
    let body = serde_yaml::to_string(&mapping)?;
    Ok(format!("---\n{}", body))
}

fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, CodecError> {
    Ok(match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(flag) => Value::Bool(flag),
        serde_yaml::Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                Value::from(integer)
            } else if let Some(integer) = number.as_u64() {
                Value::from(integer)
            } else {
                number
                    .as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(text) => Value::String(text),
        serde_yaml::Value::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        serde_yaml::Value::Mapping(mapping) => {
            let mut entries = Map::new();
            for (key, value) in mapping {
                let serde_yaml::Value::String(key) = key else {
                    return Err(CodecError::NonStringKey);
                };
                entries.insert(key, yaml_to_json(value)?);
            }
            Value::Object(entries)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn json_to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(flag) => serde_yaml::Value::Bool(*flag),
        Value::Number(number) => {
            if let Some(integer) = number.as_i64() {
                serde_yaml::Value::Number(integer.into())
            } else if let Some(integer) = number.as_u64() {
                serde_yaml::Value::Number(integer.into())
            } else {
                serde_yaml::Value::Number(number.as_f64().unwrap_or(0.0).into())
            }
        }
        Value::String(text) => serde_yaml::Value::String(text.clone()),
        Value::Array(items) => {
            serde_yaml::Value::Sequence(items.iter().map(json_to_yaml).collect())
        }
        Value::Object(entries) => {
            let mut mapping = serde_yaml::Mapping::new();
            for (key, value) in entries {
                mapping.insert(
                    serde_yaml::Value::String(key.clone()),
                    json_to_yaml(value),
                );
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}
