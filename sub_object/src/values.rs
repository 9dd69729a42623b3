//! Significant-value rules
//!
//! This module defines which attribute values count as significant. The
//! same rule drives blankness, equality, and what gets persisted.

use crate::traits::Submodel;
use serde_json::Value;

/// Whether an interchange value is blank
///
/// Null, `false`, empty or whitespace-only strings, and empty collections
/// are blank. Numbers are never blank.
pub fn is_blank_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !*flag,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Number(_) => false,
    }
}

/// Significant attributes of a value object, in declaration order
///
/// An attribute is significant when it is declared (and therefore settable)
/// and its current value is non-blank.
pub fn significant_values<T: Submodel>(object: &T) -> Vec<(&'static str, Value)> {
    T::field_names()
        .iter()
        .filter_map(|name| object.field(name).map(|value| (*name, value)))
        .filter(|(_, value)| !is_blank_value(value))
        .collect()
}
