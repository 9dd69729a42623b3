//! Accessor cell
//!
//! This module provides the per-record storage cell implementing the
//! getter/setter semantics of a declared submodel attribute.

use crate::errors::SubmodelError;
use crate::traits::Submodel;
use crate::wrapped::Wrapped;
use serde_json::{Map, Value};

/// Accepted setter inputs for a submodel attribute
#[derive(Debug, Clone)]
pub enum SubmodelInput<T: Submodel> {
    /// Clear the attribute (stored NULL)
    Null,
    /// An existing value object; always stored as an independent copy
    Instance(T),
    /// A string-keyed mapping of attribute values
    Values(Map<String, Value>),
}

impl<T: Submodel> From<T> for SubmodelInput<T> {
    fn from(value: T) -> Self {
        Self::Instance(value)
    }
}

impl<T: Submodel> From<&T> for SubmodelInput<T> {
    fn from(value: &T) -> Self {
        Self::Instance(value.clone())
    }
}

impl<T: Submodel> From<Wrapped<T>> for SubmodelInput<T> {
    fn from(value: Wrapped<T>) -> Self {
        Self::Instance(value.into_inner())
    }
}

impl<T: Submodel> From<&Wrapped<T>> for SubmodelInput<T> {
    fn from(value: &Wrapped<T>) -> Self {
        Self::Instance((**value).clone())
    }
}

impl<T: Submodel> From<Map<String, Value>> for SubmodelInput<T> {
    fn from(values: Map<String, Value>) -> Self {
        Self::Values(values)
    }
}

impl<T: Submodel> From<&Map<String, Value>> for SubmodelInput<T> {
    fn from(values: &Map<String, Value>) -> Self {
        Self::Values(values.clone())
    }
}

impl<T: Submodel> From<Option<T>> for SubmodelInput<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Instance(value),
            None => Self::Null,
        }
    }
}

impl<T: Submodel> TryFrom<Value> for SubmodelInput<T> {
    type Error = SubmodelError;

    fn try_from(value: Value) -> Result<Self, SubmodelError> {
        match value {
            Value::Null => Ok(Self::Null),
            Value::Object(entries) => Ok(Self::Values(entries)),
            _ => Err(SubmodelError::NotAMapping {
                type_name: T::type_name(),
            }),
        }
    }
}

/// Per-record storage for one declared submodel attribute
///
/// The cell starts unset (stored NULL). The getter lazily materializes a
/// blank instance and retains it, so repeated reads return the same object;
/// materializing never implies persistence because a blank instance still
/// dumps to NULL.
#[derive(Debug, Clone, Default)]
pub struct SubmodelField<T: Submodel> {
    value: Option<Wrapped<T>>,
}

impl<T: Submodel> SubmodelField<T> {
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Current value, materializing and retaining a blank instance when unset
    pub fn get(&mut self) -> &Wrapped<T> {
        self.value.get_or_insert_with(Wrapped::new)
    }

    /// Mutable access, materializing a blank instance when unset
    pub fn get_mut(&mut self) -> &mut Wrapped<T> {
        self.value.get_or_insert_with(Wrapped::new)
    }

    /// Raw stored value, without materializing
    pub fn peek(&self) -> Option<&Wrapped<T>> {
        self.value.as_ref()
    }

    /// Assign the attribute
    ///
    /// `Null` clears the stored value, an instance is stored as an
    /// independent copy, and a mapping goes through construction, whose
    /// failures propagate.
    pub fn set(&mut self, input: impl Into<SubmodelInput<T>>) -> Result<(), SubmodelError> {
        self.value = match input.into() {
            SubmodelInput::Null => None,
            SubmodelInput::Instance(value) => Some(Wrapped::from_value(value)),
            SubmodelInput::Values(values) => Some(Wrapped::from_map(&values)?),
        };
        tracing::trace!("[SET] {}: set = {}", T::type_name(), self.value.is_some());
        Ok(())
    }

    /// Bulk-assignment alias for [`set`](Self::set)
    pub fn set_attributes(&mut self, input: impl Into<SubmodelInput<T>>) -> Result<(), SubmodelError> {
        self.set(input)
    }

    /// Assign from a decoded interchange value (mapping or null)
    pub fn set_json(&mut self, value: Value) -> Result<(), SubmodelError> {
        let input = SubmodelInput::try_from(value)?;
        self.set(input)
    }

    /// Clear the stored value
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Replace the stored value wholesale (codec load path)
    pub fn replace(&mut self, value: Option<Wrapped<T>>) {
        self.value = value;
    }

    /// Whether a value, blank or not, is currently stored
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Contact;
    use serde_json::json;

    fn values(entries: Value) -> Map<String, Value> {
        match entries {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_getter_materializes_blank_instance_once() {
        let mut field = SubmodelField::<Contact>::new();
        assert!(!field.is_set());

        let first = field.get() as *const Wrapped<Contact>;
        assert!(field.is_set());
        let second = field.get() as *const Wrapped<Contact>;
        assert_eq!(first, second);
        assert!(field.get().is_blank());
    }

    #[test]
    fn test_setter_stores_mapping() {
        let mut field = SubmodelField::<Contact>::new();
        field.set(values(json!({"name": "Ada"}))).unwrap();
        assert_eq!(field.peek().unwrap().name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_setter_copies_instances() {
        let original = Contact {
            name: Some("Ada".to_string()),
            email: None,
            age: None,
        };

        let mut field = SubmodelField::<Contact>::new();
        field.set(&original).unwrap();
        field.get_mut().name = Some("Grace".to_string());

        assert_eq!(original.name.as_deref(), Some("Ada"));
        assert_eq!(field.peek().unwrap().name.as_deref(), Some("Grace"));
    }

    #[test]
    fn test_setter_clears_on_null() {
        let mut field = SubmodelField::<Contact>::new();
        field.set(values(json!({"name": "Ada"}))).unwrap();
        field.set(None::<Contact>).unwrap();
        assert!(field.peek().is_none());
    }

    #[test]
    fn test_set_attributes_alias_matches_setter() {
        let mut field = SubmodelField::<Contact>::new();
        field.set_attributes(values(json!({"name": "Ada"}))).unwrap();
        assert_eq!(field.peek().unwrap().name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_set_json_rejects_non_mapping() {
        let mut field = SubmodelField::<Contact>::new();
        let error = field.set_json(json!(1)).unwrap_err();
        assert!(matches!(error, SubmodelError::NotAMapping { type_name: "Contact" }));
    }

    #[test]
    fn test_set_json_null_clears() {
        let mut field = SubmodelField::<Contact>::new();
        field.set(values(json!({"name": "Ada"}))).unwrap();
        field.set_json(json!(null)).unwrap();
        assert!(field.peek().is_none());
    }

    #[test]
    fn test_construction_failure_propagates() {
        let mut field = SubmodelField::<Contact>::new();
        let error = field.set(values(json!({"nickname": "ada"}))).unwrap_err();
        assert!(matches!(error, SubmodelError::UnknownAttribute { .. }));
    }
}
