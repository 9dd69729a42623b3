//! Shared fixtures for unit tests
//!
//! `Contact` is a hand-written `Submodel` implementation mirroring what the
//! derive macro generates.

use crate::errors::SubmodelError;
use crate::traits::{Submodel, Validate};
use crate::validation::Errors;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

impl Submodel for Contact {
    fn type_name() -> &'static str {
        "Contact"
    }

    fn field_names() -> &'static [&'static str] {
        &["name", "email", "age"]
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => serde_json::to_value(&self.name).ok(),
            "email" => serde_json::to_value(&self.email).ok(),
            "age" => serde_json::to_value(self.age).ok(),
            _ => None,
        }
    }

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), SubmodelError> {
        match name {
            "name" => {
                self.name = serde_json::from_value(value)
                    .map_err(|source| SubmodelError::invalid_value("name", source))?;
            }
            "email" => {
                self.email = serde_json::from_value(value)
                    .map_err(|source| SubmodelError::invalid_value("email", source))?;
            }
            "age" => {
                self.age = serde_json::from_value(value)
                    .map_err(|source| SubmodelError::invalid_value("age", source))?;
            }
            unknown => return Err(SubmodelError::unknown_attribute(Self::type_name(), unknown)),
        }
        Ok(())
    }
}

impl Validate for Contact {
    fn validate(&self, errors: &mut Errors) {
        if self
            .email
            .as_deref()
            .is_some_and(|email| !email.contains('@'))
        {
            errors.add("email", "is invalid");
        }
    }
}
