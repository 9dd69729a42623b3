//! Wrapped submodel container
//!
//! This module provides the container that gives a plain value object its
//! column-backed identity semantics: equality over significant attributes,
//! blankness, and a compact string representation.

use crate::errors::SubmodelError;
use crate::traits::Submodel;
use crate::values::significant_values;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Container for a submodel value held by a host record attribute
///
/// The container is created per record by the accessor cell, the setter, or
/// the column codec; the behavior it adds is fixed at compile time. It
/// dereferences to the inner value so host code keeps using the value
/// object's own API.
#[derive(Clone, Default)]
pub struct Wrapped<T: Submodel>(T);

impl<T: Submodel> Wrapped<T> {
    /// Blank instance with every attribute unset
    pub fn new() -> Self {
        Self(T::default())
    }

    /// Wrap an existing value
    pub fn from_value(value: T) -> Self {
        Self(value)
    }

    /// Build from a string-keyed mapping, assigning each entry in turn
    ///
    /// Unknown attribute names and values the attribute type rejects
    /// propagate as construction errors.
    pub fn from_map(values: &Map<String, Value>) -> Result<Self, SubmodelError> {
        let mut object = T::default();
        for (name, value) in values {
            object.set_field(name, value.clone())?;
        }
        Ok(Self(object))
    }

    /// Significant attributes in declaration order
    pub fn significant_values(&self) -> Vec<(&'static str, Value)> {
        significant_values(&self.0)
    }

    /// Significant attributes keyed for order-free comparison
    pub fn significant_map(&self) -> BTreeMap<&'static str, Value> {
        self.significant_values().into_iter().collect()
    }

    /// True when no attribute holds a significant value
    pub fn is_blank(&self) -> bool {
        self.significant_values().is_empty()
    }

    /// Unwrap the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Submodel> Deref for Wrapped<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Submodel> DerefMut for Wrapped<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: Submodel> From<T> for Wrapped<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Submodel> PartialEq for Wrapped<T> {
    fn eq(&self, other: &Self) -> bool {
        self.significant_map() == other.significant_map()
    }
}

impl<T: Submodel> PartialEq<T> for Wrapped<T> {
    fn eq(&self, other: &T) -> bool {
        let theirs: BTreeMap<&'static str, Value> = significant_values(other).into_iter().collect();
        self.significant_map() == theirs
    }
}

/// Mapping comparison is unfiltered on the mapping side: a mapping that
/// spells out a blank attribute is not equal to an instance that drops it.
impl<T: Submodel> PartialEq<Map<String, Value>> for Wrapped<T> {
    fn eq(&self, other: &Map<String, Value>) -> bool {
        let mine = self.significant_map();
        mine.len() == other.len()
            && other
                .iter()
                .all(|(name, value)| mine.get(name.as_str()) == Some(value))
    }
}

/// Comparison against an arbitrary interchange value never panics; anything
/// that is not an object compares unequal.
impl<T: Submodel> PartialEq<Value> for Wrapped<T> {
    fn eq(&self, other: &Value) -> bool {
        match other {
            Value::Object(entries) => self == entries,
            _ => false,
        }
    }
}

impl<T: Submodel> fmt::Display for Wrapped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", T::type_name())?;
        for (name, value) in self.significant_values() {
            write!(f, " {}={}", name, value)?;
        }
        write!(f, ">")
    }
}

impl<T: Submodel> fmt::Debug for Wrapped<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
