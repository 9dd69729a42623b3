//! Submodel column codec
//!
//! This module binds a storage encoding to a submodel type and implements
//! the load/dump pair the host's serialization hook consumes.

use crate::column::{ColumnType, ColumnValue};
use crate::encoding::StorageEncoding;
use crate::errors::CodecError;
use serde_json::{Map, Value};
use std::marker::PhantomData;
use sub_object::{Submodel, Wrapped};

/// Load/dump pair for one declared submodel column
///
/// Both directions are pure transforms. A blank instance dumps to the
/// absent value so the column stores NULL, never an empty encoded
/// structure; loading an absent or empty stored value yields no instance.
#[derive(Debug, Clone, Copy)]
pub struct SubmodelCodec<T: Submodel> {
    encoding: StorageEncoding,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Submodel> SubmodelCodec<T> {
    pub fn new(encoding: StorageEncoding) -> Self {
        Self {
            encoding,
            _marker: PhantomData,
        }
    }

    /// Codec for a host column type
    pub fn for_column(column: ColumnType) -> Self {
        Self::new(StorageEncoding::for_column(column))
    }

    pub fn encoding(&self) -> StorageEncoding {
        self.encoding
    }

    /// Materialize an instance from the raw stored value
    ///
    /// Already-decoded driver values are used directly; text is decoded per
    /// the bound encoding. Decode failures propagate. An absent or empty
    /// stored mapping yields `None`.
    pub fn load(&self, raw: &ColumnValue) -> Result<Option<Wrapped<T>>, CodecError> {
        let values: Map<String, Value> = match raw {
            ColumnValue::Null => return Ok(None),
            ColumnValue::Text(text) => self.encoding.decode(text)?,
            ColumnValue::Map(pairs) => pairs
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect(),
            ColumnValue::Json(Value::Null) => return Ok(None),
            ColumnValue::Json(Value::Object(entries)) => entries.clone(),
            ColumnValue::Json(other) => return Err(CodecError::not_a_mapping(other)),
        };

        if values.is_empty() {
            return Ok(None);
        }
        tracing::debug!("[LOAD] {}: {} attributes", T::type_name(), values.len());
        Ok(Some(Wrapped::from_map(&values)?))
    }

    /// Serialize an instance's significant attributes for storage
    ///
    /// A blank instance dumps to `None`, forcing NULL storage.
    pub fn dump(&self, object: &Wrapped<T>) -> Result<Option<ColumnValue>, CodecError> {
        let values = object.significant_values();
        if values.is_empty() {
            return Ok(None);
        }
        tracing::debug!("[DUMP] {}: {} attributes", T::type_name(), values.len());
        self.encoding.encode(&values).map(Some)
    }
}
