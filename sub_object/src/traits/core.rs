//! Field access contract
//!
//! This module defines the attribute get/set surface a value type exposes
//! so it can live inside a single database column.

use crate::errors::SubmodelError;
use serde_json::Value;

/// Field access for a value object stored in a single column
///
/// This trait should be derived with `#[derive(Submodel)]` from the
/// `submodel-derive` crate, which generates the static field list and the
/// get/set plumbing from the struct definition.
///
/// Recommended usage:
/// ```ignore
/// use submodel_derive::Submodel;
///
/// #[derive(Debug, Clone, Default, Submodel)]
/// pub struct Address {
///     pub street_1: Option<String>,
///     pub city: Option<String>,
/// }
/// ```
///
/// Manual implementations must keep `field_names` in declaration order and
/// must return `None` from `field` only for names outside that list.
pub trait Submodel: Clone + Default {
    /// The reported type name, preserved from the declaring struct
    fn type_name() -> &'static str;

    /// Attribute names in declaration order
    ///
    /// Only settable attributes belong here; fields marked
    /// `#[submodel(skip)]` at derive time (internal bookkeeping such as a
    /// cached error list) are excluded.
    fn field_names() -> &'static [&'static str];

    /// Current value of the named attribute, or `None` for unknown names
    fn field(&self, name: &str) -> Option<Value>;

    /// Assign the named attribute from an interchange value
    fn set_field(&mut self, name: &str, value: Value) -> Result<(), SubmodelError>;
}
