//! Host schema metadata
//!
//! This module defines the column-type registry a host record type
//! supplies so attributes can be declared against it.

use column_codec::ColumnType;

/// Static column metadata for a host record type
///
/// The host persistence layer owns the real schema; this trait is the
/// narrow registry slice submodel declarations consult.
pub trait RecordSchema {
    /// The table name in the database
    fn table_name() -> &'static str;

    /// Declared columns with their types
    fn columns() -> &'static [(&'static str, ColumnType)];

    /// Column type for an attribute, if declared
    fn column_type(attribute: &str) -> Option<ColumnType> {
        Self::columns()
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, column)| *column)
    }
}
