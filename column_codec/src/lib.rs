//! Unified column mapping between submodel values and their stored forms
//! This crate provides the storage-side representation types and the
//! per-encoding codecs used across the submodel ecosystem.

pub mod codec;
pub mod column;
pub mod encoding;
pub mod errors;
pub mod hstore;
pub mod yaml;

// Re-export commonly used items for backward compatibility
pub use codec::SubmodelCodec;
pub use column::{ColumnType, ColumnValue};
pub use encoding::StorageEncoding;
pub use errors::CodecError;
