//! Convenience re-exports for common submodel usage
//!
//! This prelude module re-exports the most commonly used items from the
//! submodel ecosystem, making it easier to import everything you need with
//! a single use statement.
//!
//! # Example
//!
//! ```rust
//! use submodel::prelude::*;
//!
//! // Now you have access to all the common submodel types and traits
//! ```

// Core submodel components
pub use crate::column::SubmodelColumn;
pub use crate::errors::DeclarationError;
pub use crate::schema::RecordSchema;

// Re-export commonly used sub-object types for convenience
pub use sub_object::prelude::*;

// Re-export sub_object module for macro-generated code
pub use sub_object;

// Re-export the storage layer
pub use column_codec::{CodecError, ColumnType, ColumnValue, StorageEncoding, SubmodelCodec};

// Re-export the derive for value-object creation
pub use submodel_derive::Submodel;

// Common external dependencies
pub use serde_json;
