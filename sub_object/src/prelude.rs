//! Convenience re-exports for common sub-object usage

// Core traits
pub use crate::traits::{Submodel, Validate};

// Value container and accessor cell
pub use crate::field::{SubmodelField, SubmodelInput};
pub use crate::wrapped::Wrapped;

// Error types
pub use crate::errors::SubmodelError;

// Validation
pub use crate::validation::{humanize, to_sentence, Errors};
pub use crate::validators::{validate_format, validate_inclusion, validate_presence};

// Significant-value rules
pub use crate::values::{is_blank_value, significant_values};

// Common external dependencies that are frequently used
pub use serde_json::{Map, Value};
