//! # Submodel
//!
//! A Rust library for backing a single database column with a structured,
//! validated value object: reads materialize an instance from the stored
//! representation, writes serialize it back, blank instances collapse to a
//! stored NULL, and the value object's validation errors fold into the host
//! record's own error collection.
//!
//! ## Quick Start
//!
//! ```rust
//! use submodel::prelude::*;
//! use submodel::serde_json::json;
//!
//! #[derive(Debug, Clone, Default, Submodel)]
//! pub struct Address {
//!     pub city: Option<String>,
//!     pub country: Option<String>,
//! }
//!
//! impl Validate for Address {
//!     fn validate(&self, errors: &mut Errors) {
//!         validate_inclusion(errors, "country", self.country.as_deref(), &["US", "CA"]);
//!     }
//! }
//!
//! pub struct Order {
//!     pub billing_address: SubmodelField<Address>,
//! }
//!
//! impl RecordSchema for Order {
//!     fn table_name() -> &'static str {
//!         "orders"
//!     }
//!
//!     fn columns() -> &'static [(&'static str, ColumnType)] {
//!         &[("billing_address", ColumnType::Json)]
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let billing = SubmodelColumn::<Address>::declare::<Order>("billing_address")?;
//!
//!     let mut order = Order {
//!         billing_address: SubmodelField::new(),
//!     };
//!     order
//!         .billing_address
//!         .set_json(json!({ "city": "Montreal", "country": "CA" }))?;
//!
//!     let mut errors = Errors::new();
//!     billing.validate_into(order.billing_address.peek(), &mut errors);
//!     assert!(errors.is_empty());
//!
//!     let stored = billing.dump_field(&order.billing_address)?;
//!     assert!(!stored.is_null());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod column;
pub mod errors;
pub mod prelude;
pub mod schema;

// Re-export the main public types for convenience
pub use column::SubmodelColumn;
pub use errors::DeclarationError;
pub use schema::RecordSchema;

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use column_codec;
pub use sub_object;
pub use submodel_derive;

// Re-export external dependencies used in public API
pub use serde_json;
pub use tracing;
