//! Validation contract
//!
//! This module defines the self-validation surface for submodel value types.

use crate::validation::Errors;

/// Self-validation for a submodel value
///
/// Implementations report problems into the supplied collection; an empty
/// collection after the call means the value is valid. The sink is an
/// explicit parameter so validation never touches shared mutable state.
pub trait Validate {
    fn validate(&self, errors: &mut Errors);
}
