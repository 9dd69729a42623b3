//! Field validators
//!
//! Reusable attribute-level checks with the host framework's message
//! conventions. Each validator writes into the supplied collection.

use crate::validation::Errors;
use regex::Regex;

/// Value must be one of the allowed entries; absent values fail
pub fn validate_inclusion(
    errors: &mut Errors,
    attribute: &str,
    value: Option<&str>,
    allowed: &[&str],
) {
    match value {
        Some(value) if allowed.contains(&value) => {}
        _ => errors.add(attribute, "is not included in the list"),
    }
}

/// Value must match the pattern; absent values fail
pub fn validate_format(errors: &mut Errors, attribute: &str, value: Option<&str>, pattern: &Regex) {
    match value {
        Some(value) if pattern.is_match(value) => {}
        _ => errors.add(attribute, "is invalid"),
    }
}

/// Value must be present and non-blank
pub fn validate_presence(errors: &mut Errors, attribute: &str, value: Option<&str>) {
    match value {
        Some(value) if !value.trim().is_empty() => {}
        _ => errors.add(attribute, "can't be blank"),
    }
}
