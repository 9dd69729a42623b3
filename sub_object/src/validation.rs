//! Validation error collection
//!
//! This module provides the collection validation writes into, plus the
//! message-formatting conventions shared with the host framework.

/// Ordered collection of per-attribute validation errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Errors {
    entries: Vec<(String, String)>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against an attribute
    pub fn add(&mut self, attribute: impl Into<String>, message: impl Into<String>) {
        self.entries.push((attribute.into(), message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Attributes with at least one error, in first-seen order
    pub fn attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (attribute, _) in &self.entries {
            if !names.contains(&attribute.as_str()) {
                names.push(attribute);
            }
        }
        names
    }

    /// Messages recorded against one attribute
    pub fn messages_for(&self, attribute: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(name, _)| name == attribute)
            .map(|(_, message)| message.as_str())
            .collect()
    }

    /// Humanized `Attribute message` strings, in insertion order
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(attribute, message)| format!("{} {}", humanize(attribute), message))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(attribute, message)| (attribute.as_str(), message.as_str()))
    }
}

/// Humanize an attribute name: underscores become spaces, first letter
/// upper-cased
pub fn humanize(attribute: &str) -> String {
    let text = attribute.replace('_', " ");
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => text,
    }
}

/// Join message parts into one sentence
///
/// One part stands alone, two join with `and`, three or more use commas
/// with a final `, and`.
pub fn to_sentence(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}
