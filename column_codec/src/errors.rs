use sub_object::SubmodelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Plain-text decode error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Key-value syntax error at byte {position}: {reason}")]
    KeyValueSyntax { position: usize, reason: &'static str },

    #[error("Stored value is not a mapping (found {0})")]
    NotAMapping(&'static str),

    #[error("Mapping key is not a string")]
    NonStringKey,

    #[error("Submodel construction failed: {0}")]
    Construction(#[from] SubmodelError),
}

impl CodecError {
    /// A decoded document that should have been a mapping was not one
    pub fn not_a_mapping(found: &serde_json::Value) -> Self {
        let kind = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        };
        Self::NotAMapping(kind)
    }
}
