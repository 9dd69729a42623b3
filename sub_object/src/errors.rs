use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubmodelError {
    #[error("Unknown attribute `{attribute}` for {type_name}")]
    UnknownAttribute {
        type_name: &'static str,
        attribute: String,
    },

    #[error("Invalid value for `{attribute}`: {source}")]
    InvalidValue {
        attribute: &'static str,
        source: serde_json::Error,
    },

    #[error("Cannot build {type_name} from a non-mapping value")]
    NotAMapping { type_name: &'static str },
}

impl SubmodelError {
    /// Assignment named an attribute the type does not declare
    pub fn unknown_attribute(type_name: &'static str, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            type_name,
            attribute: attribute.into(),
        }
    }

    /// Assignment carried a value the attribute's type rejects
    pub fn invalid_value(attribute: &'static str, source: serde_json::Error) -> Self {
        Self::InvalidValue { attribute, source }
    }
}
