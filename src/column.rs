//! Submodel column declarations
//!
//! This module contains the once-per-declaration object binding a host
//! attribute to its codec, validation options, and composed validation
//! rules.

use crate::errors::DeclarationError;
use crate::schema::RecordSchema;
use column_codec::{CodecError, ColumnType, ColumnValue, SubmodelCodec};
use sub_object::{to_sentence, Errors, Submodel, SubmodelField, Validate, Wrapped};

type ExtensionRule<T> = Box<dyn Fn(&Wrapped<T>, &mut Errors) + Send + Sync>;

/// Declaration of one submodel-backed column on a host record type
///
/// Built once per (host type, attribute) pair at definition time, then
/// shared read-only by every record instance. The declaration carries no
/// per-record state; record state lives in the record's
/// [`SubmodelField`].
pub struct SubmodelColumn<T: Submodel> {
    attribute: &'static str,
    codec: SubmodelCodec<T>,
    allow_blank: bool,
    extensions: Vec<ExtensionRule<T>>,
}

impl<T: Submodel> std::fmt::Debug for SubmodelColumn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmodelColumn")
            .field("attribute", &self.attribute)
            .field("allow_blank", &self.allow_blank)
            .field("extensions", &self.extensions.len())
            .finish()
    }
}

impl<T: Submodel> SubmodelColumn<T> {
    /// Declare against the host's column registry
    pub fn declare<R: RecordSchema>(attribute: &'static str) -> Result<Self, DeclarationError> {
        let column = R::column_type(attribute).ok_or(DeclarationError::UnknownColumn {
            table: R::table_name(),
            attribute,
        })?;
        crate::debug_log!(
            "[DECLARE] {}.{} stored as {:?}",
            R::table_name(),
            attribute,
            column
        );
        Ok(Self::new(attribute, column))
    }

    /// Declare with an explicit column type, bypassing a schema lookup
    pub fn new(attribute: &'static str, column: ColumnType) -> Self {
        Self {
            attribute,
            codec: SubmodelCodec::for_column(column),
            allow_blank: false,
            extensions: Vec::new(),
        }
    }

    /// Skip validation when the stored instance is blank
    pub fn allow_blank(mut self, allow_blank: bool) -> Self {
        self.allow_blank = allow_blank;
        self
    }

    /// Attach an additional validation rule to this declaration only
    ///
    /// Rules run after the value object's own validation and report into
    /// the same nested collection, so their messages join the same
    /// sentence. Other declarations of the same value type are unaffected.
    pub fn extend(
        mut self,
        rule: impl Fn(&Wrapped<T>, &mut Errors) + Send + Sync + 'static,
    ) -> Self {
        self.extensions.push(Box::new(rule));
        self
    }

    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    pub fn codec(&self) -> &SubmodelCodec<T> {
        &self.codec
    }

    /// Materialize an instance from the raw stored value
    pub fn load(&self, raw: &ColumnValue) -> Result<Option<Wrapped<T>>, CodecError> {
        self.codec.load(raw)
    }

    /// Serialize an instance for storage; blank instances dump to `None`
    pub fn dump(&self, object: &Wrapped<T>) -> Result<Option<ColumnValue>, CodecError> {
        self.codec.dump(object)
    }

    /// Load the raw stored value into field storage
    pub fn load_field(
        &self,
        raw: &ColumnValue,
        field: &mut SubmodelField<T>,
    ) -> Result<(), CodecError> {
        field.replace(self.codec.load(raw)?);
        Ok(())
    }

    /// Dump field storage to the raw stored value
    ///
    /// Unset and blank values both store NULL.
    pub fn dump_field(&self, field: &SubmodelField<T>) -> Result<ColumnValue, CodecError> {
        match field.peek() {
            Some(object) => Ok(self.codec.dump(object)?.unwrap_or(ColumnValue::Null)),
            None => Ok(ColumnValue::Null),
        }
    }

    /// Delegate validation of the current value into the host's errors
    ///
    /// An absent value adds nothing; whether the attribute may be absent is
    /// the host's own validation concern. A failing value adds one error
    /// under the attribute, its message being the nested full messages
    /// joined into a single lower-cased sentence.
    pub fn validate_into(&self, value: Option<&Wrapped<T>>, errors: &mut Errors)
    where
        T: Validate,
    {
        let Some(object) = value else {
            return;
        };
        if self.allow_blank && object.is_blank() {
            return;
        }

        let mut nested = Errors::new();
        object.validate(&mut nested);
        for rule in &self.extensions {
            rule(object, &mut nested);
        }

        if !nested.is_empty() {
            errors.add(
                self.attribute,
                to_sentence(&nested.full_messages()).to_lowercase(),
            );
        }
    }
}
