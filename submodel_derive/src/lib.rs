//! Procedural macro for generating submodel field access
//!
//! This crate provides the `Submodel` derive, which generates the static
//! field list and the attribute get/set plumbing for a value-object struct
//! so it can back a single database column.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod expand;
mod parsing;

use expand::generate_submodel_impl;
use parsing::collect_fields;

/// Derive macro for the `Submodel` trait
///
/// Every named field becomes a declared attribute, in declaration order.
/// Field types must implement `serde::Serialize` and
/// `serde::Deserialize`; `Option<String>` is the common case. Fields
/// holding internal bookkeeping (a cached error list, memoized state) are
/// excluded with `#[submodel(skip)]` and never appear in the significant
/// mapping or the stored column.
///
/// Usage:
/// ```ignore
/// use submodel_derive::Submodel;
///
/// #[derive(Debug, Clone, Default, Submodel)]
/// pub struct Address {
///     pub street_1: Option<String>,
///     pub city: Option<String>,
///
///     #[submodel(skip)]
///     pub geocode_cache: Option<String>,
/// }
/// ```
#[proc_macro_derive(Submodel, attributes(submodel))]
pub fn derive_submodel(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // Parse field declarations - handle errors properly
    let fields = match collect_fields(&input) {
        Ok(fields) => fields,
        Err(e) => return e.to_compile_error().into(),
    };

    TokenStream::from(generate_submodel_impl(&input.ident, &fields))
}
