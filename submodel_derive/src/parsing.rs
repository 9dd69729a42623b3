//! Field declaration parsing
//!
//! This module extracts the declared attribute list from a struct
//! definition, honoring `#[submodel(skip)]` markers.

use syn::{Data, DeriveInput, Fields};

/// One declared submodel attribute
pub struct SubmodelField {
    pub ident: syn::Ident,
    pub name: String,
}

/// Collect declared attributes in declaration order
pub fn collect_fields(input: &DeriveInput) -> syn::Result<Vec<SubmodelField>> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Submodel cannot be derived for generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Submodel requires named struct fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Submodel can only be derived for structs",
            ))
        }
    };

    let mut declared = Vec::new();
    for field in fields {
        if is_skipped(&field.attrs)? {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        declared.push(SubmodelField {
            name: ident.to_string(),
            ident,
        });
    }

    if declared.is_empty() {
        return Err(syn::Error::new_spanned(
            input,
            "Submodel requires at least one non-skipped field",
        ));
    }

    Ok(declared)
}

fn is_skipped(attrs: &[syn::Attribute]) -> syn::Result<bool> {
    for attr in attrs {
        if !attr.path().is_ident("submodel") {
            continue;
        }
        let mut skip = false;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported submodel attribute; expected `skip`"))
            }
        })?;
        if skip {
            return Ok(true);
        }
    }
    Ok(false)
}
