//! Trait implementation generation
//!
//! This module generates the `Submodel` implementation from the parsed
//! field declarations.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use crate::parsing::SubmodelField;

pub fn generate_submodel_impl(name: &Ident, fields: &[SubmodelField]) -> TokenStream {
    let type_name = name.to_string();
    let field_names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();

    let get_arms = fields.iter().map(|field| {
        let ident = &field.ident;
        let name = &field.name;
        quote! {
            #name => serde_json::to_value(&self.#ident).ok(),
        }
    });

    let set_arms = fields.iter().map(|field| {
        let ident = &field.ident;
        let name = &field.name;
        quote! {
            #name => {
                self.#ident = serde_json::from_value(value)
                    .map_err(|source| sub_object::SubmodelError::invalid_value(#name, source))?;
            }
        }
    });

    quote! {
        impl sub_object::Submodel for #name {
            fn type_name() -> &'static str {
                #type_name
            }

            fn field_names() -> &'static [&'static str] {
                &[#(#field_names),*]
            }

            fn field(&self, name: &str) -> Option<serde_json::Value> {
                match name {
                    #(#get_arms)*
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: serde_json::Value,
            ) -> Result<(), sub_object::SubmodelError> {
                match name {
                    #(#set_arms)*
                    unknown => {
                        return Err(sub_object::SubmodelError::unknown_attribute(
                            Self::type_name(),
                            unknown,
                        ))
                    }
                }
                Ok(())
            }
        }
    }
}
