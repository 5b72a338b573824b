use crate::load::load_attributes;
use crate::model::{DeriveParameter, DeriveParser, DeriveValue};
use quote::quote;

const PAIRS: &[&str] = &["program", "about", "version"];

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = load_attributes(&value.attrs, &[], PAIRS, value.ident.span())?;
        let program = attributes.last("program").unwrap_or_else(|| DeriveValue {
            tokens: quote! { env!("CARGO_CRATE_NAME") },
        });
        let parameters = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .map(DeriveParameter::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            syn::Data::Struct(_) => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - parser struct must have named fields.",
                ));
            }
            syn::Data::Enum(_) | syn::Data::Union(_) => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - parser must be a struct.",
                ));
            }
        };

        Ok(DeriveParser {
            struct_name: value.ident.clone(),
            program,
            about: attributes.last("about"),
            version: attributes.last("version"),
            parameters,
        })
    }
}
