use crate::model::{DeriveParameter, DeriveValue, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParameter {
    /// Generate the statement that adds this field to the `clp` under construction.
    /// The field is borrowed from `self` as its slot.
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            parameter_type,
            help,
        } = self;
        let help = help.map(|DeriveValue { tokens }| quote! { .help(#tokens) });

        match parameter_type {
            ParameterType::Option { short, default } => {
                let option_name = field_name
                    .to_string()
                    .trim_start_matches("r#")
                    .replace('_', "-");
                let short = flatten(short);
                let default = default.map(|DeriveValue { tokens }| quote! { .default(#tokens) });

                quote! {
                    clp = clp.add(Parameter::option(&mut self.#field_name, #option_name, #short) #default #help);
                }
            }
            ParameterType::RequiredArgument => {
                let argument_name = argument_name(&field_name);
                quote! {
                    clp = clp.add(Parameter::argument(&mut self.#field_name, #argument_name) #help);
                }
            }
            ParameterType::OptionalArgument => {
                let argument_name = argument_name(&field_name);
                quote! {
                    clp = clp.add(Parameter::optional(&mut self.#field_name, #argument_name) #help);
                }
            }
            ParameterType::VariadicArgument => {
                let argument_name = argument_name(&field_name);
                quote! {
                    clp = clp.add(Parameter::variadic(&mut self.#field_name, #argument_name) #help);
                }
            }
        }
    }
}

fn argument_name(field_name: &syn::Ident) -> String {
    field_name.to_string().trim_start_matches("r#").to_string()
}

fn flatten(value: Option<DeriveValue>) -> TokenStream2 {
    value.map_or_else(
        || quote! { None },
        |s| {
            let tokens = s.tokens;
            quote! { Some(#tokens) }
        },
    )
}
