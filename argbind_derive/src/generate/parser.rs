use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveParser, DeriveValue};

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program,
            about,
            version,
            parameters,
        } = value;
        let program = program.tokens;
        let about = about.map(|DeriveValue { tokens }| {
            quote! {
                clp = clp.about(#tokens);
            }
        });
        let version = version.map(|DeriveValue { tokens }| {
            quote! {
                clp = clp.version(#tokens);
            }
        });
        let fields = parameters
            .into_iter()
            .map(|parameter| parameter.generate())
            .collect::<Vec<_>>();

        quote! {
            impl #struct_name {
                pub fn argbind_command(&mut self) -> CommandLineParser<'_> {
                    #[allow(unused_mut)]
                    let mut clp = CommandLineParser::new(#program);
                    #about
                    #version
                    #( #fields )*
                    clp
                }

                pub fn argbind_parse() -> #struct_name {
                    let mut target = #struct_name::default();
                    target.argbind_command().build().parse();
                    target
                }
            }
        }
    }
}
