//! Derive module for `argbind`.
//! See [documentation root](https://docs.rs/argbind/latest/argbind/derive/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive a command line parser for a struct of named fields.
///
/// Generates two methods on the struct:
/// * `argbind_command(&mut self) -> CommandLineParser<'_>`, which declares each field against its own slot.
/// * `argbind_parse() -> Self`, which builds and runs the parser over the process arguments, starting from `Self::default()`.
///
/// `CommandLineParser` and `Parameter` must be in scope at the derive site.
#[proc_macro_derive(ArgbindParser, attributes(argbind))]
pub fn argbind_parser(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(ast) {
        Ok(derive_parser) => TokenStream2::from(derive_parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
