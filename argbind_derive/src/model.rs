use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub(crate) tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

/// The raw contents of an `#[argbind(..)]` attribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub(crate) singletons: HashSet<String>,
    pub(crate) pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ParameterType {
    Option {
        short: Option<DeriveValue>,
        default: Option<DeriveValue>,
    },
    RequiredArgument,
    OptionalArgument,
    VariadicArgument,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub(crate) field_name: syn::Ident,
    pub(crate) parameter_type: ParameterType,
    pub(crate) help: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub(crate) struct_name: syn::Ident,
    pub(crate) program: DeriveValue,
    pub(crate) about: Option<DeriveValue>,
    pub(crate) version: Option<DeriveValue>,
    pub(crate) parameters: Vec<DeriveParameter>,
}
