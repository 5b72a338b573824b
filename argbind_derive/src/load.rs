mod attribute;
mod parameter;
mod parser;

use crate::model::{DeriveValue, IntermediateAttributes};

fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}

/// Collect the `#[argbind(..)]` attributes, rejecting any flag or key outside those allowed.
fn load_attributes(
    attributes: &[syn::Attribute],
    singletons: &[&str],
    pairs: &[&str],
    span: proc_macro2::Span,
) -> Result<IntermediateAttributes, syn::Error> {
    let mut loaded = IntermediateAttributes::default();

    for attribute in attributes {
        if attribute.path().is_ident("argbind") {
            let intermediate = IntermediateAttributes::try_from(attribute)?;
            loaded.singletons.extend(intermediate.singletons);

            for (key, values) in intermediate.pairs {
                loaded.pairs.entry(key).or_default().extend(values);
            }
        }
    }

    let unknown = loaded
        .singletons
        .iter()
        .filter(|key| !singletons.contains(&key.as_str()))
        .map(|key| format!("#[argbind({key})]"))
        .chain(
            loaded
                .pairs
                .keys()
                .filter(|key| !pairs.contains(&key.as_str()))
                .map(|key| format!("#[argbind({key} = ..)]")),
        )
        .min();

    match unknown {
        Some(attribute) => Err(syn::Error::new(
            span,
            format!("Invalid - unknown attribute `{attribute}`."),
        )),
        None => Ok(loaded),
    }
}

impl IntermediateAttributes {
    /// The final value of a key/value pair; repeated keys override earlier ones.
    fn last(&self, key: &str) -> Option<DeriveValue> {
        self.pairs
            .get(key)
            .and_then(|values| values.last())
            .cloned()
    }
}
