use crate::load::{incompatible_error, load_attributes};
use crate::model::{DeriveParameter, ParameterType};
use quote::ToTokens;
use syn::spanned::Spanned;

const SINGLETONS: &[&str] = &["option", "optional"];
const PAIRS: &[&str] = &["short", "default", "help"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldShape {
    Flag,
    Sequence,
    Single,
}

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(value.span(), "Invalid - field must be named."))?;
        let attributes = load_attributes(&value.attrs, SINGLETONS, PAIRS, field_name.span())?;
        let explicit_option = attributes.singletons.contains("option");
        let explicit_optional = attributes.singletons.contains("optional");
        let short = attributes.last("short");
        let default = attributes.last("default");
        let help = attributes.last("help");

        if explicit_option && explicit_optional {
            return Err(incompatible_error(
                &field_name,
                "#[argbind(option)]",
                "#[argbind(optional)]",
            ));
        }

        let parameter_type = match (field_shape(&value.ty)?, explicit_option, explicit_optional) {
            (FieldShape::Flag, _, true) => {
                return Err(incompatible_error(&field_name, "bool", "#[argbind(optional)]"));
            }
            (FieldShape::Sequence, _, true) => {
                return Err(incompatible_error(&field_name, "Vec<..>", "#[argbind(optional)]"));
            }
            (FieldShape::Sequence, true, _) => {
                return Err(incompatible_error(&field_name, "Vec<..>", "#[argbind(option)]"));
            }
            (FieldShape::Flag, _, _) | (FieldShape::Single, true, _) => {
                ParameterType::Option { short, default }
            }
            (shape, _, optional) => {
                let positional = match (shape, optional) {
                    (FieldShape::Sequence, _) => ParameterType::VariadicArgument,
                    (_, true) => ParameterType::OptionalArgument,
                    (_, false) => ParameterType::RequiredArgument,
                };

                for (key, declared) in [("short", &short), ("default", &default)] {
                    if declared.is_some() {
                        return Err(syn::Error::new(
                            field_name.span(),
                            format!("Invalid - positional argument cannot have `#[argbind({key} = ..)]`."),
                        ));
                    }
                }

                positional
            }
        };

        Ok(DeriveParameter {
            field_name,
            parameter_type,
            help,
        })
    }
}

fn field_shape(ty: &syn::Type) -> Result<FieldShape, syn::Error> {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) if segment.ident == "bool" => Ok(FieldShape::Flag),
            Some(segment) if segment.ident == "Vec" => Ok(FieldShape::Sequence),
            Some(_) => Ok(FieldShape::Single),
            None => Err(unsupported(ty)),
        },
        _ => Err(unsupported(ty)),
    }
}

fn unsupported(ty: &syn::Type) -> syn::Error {
    syn::Error::new(
        ty.span(),
        format!("Invalid - unsupported field type `{}`.", ty.to_token_stream()),
    )
}
