use std::collections::HashSet;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::ArgumentTag;
use crate::parser::ParseError;
use crate::schema::{ArgumentEntry, Binding, OptionEntry, Target};

/// Bind the positional values of a finished scan to the declared arguments, in order.
///
/// `end` is the index just past the last token, reported when a required argument is left without a value.
/// Values beyond the declared arguments are left unbound.
pub(crate) fn bind_arguments(
    arguments: &mut [ArgumentEntry<'_>],
    positionals: &[(usize, String)],
    end: usize,
) -> Result<(), ParseError> {
    for (offset, argument) in arguments.iter_mut().enumerate() {
        match &mut argument.binding {
            Binding::Many(sequence) => {
                let remaining = positionals.get(offset..).unwrap_or_default();
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Binding {} value(s) to '{}'.", remaining.len(), argument.name);
                }
                sequence
                    .assign(remaining)
                    .map_err(|(position, source)| ParseError::SettingArgument {
                        argument: argument.name.clone(),
                        position,
                        source,
                    })?;
                // Variadic is always last.
                return Ok(());
            }
            Binding::Single(slot) => match positionals.get(offset) {
                Some((position, value)) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Binding '{value}' to '{}'.", argument.name);
                    }
                    slot.set(value)
                        .map_err(|source| ParseError::SettingArgument {
                            argument: argument.name.clone(),
                            position: *position,
                            source,
                        })?;
                }
                None => match argument.tag {
                    ArgumentTag::Required => {
                        return Err(ParseError::NotEnoughArgs {
                            argument: argument.name.clone(),
                            position: end,
                        });
                    }
                    ArgumentTag::Optional | ArgumentTag::Variadic => return Ok(()),
                },
            },
        }
    }

    Ok(())
}

/// Set the declared default of every option the scan left untouched.
pub(crate) fn apply_defaults(
    options: &mut [OptionEntry<'_>],
    touched: &HashSet<usize>,
) -> Result<(), ParseError> {
    for (index, option) in options.iter_mut().enumerate() {
        if touched.contains(&index) {
            continue;
        }

        if let (Some(default), Target::Slot(slot)) = (&option.default, &mut option.target) {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Defaulting '--{n}' to '{default}'.", n = option.name);
            }
            slot.set(default)
                .map_err(|source| ParseError::SettingOption {
                    option: option.name.clone(),
                    position: None,
                    source,
                })?;
        }
    }

    Ok(())
}
