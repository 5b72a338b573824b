use thiserror::Error;

use crate::api::InvalidConversion;
use crate::constant::OPTION_HINT;
use crate::model::ValueKind;

/// A declaration that cannot form a valid command line parser.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An option name is empty, or contains a leading `-`, an `=`, or whitespace.
    #[error("Config error: invalid option name '{0}'.")]
    InvalidName(String),
    /// An option name is declared more than once (`help` and `version` are reserved).
    #[error("Config error: cannot duplicate the option '--{0}'.")]
    DuplicateOption(String),
    /// A short option is `-`, `=`, or whitespace.
    #[error("Config error: invalid short option '{0}'.")]
    InvalidShortOption(char),
    /// A short option is declared more than once.
    #[error("Config error: cannot duplicate the short option '-{0}'.")]
    DuplicateShortOption(char),
    /// A positional argument name is declared more than once.
    #[error("Config error: cannot duplicate the argument '{0}'.")]
    DuplicateArgument(String),
    /// A positional argument is bound to a flag.
    #[error("Config error: argument '{0}' cannot be a flag.")]
    FlagArgument(String),
    /// A positional argument declares a default.
    #[error("Config error: argument '{0}' cannot have a default.")]
    ArgumentDefault(String),
    /// A second variadic argument is declared.
    #[error("Config error: argument '{0}' cannot be variadic, only one variadic argument is allowed.")]
    MultipleVariadic(String),
    /// An argument is declared after the variadic argument.
    #[error("Config error: argument '{0}' cannot follow a variadic argument.")]
    VariadicNotLast(String),
    /// A required argument is declared after an optional argument.
    #[error("Config error: required argument '{0}' cannot follow an optional argument.")]
    RequiredAfterOptional(String),
    /// A sub-command name is declared more than once.
    #[error("Config error: cannot duplicate the sub-command '{0}'.")]
    DuplicateCommand(String),
}

/// A command line that does not fit its command line parser.
///
/// Positions are token indices into the full command line, including tokens consumed by parent commands.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// An option name has no declaration.
    #[error("Unknown option '{token}'. {hint}", hint = OPTION_HINT)]
    UnknownOption {
        /// The offending token.
        token: String,
        /// Index of the offending token.
        position: usize,
    },
    /// A value taking option reached the end of input.
    #[error("Option '--{option}' needs a {kind} value. {hint}", hint = OPTION_HINT)]
    OptionNeedsValue {
        /// The option name.
        option: String,
        /// The kind of value expected.
        kind: ValueKind,
        /// The end of input.
        position: usize,
    },
    /// An option value (or declared default) failed to convert.
    #[error("Failed to set option '--{option}', {source}. {hint}", hint = OPTION_HINT)]
    SettingOption {
        /// The option name.
        option: String,
        /// Index of the value token; absent when the declared default failed to convert.
        position: Option<usize>,
        /// The conversion failure.
        #[source]
        source: InvalidConversion,
    },
    /// A positional argument value failed to convert.
    #[error("Failed to set argument '{argument}', {source}. {hint}", hint = OPTION_HINT)]
    SettingArgument {
        /// The argument name.
        argument: String,
        /// Index of the value token.
        position: usize,
        /// The conversion failure.
        #[source]
        source: InvalidConversion,
    },
    /// A short option or cluster character has no declaration.
    #[error("Unknown option or cluster '{token}', nothing is declared for '-{short}'. {hint}", hint = OPTION_HINT)]
    UnknownCluster {
        /// The offending token.
        token: String,
        /// The unknown character.
        short: char,
        /// Index of the offending token.
        position: usize,
    },
    /// A cluster character resolves to an option that takes a value.
    #[error("Cluster '{token}' contains a non-flag option '-{short}' (--{option}), a cluster may only contain flags. {hint}", hint = OPTION_HINT)]
    MistypedCluster {
        /// The offending token.
        token: String,
        /// The character of the non-flag option.
        short: char,
        /// The non-flag option name.
        option: String,
        /// Index of the offending token.
        position: usize,
    },
    /// A required positional argument had no token left to bind.
    #[error("Not enough arguments, expected an argument for '{argument}'. {hint}", hint = OPTION_HINT)]
    NotEnoughArgs {
        /// The argument name.
        argument: String,
        /// The end of input.
        position: usize,
    },
    /// The declaration of the command reached during parsing is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ParseError {
    /// The token index the error refers to, when there is one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnknownOption { position, .. }
            | ParseError::OptionNeedsValue { position, .. }
            | ParseError::SettingArgument { position, .. }
            | ParseError::UnknownCluster { position, .. }
            | ParseError::MistypedCluster { position, .. }
            | ParseError::NotEnoughArgs { position, .. } => Some(*position),
            ParseError::SettingOption { position, .. } => *position,
            ParseError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;

    #[test]
    fn config_error_prefix() {
        let error = ConfigError::DuplicateShortOption('v');
        assert_eq!(
            error.to_string(),
            "Config error: cannot duplicate the short option '-v'."
        );
    }

    #[test]
    fn parse_error_hint() {
        let error = ParseError::UnknownOption {
            token: "--moot".to_string(),
            position: 3,
        };
        assert_eq!(
            error.to_string(),
            "Unknown option '--moot'. Refer to --help for usage information."
        );
        assert_eq!(error.position(), Some(3));
    }

    #[test]
    fn mistyped_cluster_message() {
        let error = ParseError::MistypedCluster {
            token: "-vo".to_string(),
            short: 'o',
            option: "other-value".to_string(),
            position: 0,
        };
        assert_contains!(error.to_string(), "contains a non-flag");
        assert_contains!(error.to_string(), "'-o' (--other-value)");
    }

    #[test]
    fn config_is_transparent() {
        let error = ParseError::from(ConfigError::DuplicateCommand("add".to_string()));
        assert_eq!(
            error.to_string(),
            "Config error: cannot duplicate the sub-command 'add'."
        );
        assert_eq!(error.position(), None);
    }
}
