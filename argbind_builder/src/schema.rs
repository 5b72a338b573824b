mod model;

pub(crate) use model::*;

#[cfg(test)]
pub(crate) use model::test;

use std::collections::{HashMap, HashSet};

use crate::constant::*;
use crate::model::{ArgumentTag, ValueKind};
use crate::parser::ConfigError;

/// The declared options and positionals of one command, with the lookups a scan resolves against.
///
/// The reserved `help` and `version` flags always occupy the first two option indices.
#[derive(Debug)]
pub(crate) struct Schema<'a> {
    pub(crate) options: Vec<OptionEntry<'a>>,
    names: HashMap<String, usize>,
    shorts: HashMap<char, usize>,
    pub(crate) arguments: Vec<ArgumentEntry<'a>>,
}

impl<'a> Schema<'a> {
    pub(crate) fn build(
        options: Vec<OptionEntry<'a>>,
        arguments: Vec<ArgumentEntry<'a>>,
    ) -> Result<Self, ConfigError> {
        validate(&options, &arguments)?;
        let mut all_options = vec![OptionEntry::help_flag(), OptionEntry::version_flag()];
        all_options.extend(options);
        let mut names = HashMap::default();
        let mut shorts = HashMap::default();

        for (index, option) in all_options.iter().enumerate() {
            names.insert(option.name.clone(), index);

            if let Some(short) = option.short {
                shorts.insert(short, index);
            }
        }

        Ok(Self {
            options: all_options,
            names,
            shorts,
            arguments,
        })
    }

    pub(crate) fn by_name(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    pub(crate) fn by_short(&self, short: char) -> Option<usize> {
        self.shorts.get(&short).copied()
    }
}

/// Check the declarations of one command without taking ownership of their slots.
pub(crate) fn validate(
    options: &[OptionEntry<'_>],
    arguments: &[ArgumentEntry<'_>],
) -> Result<(), ConfigError> {
    let mut names = HashSet::from([HELP_NAME.to_string(), VERSION_NAME.to_string()]);
    let mut shorts = HashSet::new();

    for option in options {
        if option.name.is_empty()
            || option.name.starts_with('-')
            || option.name.contains('=')
            || option.name.contains(char::is_whitespace)
        {
            return Err(ConfigError::InvalidName(option.name.clone()));
        }

        if !names.insert(option.name.clone()) {
            return Err(ConfigError::DuplicateOption(option.name.clone()));
        }

        if let Some(short) = option.short {
            if short == '-' || short == '=' || short.is_whitespace() {
                return Err(ConfigError::InvalidShortOption(short));
            }

            if !shorts.insert(short) {
                return Err(ConfigError::DuplicateShortOption(short));
            }
        }
    }

    let mut argument_names = HashSet::new();
    let mut seen_optional = false;
    let mut seen_variadic = false;

    for argument in arguments {
        if !argument_names.insert(argument.name.clone()) {
            return Err(ConfigError::DuplicateArgument(argument.name.clone()));
        }

        if argument.binding.kind() == ValueKind::Flag {
            return Err(ConfigError::FlagArgument(argument.name.clone()));
        }

        if argument.default.is_some() {
            return Err(ConfigError::ArgumentDefault(argument.name.clone()));
        }

        match argument.tag {
            _ if seen_variadic && argument.tag == ArgumentTag::Variadic => {
                return Err(ConfigError::MultipleVariadic(argument.name.clone()));
            }
            _ if seen_variadic => {
                return Err(ConfigError::VariadicNotLast(argument.name.clone()));
            }
            ArgumentTag::Required if seen_optional => {
                return Err(ConfigError::RequiredAfterOptional(argument.name.clone()));
            }
            ArgumentTag::Required => {}
            ArgumentTag::Optional => seen_optional = true,
            ArgumentTag::Variadic => seen_variadic = true,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::test::*;
    use super::*;
    use rstest::rstest;

    #[test]
    fn build_empty() {
        // Execute
        let schema = Schema::build(Vec::default(), Vec::default()).unwrap();

        // Verify
        assert_eq!(schema.options.len(), 2);
        assert_matches!(schema.options[0].target, Target::Help);
        assert_matches!(schema.options[1].target, Target::Version);
        assert_eq!(schema.by_name(HELP_NAME), Some(0));
        assert_eq!(schema.by_name(VERSION_NAME), Some(1));
        assert_eq!(schema.by_short('h'), None);
        assert!(schema.arguments.is_empty());
    }

    #[test]
    fn build_lookups() {
        // Setup
        let mut verbose = false;
        let mut other: i64 = 0;
        let options = vec![
            option("verbose", Some('v'), &mut verbose),
            option("other-value", Some('o'), &mut other),
        ];

        // Execute
        let schema = Schema::build(options, Vec::default()).unwrap();

        // Verify
        assert_eq!(schema.by_name("verbose"), Some(2));
        assert_eq!(schema.by_name("other-value"), Some(3));
        assert_eq!(schema.by_name("other"), None);
        assert_eq!(schema.by_short('v'), Some(2));
        assert_eq!(schema.by_short('o'), Some(3));
        assert_eq!(schema.options[3].kind(), ValueKind::Integer);
    }

    #[rstest]
    #[case("")]
    #[case("-verbose")]
    #[case("a=b")]
    #[case("a b")]
    fn invalid_name(#[case] name: &str) {
        // Setup
        let mut verbose = false;
        let options = vec![option(name, None, &mut verbose)];

        // Execute
        let error = Schema::build(options, Vec::default()).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::InvalidName(n) => {
            assert_eq!(n, name);
        });
    }

    #[rstest]
    #[case("help")]
    #[case("version")]
    #[case("verbose")]
    fn duplicate_option(#[case] name: &str) {
        // Setup
        let mut a = false;
        let mut b = false;
        let options = vec![
            option("verbose", None, &mut a),
            option(name, None, &mut b),
        ];

        // Execute
        let error = Schema::build(options, Vec::default()).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::DuplicateOption(n) => {
            assert_eq!(n, name);
        });
    }

    #[test]
    fn duplicate_short_option() {
        // Setup
        let mut a = false;
        let mut b = String::default();
        let options = vec![
            option("flag-a", Some('f'), &mut a),
            option("flag-b", Some('f'), &mut b),
        ];

        // Execute
        let error = Schema::build(options, Vec::default()).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::DuplicateShortOption('f'));
    }

    #[rstest]
    #[case('-')]
    #[case('=')]
    #[case(' ')]
    fn invalid_short_option(#[case] short: char) {
        // Setup
        let mut a = false;
        let options = vec![option("flag", Some(short), &mut a)];

        // Execute
        let error = Schema::build(options, Vec::default()).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::InvalidShortOption(s) => {
            assert_eq!(s, short);
        });
    }

    #[test]
    fn option_and_argument_may_share_name() {
        // Setup
        let mut a = false;
        let mut b: i64 = 0;
        let options = vec![option("item", None, &mut a)];
        let arguments = vec![argument("item", ArgumentTag::Required, &mut b)];

        // Execute
        let result = Schema::build(options, arguments);

        // Verify
        assert!(result.is_ok());
    }

    #[test]
    fn duplicate_argument() {
        // Setup
        let mut a: i64 = 0;
        let mut b = String::default();
        let arguments = vec![
            argument("item", ArgumentTag::Required, &mut a),
            argument("item", ArgumentTag::Optional, &mut b),
        ];

        // Execute
        let error = Schema::build(Vec::default(), arguments).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::DuplicateArgument(n) => {
            assert_eq!(n, "item");
        });
    }

    #[test]
    fn flag_argument() {
        // Setup
        let mut a = false;
        let arguments = vec![argument("item", ArgumentTag::Required, &mut a)];

        // Execute
        let error = Schema::build(Vec::default(), arguments).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::FlagArgument(n) => {
            assert_eq!(n, "item");
        });
    }

    #[test]
    fn argument_default() {
        // Setup
        let mut a: u64 = 0;
        let mut entry = argument("item", ArgumentTag::Optional, &mut a);
        entry.default = Some("1".to_string());

        // Execute
        let error = Schema::build(Vec::default(), vec![entry]).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::ArgumentDefault(n) => {
            assert_eq!(n, "item");
        });
    }

    #[test]
    fn multiple_variadic() {
        // Setup
        let mut a: Vec<String> = Vec::default();
        let mut b: Vec<i64> = Vec::default();
        let arguments = vec![variadic("first", &mut a), variadic("second", &mut b)];

        // Execute
        let error = Schema::build(Vec::default(), arguments).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::MultipleVariadic(n) => {
            assert_eq!(n, "second");
        });
    }

    #[rstest]
    #[case(ArgumentTag::Required)]
    #[case(ArgumentTag::Optional)]
    fn variadic_not_last(#[case] tag: ArgumentTag) {
        // Setup
        let mut a: Vec<String> = Vec::default();
        let mut b = String::default();
        let arguments = vec![variadic("rest", &mut a), argument("item", tag, &mut b)];

        // Execute
        let error = Schema::build(Vec::default(), arguments).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::VariadicNotLast(n) => {
            assert_eq!(n, "item");
        });
    }

    #[test]
    fn required_after_optional() {
        // Setup
        let mut a = String::default();
        let mut b = String::default();
        let arguments = vec![
            argument("maybe", ArgumentTag::Optional, &mut a),
            argument("item", ArgumentTag::Required, &mut b),
        ];

        // Execute
        let error = Schema::build(Vec::default(), arguments).unwrap_err();

        // Verify
        assert_matches!(error, ConfigError::RequiredAfterOptional(n) => {
            assert_eq!(n, "item");
        });
    }

    #[test]
    fn full_ordering() {
        // Setup
        let mut a: i64 = 0;
        let mut b: f64 = 0.0;
        let mut c: Vec<String> = Vec::default();
        let arguments = vec![
            argument("count", ArgumentTag::Required, &mut a),
            argument("ratio", ArgumentTag::Optional, &mut b),
            variadic("input", &mut c),
        ];

        // Execute
        let schema = Schema::build(Vec::default(), arguments).unwrap();

        // Verify
        let tags: Vec<ArgumentTag> = schema.arguments.iter().map(|a| a.tag).collect();
        assert_eq!(
            tags,
            vec![
                ArgumentTag::Required,
                ArgumentTag::Optional,
                ArgumentTag::Variadic
            ]
        );
    }
}
