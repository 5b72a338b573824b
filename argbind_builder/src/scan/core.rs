use std::collections::{HashMap, HashSet};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::ValueKind;
use crate::parser::ParseError;
use crate::scan::token::*;
use crate::schema::{Schema, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sentinel {
    Help,
    Version,
}

/// The outcome of resolving one option token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Continue the scan from this cursor.
    Next(usize),
    Stop(Sentinel),
}

/// The result of scanning one command's tokens.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Scan {
    /// Every token was classified.
    /// Positional values carry their index into the full command line.
    Finished {
        positionals: Vec<(usize, String)>,
        touched: HashSet<usize>,
    },
    /// A sub-command token was reached at `index`; nothing after it was looked at.
    Delegate { command: usize, index: usize },
    Help,
    Version,
}

/// A single left to right pass over the tokens of one command.
pub(crate) struct Scanner<'s, 'a> {
    schema: &'s mut Schema<'a>,
    commands: &'s HashMap<String, usize>,
    base: usize,
    // Indices into `schema.options` set during this scan.
    touched: HashSet<usize>,
}

impl<'s, 'a> Scanner<'s, 'a> {
    pub(crate) fn new(
        schema: &'s mut Schema<'a>,
        commands: &'s HashMap<String, usize>,
        base: usize,
    ) -> Self {
        Self {
            schema,
            commands,
            base,
            touched: HashSet::default(),
        }
    }

    pub(crate) fn scan(mut self, tokens: &[String]) -> Result<Scan, ParseError> {
        let mut positionals = Vec::default();
        let mut cursor = 0;

        while cursor < tokens.len() {
            let step = match classify(&tokens[cursor], self.commands) {
                Token::Command(command) => {
                    return Ok(Scan::Delegate {
                        command,
                        index: cursor,
                    });
                }
                Token::Terminator => {
                    positionals.extend(
                        tokens
                            .iter()
                            .enumerate()
                            .skip(cursor + 1)
                            .map(|(i, token)| (self.base + i, token.clone())),
                    );
                    break;
                }
                Token::Long(text) => self.long(text, tokens, cursor)?,
                Token::Short(text) => self.short(text, tokens, cursor)?,
                Token::Value(value) => {
                    positionals.push((self.base + cursor, value.to_string()));
                    Step::Next(cursor + 1)
                }
            };

            match step {
                Step::Next(next) => cursor = next,
                Step::Stop(Sentinel::Help) => return Ok(Scan::Help),
                Step::Stop(Sentinel::Version) => return Ok(Scan::Version),
            }
        }

        Ok(Scan::Finished {
            positionals,
            touched: self.touched,
        })
    }

    fn long(&mut self, text: &str, tokens: &[String], cursor: usize) -> Result<Step, ParseError> {
        let (name, inline) = split_inline(text);

        match self.schema.by_name(name) {
            Some(index) => self.apply(index, inline, tokens, cursor),
            None => Err(ParseError::UnknownOption {
                token: tokens[cursor].clone(),
                position: self.base + cursor,
            }),
        }
    }

    fn short(&mut self, text: &str, tokens: &[String], cursor: usize) -> Result<Step, ParseError> {
        if let (name, Some(value)) = split_inline(text) {
            let index = self.schema.by_name(name).or_else(|| {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(short), None) => self.schema.by_short(short),
                    _ => None,
                }
            });

            return match index {
                Some(index) => self.apply(index, Some(value), tokens, cursor),
                None => Err(ParseError::UnknownOption {
                    token: tokens[cursor].clone(),
                    position: self.base + cursor,
                }),
            };
        }

        if let Some(index) = self.schema.by_name(text) {
            return self.apply(index, None, tokens, cursor);
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => match self.schema.by_short(short) {
                Some(index) => self.apply(index, None, tokens, cursor),
                None => Err(ParseError::UnknownCluster {
                    token: tokens[cursor].clone(),
                    short,
                    position: self.base + cursor,
                }),
            },
            _ => self.cluster(text, tokens, cursor),
        }
    }

    /// Raise every flag in the cluster, left to right.
    /// Flags raised before a failing character stay raised.
    fn cluster(&mut self, text: &str, tokens: &[String], cursor: usize) -> Result<Step, ParseError> {
        let position = self.base + cursor;

        for short in text.chars() {
            let index = match self.schema.by_short(short) {
                Some(index) => index,
                None => {
                    return Err(ParseError::UnknownCluster {
                        token: tokens[cursor].clone(),
                        short,
                        position,
                    });
                }
            };
            let option = &mut self.schema.options[index];

            match &mut option.target {
                Target::Help => return Ok(Step::Stop(Sentinel::Help)),
                Target::Version => return Ok(Step::Stop(Sentinel::Version)),
                Target::Slot(slot) if slot.kind() == ValueKind::Flag => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Cluster '{t}' raised '--{n}'.", t = tokens[cursor], n = option.name);
                    }
                    slot.raise();
                    self.touched.insert(index);
                }
                Target::Slot(_) => {
                    return Err(ParseError::MistypedCluster {
                        token: tokens[cursor].clone(),
                        short,
                        option: option.name.clone(),
                        position,
                    });
                }
            }
        }

        Ok(Step::Next(cursor + 1))
    }

    /// Resolve the option at `index`, reached from the token at `cursor`.
    ///
    /// A flag is raised and ignores any inline value.
    /// Any other option takes the inline value when present, otherwise the following token.
    fn apply(
        &mut self,
        index: usize,
        inline: Option<&str>,
        tokens: &[String],
        cursor: usize,
    ) -> Result<Step, ParseError> {
        let base = self.base;
        let option = &mut self.schema.options[index];
        let slot = match &mut option.target {
            Target::Help => return Ok(Step::Stop(Sentinel::Help)),
            Target::Version => return Ok(Step::Stop(Sentinel::Version)),
            Target::Slot(slot) => slot,
        };

        if slot.kind() == ValueKind::Flag {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Raised '--{n}'.", n = option.name);
            }
            slot.raise();
            self.touched.insert(index);
            return Ok(Step::Next(cursor + 1));
        }

        let (value, at, next) = match inline {
            Some(value) => (value, cursor, cursor + 1),
            None => match tokens.get(cursor + 1) {
                Some(value) => (value.as_str(), cursor + 1, cursor + 2),
                None => {
                    return Err(ParseError::OptionNeedsValue {
                        option: option.name.clone(),
                        kind: slot.kind(),
                        position: base + tokens.len(),
                    });
                }
            },
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Setting '--{n}' to '{value}'.", n = option.name);
        }

        slot.set(value).map_err(|source| ParseError::SettingOption {
            option: option.name.clone(),
            position: Some(base + at),
            source,
        })?;
        self.touched.insert(index);
        Ok(Step::Next(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArgumentTag;
    use crate::schema::test::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn run(schema: &mut Schema, values: &[&str]) -> Result<Scan, ParseError> {
        let commands = HashMap::default();
        Scanner::new(schema, &commands, 0).scan(&tokens(values))
    }

    fn positionals(scan: Scan) -> Vec<String> {
        match scan {
            Scan::Finished { positionals, .. } => {
                positionals.into_iter().map(|(_, value)| value).collect()
            }
            _ => panic!("scan did not finish: {scan:?}"),
        }
    }

    #[test]
    fn scan_empty() {
        // Setup
        let mut schema = Schema::build(Vec::default(), Vec::default()).unwrap();

        // Execute
        let scan = run(&mut schema, &[]).unwrap();

        // Verify
        assert_eq!(
            scan,
            Scan::Finished {
                positionals: Vec::default(),
                touched: HashSet::default(),
            }
        );
    }

    #[rstest]
    #[case(vec!["--verbose"])]
    #[case(vec!["-v"])]
    #[case(vec!["-verbose"])]
    #[case(vec!["--verbose=false"])]
    #[case(vec!["-vx"])]
    #[case(vec!["-xv"])]
    fn flag(#[case] values: Vec<&str>) {
        // Setup
        let mut verbose = false;
        let mut extra = false;
        let options = vec![
            option("verbose", Some('v'), &mut verbose),
            option("extra", Some('x'), &mut extra),
        ];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let scan = run(&mut schema, &values).unwrap();

        // Verify
        assert_matches!(scan, Scan::Finished { positionals, touched } => {
            assert!(positionals.is_empty());
            assert!(touched.contains(&2));
        });
        drop(schema);
        assert!(verbose);
    }

    #[rstest]
    #[case(vec!["--value", "7"])]
    #[case(vec!["--value=7"])]
    #[case(vec!["-n", "7"])]
    #[case(vec!["-n=7"])]
    #[case(vec!["-value", "7"])]
    #[case(vec!["-value=7"])]
    fn option_value(#[case] values: Vec<&str>) {
        // Setup
        let mut value: i64 = 0;
        let options = vec![option("value", Some('n'), &mut value)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let scan = run(&mut schema, &values).unwrap();

        // Verify
        assert!(positionals(scan).is_empty());
        drop(schema);
        assert_eq!(value, 7);
    }

    #[test]
    fn inline_and_separate_agree() {
        for _ in 0..16 {
            // Setup
            let expected: i64 = thread_rng().gen();
            let mut inline: i64 = 0;
            let mut separate: i64 = 0;
            let mut schema_a =
                Schema::build(vec![option("value", None, &mut inline)], Vec::default()).unwrap();
            let mut schema_b =
                Schema::build(vec![option("value", None, &mut separate)], Vec::default())
                    .unwrap();

            // Execute
            run(&mut schema_a, &[format!("--value={expected}").as_str()]).unwrap();
            run(&mut schema_b, &["--value", expected.to_string().as_str()]).unwrap();

            // Verify
            drop(schema_a);
            drop(schema_b);
            assert_eq!(inline, expected);
            assert_eq!(separate, expected);
        }
    }

    #[test]
    fn option_value_looks_like_option() {
        // Setup
        let mut value = String::default();
        let mut verbose = false;
        let options = vec![
            option("value", None, &mut value),
            option("verbose", Some('v'), &mut verbose),
        ];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        run(&mut schema, &["--value", "-v"]).unwrap();

        // Verify
        drop(schema);
        assert_eq!(value, "-v");
        assert!(!verbose);
    }

    #[test]
    fn option_repeated_last_wins() {
        // Setup
        let mut value = String::default();
        let options = vec![option("value", None, &mut value)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        run(&mut schema, &["--value", "a", "--value=b"]).unwrap();

        // Verify
        drop(schema);
        assert_eq!(value, "b");
    }

    #[rstest]
    #[case(vec!["--value"], 1)]
    #[case(vec!["a", "--value"], 2)]
    #[case(vec!["-n"], 1)]
    #[case(vec!["-value"], 1)]
    fn option_needs_value(#[case] values: Vec<&str>, #[case] expected_position: usize) {
        // Setup
        let mut value: f64 = 0.0;
        let options = vec![option("value", Some('n'), &mut value)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let error = run(&mut schema, &values).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::OptionNeedsValue { option, kind, position } => {
            assert_eq!(option, "value");
            assert_eq!(kind, ValueKind::Float);
            assert_eq!(position, expected_position);
        });
    }

    #[rstest]
    #[case(vec!["--value", "abc"], 1)]
    #[case(vec!["--value=abc"], 0)]
    #[case(vec!["x", "-n=abc"], 1)]
    #[case(vec!["--value", "-1"], 1)]
    fn setting_option(#[case] values: Vec<&str>, #[case] expected_position: usize) {
        // Setup
        let mut value: u64 = 5;
        let options = vec![option("value", Some('n'), &mut value)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let error = run(&mut schema, &values).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::SettingOption { option, position, .. } => {
            assert_eq!(option, "value");
            assert_eq!(position, Some(expected_position));
        });
        drop(schema);
        assert_eq!(value, 5);
    }

    #[rstest]
    #[case(vec!["--moot"], "--moot", 0)]
    #[case(vec!["a", "--moot=1"], "--moot=1", 1)]
    #[case(vec!["-moot=1"], "-moot=1", 0)]
    #[case(vec!["-x=1"], "-x=1", 0)]
    #[case(vec!["---"], "---", 0)]
    fn unknown_option(
        #[case] values: Vec<&str>,
        #[case] expected_token: &str,
        #[case] expected_position: usize,
    ) {
        // Setup
        let mut verbose = false;
        let options = vec![option("verbose", Some('v'), &mut verbose)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let error = run(&mut schema, &values).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::UnknownOption { token, position } => {
            assert_eq!(token, expected_token);
            assert_eq!(position, expected_position);
        });
    }

    #[rstest]
    #[case(vec!["-x"], "-x", 'x')]
    #[case(vec!["-vx"], "-vx", 'x')]
    #[case(vec!["-h"], "-h", 'h')]
    fn unknown_cluster(
        #[case] values: Vec<&str>,
        #[case] expected_token: &str,
        #[case] expected_short: char,
    ) {
        // Setup
        let mut verbose = false;
        let options = vec![option("verbose", Some('v'), &mut verbose)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let error = run(&mut schema, &values).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::UnknownCluster { token, short, position } => {
            assert_eq!(token, expected_token);
            assert_eq!(short, expected_short);
            assert_eq!(position, 0);
        });
    }

    #[test]
    fn mistyped_cluster_keeps_earlier_flags() {
        // Setup
        let mut verbose = false;
        let mut extra = false;
        let mut other: i64 = 0;
        let options = vec![
            option("verbose", Some('v'), &mut verbose),
            option("other-value", Some('o'), &mut other),
            option("extra", Some('x'), &mut extra),
        ];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let error = run(&mut schema, &["-vox"]).unwrap_err();

        // Verify
        assert_matches!(error, ParseError::MistypedCluster { token, short, option, position } => {
            assert_eq!(token, "-vox");
            assert_eq!(short, 'o');
            assert_eq!(option, "other-value");
            assert_eq!(position, 0);
        });
        drop(schema);
        assert!(verbose);
        assert!(!extra);
        assert_eq!(other, 0);
    }

    #[rstest]
    #[case(vec!["--help"], Scan::Help)]
    #[case(vec!["--version"], Scan::Version)]
    #[case(vec!["-help"], Scan::Help)]
    #[case(vec!["--help=1"], Scan::Help)]
    #[case(vec!["--value", "1", "--help", "--moot"], Scan::Help)]
    #[case(vec!["--version", "--help"], Scan::Version)]
    fn sentinel(#[case] values: Vec<&str>, #[case] expected: Scan) {
        // Setup
        let mut value: i64 = 0;
        let options = vec![option("value", None, &mut value)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let scan = run(&mut schema, &values).unwrap();

        // Verify
        assert_eq!(scan, expected);
    }

    #[test]
    fn help_keeps_earlier_options() {
        // Setup
        let mut value: i64 = 0;
        let options = vec![option("value", None, &mut value)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let scan = run(&mut schema, &["--value", "3", "--help"]).unwrap();

        // Verify
        assert_eq!(scan, Scan::Help);
        drop(schema);
        assert_eq!(value, 3);
    }

    #[rstest]
    #[case(vec!["--", "-v", "--moot"], vec!["-v", "--moot"])]
    #[case(vec!["a", "--", "--"], vec!["a", "--"])]
    #[case(vec!["--"], vec![])]
    #[case(vec!["-", "b"], vec!["-", "b"])]
    #[case(vec!["a", "-v", "b"], vec!["a", "b"])]
    fn positional_values(#[case] values: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let mut verbose = false;
        let options = vec![option("verbose", Some('v'), &mut verbose)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();

        // Execute
        let scan = run(&mut schema, &values).unwrap();

        // Verify
        assert_eq!(positionals(scan), expected);
    }

    #[test]
    fn positional_offsets() {
        // Setup
        let mut schema = Schema::build(Vec::default(), Vec::default()).unwrap();
        let commands = HashMap::default();

        // Execute
        let scan = Scanner::new(&mut schema, &commands, 3)
            .scan(&tokens(&["a", "--", "b"]))
            .unwrap();

        // Verify
        assert_matches!(scan, Scan::Finished { positionals, .. } => {
            assert_eq!(positionals, vec![(3, "a".to_string()), (5, "b".to_string())]);
        });
    }

    #[rstest]
    #[case(vec!["add"], 0, 0)]
    #[case(vec!["-v", "add", "--moot"], 0, 1)]
    #[case(vec!["x", "remove", "add"], 1, 1)]
    fn delegate(#[case] values: Vec<&str>, #[case] command: usize, #[case] index: usize) {
        // Setup
        let mut verbose = false;
        let options = vec![option("verbose", Some('v'), &mut verbose)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();
        let commands = HashMap::from([("add".to_string(), 0), ("remove".to_string(), 1)]);

        // Execute
        let scan = Scanner::new(&mut schema, &commands, 0)
            .scan(&tokens(&values))
            .unwrap();

        // Verify
        assert_eq!(scan, Scan::Delegate { command, index });
    }

    #[rstest]
    #[case(vec!["--name", "add"])]
    #[case(vec!["--", "add"])]
    fn command_name_as_value(#[case] values: Vec<&str>) {
        // Setup
        let mut name = String::default();
        let options = vec![option("name", None, &mut name)];
        let mut schema = Schema::build(options, Vec::default()).unwrap();
        let commands = HashMap::from([("add".to_string(), 0)]);

        // Execute
        let scan = Scanner::new(&mut schema, &commands, 0)
            .scan(&tokens(&values))
            .unwrap();

        // Verify
        assert_matches!(scan, Scan::Finished { .. });
    }

    #[test]
    fn arguments_do_not_affect_scan() {
        // Setup
        let mut count: i64 = 0;
        let arguments = vec![argument("count", ArgumentTag::Required, &mut count)];
        let mut schema = Schema::build(Vec::default(), arguments).unwrap();

        // Execute
        let scan = run(&mut schema, &["abc"]).unwrap();

        // Verify
        assert_eq!(positionals(scan), vec!["abc"]);
        drop(schema);
        assert_eq!(count, 0);
    }
}
