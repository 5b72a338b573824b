use std::collections::HashMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::{ArgumentTag, ValueKind};
use crate::parser::{ConfigError, ParseError};
use crate::scan::*;
use crate::schema::{validate, ArgumentEntry, OptionEntry, Schema};

/// A successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The command path: the program name, followed by each sub-command that was delegated to.
    pub commands: Vec<String>,
    /// The positional tokens of the final command, in order (including any beyond the declared arguments).
    pub positionals: Vec<String>,
}

/// The outcome of a parse that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every token was consumed and bound.
    Complete(Completion),
    /// Help was requested for the described command.
    Help(Usage),
    /// The version was requested for the described command.
    Version(Usage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionDoc {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) kind: ValueKind,
    pub(crate) default: Option<String>,
    pub(crate) help: Option<String>,
    pub(crate) reserved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgumentDoc {
    pub(crate) name: String,
    pub(crate) tag: ArgumentTag,
    pub(crate) kind: ValueKind,
    pub(crate) help: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandDoc {
    pub(crate) name: String,
    pub(crate) about: Option<String>,
}

/// An owned description of one command, as needed to render its help or version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub(crate) program: String,
    pub(crate) about: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) options: Vec<OptionDoc>,
    pub(crate) arguments: Vec<ArgumentDoc>,
    pub(crate) commands: Vec<CommandDoc>,
}

impl Usage {
    /// The command path, ex: `program sub-command`.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The about paragraph of the command.
    pub fn about(&self) -> Option<&str> {
        self.about.as_deref()
    }

    /// The version of the command.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// One level of a command tree: its declarations and the sub-commands beneath it.
#[derive(Debug)]
pub(crate) struct Command<'a> {
    pub(crate) name: String,
    pub(crate) about: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) options: Vec<OptionEntry<'a>>,
    pub(crate) arguments: Vec<ArgumentEntry<'a>>,
    pub(crate) commands: Vec<Command<'a>>,
}

impl<'a> Command<'a> {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: None,
            version: None,
            options: Vec::default(),
            arguments: Vec::default(),
            commands: Vec::default(),
        }
    }

    /// Validate this command and every sub-command beneath it.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        validate(&self.options, &self.arguments)?;
        command_lookup(&self.commands)?;

        for command in &self.commands {
            command.validate()?;
        }

        Ok(())
    }

    pub(crate) fn usage(&self, program: impl Into<String>) -> Usage {
        let reserved = [OptionEntry::help_flag(), OptionEntry::version_flag()];
        let options = reserved
            .iter()
            .map(|option| option_doc(option, true))
            .chain(self.options.iter().map(|option| option_doc(option, false)))
            .collect();
        let arguments = self
            .arguments
            .iter()
            .map(|argument| ArgumentDoc {
                name: argument.name.clone(),
                tag: argument.tag,
                kind: argument.binding.kind(),
                help: argument.help.clone(),
            })
            .collect();
        let commands = self
            .commands
            .iter()
            .map(|command| CommandDoc {
                name: command.name.clone(),
                about: command.about.clone(),
            })
            .collect();

        Usage {
            program: program.into(),
            about: self.about.clone(),
            version: self.version.clone(),
            options,
            arguments,
            commands,
        }
    }

    /// Parse `tokens` (not including the program name) against this command tree.
    ///
    /// Writes into the bound variables as it goes; nothing is rolled back on failure.
    pub(crate) fn parse(self, tokens: &[String]) -> Result<Outcome, ParseError> {
        let path = vec![self.name.clone()];
        self.parse_at(tokens, 0, path)
    }

    fn parse_at(
        self,
        tokens: &[String],
        base: usize,
        mut path: Vec<String>,
    ) -> Result<Outcome, ParseError> {
        let usage = self.usage(path.join(" "));
        let Command {
            options,
            arguments,
            mut commands,
            ..
        } = self;
        let lookup = command_lookup(&commands)?;
        let mut schema = Schema::build(options, arguments)?;

        match Scanner::new(&mut schema, &lookup, base).scan(tokens)? {
            Scan::Help => Ok(Outcome::Help(usage)),
            Scan::Version => Ok(Outcome::Version(usage)),
            Scan::Delegate { command, index } => {
                let child = commands.swap_remove(command);
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Delegating to sub-command '{}' at token {}.", child.name, base + index);
                }
                path.push(child.name.clone());
                child.parse_at(&tokens[index + 1..], base + index + 1, path)
            }
            Scan::Finished {
                positionals,
                touched,
            } => {
                bind_arguments(&mut schema.arguments, &positionals, base + tokens.len())?;
                apply_defaults(&mut schema.options, &touched)?;

                Ok(Outcome::Complete(Completion {
                    commands: path,
                    positionals: positionals.into_iter().map(|(_, value)| value).collect(),
                }))
            }
        }
    }
}

fn option_doc(option: &OptionEntry, reserved: bool) -> OptionDoc {
    OptionDoc {
        name: option.name.clone(),
        short: option.short,
        kind: option.kind(),
        default: option.default.clone(),
        help: option.help.clone(),
        reserved,
    }
}

fn command_lookup(commands: &[Command]) -> Result<HashMap<String, usize>, ConfigError> {
    let mut lookup = HashMap::default();

    for (index, command) in commands.iter().enumerate() {
        if lookup.insert(command.name.clone(), index).is_some() {
            return Err(ConfigError::DuplicateCommand(command.name.clone()));
        }
    }

    Ok(lookup)
}
