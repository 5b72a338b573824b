use crate::api::parameter::ParameterInner;
use crate::api::Parameter;
use crate::parser::{Command, ConfigError, ConsoleInterface, GeneralParser, Printer, UserInterface};

/// The base command line parser.
///
/// ### Example
/// ```
/// # use argbind_builder as argbind;
/// use argbind::CommandLineParser;
///
/// let parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add and CommandLineParser::command.
///     .build();
/// parser.parse_tokens(&[]).unwrap();
/// ```
pub struct CommandLineParser<'a> {
    command: Command<'a>,
}

impl<'a> std::fmt::Debug for CommandLineParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandLineParser")
            .field("program", &self.command.name)
            .finish()
    }
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            command: Command::new(program),
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final help message will apply.
    ///
    /// An about message documents the command line parser in full sentence/paragraph format.
    /// We recommend allowing `argbind` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    ///
    /// parser.parse_tokens(vec![].as_slice()).unwrap();
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.command.about.replace(description.into());
        self
    }

    /// Declare the version reported by `--version`.
    /// Sub-commands without a version of their own report this one.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .version("1.0.0")
    ///     .build();
    ///
    /// assert_eq!(parser.parse_tokens(vec!["--version"].as_slice()).unwrap_err(), 0);
    /// ```
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.command.version.replace(version.into());
        self
    }

    /// Add an argument/option to the command line parser.
    ///
    /// The order of argument parameters corresponds to their positional order during parsing.
    /// The order of option parameters does not affect the command parser semantics, only the help message.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{CommandLineParser, Parameter};
    ///
    /// let mut a: u64 = 0;
    /// let mut b: u64 = 0;
    /// let parser = CommandLineParser::new("program")
    ///     .add(Parameter::argument(&mut a, "a"))
    ///     .add(Parameter::argument(&mut b, "b"))
    ///     .build();
    ///
    /// parser.parse_tokens(vec!["1", "2"].as_slice()).unwrap();
    ///
    /// assert_eq!(a, 1);
    /// assert_eq!(b, 2);
    /// ```
    pub fn add(mut self, parameter: Parameter<'a>) -> Self {
        add(&mut self.command, parameter);
        self
    }

    /// Setup a sub-command.
    ///
    /// When the sub-command's name is reached during parsing, every remaining token is handed to the sub-command.
    /// Nothing is bound for the parent command in that case, not even its option defaults.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{CommandLineParser, Parameter};
    ///
    /// let mut value_a: u64 = 0;
    /// let mut value_b: u64 = 0;
    /// let parser = CommandLineParser::new("program")
    ///     .command("a", |sub| sub.add(Parameter::argument(&mut value_a, "value_a")))
    ///     .command("b", |sub| {
    ///         sub.about("Description for the sub-command 'b'.")
    ///             .add(Parameter::argument(&mut value_b, "value_b"))
    ///     })
    ///     .build();
    ///
    /// let completion = parser.parse_tokens(vec!["a", "1"].as_slice()).unwrap();
    ///
    /// assert_eq!(completion.commands, vec!["program", "a"]);
    /// assert_eq!(value_a, 1);
    /// assert_eq!(value_b, 0);
    /// ```
    pub fn command(
        mut self,
        name: impl Into<String>,
        setup_fn: impl FnOnce(SubCommand<'a>) -> SubCommand<'a>,
    ) -> Self {
        let sub_command = setup_fn(SubCommand::new(name));
        self.command.commands.push(sub_command.inner);
        self
    }

    fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        let mut command = self.command;
        command.validate()?;
        let version = command.version.clone();
        inherit_version(&mut command, version.as_deref());
        Ok(GeneralParser::new(
            command,
            Printer::terminal(),
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a repeated parameter name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

fn add<'a>(command: &mut Command<'a>, parameter: Parameter<'a>) {
    match parameter.consume() {
        ParameterInner::Opt(option) => command.options.push(option),
        ParameterInner::Arg(argument) => command.arguments.push(argument),
    }
}

fn inherit_version(command: &mut Command, version: Option<&str>) {
    if command.version.is_none() {
        command.version = version.map(str::to_string);
    }

    let version = command.version.clone();

    for sub_command in &mut command.commands {
        inherit_version(sub_command, version.as_deref());
    }
}

/// A sub-command line parser.
///
/// Used with [`CommandLineParser::command`] and [`SubCommand::command`].
pub struct SubCommand<'a> {
    inner: Command<'a>,
}

impl<'a> std::fmt::Debug for SubCommand<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubCommand")
            .field("name", &self.inner.name)
            .finish()
    }
}

impl<'a> SubCommand<'a> {
    fn new(name: impl Into<String>) -> Self {
        SubCommand {
            inner: Command::new(name),
        }
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`SubCommand`] for use in testing.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{Parameter, SubCommand};
    ///
    /// // Function under test.
    /// // We want to make sure the setup_fn is wired up correctly.
    /// pub fn setup_fn<'a>(value: &'a mut u64) -> impl FnOnce(SubCommand<'a>) -> SubCommand<'a> {
    ///     |sub| sub.add(Parameter::argument(value, "value"))
    /// }
    ///
    /// let mut x: u64 = 1;
    /// let parser = setup_fn(&mut x)(SubCommand::test_dummy()).build_parser().unwrap();
    /// parser.parse_tokens(vec!["2"].as_slice()).unwrap();
    /// assert_eq!(x, 2);
    /// ```
    #[cfg(feature = "unit_test")]
    pub fn test_dummy() -> Self {
        SubCommand::new("test-dummy")
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Build a [`GeneralParser`] for testing.
    /// See [`SubCommand::test_dummy`] for an example.
    #[cfg(feature = "unit_test")]
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        CommandLineParser { command: self.inner }
            .build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Document the about message for this sub-command.
    /// If repeated, only the final help message will apply.
    ///
    /// An about message documents the sub-command in full sentence/paragraph format.
    /// It is shown both in the parent's `commands:` section and in the sub-command's own help.
    ///
    /// See [`CommandLineParser::command`] for usage.
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.inner.about.replace(description.into());
        self
    }

    /// Add an argument/option to the sub-command.
    ///
    /// See [`CommandLineParser::add`] for usage.
    pub fn add(mut self, parameter: Parameter<'a>) -> Self {
        add(&mut self.inner, parameter);
        self
    }

    /// Setup a nested sub-command beneath this one.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::{CommandLineParser, Parameter};
    ///
    /// let mut force = false;
    /// let parser = CommandLineParser::new("program")
    ///     .command("remote", |remote| {
    ///         remote.command("remove", |remove| remove.add(Parameter::option(&mut force, "force", Some('f'))))
    ///     })
    ///     .build();
    ///
    /// let completion = parser.parse_tokens(vec!["remote", "remove", "-f"].as_slice()).unwrap();
    ///
    /// assert_eq!(completion.commands, vec!["program", "remote", "remove"]);
    /// assert!(force);
    /// ```
    pub fn command(
        mut self,
        name: impl Into<String>,
        setup_fn: impl FnOnce(SubCommand<'a>) -> SubCommand<'a>,
    ) -> Self {
        let sub_command = setup_fn(SubCommand::new(name));
        self.inner.commands.push(sub_command.inner);
        self
    }
}
