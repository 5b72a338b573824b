use std::env;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::parser::base::*;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::{ErrorContext, ParseError};

/// The configured command line parser.
/// Built via `CommandLineParser::build` or `CommandLineParser::build_parser`.
pub struct GeneralParser<'a> {
    command: Command<'a>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> std::fmt::Debug for GeneralParser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("command", &self.command.name)
            .finish()
    }
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(
        command: Command<'a>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            command,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens, without printing anything.
    ///
    /// Tokens are processed in a single left to right pass.
    /// Options are written into their variables as soon as they are resolved, positionals once the pass finishes, and finally defaults for the options left untouched.
    /// When a sub-command token is reached, the remaining tokens are handed to that sub-command and the pass repeats there.
    ///
    /// Nothing is rolled back on failure: variables written before the error keep their values.
    pub fn parse_outcome(self, tokens: &[&str]) -> Result<Outcome, ParseError> {
        let tokens: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
        self.command.parse(&tokens)
    }

    /// Run the command line parser against the input tokens.
    ///
    /// Behaves as [`GeneralParser::parse_outcome`], and then:
    /// * On help (`--help`) or version (`--version`), prints the text and returns `Err(0)`.
    /// * On error, prints the error with the offending token pointed out, and returns `Err(1)`.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<Completion, i32> {
        let GeneralParser {
            command,
            printer,
            user_interface,
        } = self;
        let tokens: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();

        match command.parse(&tokens) {
            Ok(Outcome::Complete(completion)) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Completed parse of '{}'.", completion.commands.join(" "));
                }
                Ok(completion)
            }
            Ok(Outcome::Help(usage)) => {
                printer.print_help(&usage, &*user_interface);
                Err(0)
            }
            Ok(Outcome::Version(usage)) => {
                printer.print_version(&usage, &*user_interface);
                Err(0)
            }
            Err(ParseError::Config(error)) => {
                user_interface.print_error(error.to_string());
                Err(1)
            }
            Err(error) => {
                user_interface.print_error(format!("Parse error: {error}"));

                if let Some(position) = error.position() {
                    user_interface.print_error_context(ErrorContext::new(position, &tokens));
                }

                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves as [`GeneralParser::parse_tokens`], except the process exits (via `std::process::exit`) instead of returning an `Err`.
    pub fn parse(self) -> Completion {
        let command_input: Vec<String> = env::args().skip(1).collect();

        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(completion) => completion,
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        }
    }
}
