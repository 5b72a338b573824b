//! `argbind` is a command line parser for Rust that binds straight into your variables.
//!
//! A program declares its Cli as a schema: options, positional arguments and sub-commands, each pointing at a variable owned by the program.
//! `argbind` then walks the tokens once, left to right, and writes converted values directly into those variables.
//! There is no intermediate map of matches to query afterwards.
//!
//! `argbind` prioritizes the following design concerns:
//! * *Type safe binding*:
//! The user never calls a `&str -> T` conversion directly; each variable's type determines how its tokens are converted.
//! * *Predictable token handling*:
//! The rules for `--name=value`, `-name` and clustered short flags are fixed and documented below.
//! * *Detailed yet basic UX*:
//! Help, version and error output leave no ambiguity in how to use the program, including a caret under the offending token.
//! Rich display configuration (colour output, shell completions, etc) is out of scope.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_summer.rs")]
//! ```
//!
//! ```console
//! $ summer --help
//! usage: summer [--help] [--version] [-v] [-s SCALE] [ITEM ...]
//!
//! Sum up the items.
//!
//! positional arguments:
//!  [ITEM ...]       The items to sum.                 string
//!
//! options:
//!  --help           Show this help message and exit.
//!  --version        Show the version and exit.
//!  -v, --verbose    Show each item as it is summed.   flag
//!  -s SCALE, --scale SCALE
//!                   Multiply the sum by this much.    integer  default: 1
//!
//! $ summer 1 2 3
//! Sum: 6
//!
//! $ summer -s 2 1 blah
//! Parse error: Failed to set argument 'item', cannot convert 'blah' to integer: invalid digit found in string. Refer to --help for usage information.
//! -s 2 1 blah
//!        ^
//! ```
//!
//! # Builder Api
//! Configure `argbind` by starting with a [`CommandLineParser`] and `add`ing parameters.
//! There are two classes of parameters: options ([`Parameter::option`]) and positional arguments ([`Parameter::argument`], [`Parameter::optional`], [`Parameter::variadic`]).
//!
//! Each parameter takes a mutable reference to the variable it binds.
//! The variable's type decides the value kind:
//! ```console
//! Variable       | Kind              | Notes
//! ------------------------------------------------------------------------
//! bool           | flag              | options only; never takes a value
//! String         | string            |
//! i8 .. i64      | integer           | also isize; out of range text is rejected
//! u8 .. u64      | unsigned integer  | also usize; a leading `-` is rejected
//! f32, f64       | float             |
//! Vec<..>        | (of the above)    | variadic arguments only
//! ```
//!
//! ### Sub-commands
//! Sub-commands are set up with [`CommandLineParser::command`].
//! When a sub-command's name is reached on the Cli, the remaining tokens belong to that sub-command.
//! The parent binds nothing further in that case, not its positionals and not its option defaults.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_sub_command.rs")]
//! ```
//!
//! ### Defaults
//! An option may declare a default, written as it would appear on the Cli.
//! The default is converted and written only when the parse leaves the option untouched.
//! Positional arguments take no defaults.
//! An optional argument left without a token keeps its initial value, as does every argument after it.
//! A variadic argument that is reached is always replaced, with an empty `Vec` when no tokens remain.
//!
//! # Cli Semantics
//! * `--name value` and `--name=value` set an option; only the first `=` separates.
//! * `-name` and `-name=value` behave as their `--` forms when `name` is a declared option.
//! * `-a value` and `-a=value` set an option by its short name.
//! * `-abc` sets the flags `-a -b -c`; every character of a cluster must be a flag.
//! Flags raised before a failing character stay raised.
//! * `--` ends option processing; every later token is positional.
//! * A value is always taken from the next token once an option needs one, even when that token starts with `-`.
//! * `--help` and `--version` are reserved on every command and short circuit the parse.
//! They have no short names, leaving `-h` and `-V` free for the program's own options.
//! * Positionals are bound once the pass completes, in declaration order: required first, then optional, then variadic.
//!
//! Nothing is rolled back on failure: variables written before an error keep their values.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while parsing.
pub mod derive;
pub use argbind_builder::*;
