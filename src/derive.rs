//! Derive Api for `argbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a parameter struct `S` instrumented with `#[derive(Default, ArgbindParser)]`.
//! This generates two functions:
//! * `S::argbind_parse() -> S`, which parses the Cli tokens into a `S::default()`.
//! * `s.argbind_command() -> CommandLineParser`, the underlying builder, bound to the fields of `s`.
//!
//! [`CommandLineParser`](../struct.CommandLineParser.html) and [`Parameter`](../struct.Parameter.html) must be in scope where the derive is applied.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! ### Parser Configuration
//! The struct may be configured with the following attributes:
//! * `#[argbind(program = "..")]` sets the program name (defaults to the crate name).
//! * `#[argbind(about = "..")]` sets the about message.
//! * `#[argbind(version = "..")]` sets the version reported by `--version`.
//!
//! ### Parameter Configuration
//! Each named field becomes a parameter, inferred from its type:
//! ```console
//! Type        | Parameter
//! -----------------------------------
//! bool        | Parameter::option(.., "field-name", ..)
//! Vec<T>      | Parameter::variadic(.., "field_name")
//! T           | Parameter::argument(.., "field_name")
//! ```
//!
//! Option names are the field name with `_` replaced by `-`; positional names are the field name as is.
//! The inference may be adjusted with field attributes:
//! * `#[argbind(option)]` makes a non-`bool` field an option.
//! * `#[argbind(optional)]` makes a field an optional positional argument.
//! * `#[argbind(short = 'c')]` sets the short name of an option.
//! * `#[argbind(default = "..")]` sets the default of an option.
//! * `#[argbind(help = "..")]` sets the help message.
//!
//! Contradicting attributes (ex: `option` with `optional`, or `short` on a positional) are rejected at compile time.
//!
//! ```ignore
//! #[derive(Default, ArgbindParser)]
//! struct Parameters {
//!     quick: u64,
//!     // the above generates:
//!     //  .add(Parameter::argument(&mut self.quick, "quick"))
//!
//!     #[argbind(option, short = 'b', default = "3")]
//!     brown_fox: i64,
//!     // the above generates:
//!     //  .add(Parameter::option(&mut self.brown_fox, "brown-fox", Some('b')).default("3"))
//!
//!     #[argbind(help = "Jump over these.")]
//!     dogs: Vec<String>,
//!     // the above generates:
//!     //  .add(Parameter::variadic(&mut self.dogs, "dogs").help("Jump over these."))
//! }
//! ```

pub use argbind_derive::*;
