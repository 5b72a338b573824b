//! Builder module for `argbind`.
//! See [documentation root](https://docs.rs/argbind/latest/argbind/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
mod scan;
mod schema;

pub use api::*;
pub use model::*;
pub use parser::{Completion, ConfigError, GeneralParser, Outcome, ParseError, Usage};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {{
            let base = &$base;
            let sub = $sub;
            assert!(base.contains(sub), "'{base}' does not contain '{sub}'");
        }};
    }

    pub(crate) use assert_contains;
}
