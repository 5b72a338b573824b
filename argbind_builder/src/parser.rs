mod base;
mod error;
mod interface;
mod middleware;
mod printer;

pub(crate) use base::Command;
pub use base::{Completion, Outcome, Usage};
pub use error::*;
pub(crate) use interface::*;
pub use middleware::*;
pub(crate) use printer::*;

#[cfg(test)]
pub(crate) use interface::util;
