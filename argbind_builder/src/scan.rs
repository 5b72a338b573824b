mod bind;
mod core;
mod token;

pub(crate) use self::core::*;
pub(crate) use bind::*;
