use std::num::{ParseFloatError, ParseIntError};
use std::str::{FromStr, ParseBoolError};

use thiserror::Error;

use crate::model::ValueKind;

/// A token that could not be converted into the kind of its slot.
///
/// The underlying standard library conversion error is kept as the source.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidConversion {
    /// Integer text did not parse, or was out of range for the kind.
    #[error("cannot convert '{token}' to {kind}: {source}")]
    Integer {
        /// The rejected token.
        token: String,
        /// The kind that was expected.
        kind: ValueKind,
        /// The underlying conversion error.
        #[source]
        source: ParseIntError,
    },
    /// Float text did not parse.
    #[error("cannot convert '{token}' to {kind}: {source}")]
    Float {
        /// The rejected token.
        token: String,
        /// The kind that was expected.
        kind: ValueKind,
        /// The underlying conversion error.
        #[source]
        source: ParseFloatError,
    },
    /// Flag text was neither `true` nor `false`.
    #[error("cannot convert '{token}' to {kind}: {source}")]
    Flag {
        /// The rejected token.
        token: String,
        /// The kind that was expected.
        kind: ValueKind,
        /// The underlying conversion error.
        #[source]
        source: ParseBoolError,
    },
}

impl InvalidConversion {
    /// The raw token which failed to convert.
    pub fn token(&self) -> &str {
        match self {
            InvalidConversion::Integer { token, .. }
            | InvalidConversion::Float { token, .. }
            | InvalidConversion::Flag { token, .. } => token,
        }
    }
}

pub(crate) fn coerce_signed<T>(token: &str) -> Result<T, InvalidConversion>
where
    T: FromStr<Err = ParseIntError>,
{
    token
        .parse::<T>()
        .map_err(|source| InvalidConversion::Integer {
            token: token.to_string(),
            kind: ValueKind::Integer,
            source,
        })
}

/// Negative text is rejected by the unsigned `FromStr` implementations.
pub(crate) fn coerce_unsigned<T>(token: &str) -> Result<T, InvalidConversion>
where
    T: FromStr<Err = ParseIntError>,
{
    token
        .parse::<T>()
        .map_err(|source| InvalidConversion::Integer {
            token: token.to_string(),
            kind: ValueKind::Unsigned,
            source,
        })
}

pub(crate) fn coerce_float<T>(token: &str) -> Result<T, InvalidConversion>
where
    T: FromStr<Err = ParseFloatError>,
{
    token
        .parse::<T>()
        .map_err(|source| InvalidConversion::Float {
            token: token.to_string(),
            kind: ValueKind::Float,
            source,
        })
}

pub(crate) fn coerce_flag(token: &str) -> Result<bool, InvalidConversion> {
    token
        .parse::<bool>()
        .map_err(|source| InvalidConversion::Flag {
            token: token.to_string(),
            kind: ValueKind::Flag,
            source,
        })
}
