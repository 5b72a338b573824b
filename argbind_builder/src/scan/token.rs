use std::collections::HashMap;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The class of a single raw token, decided before it is resolved against a schema.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'t> {
    /// Index of the sub-command named by the token.
    Command(usize),
    /// The literal `--`.
    Terminator,
    /// The text after `--`.
    Long(&'t str),
    /// The text after a single `-`.
    Short(&'t str),
    Value(&'t str),
}

pub(crate) fn classify<'t>(token: &'t str, commands: &HashMap<String, usize>) -> Token<'t> {
    let class = if let Some(index) = commands.get(token) {
        Token::Command(*index)
    } else if token == "--" {
        Token::Terminator
    } else if let Some(text) = token.strip_prefix("--") {
        Token::Long(text)
    } else if let Some(text) = token.strip_prefix('-').filter(|text| !text.is_empty()) {
        Token::Short(text)
    } else {
        Token::Value(token)
    };

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Classified '{token}' as {class:?}.");
    }

    class
}

/// Split `name=value` on the first `=`.
pub(crate) fn split_inline(text: &str) -> (&str, Option<&str>) {
    match text.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (text, None),
    }
}
