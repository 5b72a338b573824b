/// The kind of value an option or argument slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A boolean switch; never consumes a value token.
    Flag,
    /// Free text, passed through as is.
    Text,
    /// A signed integer, of any width from `i8` to `i64` or `isize`.
    Integer,
    /// An unsigned integer, of any width from `u8` to `u64` or `usize`.
    Unsigned,
    /// A floating point number (`f32` or `f64`).
    Float,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueKind::Flag => "flag",
            ValueKind::Text => "string",
            ValueKind::Integer => "integer",
            ValueKind::Unsigned => "unsigned integer",
            ValueKind::Float => "float",
        };
        write!(f, "{name}")
    }
}

/// How a positional argument participates in binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentTag {
    /// Must receive a token.
    Required,
    /// May be left unbound when the tokens run out.
    Optional,
    /// Receives every remaining token (zero or more); always last.
    Variadic,
}

impl std::fmt::Display for ArgumentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
