use crate::api::{Sequence, Slot};
use crate::model::ArgumentTag;
use crate::schema::{ArgumentEntry, Binding, OptionEntry, Target};

pub(super) enum ParameterInner<'a> {
    Opt(OptionEntry<'a>),
    Arg(ArgumentEntry<'a>),
}

impl<'a> std::fmt::Debug for ParameterInner<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (class, kind, name, short, help) = match self {
            ParameterInner::Opt(option) => (
                "Opt".to_string(),
                option.kind(),
                format!("--{n}", n = option.name),
                match &option.short {
                    Some(s) => format!(" -{s}"),
                    None => "".to_string(),
                },
                &option.help,
            ),
            ParameterInner::Arg(argument) => (
                format!("Arg({})", argument.tag),
                argument.binding.kind(),
                argument.name.clone(),
                "".to_string(),
                &argument.help,
            ),
        };
        let help = if let Some(d) = help {
            format!(", {d}")
        } else {
            "".to_string()
        };

        write!(f, "{class}[{kind}, {name}{short}{help}]")
    }
}

/// An argument/option for the command parser.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add) and [`SubCommand::add`](./struct.SubCommand.html#method.add).
pub struct Parameter<'a>(ParameterInner<'a>);

impl<'a> std::fmt::Debug for Parameter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<'a> Parameter<'a> {
    /// Create an option parameter.
    /// A `bool` slot makes a flag, which never takes a value.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::Parameter;
    ///
    /// let mut verbose: bool = false;
    /// let mut other_value: i64 = 0;
    /// Parameter::option(&mut verbose, "verbose", Some('v'));
    /// Parameter::option(&mut other_value, "other-value", None);
    /// ```
    pub fn option(slot: impl Into<Slot<'a>>, name: impl Into<String>, short: Option<char>) -> Self {
        Self(ParameterInner::Opt(OptionEntry {
            name: name.into(),
            short,
            default: None,
            help: None,
            target: Target::Slot(slot.into()),
        }))
    }

    /// Create a required positional argument parameter.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::Parameter;
    ///
    /// let mut count: u64 = 0;
    /// Parameter::argument(&mut count, "count");
    /// ```
    pub fn argument(slot: impl Into<Slot<'a>>, name: impl Into<String>) -> Self {
        Self::positional(ArgumentTag::Required, Binding::Single(slot.into()), name)
    }

    /// Create an optional positional argument parameter.
    /// The variable is left untouched when the tokens run out before reaching it.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::Parameter;
    ///
    /// let mut ratio: f64 = 0.5;
    /// Parameter::optional(&mut ratio, "ratio");
    /// ```
    pub fn optional(slot: impl Into<Slot<'a>>, name: impl Into<String>) -> Self {
        Self::positional(ArgumentTag::Optional, Binding::Single(slot.into()), name)
    }

    /// Create a variadic positional argument parameter, which receives all remaining positional tokens.
    /// Must be the final positional argument.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::Parameter;
    ///
    /// let mut items: Vec<String> = Vec::default();
    /// Parameter::variadic(&mut items, "items");
    /// ```
    pub fn variadic(sequence: impl Into<Sequence<'a>>, name: impl Into<String>) -> Self {
        Self::positional(ArgumentTag::Variadic, Binding::Many(sequence.into()), name)
    }

    fn positional(tag: ArgumentTag, binding: Binding<'a>, name: impl Into<String>) -> Self {
        Self(ParameterInner::Arg(ArgumentEntry {
            name: name.into(),
            tag,
            default: None,
            help: None,
            binding,
        }))
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply to the parameter.
    ///
    /// A help message describes the parameter in full sentence/paragraph format.
    /// We recommend allowing `argbind` to format this field (ex: it is not recommended to use line breaks `'\n'`).
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::Parameter;
    ///
    /// let mut verbose: bool = false;
    /// Parameter::option(&mut verbose, "verbose", None)
    ///     .help("--this will get discarded--")
    ///     .help("Make the program output verbose.  Description may include multiple sentences.");
    /// ```
    pub fn help(self, description: impl Into<String>) -> Self {
        let mut inner = self.0;
        match &mut inner {
            ParameterInner::Opt(option) => option.help = Some(description.into()),
            ParameterInner::Arg(argument) => argument.help = Some(description.into()),
        }
        Self(inner)
    }

    /// Declare the default of this option, as it would be written on the command line.
    /// The default is converted and written only when the parse leaves the option untouched.
    /// If repeated, only the final default will apply.
    ///
    /// Only options take a default; declaring one on a positional argument fails when the parser is built.
    ///
    /// ### Example
    /// ```
    /// # use argbind_builder as argbind;
    /// use argbind::Parameter;
    ///
    /// let mut other_value: i64 = 0;
    /// Parameter::option(&mut other_value, "other-value", Some('o')).default("69");
    /// ```
    pub fn default(self, value: impl Into<String>) -> Self {
        let mut inner = self.0;
        match &mut inner {
            ParameterInner::Opt(option) => option.default = Some(value.into()),
            ParameterInner::Arg(argument) => argument.default = Some(value.into()),
        }
        Self(inner)
    }

    pub(super) fn consume(self) -> ParameterInner<'a> {
        self.0
    }
}
