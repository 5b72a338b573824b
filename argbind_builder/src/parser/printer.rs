use terminal_size::{terminal_size, Width};

use crate::model::{ArgumentTag, ValueKind};
use crate::parser::base::{ArgumentDoc, CommandDoc, OptionDoc};
use crate::parser::interface::{Columns, UserInterface};
use crate::parser::Usage;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
const DEFAULT_MIDDLE_WIDTH: usize = 17;
const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn print_version(&self, usage: &Usage, user_interface: &(impl UserInterface + ?Sized)) {
        match &usage.version {
            Some(version) => user_interface.print(format!("{} {version}", usage.program)),
            None => user_interface.print(usage.program.clone()),
        }
    }

    pub(crate) fn print_help(&self, usage: &Usage, user_interface: &(impl UserInterface + ?Sized)) {
        let options: Vec<Row> = usage.options.iter().map(option_row).collect();
        let arguments: Vec<Row> = usage.arguments.iter().map(argument_row).collect();
        let commands: Vec<Row> = usage.commands.iter().map(command_row).collect();
        let rows = || options.iter().chain(arguments.iter()).chain(commands.iter());

        let left_column_width = rows()
            .map(|row| row.left.chars().count())
            .max()
            .unwrap_or_default();
        let middle_column_width = rows()
            .map(|row| row.help.chars().count() + MAIN_INDENT)
            .max()
            .unwrap_or_default();
        let mut right_column_widths: Vec<usize> = Vec::default();

        for row in rows() {
            for (i, meta) in row.meta.iter().enumerate() {
                let width = std::cmp::max(1, meta.chars().count());

                if i >= right_column_widths.len() {
                    right_column_widths.push(width);
                } else if right_column_widths[i] < width {
                    right_column_widths[i] = width;
                }
            }
        }

        let columns = match self.terminal_width {
            Some(total) => Columns::fit(
                PADDING_WIDTH,
                left_column_width,
                middle_column_width,
                right_column_widths,
                total,
            ),
            None => Columns::new(
                PADDING_WIDTH,
                left_column_width,
                std::cmp::min(middle_column_width, DEFAULT_MIDDLE_WIDTH),
                right_column_widths,
            ),
        };

        let mut summary: Vec<String> = usage.options.iter().map(option_summary).collect();
        summary.extend(usage.arguments.iter().map(argument_grammar));

        if !usage.commands.is_empty() {
            let names: Vec<&str> = usage.commands.iter().map(|c| c.name.as_str()).collect();
            summary.push(format!("{{{}}} ...", names.join(",")));
        }

        user_interface.print(format!(
            "usage: {p} {s}",
            p = usage.program,
            s = summary.join(" ")
        ));

        if let Some(about) = &usage.about {
            user_interface.print("".to_string());

            match self.terminal_width {
                Some(total) => {
                    for line in crate::parser::interface::wrap(about, total) {
                        user_interface.print(line);
                    }
                }
                None => user_interface.print(about.clone()),
            }
        }

        for (title, section) in [
            ("positional arguments:", &arguments),
            ("commands:", &commands),
            ("options:", &options),
        ] {
            if section.is_empty() {
                continue;
            }

            user_interface.print("".to_string());
            user_interface.print(title.to_string());

            for row in section {
                for line in columns.render(MAIN_INDENT, &row.left, &row.help, &row.meta) {
                    user_interface.print(line);
                }
            }
        }
    }
}

struct Row {
    left: String,
    help: String,
    meta: Vec<String>,
}

fn example(name: &str) -> String {
    name.to_ascii_uppercase().replace('-', "_")
}

fn option_summary(option: &OptionDoc) -> String {
    let grammar = option_grammar(option);

    match option.short {
        Some(short) => format!("[-{short}{grammar}]"),
        None => format!("[--{n}{grammar}]", n = option.name),
    }
}

fn option_grammar(option: &OptionDoc) -> String {
    match option.kind {
        ValueKind::Flag => "".to_string(),
        _ => format!(" {}", example(&option.name)),
    }
}

fn option_row(option: &OptionDoc) -> Row {
    let grammar = option_grammar(option);
    let left = match option.short {
        Some(short) => format!("-{short}{grammar}, --{n}{grammar}", n = option.name),
        None => format!("--{n}{grammar}", n = option.name),
    };
    let mut meta = Vec::default();

    if !option.reserved {
        meta.push(option.kind.to_string());

        if let Some(default) = &option.default {
            meta.push(format!("default: {default}"));
        }
    }

    Row {
        left,
        help: option.help.clone().unwrap_or_default(),
        meta,
    }
}

fn argument_grammar(argument: &ArgumentDoc) -> String {
    let name = example(&argument.name);

    match argument.tag {
        ArgumentTag::Required => name,
        ArgumentTag::Optional => format!("[{name}]"),
        ArgumentTag::Variadic => format!("[{name} ...]"),
    }
}

fn argument_row(argument: &ArgumentDoc) -> Row {
    Row {
        left: argument_grammar(argument),
        help: argument.help.clone().unwrap_or_default(),
        meta: vec![argument.kind.to_string()],
    }
}

fn command_row(command: &CommandDoc) -> Row {
    Row {
        left: command.name.clone(),
        help: command.about.clone().unwrap_or_default(),
        meta: Vec::default(),
    }
}

/// The command line, with a caret under the token an error was found at.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    column: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// `position` may be `tokens.len()`, to point just past the final token.
    pub(crate) fn new(position: usize, tokens: &[String]) -> Self {
        let column = tokens
            .iter()
            .take(position)
            .map(|token| token.chars().count() + 1)
            .sum();

        Self {
            column,
            tokens: tokens.to_vec(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{projection}\n{:width$}^",
            "",
            projection = self.tokens.join(" "),
            width = self.column
        )
    }
}
