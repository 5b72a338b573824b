use crate::parser::ErrorContext;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Target 95% of the total width, so the renderer doesn't literally use the full space.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Renders rows of a left column, a wrapped middle column, and any number of right columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Columns {
    padding: usize,
    left: usize,
    middle: usize,
    rights: Vec<usize>,
}

impl Columns {
    pub(crate) fn new(padding: usize, left: usize, middle: usize, rights: Vec<usize>) -> Self {
        if padding == 0 || middle < 2 {
            // Middle must be at least 2 so we can hyphenate.
            unreachable!("internal error - invalid column widths ({padding}, {middle})");
        }

        Self {
            padding,
            left,
            middle,
            rights,
        }
    }

    /// Choose the middle width so that the whole row fits within `total`, when possible.
    pub(crate) fn fit(
        padding: usize,
        left: usize,
        middle: usize,
        rights: Vec<usize>,
        total: usize,
    ) -> Self {
        // We always have a left and a middle (and a padding between them).
        let mut non_middle = left + padding;

        if !rights.is_empty() {
            non_middle += rights.iter().sum::<usize>() + rights.len() * padding;
        }

        let target = (total as f64 * TARGET_TOTAL_FACTOR) as usize;
        let wanted = std::cmp::max(middle, MINIMUM_MIDDLE_WIDTH);

        let chosen = if wanted + non_middle <= target {
            wanted
        } else if non_middle < total {
            std::cmp::max(total - non_middle, MINIMUM_MIDDLE_WIDTH)
        } else {
            MINIMUM_MIDDLE_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Columns {non_middle} against total {total} (target {target}).  Selecting middle: {chosen}.");
        }

        Self::new(padding, left, chosen, rights)
    }

    /// Render a single row, wrapping the middle column onto as many lines as it needs.
    /// Trailing whitespace is trimmed from every line.
    pub(crate) fn render(
        &self,
        indent: usize,
        left: &str,
        middle: &str,
        rights: &[String],
    ) -> Vec<String> {
        if rights.len() > self.rights.len() || left.chars().count() > self.left {
            unreachable!("internal error - row '{left}' does not fit the columns");
        }

        let gap = " ".repeat(self.padding);
        let right = self.render_rights(rights, &gap);
        let left_width = self.left;
        let middle_width = self.middle - indent;
        let lines = wrap(middle, middle_width);
        let mut out = Vec::default();

        match lines.split_first() {
            Some((first, rest)) => {
                out.push(format!(
                    "{:indent$}{left:left_width$}{gap}{first:middle_width$}{right}",
                    ""
                ));

                for line in rest {
                    out.push(format!("{:indent$}{:left_width$}{gap}{line}", "", ""));
                }
            }
            None => {
                out.push(format!(
                    "{:indent$}{left:left_width$}{gap}{:middle_width$}{right}",
                    "", ""
                ));
            }
        }

        out.into_iter()
            .map(|line| line.trim_end().to_string())
            .collect()
    }

    fn render_rights(&self, rights: &[String], gap: &str) -> String {
        let mut out = String::default();

        for (i, (item, width)) in rights.iter().zip(&self.rights).enumerate() {
            if item.chars().count() > *width {
                unreachable!("internal error - '{item}' does not fit the right column");
            }

            out.push_str(gap);

            if i + 1 < rights.len() {
                out.push_str(&format!("{item:width$}"));
            } else {
                out.push_str(item);
            }
        }

        out
    }
}

/// Greedy word wrap, hyphenating any word that is longer than the width.
/// Widths below 2 are treated as 2, the room needed for one character and its hyphen.
pub(crate) fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let width = std::cmp::max(width, 2);
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
        let length = word.chars().count();

        if current.is_empty() {
            current = hyphenate(word, width, &mut lines);
        } else if current.chars().count() + length + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = hyphenate(word, width, &mut lines);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

// Push full hyphenated pieces of `word` onto `lines`, returning the remainder.
fn hyphenate(word: &str, width: usize, lines: &mut Vec<String>) -> String {
    let characters: Vec<char> = word.chars().collect();
    let mut start = 0;

    while characters.len() - start > width {
        let end = start + width - 1;
        let mut piece: String = characters[start..end].iter().collect();
        piece.push('-');
        lines.push(piece);
        start = end;
    }

    characters[start..].iter().collect()
}

/// Where the parser writes its user facing output.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, message: String);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, message: String) {
        eprintln!("{message}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}
