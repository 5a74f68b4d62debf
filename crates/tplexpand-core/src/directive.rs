//! Line classification

use crate::config::consts::directive::{BEGIN, END, INVOKE};

/// What a single input line means to the expander
///
/// Borrowed from the left-trimmed line, so plain text keeps its trailing
/// whitespace and newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `//{{ <name>`
    Begin { name: &'a str },

    /// `//}}`
    End,

    /// `//== <name> <tail>`; `args` is everything after the first space
    /// following the name, untrimmed, and empty when there is none
    Invoke { name: &'a str, args: &'a str },

    /// Any other line, left-trimmed
    Text(&'a str),
}

impl<'a> Directive<'a> {
    /// Classify a raw line (newline included)
    ///
    /// Leading whitespace is stripped before matching. A line holding only
    /// whitespace strips down to an empty `Text`.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim_start();

        if let Some(rest) = line.strip_prefix(BEGIN) {
            Directive::Begin { name: rest.trim() }
        } else if line.starts_with(END) {
            Directive::End
        } else if let Some(rest) = line.strip_prefix(INVOKE) {
            let (name, args) = rest.split_once(' ').unwrap_or((rest, ""));
            Directive::Invoke {
                name: name.trim(),
                args,
            }
        } else {
            Directive::Text(line)
        }
    }

    pub fn is_directive(&self) -> bool {
        !matches!(self, Directive::Text(_))
    }
}
