#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::{
    diagnostics::Diagnostic,
    errors::{Error, ErrorTip},
};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod pipeline;
pub mod type_checker;

extern crate regex;

/// A 1-based line/column location in the source text.
///
/// `Position::null()` (line 0, column 0) marks a location that is not tied to
/// a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn null() -> Self {
        Position { line: 0, column: 0 }
    }

    pub fn is_null(&self) -> bool {
        self.line == 0
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }
}

/// Returns the text of the line `position` points into, without its newline.
pub fn get_line_at_position(source: &str, position: Position) -> Option<&str> {
    if position.is_null() {
        return None;
    }

    source
        .split_inclusive('\n')
        .nth(position.line as usize - 1)
        .map(|line| line.trim_end_matches(['\n', '\r']))
}


/// Formats a front-end error the way the CLI prints it:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `}`, did you miss a semicolon?)
/// -> final.mg:20:9
///    |
/// 20 | var a int = #;
///    | ------------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let mut output = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    output.push_str(&render_snippet(source, file, *error.get_position()));
    output
}

/// Formats a semantic diagnostic with the same source snippet layout as
/// [`render_error`].
pub fn render_diagnostic(diagnostic: &Diagnostic, source: &str, file: &str) -> String {
    let mut output = format!(
        "{}: {} ({})\n",
        diagnostic.severity(),
        diagnostic.get_error_name(),
        diagnostic.message()
    );

    match diagnostic.get_position() {
        Some(position) if !position.is_null() => {
            output.push_str(&render_snippet(source, file, position));
        }
        _ => output.push_str(&format!("-> {}\n", file)),
    }

    output
}

fn render_snippet(source: &str, file: &str, position: Position) -> String {
    let Some(line_text) = get_line_at_position(source, position) else {
        return format!("-> {}\n", file);
    };

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    let mut output = format!("-> {}:{}\n", file, position);
    output.push_str(&format!("{:>padding$}\n", "|"));
    output.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    output.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    output
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
