#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A 1-based line/column location inside a named source.
///
/// Positions are provenance only: they never distinguish two nodes, so
/// equality between positions always holds. This keeps the derived
/// `PartialEq` on AST nodes purely structural.
#[derive(Debug, Clone)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position::new(0, 0, Rc::new(String::from("<null>")))
    }
}

impl PartialEq for Position {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Position {}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the text of the given 1-based line, or `None` past the end.
pub fn get_line_at_position(source: &str, position: &Position) -> Option<String> {
    source
        .split('\n')
        .nth((position.line as usize).checked_sub(1)?)
        .map(|line| line.trim_end_matches('\r').to_string())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nvar x = 1\n\nTesting { }\n";
        let file = Rc::new(String::from("test.gs"));

        let line = super::get_line_at_position(source, &Position::new(1, 10, Rc::clone(&file)));
        assert_eq!(line.as_deref(), Some("Hello, world!"));

        let line = super::get_line_at_position(source, &Position::new(4, 9, Rc::clone(&file)));
        assert_eq!(line.as_deref(), Some("Testing { }"));

        assert!(super::get_line_at_position(source, &Position::new(9, 1, file)).is_none());
    }

    #[test]
    fn test_positions_never_distinguish_nodes() {
        let a = Position::new(1, 1, Rc::new(String::from("a.gs")));
        let b = Position::new(7, 3, Rc::new(String::from("b.gs")));
        assert_eq!(a, b);
        assert_eq!(b.to_string(), "b.gs:7:3");
    }
}

/// Renders an error the way the driver reports it:
///
/// ```text
/// Error: UnexpectedToken (expected `=`, found newline)
/// -> main.gs:3:6
///   |
/// 3 | var x
///   | -----^
/// ```
pub fn display_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    rendered.push_str(&format!("-> {}\n", position));

    let Some(line_text) = get_line_at_position(source, position) else {
        return rendered;
    };

    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (string.chars().skip(start).collect(), start)
}
