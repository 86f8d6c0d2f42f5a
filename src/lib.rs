#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::Lexer,
    parser::parser::Parser,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source, tagged with the label of that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Lexes and parses `source` in one pass.
///
/// The returned program is always present; an empty diagnostics vector is the
/// only signal that the parse was clean.
pub fn parse(source: &str, file: Option<String>) -> (Program, Vec<Error>) {
    let mut lexer = Lexer::new(source, file);
    let mut parser = Parser::new(&mut lexer);
    let program = parser.parse_program();

    (program, parser.into_errors())
}

/// Finds the line containing byte offset `position`.
///
/// Returns the 1-based line number, the line text (including its newline) and
/// the column of `position` within that line. Offsets at the very end of the
/// source resolve to the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) || (end == source.len() && pos == end) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // Empty source, or an offset just past a trailing newline.
    Some((line_number, String::new(), 0))
}

/// Renders a diagnostic with a caret under the offending column.
///
/// ```text
/// error: expected next token to be =, got INT instead
/// -> shell
///   |
/// 1 | let x 5;
///   | ------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = match error.get_tip() {
        ErrorTip::None => format!("error: {}\n", error),
        tip => format!("error: {} ({})\n", error, tip),
    };
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start_matches(|c: char| c == ' ' || c == '\t');

    (trimmed, string.len() - trimmed.len())
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::TokenKind,
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\n\n    Testing { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 31).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "    Testing { }\n");
        assert_eq!(line_pos, 12);
    }

    #[test]
    fn test_get_line_at_position_out_of_range() {
        assert!(super::get_line_at_position("abc", 4).is_none());
        assert_eq!(
            super::get_line_at_position("abc", 3),
            Some((1, String::from("abc"), 3))
        );
        assert_eq!(
            super::get_line_at_position("", 0),
            Some((1, String::new(), 0))
        );
    }

    #[test]
    fn test_render_error() {
        let source = "let x 5;";
        let error = Error::new(
            ErrorImpl::UnexpectedPeek {
                expected: TokenKind::Assignment,
                actual: TokenKind::Integer,
            },
            Position(6, Rc::new(String::from("shell"))),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("error: expected next token to be =, got INT instead"));
        assert_eq!(lines[1], "-> shell");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | let x 5;");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_parse_returns_program_and_errors() {
        let (program, errors) = super::parse("let x = 5; let 7;", None);

        assert_eq!(program.len(), 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "expected next token to be IDENT, got INT instead"
        );
    }
}
