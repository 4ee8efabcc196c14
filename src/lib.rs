#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into a source file, paired with the file's name.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering everything from the start of `self` to the end of `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Finds the line containing `position`.
///
/// Returns the 1-based line number, the text of that line and the column
/// of `position` within it. A position exactly at the end of the source
/// (where the EOF token lives) resolves to the last line.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) || (end == source.len() && pos == end && !line.ends_with('\n')) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // Empty source, or a position just past a trailing newline
    Some((line_number, String::new(), 0))
}

/// Renders `error` against the source it came from.
///
/// ```text
/// Error: UnexpectedTokenDetailed (Unexpected token: `EOF`, array literal must be closed by `]`)
/// -> main.script
///   |
/// 1 | a = [1, 2
///   | ---------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // `line_pos` is a byte offset; the caret is placed by character.
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
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

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::errors::errors::{Error, ErrorImpl};
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_source() {
        let (line_number, line, line_pos) = super::get_line_at_position("a = 1", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "a = 1");
        assert_eq!(line_pos, 5);

        assert!(super::get_line_at_position("a = 1", 6).is_none());
    }

    #[test]
    fn test_render_error_points_at_offset() {
        let source = "x = 1;\n  y = (2\n";
        let error = Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: String::from("EOF"),
                message: String::from("parenthesized expression must be closed by `)`"),
            },
            Position(15, Rc::new(String::from("main.script"))),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedTokenDetailed (Unexpected token: `EOF`, parenthesized expression must be closed by `)`)");
        assert_eq!(lines[1], "-> main.script");
        assert_eq!(lines[3], "2 | y = (2");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[4], "  | ------^");
    }

    #[test]
    fn test_render_error_caret_counts_characters() {
        let source = "s = \"héllo\" + ;";
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                kind: crate::lexer::tokens::TokenKind::Semicolon,
                token: String::from(";"),
            },
            Position(15, Rc::new(String::from("main.script"))),
        );

        let rendered = super::render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | s = \"héllo\" + ;");
        assert_eq!(lines[4], format!("  | {}^", "-".repeat(14)));
    }
}
