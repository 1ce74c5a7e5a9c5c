#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::{ErrorTip, LexError};

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod validator;

extern crate regex;

pub use crate::lexer::lexer::tokenize as lex;
pub use crate::validator::validator::{validate, Verdict};

/// Byte range `[start, end)` of a token in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Finds the line holding byte offset `position`.
///
/// Returns the 1-based line number, the line text and the offset within the
/// line, or None when `position` is past the end of `content`.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

/// Renders a lex error with the offending source line and a caret under it.
///
/// ```text
/// Error: UnterminatedString (Add the closing `"` to the string)
/// -> input03.txt
///   |
/// 1 | {"a": "oops
///   | ------^
/// ```
pub fn render_error(error: &LexError, content: &str, file: &Path) -> String {
    let mut rendered = String::new();

    if let ErrorTip::None = error.get_tip() {
        rendered.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        rendered.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    rendered.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));

    let Some((line, line_text, line_pos)) = error
        .get_position()
        .and_then(|position| get_line_at_position(content, position))
    else {
        rendered.push_str(&format!("{}\n", error));
        return rendered;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    rendered.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    rendered.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_text[removed_whitespace..line_pos].chars().count() + 1;
    rendered.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    rendered
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
