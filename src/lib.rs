#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::{
    errors::errors::Error, interpreter::interpreter::evaluate, parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Byte offset into the source, plus the name of the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub usize, pub Arc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline over `source` and returns the value of the expression.
///
/// `file` names the origin of the source for diagnostics; `None` means the
/// expression was typed in directly.
pub fn interpret(source: &str, file: Option<String>) -> Result<i64, Error> {
    let tree = parse(source, file)?;
    evaluate(&tree)
}

/// Finds the line containing byte `position` of `source`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line. A position at the very end of the source
/// resolves to the last line, so end-of-input errors can still be pointed at.
pub fn get_line_at_position(source: &str, pos: usize) -> Option<(usize, String, usize)> {
    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    // pos == source.len(): point just past the last character
    let last = source.split_inclusive('\n').last().unwrap_or("");
    let last_line = line_number.saturating_sub(1).max(1);
    Some((last_line, last.to_string(), last.trim_end_matches('\n').len()))
}
