//! Parsing
//!
//! Turns the lines of one file into a [`SourceFile`]. See [`grammar`] for the ordered
//! declaration shapes and [`parser`] for the recursive descent over them.

pub mod grammar;
pub mod parser;

use crate::java::ast::error::ParseResult;
use crate::java::ast::SourceFile;
use crate::text::normalize_lines;
pub use parser::{Cursor, Parser};

/// Parse the lines of one file.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> ParseResult<SourceFile> {
    Parser::new(lines).parse_file()
}

/// Parse source text, normalizing line endings and trailing whitespace first.
pub fn parse_str(source: &str) -> ParseResult<SourceFile> {
    parse(&normalize_lines(source))
}
