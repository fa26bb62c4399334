//! Python parse errors

use super::Kind;
use thiserror::Error;

/// Line numbers are 1-based positions in the original file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: {kind} signature has no name: {text}")]
    MissingName { line: usize, kind: Kind, text: String },
    /// A bracket, string or backslash continuation opened at `line` is never closed.
    #[error("line {line}: input ends inside this statement: {text}")]
    UnexpectedEof { line: usize, text: String },
}

pub type ParseResult<T> = Result<T, ParseError>;
