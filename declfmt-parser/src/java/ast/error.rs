//! Error types for parsing and reordering
//!
//! Every error is fatal for the file being processed: nothing is retried and no partial
//! output is produced.

use super::category::Category;
use super::Kind;
use thiserror::Error;

/// Parse failures. Line numbers are 1-based positions in the original file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line matches none of the declaration shapes.
    #[error("line {line}: unrecognized declaration: {text}")]
    Unrecognized { line: usize, text: String },
    /// Input ended before the declaration opened at `line` was closed.
    #[error("line {line}: input ends before this declaration is closed: {text}")]
    UnexpectedEof { line: usize, text: String },
    /// A member is not indented past the declaration that contains it.
    #[error("line {line}: member is not indented past its enclosing declaration: {text}")]
    Misindented { line: usize, text: String },
    #[error("line {line}: unexpected content after the top-level declaration: {text}")]
    TrailingContent { line: usize, text: String },
    #[error("no declaration follows the package and import lines")]
    MissingDeclaration,
    #[error("line {line}: {source}")]
    Decl { line: usize, source: DeclError },
}

/// Type alias for parser results
pub type ParseResult<T> = Result<T, ParseError>;

/// A signature matched a declaration shape but lacks the name that shape implies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclError {
    #[error("{kind} signature has no name: {signature}")]
    MissingName { kind: Kind, signature: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The category is missing from the rank order in effect.
    #[error("category '{0}' has no rank in the configured order")]
    UnrankedCategory(Category),
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error(transparent)]
    Decl(#[from] DeclError),
}
