//! Indentation parser
//!
//! A block owns the lines indented past its opening line. Blank lines between statements
//! carry no structure and are skipped; blank lines inside a statement (a docstring
//! paragraph, say) belong to it and are kept. Like the Java parser, every step takes a
//! [`Cursor`] and hands back the cursor past what it consumed.

use crate::python::ast::error::{ParseError, ParseResult};
use crate::python::ast::{is_comment, is_decorator, Block, Kind, Module, Node, Statement};
use crate::text::{indentation, is_blank, normalize_lines};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static CLASS_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ *class\s").unwrap());
static FUNCTION_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ *(?:async\s+)?def\s").unwrap());

/// Index of the next unread line, blank or not.
pub type Cursor = usize;

/// Which kind of block `line` opens, if any.
pub fn block_kind(line: &str) -> Option<Kind> {
    if CLASS_SHAPE.is_match(line) {
        Some(Kind::Class)
    } else if FUNCTION_SHAPE.is_match(line) {
        Some(Kind::Function)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    Single(u8),
    Triple(u8),
}

/// What is still open at the end of a physical line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Continuation {
    depth: usize,
    quote: Option<Quote>,
    backslash: bool,
}

impl Continuation {
    fn is_open(&self) -> bool {
        self.depth > 0 || self.quote.is_some() || self.backslash
    }

    fn advance(mut self, line: &str) -> Self {
        let bytes = line.as_bytes();
        let mut commented = false;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            match self.quote {
                Some(Quote::Triple(q)) => {
                    if b == b'\\' {
                        i += 1;
                    } else if bytes[i..].starts_with(&[q, q, q]) {
                        self.quote = None;
                        i += 2;
                    }
                }
                Some(Quote::Single(q)) => {
                    if b == b'\\' {
                        i += 1;
                    } else if b == q {
                        self.quote = None;
                    }
                }
                None => match b {
                    b'#' => {
                        commented = true;
                        break;
                    }
                    b'"' | b'\'' if bytes[i..].starts_with(&[b, b, b]) => {
                        self.quote = Some(Quote::Triple(b));
                        i += 2;
                    }
                    b'"' | b'\'' => self.quote = Some(Quote::Single(b)),
                    b'(' | b'[' | b'{' => self.depth += 1,
                    b')' | b']' | b'}' => self.depth = self.depth.saturating_sub(1),
                    _ => {}
                },
            }
            i += 1;
        }
        let escaped = !commented && line.ends_with('\\');
        // A short string only runs on past an escaped line end
        if matches!(self.quote, Some(Quote::Single(_))) && !escaped {
            self.quote = None;
        }
        self.backslash = escaped && self.quote.is_none();
        self
    }
}

pub struct Parser<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Parser<'a> {
    pub fn new<S: AsRef<str>>(source: &'a [S]) -> Self {
        let lines = source.iter().map(|line| line.as_ref()).collect();
        Self { lines }
    }

    pub fn parse_module(&self) -> ParseResult<Module> {
        let (nodes, _) = self.block(0, None)?;
        Ok(Module { nodes })
    }

    /// Parse the nodes indented past `dent`, or every remaining node when `dent` is `None`.
    pub fn block(&self, mut at: Cursor, dent: Option<usize>) -> ParseResult<(Vec<Node>, Cursor)> {
        let mut nodes = Vec::new();
        loop {
            at = self.skip_blank(at);
            if at == self.lines.len() || !self.continues(at, dent) {
                return Ok((nodes, at));
            }
            let (node, next) = self.node(at)?;
            nodes.push(node);
            at = next;
        }
    }

    /// Parse one node starting at the non-blank line `at`.
    pub fn node(&self, at: Cursor) -> ParseResult<(Node, Cursor)> {
        let line = self.lines[at];
        if is_decorator(line) {
            let (header, next) = self.decorators(at)?;
            let decorated = self
                .lines
                .get(next)
                .filter(|opened| indentation(opened) == indentation(line))
                .and_then(|opened| block_kind(opened));
            if let Some(kind) = decorated {
                return self.block_node(kind, header, next);
            }
        } else if let Some(kind) = block_kind(line) {
            return self.block_node(kind, Vec::new(), at);
        }
        let end = self.statement_end(at)?;
        let statement = Statement {
            lines: self.texts(at..end),
        };
        Ok((Node::Statement(statement), end))
    }

    fn block_node(&self, kind: Kind, header: Vec<String>, at: Cursor) -> ParseResult<(Node, Cursor)> {
        let end = self.statement_end(at)?;
        let mut block = Block {
            kind,
            header,
            signature: self.texts(at..end),
            body: Vec::new(),
        };
        let name = block.name().ok_or_else(|| ParseError::MissingName {
            line: at + 1,
            kind,
            text: self.lines[at].to_string(),
        })?;
        trace!("line {}: {} {}", at + 1, kind, name);

        let (body, next) = self.block(end, Some(indentation(self.lines[at])))?;
        block.body = body;
        Ok((Node::Block(block), next))
    }

    /// Decorator lines at the indentation of `at`, and the cursor of the line after them.
    fn decorators(&self, at: Cursor) -> ParseResult<(Vec<String>, Cursor)> {
        let dent = indentation(self.lines[at]);
        let mut header = Vec::new();
        let mut next = at;
        while let Some(line) = self.lines.get(next) {
            if !is_decorator(line) || indentation(line) != dent {
                break;
            }
            let end = self.statement_end(next)?;
            header.extend(self.texts(next..end));
            next = self.skip_blank(end);
        }
        Ok((header, next))
    }

    /// Whether the non-blank line `at` belongs to a block indented past `dent`.
    ///
    /// Comments belong wherever the code after them does, so a comment at column 0 inside
    /// a function body does not end the function.
    fn continues(&self, at: Cursor, dent: Option<usize>) -> bool {
        let Some(dent) = dent else {
            return true;
        };
        let code = self.lines[at..]
            .iter()
            .find(|line| !is_blank(line) && !is_comment(line));
        indentation(code.unwrap_or(&self.lines[at])) > dent
    }

    /// Cursor past the logical line starting at `at`.
    fn statement_end(&self, at: Cursor) -> ParseResult<Cursor> {
        let mut state = Continuation::default().advance(self.lines[at]);
        let mut end = at + 1;
        while state.is_open() {
            let line = self.lines.get(end).ok_or_else(|| ParseError::UnexpectedEof {
                line: at + 1,
                text: self.lines[at].to_string(),
            })?;
            state = state.advance(line);
            end += 1;
        }
        // A backslash before a blank line ends the statement at the backslash
        while end > at + 1 && is_blank(self.lines[end - 1]) {
            end -= 1;
        }
        Ok(end)
    }

    fn skip_blank(&self, mut at: Cursor) -> Cursor {
        while self.lines.get(at).is_some_and(|line| is_blank(line)) {
            at += 1;
        }
        at
    }

    fn texts(&self, range: Range<Cursor>) -> Vec<String> {
        self.lines[range].iter().map(|line| line.to_string()).collect()
    }
}

/// Parse the lines of one Python file.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> ParseResult<Module> {
    Parser::new(lines).parse_module()
}

/// Parse source text, normalizing line endings and trailing whitespace first.
pub fn parse_str(source: &str) -> ParseResult<Module> {
    parse(&normalize_lines(source))
}
