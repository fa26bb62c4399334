//! Recursive-descent parser
//!
//! Blank lines carry no structure in the dialect (the composer re-derives them), so they
//! are dropped up front. What remains is walked with an explicit [`Cursor`]: every parse
//! step takes the position of the next unread line and hands back the position after
//! what it consumed. There is no shared mutable state between recursive calls.

use super::grammar::{classify, Shape};
use crate::java::ast::error::{ParseError, ParseResult};
use crate::java::ast::{Class, Declaration, Enum, Field, FieldClass, Method, SourceFile};
use crate::text::{closes, indentation, is_annotation, is_blank, is_comment};
use log::trace;
use std::ops::Range;

/// Index of the next unread non-blank line.
pub type Cursor = usize;

/// A non-blank source line and its 1-based number in the original file.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

pub struct Parser<'a> {
    lines: Vec<Line<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new<S: AsRef<str>>(source: &'a [S]) -> Self {
        let lines = source
            .iter()
            .enumerate()
            .map(|(i, line)| Line {
                number: i + 1,
                text: line.as_ref(),
            })
            .filter(|line| !is_blank(line.text))
            .collect();
        Self { lines }
    }

    /// Parse the whole file: preamble, exactly one root declaration, nothing after it.
    pub fn parse_file(&self) -> ParseResult<SourceFile> {
        let mut at = 0;
        while self.text(at).is_some_and(is_preamble) {
            at += 1;
        }
        let preamble = self.texts(0..at);
        if at == self.lines.len() {
            return Err(ParseError::MissingDeclaration);
        }

        let (root, at) = self.member(at)?;
        if let Some(line) = self.lines.get(at) {
            return Err(ParseError::TrailingContent {
                line: line.number,
                text: line.text.to_string(),
            });
        }
        Ok(SourceFile { preamble, root })
    }

    /// Parse one declaration starting at `at`, returning it and the cursor past its end.
    pub fn member(&self, at: Cursor) -> ParseResult<(Declaration, Cursor)> {
        let end = self.header_end(at);
        let header = self.texts(at..end);

        let opened = match self.lines.get(end) {
            Some(line) => *line,
            None if end > at => return Err(self.unclosed(self.lines[end - 1])),
            None => return Err(ParseError::MissingDeclaration),
        };
        let signature = opened.text.to_string();
        let dent = indentation(opened.text);
        let at = end + 1;

        let shape = classify(opened.text, self.text(at)).ok_or_else(|| ParseError::Unrecognized {
            line: opened.number,
            text: signature.clone(),
        })?;

        let (declaration, at) = match shape {
            Shape::Enum => {
                let (constants, at) = if signature.ends_with('}') {
                    (Vec::new(), at)
                } else {
                    self.lines_until(at, opened, dent, "}")?
                };
                let e = Enum {
                    header,
                    signature,
                    constants,
                };
                (Declaration::Enum(e), at)
            }
            Shape::EmptyClass => {
                let c = Class {
                    header,
                    signature,
                    members: Vec::new(),
                };
                (Declaration::Class(c), at)
            }
            Shape::Class => {
                let (members, at) = self.members_until(at, opened, dent, "}")?;
                let c = Class {
                    header,
                    signature,
                    members,
                };
                (Declaration::Class(c), at)
            }
            Shape::FieldClass => {
                // The shape only matches when the opener line exists
                let opener = self.lines[at];
                let (members, at) =
                    self.members_until(at + 1, opener, indentation(opener.text), "};")?;
                let f = FieldClass {
                    header,
                    signature,
                    opener: opener.text.to_string(),
                    members,
                };
                (Declaration::FieldClass(f), at)
            }
            Shape::AbstractMethod | Shape::EmptyMethod => {
                let m = Method {
                    header,
                    signature,
                    body: Vec::new(),
                };
                (Declaration::Method(m), at)
            }
            Shape::Method => {
                let (body, at) = self.lines_until(at, opened, dent, "}")?;
                let m = Method {
                    header,
                    signature,
                    body,
                };
                (Declaration::Method(m), at)
            }
            Shape::Field => {
                let f = Field {
                    header,
                    signature,
                    value: Vec::new(),
                };
                (Declaration::Field(f), at)
            }
            Shape::MultilineField => {
                let mut end = at;
                while self.text(end).is_some_and(|text| indentation(text) > dent) {
                    end += 1;
                }
                let value = self.texts(at..end);
                let f = Field {
                    header,
                    signature,
                    value,
                };
                (Declaration::Field(f), end)
            }
        };

        let name = declaration.name().map_err(|source| ParseError::Decl {
            line: opened.number,
            source,
        })?;
        trace!("line {}: {} {}", opened.number, declaration.kind(), name);
        Ok((declaration, at))
    }

    /// Parse member declarations until the line `dent` spaces + `closer`, consuming it.
    fn members_until(
        &self,
        mut at: Cursor,
        opened: Line<'a>,
        dent: usize,
        closer: &str,
    ) -> ParseResult<(Vec<Declaration>, Cursor)> {
        let mut members = Vec::new();
        loop {
            let line = self.lines.get(at).ok_or_else(|| self.unclosed(opened))?;
            if closes(line.text, dent, closer) {
                return Ok((members, at + 1));
            }
            if indentation(line.text) <= dent {
                return Err(ParseError::Misindented {
                    line: line.number,
                    text: line.text.to_string(),
                });
            }
            // A header running into end of input leaves `opened` unclosed
            if self.lines.get(self.header_end(at)).is_none() {
                return Err(self.unclosed(opened));
            }
            let (member, next) = self.member(at)?;
            members.push(member);
            at = next;
        }
    }

    /// Collect raw lines until the line `dent` spaces + `closer`, consuming it.
    fn lines_until(
        &self,
        at: Cursor,
        opened: Line<'a>,
        dent: usize,
        closer: &str,
    ) -> ParseResult<(Vec<String>, Cursor)> {
        let mut end = at;
        loop {
            let line = self.lines.get(end).ok_or_else(|| self.unclosed(opened))?;
            if closes(line.text, dent, closer) {
                return Ok((self.texts(at..end), end + 1));
            }
            end += 1;
        }
    }

    /// Cursor past the header at `at`: comments, then annotations.
    fn header_end(&self, at: Cursor) -> Cursor {
        let mut end = at;
        while self.text(end).is_some_and(is_comment) {
            end += 1;
        }
        while self.text(end).is_some_and(is_annotation) {
            end += 1;
        }
        end
    }

    fn text(&self, at: Cursor) -> Option<&'a str> {
        self.lines.get(at).map(|line| line.text)
    }

    fn texts(&self, range: Range<Cursor>) -> Vec<String> {
        self.lines[range]
            .iter()
            .map(|line| line.text.to_string())
            .collect()
    }

    fn unclosed(&self, opened: Line<'a>) -> ParseError {
        ParseError::UnexpectedEof {
            line: opened.number,
            text: opened.text.to_string(),
        }
    }
}

fn is_preamble(line: &str) -> bool {
    line.starts_with("package ") || line.starts_with("import ") || line.starts_with("//")
}
