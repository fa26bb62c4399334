//! Declaration Model
//!
//! A parsed file is a [`SourceFile`]: the preamble (package, imports, top-level comments)
//! followed by exactly one root [`Declaration`]. Declarations are a closed set of five
//! kinds, each carrying:
//!
//! - `header`: comment and annotation lines that travel with the declaration when it moves
//! - `signature`: the line that opens the declaration and determines its kind and name
//! - a body: child declarations (Class, FieldClass) or raw lines (Enum, Method, Field)
//!
//! Names and categories are never stored. They are derived from the signature on demand,
//! so a pass that rewrites a signature can never leave them stale.

pub mod category;
pub mod error;

pub use category::{Category, CategoryOrder};

use crate::text::indentation;
use error::DeclError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static CLASS_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bclass (\w+)").unwrap());
static ENUM_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\benum (\w+)").unwrap());
static ASSIGNED_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+) =").unwrap());
static TERMINATED_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+);").unwrap());
static METHOD_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)\(.*\)").unwrap());

/// The five declaration kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Class,
    Enum,
    Field,
    FieldClass,
    Method,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Class => "class",
            Kind::Enum => "enum",
            Kind::Field => "field",
            Kind::FieldClass => "field class",
            Kind::Method => "method",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `class Name {`, holding nested member declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    pub header: Vec<String>,
    pub signature: String,
    pub members: Vec<Declaration>,
}

/// `enum Name {`, holding its constant lines verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    pub header: Vec<String>,
    pub signature: String,
    pub constants: Vec<String>,
}

/// A field; `value` holds the continuation lines of a multi-line initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub header: Vec<String>,
    pub signature: String,
    pub value: Vec<String>,
}

/// A field initialized with an anonymous class:
///
/// ```text
/// static final Comparator<Term> ORDER =
///     new Comparator() {
///       ...members...
///     };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldClass {
    pub header: Vec<String>,
    pub signature: String,
    /// The `new Type() {` line.
    pub opener: String,
    pub members: Vec<Declaration>,
}

/// A method or constructor; the body lines are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub header: Vec<String>,
    pub signature: String,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Class(Class),
    Enum(Enum),
    Field(Field),
    FieldClass(FieldClass),
    Method(Method),
}

impl Declaration {
    pub fn kind(&self) -> Kind {
        match self {
            Declaration::Class(_) => Kind::Class,
            Declaration::Enum(_) => Kind::Enum,
            Declaration::Field(_) => Kind::Field,
            Declaration::FieldClass(_) => Kind::FieldClass,
            Declaration::Method(_) => Kind::Method,
        }
    }

    pub fn header(&self) -> &[String] {
        match self {
            Declaration::Class(d) => &d.header,
            Declaration::Enum(d) => &d.header,
            Declaration::Field(d) => &d.header,
            Declaration::FieldClass(d) => &d.header,
            Declaration::Method(d) => &d.header,
        }
    }

    pub fn header_mut(&mut self) -> &mut Vec<String> {
        match self {
            Declaration::Class(d) => &mut d.header,
            Declaration::Enum(d) => &mut d.header,
            Declaration::Field(d) => &mut d.header,
            Declaration::FieldClass(d) => &mut d.header,
            Declaration::Method(d) => &mut d.header,
        }
    }

    pub fn signature(&self) -> &str {
        match self {
            Declaration::Class(d) => &d.signature,
            Declaration::Enum(d) => &d.signature,
            Declaration::Field(d) => &d.signature,
            Declaration::FieldClass(d) => &d.signature,
            Declaration::Method(d) => &d.signature,
        }
    }

    pub fn signature_mut(&mut self) -> &mut String {
        match self {
            Declaration::Class(d) => &mut d.signature,
            Declaration::Enum(d) => &mut d.signature,
            Declaration::Field(d) => &mut d.signature,
            Declaration::FieldClass(d) => &mut d.signature,
            Declaration::Method(d) => &mut d.signature,
        }
    }

    /// Indentation of the signature line.
    pub fn indentation(&self) -> usize {
        indentation(self.signature())
    }

    /// Child declarations of a Class or FieldClass.
    pub fn members(&self) -> Option<&[Declaration]> {
        match self {
            Declaration::Class(d) => Some(&d.members),
            Declaration::FieldClass(d) => Some(&d.members),
            Declaration::Enum(_) | Declaration::Field(_) | Declaration::Method(_) => None,
        }
    }

    pub fn members_mut(&mut self) -> Option<&mut Vec<Declaration>> {
        match self {
            Declaration::Class(d) => Some(&mut d.members),
            Declaration::FieldClass(d) => Some(&mut d.members),
            Declaration::Enum(_) | Declaration::Field(_) | Declaration::Method(_) => None,
        }
    }

    /// Raw body lines: enum constants, method body, or field value.
    pub fn lines(&self) -> Option<&[String]> {
        match self {
            Declaration::Enum(d) => Some(&d.constants),
            Declaration::Field(d) => Some(&d.value),
            Declaration::Method(d) => Some(&d.body),
            Declaration::Class(_) | Declaration::FieldClass(_) => None,
        }
    }

    pub fn lines_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            Declaration::Enum(d) => Some(&mut d.constants),
            Declaration::Field(d) => Some(&mut d.value),
            Declaration::Method(d) => Some(&mut d.body),
            Declaration::Class(_) | Declaration::FieldClass(_) => None,
        }
    }

    /// The declared name, extracted from the signature by the pattern for this kind.
    pub fn name(&self) -> Result<&str, DeclError> {
        let signature = self.signature();
        let captured = match self {
            Declaration::Class(_) => capture(&CLASS_NAME, signature),
            Declaration::Enum(_) => capture(&ENUM_NAME, signature),
            Declaration::Field(_) => capture(&ASSIGNED_NAME, signature)
                .or_else(|| capture(&TERMINATED_NAME, signature)),
            Declaration::FieldClass(_) => capture(&ASSIGNED_NAME, signature),
            Declaration::Method(_) => capture(&METHOD_NAME, signature),
        };
        captured.ok_or_else(|| DeclError::MissingName {
            kind: self.kind(),
            signature: signature.to_string(),
        })
    }

    pub fn category(&self) -> Category {
        match self {
            Declaration::Class(_) => Category::Class,
            Declaration::Enum(_) => Category::Enum,
            Declaration::FieldClass(_) => Category::FieldClass,
            Declaration::Method(_) => Category::Method,
            Declaration::Field(d) => Category::of_field(&d.signature),
        }
    }

    /// Post-order traversal: every child is visited before the node itself.
    pub fn walk<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut Declaration),
    {
        if let Some(members) = self.members_mut() {
            for member in members.iter_mut() {
                member.walk(f);
            }
        }
        f(self);
    }
}

fn capture<'a>(pattern: &Regex, signature: &'a str) -> Option<&'a str> {
    pattern
        .captures(signature)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// One parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Package, import and comment lines preceding the root declaration.
    pub preamble: Vec<String>,
    pub root: Declaration,
}
