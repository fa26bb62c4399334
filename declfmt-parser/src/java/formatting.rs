//! Composer
//!
//! Renders a declaration tree back into lines. The composer owns blank-line placement:
//! the parser drops blank lines, and [`separate`] decides where they go back. Because
//! composition is a pure function of the tree, a file already laid out this way survives
//! parse + compose unchanged.

use crate::java::ast::{Category, Declaration, SourceFile};
use crate::text::{closing_line, indentation, is_comment};

/// One side of a blank-line decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor<'a> {
    /// A class, enum, method or anonymous-class field.
    Structural,
    /// A plain field of the given category.
    Plain(Category),
    /// A raw line inside a method body.
    Line(&'a str),
}

impl Declaration {
    pub fn neighbor(&self) -> Neighbor<'_> {
        match self {
            Declaration::Field(_) => Neighbor::Plain(self.category()),
            Declaration::Class(_)
            | Declaration::Enum(_)
            | Declaration::FieldClass(_)
            | Declaration::Method(_) => Neighbor::Structural,
        }
    }

    /// Append this declaration's lines to `out`.
    pub fn compose(&self, out: &mut Vec<String>) {
        out.extend(self.header().iter().cloned());
        out.push(self.signature().to_string());
        let dent = self.indentation();
        match self {
            Declaration::Class(c) => {
                compose_members(&c.members, out);
                if !c.signature.ends_with('}') {
                    out.push(closing_line(dent, "}"));
                }
            }
            Declaration::Enum(e) => {
                out.extend(e.constants.iter().cloned());
                if !e.signature.ends_with('}') {
                    out.push(closing_line(dent, "}"));
                }
            }
            Declaration::Field(f) => {
                out.extend(f.value.iter().cloned());
            }
            Declaration::FieldClass(f) => {
                out.push(f.opener.clone());
                compose_members(&f.members, out);
                out.push(closing_line(indentation(&f.opener), "};"));
            }
            Declaration::Method(m) => {
                compose_lines(&m.body, out);
                if !m.signature.ends_with([';', '}']) {
                    out.push(closing_line(dent, "}"));
                }
            }
        }
    }
}

/// Whether a blank line goes between two neighbors.
///
/// Structural nodes are always set apart. Plain fields are grouped by category. Raw
/// lines get a blank line only before a comment that starts a comment block, and never
/// directly after a line that opens a deeper block.
pub fn separate(a: Neighbor<'_>, b: Neighbor<'_>) -> bool {
    match (a, b) {
        (Neighbor::Plain(x), Neighbor::Plain(y)) => x != y,
        (Neighbor::Line(a), Neighbor::Line(b)) => {
            is_comment(b) && !is_comment(a) && indentation(a) >= indentation(b)
        }
        _ => true,
    }
}

fn compose_members(members: &[Declaration], out: &mut Vec<String>) {
    for (i, member) in members.iter().enumerate() {
        if i > 0 && separate(members[i - 1].neighbor(), member.neighbor()) {
            out.push(String::new());
        }
        member.compose(out);
    }
}

fn compose_lines(lines: &[String], out: &mut Vec<String>) {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 && separate(Neighbor::Line(&lines[i - 1]), Neighbor::Line(line)) {
            out.push(String::new());
        }
        out.push(line.clone());
    }
}

/// Compose a single declaration.
pub fn compose(declaration: &Declaration) -> Vec<String> {
    let mut out = Vec::new();
    declaration.compose(&mut out);
    out
}

/// Compose a whole file: the preamble verbatim, then the root declaration.
pub fn compose_file(file: &SourceFile) -> Vec<String> {
    let mut out = file.preamble.clone();
    file.root.compose(&mut out);
    out
}
