//! Python Block Model
//!
//! Python sources are split by indentation alone into a list of [`Node`]s. A node is
//! either a [`Block`] (a `class` or `def` with its indented body) or a [`Statement`]:
//! one logical line of anything else, which may span several physical lines when a
//! bracket, a triple-quoted string or a backslash keeps it open.
//!
//! Decorators directly above a `class` or `def` are the block's header and move with
//! it. Comments are plain statements and stay where they are.

pub mod error;

use crate::text::indentation;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static CLASS_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bclass (\w+)").unwrap());
static FUNCTION_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bdef (\w+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Class,
    Function,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Class => "class",
            Kind::Function => "function",
        }
    }

    /// Classes sort before functions.
    pub fn rank(&self) -> usize {
        match self {
            Kind::Class => 0,
            Kind::Function => 1,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `class Name:` or `def name(...):` with its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: Kind,
    /// Decorator lines.
    pub header: Vec<String>,
    /// The physical lines of the opening logical line; never empty.
    pub signature: Vec<String>,
    pub body: Vec<Node>,
}

impl Block {
    pub fn first_line(&self) -> &str {
        self.signature.first().map_or("", String::as_str)
    }

    /// Name from the first signature line. The parser rejects blocks without one.
    pub fn name(&self) -> Option<&str> {
        let pattern = match self.kind {
            Kind::Class => &CLASS_NAME,
            Kind::Function => &FUNCTION_NAME,
        };
        pattern
            .captures(self.first_line())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// One logical line that is not a `class` or `def`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub lines: Vec<String>,
}

impl Statement {
    pub fn first_line(&self) -> &str {
        self.lines.first().map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Block(Block),
    Statement(Statement),
}

impl Node {
    pub fn first_line(&self) -> &str {
        match self {
            Node::Block(b) => b.header.first().map_or_else(|| b.first_line(), String::as_str),
            Node::Statement(s) => s.first_line(),
        }
    }

    pub fn indentation(&self) -> usize {
        indentation(self.first_line())
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Node::Block(_))
    }

    /// A statement that is a single comment line.
    pub fn is_comment(&self) -> bool {
        match self {
            Node::Statement(s) => s.lines.len() == 1 && is_comment(s.first_line()),
            Node::Block(_) => false,
        }
    }

    /// Post-order traversal over every node list, innermost first.
    pub fn walk_lists<F>(nodes: &mut [Node], f: &mut F)
    where
        F: FnMut(&mut [Node]),
    {
        for node in nodes.iter_mut() {
            if let Node::Block(b) = node {
                Node::walk_lists(&mut b.body, f);
            }
        }
        f(nodes);
    }
}

/// A line whose first non-space character is `#`.
pub fn is_comment(line: &str) -> bool {
    line.trim_start_matches(' ').starts_with('#')
}

pub fn is_decorator(line: &str) -> bool {
    line.trim_start_matches(' ').starts_with('@')
}

/// One parsed Python file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub nodes: Vec<Node>,
}

impl Module {
    pub fn walk_lists<F>(&mut self, f: &mut F)
    where
        F: FnMut(&mut [Node]),
    {
        Node::walk_lists(&mut self.nodes, f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(kind: Kind, signature: &str) -> Block {
        Block {
            kind,
            header: vec![],
            signature: vec![signature.to_string()],
            body: vec![],
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(block(Kind::Class, "class Term(Base):").name(), Some("Term"));
        assert_eq!(block(Kind::Function, "    def size(self):").name(), Some("size"));
        assert_eq!(block(Kind::Function, "async def fetch():").name(), Some("fetch"));
        assert_eq!(block(Kind::Class, "class:").name(), None);
    }

    #[test]
    fn test_comment_nodes() {
        let comment = Node::Statement(Statement {
            lines: vec!["    # note".to_string()],
        });
        let code = Node::Statement(Statement {
            lines: vec!["x = 1  # trailing".to_string()],
        });
        assert!(comment.is_comment());
        assert!(!code.is_comment());
        assert_eq!(comment.indentation(), 4);
        assert!(!Node::Block(block(Kind::Function, "def f():")).is_comment());
    }

    #[test]
    fn test_decorated_block_starts_at_header() {
        let mut decorated = block(Kind::Function, "    def f(self):");
        decorated.header.push("    @property".to_string());
        let node = Node::Block(decorated);
        assert_eq!(node.first_line(), "    @property");
        assert_eq!(node.indentation(), 4);
    }
}
