//! Outline rendering
//!
//! Shows how a file was parsed: one node per declaration with its kind, name and sort
//! category. Rendered as an indented tree for people or as JSON for tools. Python files
//! show their `class` and `def` blocks under a module node; other statements are left out.

use declfmt_parser::java::{DeclError, Declaration};
use declfmt_parser::python::{Block, Node};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineFormat {
    Tree,
    Json,
}

impl OutlineFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tree" => Some(OutlineFormat::Tree),
            "json" => Some(OutlineFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlineNode {
    pub kind: String,
    pub name: String,
    pub category: String,
    pub signature: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    pub fn build(declaration: &Declaration) -> Result<Self, DeclError> {
        let children = declaration
            .members()
            .unwrap_or_default()
            .iter()
            .map(OutlineNode::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(OutlineNode {
            kind: declaration.kind().to_string(),
            name: declaration.name()?.to_string(),
            category: declaration.category().to_string(),
            signature: declaration.signature().trim().to_string(),
            children,
        })
    }

    /// Outline of a Python module named `name`.
    pub fn build_module(nodes: &[Node], name: &str) -> Self {
        OutlineNode {
            kind: "module".to_string(),
            name: name.to_string(),
            category: "module".to_string(),
            signature: String::new(),
            children: block_children(nodes),
        }
    }

    fn build_block(block: &Block) -> Self {
        OutlineNode {
            kind: block.kind.to_string(),
            name: block.name().unwrap_or_default().to_string(),
            category: block.kind.to_string(),
            signature: block.first_line().trim().to_string(),
            children: block_children(&block.body),
        }
    }

    pub fn to_tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        let _ = writeln!(
            out,
            "{}{} {} [{}]",
            "  ".repeat(depth),
            self.kind,
            self.name,
            self.category
        );
        for child in &self.children {
            child.write_tree(out, depth + 1);
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn block_children(nodes: &[Node]) -> Vec<OutlineNode> {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Block(b) => Some(OutlineNode::build_block(b)),
            Node::Statement(_) => None,
        })
        .collect()
}
