//! Composer
//!
//! The parser keeps no blank lines between statements; [`blank_lines`] puts them back.
//! Blocks get two blank lines around them at module level and one inside a block. A
//! comment directly above a block stays attached to it, and elsewhere a comment that
//! starts a comment run is set apart from the code before it.

use crate::python::ast::{Module, Node};

/// Number of blank lines composed before `nodes[i]`.
pub fn blank_lines(nodes: &[Node], i: usize, top_level: bool) -> usize {
    if i == 0 {
        return 0;
    }
    let (a, b) = (&nodes[i - 1], &nodes[i]);
    if a.is_comment() {
        return 0;
    }
    let leads_to_block = nodes[i..]
        .iter()
        .find(|node| !node.is_comment())
        .is_some_and(Node::is_block);
    if a.is_block() || leads_to_block {
        return if top_level { 2 } else { 1 };
    }
    usize::from(b.is_comment() && a.indentation() >= b.indentation())
}

impl Node {
    /// Append this node's lines to `out`.
    pub fn compose(&self, out: &mut Vec<String>) {
        match self {
            Node::Block(b) => {
                out.extend(b.header.iter().cloned());
                out.extend(b.signature.iter().cloned());
                compose_nodes(&b.body, false, out);
            }
            Node::Statement(s) => out.extend(s.lines.iter().cloned()),
        }
    }
}

pub fn compose_nodes(nodes: &[Node], top_level: bool, out: &mut Vec<String>) {
    for (i, node) in nodes.iter().enumerate() {
        out.resize(out.len() + blank_lines(nodes, i, top_level), String::new());
        node.compose(out);
    }
}

pub fn compose_module(module: &Module) -> Vec<String> {
    let mut out = Vec::new();
    compose_nodes(&module.nodes, true, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::parsing::parse;

    fn recompose(source: &[&str]) -> Vec<String> {
        compose_module(&parse(source).unwrap())
    }

    #[test]
    fn test_blocks_are_set_apart() {
        assert_eq!(
            recompose(&[
                "import os",
                "class A:",
                "    x = 1",
                "    def f(self):",
                "        pass",
                "    def g(self):",
                "        pass",
                "def h():",
                "    pass",
                "main()",
            ]),
            [
                "import os",
                "",
                "",
                "class A:",
                "    x = 1",
                "",
                "    def f(self):",
                "        pass",
                "",
                "    def g(self):",
                "        pass",
                "",
                "",
                "def h():",
                "    pass",
                "",
                "",
                "main()",
            ]
        );
    }

    #[test]
    fn test_comments_between_statements() {
        assert_eq!(
            recompose(&[
                "def f():",
                "    x = 1",
                "",
                "",
                "    y = 2",
                "    # first",
                "    # second",
                "    if x:",
                "        # nested",
                "        pass",
            ]),
            [
                "def f():",
                "    x = 1",
                "    y = 2",
                "",
                "    # first",
                "    # second",
                "    if x:",
                "        # nested",
                "        pass",
            ]
        );
    }

    #[test]
    fn test_comment_above_a_block_stays_attached() {
        assert_eq!(
            recompose(&["x = 1", "# helpers", "", "", "def f():", "    pass"]),
            ["x = 1", "", "", "# helpers", "def f():", "    pass"]
        );
    }

    #[test]
    fn test_statement_lines_are_kept_verbatim() {
        let source = [
            "def f():",
            "    \"\"\"Doc.",
            "",
            "    More.",
            "    \"\"\"",
        ];
        assert_eq!(recompose(&source), source);
    }
}
