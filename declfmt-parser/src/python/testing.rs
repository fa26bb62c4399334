//! Testing helpers for Python sources.

use crate::python::ast::Node;
use crate::python::formatting::compose_module;
use crate::python::parsing::parse;
use crate::testing::assert_same_lines;

pub use crate::testing::{fixture_path, load_fixture};

/// Assert that parsing then composing reproduces `lines` exactly.
pub fn assert_round_trip(lines: &[String]) {
    let module = parse(lines).unwrap_or_else(|e| panic!("failed to parse: {}", e));
    assert_same_lines(&compose_module(&module), lines);
}

/// Names of the blocks in `nodes`, in order; statements are skipped.
pub fn block_names(nodes: &[Node]) -> Vec<String> {
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Block(b) => Some(b.name().unwrap_or("<unnamed>").to_string()),
            Node::Statement(_) => None,
        })
        .collect()
}
