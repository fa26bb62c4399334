//! Block reorder
//!
//! Only contiguous runs of blocks move. Any statement between two blocks, a comment
//! included, is a fence that nothing is sorted across. Within a run, blocks are ordered
//! by (kind, quasinumeric name, signature), classes first. Bodies are sorted before the
//! lists that contain them, and the sort is stable.

use crate::python::ast::{Block, Module, Node};
use crate::text::{quasinumeric_key, runs, KeyPart};

/// Sort key of one block; field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub rank: usize,
    pub name: Vec<KeyPart>,
    pub signature: Vec<String>,
}

impl SortKey {
    pub fn of(block: &Block) -> Self {
        SortKey {
            rank: block.kind.rank(),
            name: quasinumeric_key(block.name().unwrap_or_default()),
            signature: block.signature.clone(),
        }
    }
}

/// Sort every run of blocks in `nodes`. Bodies are left alone.
pub fn sort_runs(nodes: &mut [Node]) {
    for run in runs(nodes, Node::is_block) {
        nodes[run].sort_by_cached_key(|node| match node {
            Node::Block(b) => Some(SortKey::of(b)),
            Node::Statement(_) => None,
        });
    }
}

/// Sort the whole module, innermost lists first.
pub fn sort(module: &mut Module) {
    module.walk_lists(&mut sort_runs);
}
