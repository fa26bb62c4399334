//! Testing helpers
//!
//! Shared by the unit tests and the integration tests under `tests/`.

use crate::java::ast::Declaration;
use crate::java::formatting::compose_file;
use crate::java::parsing::parse;
use crate::testing::assert_same_lines;

pub use crate::testing::{fixture_path, load_fixture};

/// Assert that parsing then composing reproduces `lines` exactly.
pub fn assert_round_trip(lines: &[String]) {
    let file = parse(lines).unwrap_or_else(|e| panic!("failed to parse: {}", e));
    assert_same_lines(&compose_file(&file), lines);
}

/// Names of the direct members of a class, in order.
pub fn member_names(declaration: &Declaration) -> Vec<String> {
    declaration
        .members()
        .unwrap_or_default()
        .iter()
        .map(|member| member.name().unwrap_or("<unnamed>").to_string())
        .collect()
}
