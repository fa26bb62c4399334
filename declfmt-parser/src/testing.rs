//! Fixture helpers shared by both dialects.
//!
//! Fixtures live in `tests/fixtures/` and are already normalized, so each one must
//! survive parse + compose unchanged.

use crate::text::normalize_lines;
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Load a fixture as normalized lines.
pub fn load_fixture(name: &str) -> Vec<String> {
    let path = fixture_path(name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e));
    normalize_lines(&source)
}

/// Panic with the first differing line unless `composed` equals `original`.
pub fn assert_same_lines(composed: &[String], original: &[String]) {
    if composed != original {
        let first = composed
            .iter()
            .zip(original)
            .position(|(a, b)| a != b)
            .unwrap_or(composed.len().min(original.len()));
        panic!(
            "round trip differs at line {}:\n  composed: {:?}\n  original: {:?}",
            first + 1,
            composed.get(first),
            original.get(first)
        );
    }
}
