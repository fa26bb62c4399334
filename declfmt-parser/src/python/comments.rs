//! Comment casing for `#` comments
//!
//! Uppercases the first letter of the first comment of every run of comment lines.
//! Tool directives such as `# noqa` or `# type: ignore` are left as written, and so are
//! `#` lines inside strings, which are never standalone comment statements.

use crate::python::ast::{Module, Node};
use crate::text::runs;
use once_cell::sync::Lazy;
use regex::Regex;

static LOWERCASE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( *# )([a-z])(.*)$").unwrap());
static DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ *# (?:noqa\b|[a-z][\w-]*:)").unwrap());

/// `# note` becomes `# Note`; anything else is returned unchanged.
pub fn capitalize(line: &str) -> Option<String> {
    if DIRECTIVE.is_match(line) {
        return None;
    }
    let caps = LOWERCASE_COMMENT.captures(line)?;
    Some(format!(
        "{}{}{}",
        &caps[1],
        caps[2].to_ascii_uppercase(),
        &caps[3]
    ))
}

fn capitalize_runs(nodes: &mut [Node]) {
    for run in runs(nodes, Node::is_comment) {
        if let Node::Statement(s) = &mut nodes[run.start] {
            if let Some(line) = s.lines.first().and_then(|line| capitalize(line)) {
                s.lines[0] = line;
            }
        }
    }
}

pub fn normalize(module: &mut Module) {
    module.walk_lists(&mut capitalize_runs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::python::formatting::compose_module;
    use crate::python::parsing::parse;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("    # check bounds").as_deref(), Some("    # Check bounds"));
        assert_eq!(capitalize("# Already"), None);
        assert_eq!(capitalize("#no space"), None);
        assert_eq!(capitalize("#!/usr/bin/env python3"), None);
        assert_eq!(capitalize("x = 1  # trailing"), None);
    }

    #[test]
    fn test_directives_are_kept() {
        assert_eq!(capitalize("# noqa: E501"), None);
        assert_eq!(capitalize("    # type: ignore"), None);
        assert_eq!(capitalize("# fmt: off"), None);
        assert_eq!(capitalize("# pylint: disable=invalid-name"), None);
    }

    #[test]
    fn test_first_comment_of_each_run() {
        let mut module = parse(&[
            "# module notes",
            "# continue here",
            "def f():",
            "    # the body",
            "    x = \"\"\"",
            "# inside a string",
            "\"\"\"",
            "    # second run",
            "    return x",
        ])
        .unwrap();
        normalize(&mut module);
        assert_eq!(
            compose_module(&module),
            [
                "# Module notes",
                "# continue here",
                "def f():",
                "    # The body",
                "    x = \"\"\"",
                "# inside a string",
                "\"\"\"",
                "",
                "    # Second run",
                "    return x",
            ]
        );
    }
}
