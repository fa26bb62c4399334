//! Comment casing
//!
//! Uppercases the first letter of the first line of every comment block. Continuation
//! lines of a block are left alone, since they usually continue a sentence.

use crate::java::ast::{Declaration, SourceFile};
use crate::text::{is_comment, runs};
use once_cell::sync::Lazy;
use regex::Regex;

static LOWERCASE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( *// )([a-z])(.*)$").unwrap());

/// `// note` becomes `// Note`; anything else is returned unchanged.
pub fn capitalize(line: &str) -> Option<String> {
    let caps = LOWERCASE_COMMENT.captures(line)?;
    Some(format!(
        "{}{}{}",
        &caps[1],
        caps[2].to_ascii_uppercase(),
        &caps[3]
    ))
}

/// Capitalize the first line of each run of comment lines.
pub fn capitalize_leading(lines: &mut [String]) {
    for run in runs(lines, |line| is_comment(line)) {
        if let Some(line) = capitalize(&lines[run.start]) {
            lines[run.start] = line;
        }
    }
}

/// Apply [`capitalize_leading`] to every raw line sequence in the file.
pub fn normalize(file: &mut SourceFile) {
    capitalize_leading(&mut file.preamble);
    file.root.walk(&mut |declaration: &mut Declaration| {
        capitalize_leading(declaration.header_mut());
        if let Some(lines) = declaration.lines_mut() {
            capitalize_leading(lines);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(source: &[&str]) -> Vec<String> {
        source.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("  // check bounds").as_deref(), Some("  // Check bounds"));
        assert_eq!(capitalize("  // Already"), None);
        assert_eq!(capitalize("  //no space"), None);
        assert_eq!(capitalize("  x = 1; // trailing"), None);
    }

    #[test]
    fn test_only_first_line_of_each_block() {
        let mut body = lines(&[
            "    // the first line",
            "    // continues here",
            "    run();",
            "    // second block",
        ]);
        capitalize_leading(&mut body);
        assert_eq!(
            body,
            [
                "    // The first line",
                "    // continues here",
                "    run();",
                "    // Second block",
            ]
        );
    }
}
