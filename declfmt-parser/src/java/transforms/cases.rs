//! Switch case ordering
//!
//! Works on method bodies, which the parser keeps as raw lines. Two normalizations:
//!
//! - Consecutive arrow-style case groups at one indentation are sorted as whole groups.
//!   A group is the `case ... ->` (or `default ->`) line, the lines indented past it, and
//!   a closing `}` at its own indentation. Deeper switches are sorted first.
//! - The labels of a multi-label case are sorted: `case B, A ->` becomes `case A, B ->`.
//!
//! Only arrow-style cases are touched; colon-style cases may fall through, so their
//! order is significant.

use crate::java::ast::{Declaration, SourceFile};
use crate::text::{closes, indentation};

fn case_label(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(' ');
    if rest.starts_with("case ") || rest.starts_with("default ") {
        find_arrow(rest).map(|_| rest)
    } else {
        None
    }
}

fn is_case(line: &str, dent: usize) -> bool {
    case_label(line).is_some() && indentation(line) == dent
}

/// End (exclusive) of the case group starting at `start`.
fn group_end(lines: &[String], start: usize) -> usize {
    let dent = indentation(&lines[start]);
    let mut end = start + 1;
    while end < lines.len() && indentation(&lines[end]) > dent {
        end += 1;
    }
    if end < lines.len() && closes(&lines[end], dent, "}") {
        end += 1;
    }
    end
}

fn sort_groups_at(lines: &[String], dent: usize) -> Vec<String> {
    let mut sorted = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if !is_case(&lines[i], dent) {
            sorted.push(lines[i].clone());
            i += 1;
            continue;
        }
        let mut groups: Vec<&[String]> = Vec::new();
        while i < lines.len() && is_case(&lines[i], dent) {
            let end = group_end(lines, i);
            groups.push(&lines[i..end]);
            i = end;
        }
        groups.sort();
        for group in groups {
            sorted.extend(group.iter().cloned());
        }
    }
    sorted
}

/// Sort every run of case groups, deepest indentation first.
pub fn sort_case_groups(lines: &mut Vec<String>) {
    let mut dents: Vec<usize> = lines
        .iter()
        .filter(|line| case_label(line).is_some())
        .map(|line| indentation(line))
        .collect();
    dents.sort_unstable_by(|a, b| b.cmp(a));
    dents.dedup();
    for dent in dents {
        *lines = sort_groups_at(lines, dent);
    }
}

/// Byte offset of the first `->` outside string and char literals.
fn find_arrow(text: &str) -> Option<usize> {
    scan(text).1
}

/// Offsets of top-level commas before the arrow, and the arrow itself.
fn scan(text: &str) -> (Vec<usize>, Option<usize>) {
    let bytes = text.as_bytes();
    let mut commas = Vec::new();
    let mut quote = None;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        match quote {
            Some(q) => {
                if b == b'\\' {
                    i += 1;
                } else if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b',' => commas.push(i),
                b'-' if bytes.get(i + 1) == Some(&b'>') => return (commas, Some(i)),
                _ => {}
            },
        }
        i += 1;
    }
    (commas, None)
}

/// Sort the labels of a multi-label arrow case; other lines are returned unchanged.
pub fn sort_labels(line: &str) -> Option<String> {
    let dent = indentation(line);
    let rest = line.get(dent..)?.strip_prefix("case ")?;
    let (commas, arrow) = scan(rest);
    let arrow = arrow?;
    if commas.is_empty() {
        return None;
    }
    let mut labels = Vec::with_capacity(commas.len() + 1);
    let mut start = 0;
    for comma in commas {
        labels.push(rest[start..comma].trim());
        start = comma + 1;
    }
    labels.push(rest[start..arrow].trim());
    // `case null, default` must keep its order; patterns are single-label
    if labels
        .iter()
        .any(|label| *label == "default" || label.contains(' '))
    {
        return None;
    }
    let mut sorted = labels.clone();
    sorted.sort_unstable();
    if sorted == labels {
        return None;
    }
    Some(format!(
        "{}case {} {}",
        &line[..dent],
        sorted.join(", "),
        &rest[arrow..]
    ))
}

/// Sort case groups and case labels in one method body.
///
/// Labels go first: groups are ordered by their label lines.
pub fn normalize_body(lines: &mut Vec<String>) {
    for line in lines.iter_mut() {
        if let Some(sorted) = sort_labels(line) {
            *line = sorted;
        }
    }
    sort_case_groups(lines);
}

/// Apply [`normalize_body`] to every method in the file.
pub fn normalize(file: &mut SourceFile) {
    file.root.walk(&mut |declaration: &mut Declaration| {
        if let Declaration::Method(method) = declaration {
            normalize_body(&mut method.body);
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
    fn test_sort_single_line_groups() {
        let mut body = lines(&[
            "    return switch (day) {",
            "      case \"TUESDAY\" -> 2;",
            "      case \"MONDAY\" -> 1;",
            "      default -> throw new IllegalArgumentException(day);",
            "    };",
        ]);
        sort_case_groups(&mut body);
        assert_eq!(
            body,
            [
                "    return switch (day) {",
                "      case \"MONDAY\" -> 1;",
                "      case \"TUESDAY\" -> 2;",
                "      default -> throw new IllegalArgumentException(day);",
                "    };",
            ]
        );
    }

    #[test]
    fn test_blocks_move_with_their_labels() {
        let mut body = lines(&[
            "    switch (k) {",
            "      case OR -> {",
            "        return or(a);",
            "      }",
            "      case AND -> {",
            "        switch (a.kind) {",
            "          case TRUE -> x();",
            "          case FALSE -> y();",
            "        }",
            "      }",
            "    }",
        ]);
        sort_case_groups(&mut body);
        assert_eq!(
            body,
            [
                "    switch (k) {",
                "      case AND -> {",
                "        switch (a.kind) {",
                "          case FALSE -> y();",
                "          case TRUE -> x();",
                "        }",
                "      }",
                "      case OR -> {",
                "        return or(a);",
                "      }",
                "    }",
            ]
        );
    }

    #[test]
    fn test_colon_cases_are_left_alone() {
        let original = lines(&[
            "    switch (k) {",
            "      case 2:",
            "        b();",
            "      case 1:",
            "        a();",
            "    }",
        ]);
        let mut body = original.clone();
        sort_case_groups(&mut body);
        assert_eq!(body, original);
    }

    #[test]
    fn test_sort_labels() {
        assert_eq!(
            sort_labels("      case OR, AND, NOT -> true;").as_deref(),
            Some("      case AND, NOT, OR -> true;")
        );
        assert_eq!(
            sort_labels("      case ',', '(' -> punct();").as_deref(),
            Some("      case '(', ',' -> punct();")
        );
        assert_eq!(sort_labels("      case AND, OR -> true;"), None);
        assert_eq!(sort_labels("      case null, default -> none();"), None);
        assert_eq!(sort_labels("      case Integer i -> i;"), None);
        assert_eq!(sort_labels("      f(b, a);"), None);
    }
}
