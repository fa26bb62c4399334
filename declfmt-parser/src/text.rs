//! Text Utilities
//!
//! Line-level helpers used by the parser, the composer and the passes. Lines are plain
//! strings with trailing whitespace already stripped; indentation is spaces only.

use std::cmp::Ordering;
use std::ops::Range;

/// Indentation reported for blank lines. Larger than any real indentation, so a blank line
/// never closes or opens a block.
pub const BLANK_INDENTATION: usize = usize::MAX;

/// Number of leading spaces on a line, or [`BLANK_INDENTATION`] for a blank line.
pub fn indentation(line: &str) -> usize {
    if is_blank(line) {
        return BLANK_INDENTATION;
    }
    line.len() - line.trim_start_matches(' ').len()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A line whose first non-space characters are `//`.
pub fn is_comment(line: &str) -> bool {
    line.trim_start_matches(' ').starts_with("//")
}

pub fn is_annotation(line: &str) -> bool {
    line.trim_start_matches(' ').starts_with('@')
}

/// Exactly `dent` spaces followed by `closer`.
pub fn closes(line: &str, dent: usize, closer: &str) -> bool {
    line.len() == dent + closer.len()
        && line.ends_with(closer)
        && line[..dent].bytes().all(|b| b == b' ')
}

/// `closer` preceded by `dent` spaces.
pub fn closing_line(dent: usize, closer: &str) -> String {
    format!("{}{}", " ".repeat(dent), closer)
}

/// Split source text into lines, stripping trailing whitespace (and any `\r`) from each.
pub fn normalize_lines(source: &str) -> Vec<String> {
    source.lines().map(|line| line.trim_end().to_string()).collect()
}

/// Join lines back into text with `\n` endings, one per line.
pub fn render_lines(lines: &[String]) -> String {
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    text
}

/// Maximal contiguous index ranges of `items` for which `pred` holds, in order.
pub fn runs<T>(items: &[T], mut pred: impl FnMut(&T) -> bool) -> Vec<Range<usize>> {
    let mut found = Vec::new();
    let mut i = 0;
    while i < items.len() {
        while i < items.len() && !pred(&items[i]) {
            i += 1;
        }
        let start = i;
        while i < items.len() && pred(&items[i]) {
            i += 1;
        }
        if start < i {
            found.push(start..i);
        }
    }
    found
}

/// One run of a [`quasinumeric_key`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyPart {
    Text(String),
    Number(Digits),
}

/// A run of ASCII digits compared by numeric value, whatever its length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    pub fn new(digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Digits("0".to_string())
        } else {
            Digits(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split `name` into alternating text and digit runs so embedded numbers sort numerically.
///
/// The key always starts and ends with a text run (possibly empty), so keys of different
/// names line up run for run: `item2` becomes `["item", 2, ""]` and sorts before
/// `item10`.
pub fn quasinumeric_key(name: &str) -> Vec<KeyPart> {
    let mut parts = Vec::new();
    let mut text = String::new();
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_ascii_digit() {
            text.push(c);
            continue;
        }
        let mut digits = String::from(c);
        while let Some(&d) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            digits.push(d);
            chars.next();
        }
        parts.push(KeyPart::Text(std::mem::take(&mut text)));
        parts.push(KeyPart::Number(Digits::new(&digits)));
    }
    parts.push(KeyPart::Text(text));
    parts
}
