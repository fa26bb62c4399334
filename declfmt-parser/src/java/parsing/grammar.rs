//! Declaration Shape Definitions
//!
//! The dialect has no grammar beyond indentation and line-ending punctuation. A signature
//! line is classified by trying the shapes below in declaration order; the first match
//! wins.
//!
//! # Shape Order
//!
//! 1. enum            - `enum Name` anywhere in the line
//! 2. empty_class     - `class Name ... {}`
//! 3. class           - `class Name`
//! 4. field_class     - ends with `=`, next line is `new Type() {`
//! 5. abstract_method - `abstract ... name(...) ...;`
//! 6. empty_method    - `name(...) ... {}`
//! 7. method          - `name(...) ... {`
//! 8. field           - ends with `;`
//! 9. multiline_field - ends with `=`
//!
//! Order matters: `enum` is tested before `class` so nested enums are never read as
//! classes, and the anonymous-class field is tested before the plain multi-line field
//! that shares its first line.

use once_cell::sync::Lazy;
use regex::Regex;

/// What a signature line opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Enum,
    EmptyClass,
    Class,
    FieldClass,
    AbstractMethod,
    EmptyMethod,
    Method,
    Field,
    MultilineField,
}

/// Shapes as regex rules: (shape, signature pattern, pattern the following line must match).
pub(super) const SHAPE_PATTERNS: &[(Shape, &str, Option<&str>)] = &[
    (Shape::Enum, r"\benum \w", None),
    (Shape::EmptyClass, r"\bclass \w.*\{\}$", None),
    (Shape::Class, r"\bclass \w", None),
    (
        Shape::FieldClass,
        r"=$",
        Some(r"^ *new \w+(?:<[^>]*>)?\(\) \{$"),
    ),
    (Shape::AbstractMethod, r"\babstract .*\w\(.*\).*;$", None),
    (Shape::EmptyMethod, r"\w\(.*\) .*\{\}$", None),
    (Shape::Method, r"\w\(.*\) .*\{$", None),
    (Shape::Field, r";$", None),
    (Shape::MultilineField, r"=$", None),
];

struct ShapeRule {
    shape: Shape,
    signature: Regex,
    next_line: Option<Regex>,
}

static SHAPE_RULES: Lazy<Vec<ShapeRule>> = Lazy::new(|| {
    SHAPE_PATTERNS
        .iter()
        .map(|(shape, signature, next_line)| ShapeRule {
            shape: *shape,
            signature: Regex::new(signature).unwrap(),
            next_line: next_line.map(|pattern| Regex::new(pattern).unwrap()),
        })
        .collect()
});

/// A declaration line starts, after indentation, with a word character.
static SIGNATURE_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^ *\w").unwrap());

/// Classify a signature line, given the line that follows it (if any).
pub fn classify(signature: &str, next_line: Option<&str>) -> Option<Shape> {
    if !SIGNATURE_START.is_match(signature) {
        return None;
    }
    SHAPE_RULES
        .iter()
        .find(|rule| {
            rule.signature.is_match(signature)
                && match &rule.next_line {
                    Some(pattern) => next_line.is_some_and(|line| pattern.is_match(line)),
                    None => true,
                }
        })
        .map(|rule| rule.shape)
}
