//! Default visibility
//!
//! Gives every declaration without an access modifier an explicit one, inserted right
//! after the signature's indentation.

use crate::java::ast::{Declaration, SourceFile};
use crate::text::indentation;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static ACCESS_MODIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(public|private|protected)\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Private,
    Protected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown access modifier '{0}' (expected public, private or protected)")]
pub struct UnknownVisibility(pub String);

impl Visibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
            Visibility::Protected => "protected",
        }
    }

    /// The access modifier a signature declares, if any.
    pub fn of(signature: &str) -> Option<Visibility> {
        let caps = ACCESS_MODIFIER.captures(signature)?;
        caps.get(1)?.as_str().parse().ok()
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Visibility {
    type Err = UnknownVisibility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            "protected" => Ok(Visibility::Protected),
            other => Err(UnknownVisibility(other.to_string())),
        }
    }
}

/// Insert `default` into the signature of `declaration` if it has no access modifier.
pub fn apply_default(declaration: &mut Declaration, default: Visibility) {
    if Visibility::of(declaration.signature()).is_some() {
        return;
    }
    let signature = declaration.signature_mut();
    let at = indentation(signature);
    signature.insert_str(at, &format!("{} ", default.keyword()));
}

/// Give every declaration in the file an explicit access modifier.
pub fn normalize(file: &mut SourceFile, default: Visibility) {
    file.root
        .walk(&mut |declaration: &mut Declaration| apply_default(declaration, default));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::formatting::compose_file;
    use crate::java::parsing::parse;

    #[test]
    fn test_detects_modifiers() {
        assert_eq!(Visibility::of("  private int x;"), Some(Visibility::Private));
        assert_eq!(
            Visibility::of("  protected abstract void f();"),
            Some(Visibility::Protected)
        );
        assert_eq!(Visibility::of("  int publicCount;"), None);
        assert_eq!(Visibility::of("  static int x;"), None);
    }

    #[test]
    fn test_inserts_after_indentation() {
        let source = [
            "package olivine;",
            "final class Etc {",
            "  private Etc() {}",
            "",
            "  static int depth;",
            "",
            "  static String quote(String s) {",
            "    return s;",
            "  }",
            "}",
        ];
        let mut file = parse(&source).unwrap();
        normalize(&mut file, Visibility::Public);
        assert_eq!(
            compose_file(&file),
            [
                "package olivine;",
                "public final class Etc {",
                "  private Etc() {}",
                "",
                "  public static int depth;",
                "",
                "  public static String quote(String s) {",
                "    return s;",
                "  }",
                "}",
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_modifier() {
        assert_eq!("internal".parse::<Visibility>(), Err(UnknownVisibility("internal".into())));
    }
}
