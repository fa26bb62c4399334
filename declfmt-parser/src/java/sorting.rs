//! Reorder Engine
//!
//! Sorts the members of every class and anonymous class, bottom-up, by
//! (category rank, quasinumeric name, signature). The sort is stable, so declarations
//! with identical keys keep their relative order and sorting twice changes nothing.

use crate::java::ast::error::SortError;
use crate::java::ast::{CategoryOrder, Declaration};
use crate::text::{quasinumeric_key, KeyPart};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
    pub order: CategoryOrder,
    /// Sort enum constant lines as plain text.
    pub enum_constants: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            order: CategoryOrder::default(),
            enum_constants: true,
        }
    }
}

/// Sort key of one declaration; field order is comparison order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey {
    pub rank: usize,
    pub name: Vec<KeyPart>,
    pub signature: String,
}

impl SortKey {
    pub fn of(declaration: &Declaration, order: &CategoryOrder) -> Result<Self, SortError> {
        Ok(SortKey {
            rank: order.rank(declaration.category())?,
            name: quasinumeric_key(declaration.name()?),
            signature: declaration.signature().to_string(),
        })
    }
}

impl Declaration {
    /// Recursively sort this declaration's members.
    pub fn sort(&mut self, options: &SortOptions) -> Result<(), SortError> {
        match self {
            Declaration::Class(c) => sort_members(&mut c.members, options),
            Declaration::FieldClass(f) => sort_members(&mut f.members, options),
            Declaration::Enum(e) => {
                if options.enum_constants {
                    e.constants.sort();
                }
                Ok(())
            }
            Declaration::Field(_) | Declaration::Method(_) => Ok(()),
        }
    }
}

fn sort_members(members: &mut Vec<Declaration>, options: &SortOptions) -> Result<(), SortError> {
    for member in members.iter_mut() {
        member.sort(options)?;
    }
    // Keys first, so a failure leaves this scope untouched
    let keys = members
        .iter()
        .map(|member| SortKey::of(member, &options.order))
        .collect::<Result<Vec<_>, _>>()?;
    let mut keyed: Vec<(SortKey, Declaration)> = keys.into_iter().zip(members.drain(..)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    members.extend(keyed.into_iter().map(|(_, member)| member));
    Ok(())
}

/// Sort the root declaration of a file.
pub fn sort(declaration: &mut Declaration, options: &SortOptions) -> Result<(), SortError> {
    declaration.sort(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::java::ast::{Category, Class, Enum, Field, Method};

    fn field(signature: &str) -> Declaration {
        Declaration::Field(Field {
            header: vec![],
            signature: signature.to_string(),
            value: vec![],
        })
    }

    fn method(signature: &str) -> Declaration {
        Declaration::Method(Method {
            header: vec![],
            signature: signature.to_string(),
            body: vec![],
        })
    }

    fn class(signature: &str, members: Vec<Declaration>) -> Declaration {
        Declaration::Class(Class {
            header: vec![],
            signature: signature.to_string(),
            members,
        })
    }

    fn names(declaration: &Declaration) -> Vec<&str> {
        declaration
            .members()
            .unwrap()
            .iter()
            .map(|m| m.name().unwrap())
            .collect()
    }

    #[test]
    fn test_sort_by_category_then_quasinumeric_name() {
        let mut root = class(
            "class A {",
            vec![
                method("  void item10() {}"),
                field("  int value;"),
                method("  void item2() {}"),
                field("  static int counter;"),
                field("  static final int MAX_SIZE = 1;"),
            ],
        );
        root.sort(&SortOptions::default()).unwrap();
        assert_eq!(names(&root), vec!["MAX_SIZE", "counter", "value", "item2", "item10"]);
    }

    #[test]
    fn test_signature_breaks_name_ties() {
        let mut root = class(
            "class A {",
            vec![
                method("  void of(long x) {}"),
                method("  void of(int x) {}"),
            ],
        );
        root.sort(&SortOptions::default()).unwrap();
        let signatures: Vec<&str> = root.members().unwrap().iter().map(|m| m.signature()).collect();
        assert_eq!(signatures, vec!["  void of(int x) {}", "  void of(long x) {}"]);
    }

    #[test]
    fn test_nested_scopes_sort_independently() {
        let mut root = class(
            "class A {",
            vec![
                method("  void b() {}"),
                class("  static class Inner {", vec![field("    int z;"), field("    int a;")]),
            ],
        );
        root.sort(&SortOptions::default()).unwrap();
        assert_eq!(names(&root), vec!["Inner", "b"]);
        assert_eq!(names(&root.members().unwrap()[0]), vec!["a", "z"]);
    }

    #[test]
    fn test_enum_constants() {
        let colors = || {
            Declaration::Enum(Enum {
                header: vec![],
                signature: "enum Color {".to_string(),
                constants: vec!["  RED,".to_string(), "  BLUE,".to_string()],
            })
        };
        let mut sorted = colors();
        sorted.sort(&SortOptions::default()).unwrap();
        assert_eq!(sorted.lines().unwrap(), ["  BLUE,", "  RED,"]);

        let mut kept = colors();
        let options = SortOptions {
            enum_constants: false,
            ..SortOptions::default()
        };
        kept.sort(&options).unwrap();
        assert_eq!(kept, colors());
    }

    #[test]
    fn test_unranked_category_leaves_scope_unchanged() {
        let nested_enum = Declaration::Enum(Enum {
            header: vec![],
            signature: "  enum Mode {".to_string(),
            constants: vec![],
        });
        let mut root = class("class A {", vec![method("  void b() {}"), nested_enum]);
        let before = root.clone();
        assert_eq!(
            root.sort(&SortOptions::default()),
            Err(SortError::UnrankedCategory(Category::Enum))
        );
        assert_eq!(root, before);

        let options = SortOptions {
            order: CategoryOrder::from_names(["enum", "method"]).unwrap(),
            ..SortOptions::default()
        };
        root.sort(&options).unwrap();
        assert_eq!(names(&root), vec!["Mode", "b"]);
    }
}
