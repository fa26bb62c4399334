//! Categories and their rank order
//!
//! Every declaration falls into exactly one category. The reorder engine groups siblings
//! by the rank of their category before comparing names.

use super::error::SortError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static STATIC_MODIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bstatic\b").unwrap());
static FINAL_INTEGRAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfinal (?:byte|short|int|long|char)\b").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Constant,
    Class,
    FieldClass,
    StaticField,
    Field,
    Method,
    Enum,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Constant,
        Category::Class,
        Category::FieldClass,
        Category::StaticField,
        Category::Field,
        Category::Method,
        Category::Enum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Constant => "constant",
            Category::Class => "class",
            Category::FieldClass => "field class",
            Category::StaticField => "static field",
            Category::Field => "field",
            Category::Method => "method",
            Category::Enum => "enum",
        }
    }

    /// Category of a plain field, decided by its modifiers: `static final int` and the
    /// other integral types make a constant, any other `static` a static field.
    pub fn of_field(signature: &str) -> Category {
        if !STATIC_MODIFIER.is_match(signature) {
            return Category::Field;
        }
        if FINAL_INTEGRAL.is_match(signature) {
            Category::Constant
        } else {
            Category::StaticField
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SortError::UnknownCategory(s.to_string()))
    }
}

/// Ascending rank order of categories.
///
/// Categories absent from the order cannot be ranked; sorting a scope that contains one
/// fails with [`SortError::UnrankedCategory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder {
    ranks: Vec<Category>,
}

impl CategoryOrder {
    pub const DEFAULT: [Category; 6] = [
        Category::Constant,
        Category::Class,
        Category::FieldClass,
        Category::StaticField,
        Category::Field,
        Category::Method,
    ];

    pub fn new(ranks: Vec<Category>) -> Self {
        Self { ranks }
    }

    /// Build an order from category names such as `"static field"`.
    pub fn from_names<I, S>(names: I) -> Result<Self, SortError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranks = names
            .into_iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Category>, _>>()?;
        Ok(Self::new(ranks))
    }

    pub fn rank(&self, category: Category) -> Result<usize, SortError> {
        self.ranks
            .iter()
            .position(|c| *c == category)
            .ok_or(SortError::UnrankedCategory(category))
    }

    pub fn categories(&self) -> &[Category] {
        &self.ranks
    }
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self::new(Self::DEFAULT.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("  static final int X = 1;", Category::Constant)]
    #[case("  private static final long SEED = 42L;", Category::Constant)]
    #[case("  static final String NAME = \"x\";", Category::StaticField)]
    #[case("  static String s;", Category::StaticField)]
    #[case("  final int size;", Category::Field)]
    #[case("  int y;", Category::Field)]
    #[case("  int staticCount;", Category::Field)]
    fn test_field_category(#[case] signature: &str, #[case] expected: Category) {
        assert_eq!(Category::of_field(signature), expected);
    }

    #[test]
    fn test_default_rank_order() {
        let order = CategoryOrder::default();
        let ranks: Vec<usize> = CategoryOrder::DEFAULT
            .iter()
            .map(|c| order.rank(*c).unwrap())
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(
            order.rank(Category::Enum),
            Err(SortError::UnrankedCategory(Category::Enum))
        );
    }

    #[test]
    fn test_order_from_names() {
        let order = CategoryOrder::from_names(["method", "field", "enum"]).unwrap();
        assert_eq!(order.rank(Category::Enum).unwrap(), 2);
        assert_eq!(
            CategoryOrder::from_names(["method", "lambda"]),
            Err(SortError::UnknownCategory("lambda".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }
}
