use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use super::Quantity;

/// The grammatical number selected by a quantity.
///
/// Categories are ordered the same way word forms are stored: zero first,
/// then singular, then plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The quantity is exactly the integer `0`.
    Zero,

    /// The quantity is exactly the integer `1`.
    Singular,

    /// Everything else, including negative, fractional and non-numeric values.
    Plural,
}

impl Category {
    /// All categories in storage order.
    pub const ALL: [Category; 3] = [Category::Zero, Category::Singular, Category::Plural];

    /// Classify a quantity.
    ///
    /// Only exact integer equality counts: `0.0`, `1.0`, `false` and `true`
    /// are all [`Category::Plural`].
    ///
    /// # Example
    ///
    /// ```
    /// use plural::{Category, Quantity};
    ///
    /// assert_eq!(Category::of(&Quantity::from(0)), Category::Zero);
    /// assert_eq!(Category::of(&Quantity::from(1)), Category::Singular);
    /// assert_eq!(Category::of(&Quantity::from(-1)), Category::Plural);
    /// assert_eq!(Category::of(&Quantity::from(true)), Category::Plural);
    /// ```
    pub fn of(quantity: &Quantity) -> Category {
        match quantity {
            Quantity::Integer(0) => Category::Zero,
            Quantity::Integer(1) => Category::Singular,
            _ => Category::Plural,
        }
    }

    /// Position of this category within a (zero, singular, plural) triple.
    pub fn index(self) -> usize {
        match self {
            Category::Zero => 0,
            Category::Singular => 1,
            Category::Plural => 2,
        }
    }

    /// Lowercase name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Zero => "zero",
            Category::Singular => "singular",
            Category::Plural => "plural",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
