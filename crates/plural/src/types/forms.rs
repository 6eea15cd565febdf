use serde::Serialize;

use super::Category;

/// The three word forms a variant can take.
///
/// # Example
///
/// ```
/// use plural::{Category, WordForms};
///
/// let leaves = WordForms::split("leaf|leaves", "|");
/// assert_eq!(leaves.select(Category::Zero), "leaves");
/// assert_eq!(leaves.select(Category::Singular), "leaf");
/// assert_eq!(leaves.select(Category::Plural), "leaves");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct WordForms {
    /// Form used when the quantity is zero.
    pub zero: String,

    /// Form used when the quantity is one.
    pub singular: String,

    /// Form used for every other quantity.
    pub plural: String,
}

impl WordForms {
    /// Create forms from an explicit (zero, singular, plural) triple.
    pub fn new(
        zero: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            zero: zero.into(),
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Use the same form for every category.
    pub fn uniform(form: impl Into<String>) -> Self {
        let form = form.into();
        Self::new(form.clone(), form.clone(), form)
    }

    /// Decode a candidate string.
    ///
    /// The candidate is split on at most the first two occurrences of
    /// `separator`:
    /// - `"word"` uses `word` for every category
    /// - `"single|multi"` uses `multi` for both zero and plural
    /// - `"null|single|multi"` maps onto zero, singular and plural in order
    ///
    /// Further separators stay inside the plural field. An empty separator
    /// never splits.
    pub fn split(candidate: &str, separator: &str) -> Self {
        if separator.is_empty() {
            return Self::uniform(candidate);
        }

        let mut fields = candidate.splitn(3, separator);
        let first = fields.next().unwrap_or_default();
        match (fields.next(), fields.next()) {
            (None, _) => Self::uniform(first),
            (Some(multi), None) => Self::new(multi, first, multi),
            (Some(single), Some(multi)) => Self::new(first, single, multi),
        }
    }

    /// Get the form for a category.
    pub fn select(&self, category: Category) -> &str {
        match category {
            Category::Zero => &self.zero,
            Category::Singular => &self.singular,
            Category::Plural => &self.plural,
        }
    }

    /// Returns these forms with every field upper-cased.
    pub fn to_uppercase(&self) -> Self {
        Self::new(
            self.zero.to_uppercase(),
            self.singular.to_uppercase(),
            self.plural.to_uppercase(),
        )
    }
}
