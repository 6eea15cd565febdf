//! Predefined word-form shortcuts.
//!
//! Every resolved request gets one key per shortcut, so templates can write
//! `Word{P0s}` instead of spelling out `Word{P0||s}`. The catalog is built
//! once on first access and never changes afterwards, which makes it safe to
//! read from any number of threads.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::LazyLock;

use serde::Serialize;

use crate::types::{Category, WordForms};

/// Base shortcuts as (name, zero, singular, plural).
///
/// Upper-case copies of each entry are derived when the catalog is built.
const BASE_SHORTCUTS: &[(&str, &str, &str, &str)] = &[
    ("s", "s", "", "s"),
    ("es", "es", "", "es"),
    ("y", "ies", "y", "ies"),
    ("ies", "ies", "y", "ies"),
    ("this", "these", "this", "these"),
    ("these", "these", "this", "these"),
    ("that", "those", "that", "those"),
    ("those", "those", "that", "those"),
    ("is", "are", "is", "are"),
    ("are", "are", "is", "are"),
];

/// Header line printed above [`shortcut_listing`] entries.
pub const LISTING_HEADER: &str = "Available shortcuts: [shortcut: null, singular, plural]";

static CATALOG: LazyLock<Vec<ShortcutEntry>> = LazyLock::new(build_catalog);

/// A named (zero, singular, plural) triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutEntry {
    /// Suffix appended to `P{index}` to form the substitution key.
    pub name: String,

    #[serde(flatten)]
    pub forms: WordForms,
}

impl ShortcutEntry {
    fn new(name: &str, zero: &str, singular: &str, plural: &str) -> Self {
        Self {
            name: name.to_string(),
            forms: WordForms::new(zero, singular, plural),
        }
    }

    /// The upper-case counterpart of this entry.
    fn to_uppercase(&self) -> Self {
        Self {
            name: self.name.to_uppercase(),
            forms: self.forms.to_uppercase(),
        }
    }

    /// Get the form this shortcut expands to for a category.
    pub fn select(&self, category: Category) -> &str {
        self.forms.select(category)
    }
}

impl Display for ShortcutEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "[{}: {}, {}, {}]",
            self.name, self.forms.zero, self.forms.singular, self.forms.plural
        )
    }
}

fn build_catalog() -> Vec<ShortcutEntry> {
    BASE_SHORTCUTS
        .iter()
        .flat_map(|&(name, zero, singular, plural)| {
            let entry = ShortcutEntry::new(name, zero, singular, plural);
            let upper = entry.to_uppercase();
            [entry, upper]
        })
        .collect()
}

/// Iterate over every shortcut, including the derived upper-case entries.
///
/// Each base entry is immediately followed by its upper-case copy. The
/// iterator can be requested again at any time and always yields the same
/// entries in the same order.
///
/// # Example
///
/// ```
/// let names: Vec<&str> = plural::shortcuts().map(|e| e.name.as_str()).take(4).collect();
/// assert_eq!(names, ["s", "S", "es", "ES"]);
/// ```
pub fn shortcuts() -> impl ExactSizeIterator<Item = &'static ShortcutEntry> {
    CATALOG.iter()
}

/// Look up a single shortcut by its exact (case-sensitive) name.
pub fn shortcut(name: &str) -> Option<&'static ShortcutEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Render the catalog as text: a header line, then one line per entry in
/// `[name: zero, singular, plural]` form.
pub fn shortcut_listing() -> String {
    let mut lines = vec![LISTING_HEADER.to_string()];
    lines.extend(shortcuts().map(ToString::to_string));
    lines.join("\n")
}
