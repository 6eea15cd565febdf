use std::collections::BTreeMap;
use std::collections::btree_map::{IntoIter, Iter};
use std::ops::Index;

use serde::Serialize;

/// The flat key to word-form mapping produced by a resolve call.
///
/// Keys are plain strings such as `P0s` or `P1|leaf|leaves`; a templating
/// layer looks them up directly. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Substitutions(BTreeMap<String, String>);

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge another mapping into this one. Entries from `other` win.
    pub fn merge(&mut self, other: Substitutions) {
        self.0.extend(other.0);
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl Index<&str> for Substitutions {
    type Output = str;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &str) -> &Self::Output {
        match self.0.get(key) {
            Some(value) => value,
            None => panic!("no substitution for key '{key}'"),
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Substitutions {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.0
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Substitutions {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut substitutions = Substitutions::new();
        substitutions.extend(iter);
        substitutions
    }
}

impl IntoIterator for Substitutions {
    type Item = (String, String);
    type IntoIter = IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Substitutions {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Substitutions> for BTreeMap<String, String> {
    fn from(substitutions: Substitutions) -> Self {
        substitutions.0
    }
}
