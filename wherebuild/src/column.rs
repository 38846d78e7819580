//!
//! Column → value mappings of a single predicate.
//!

use std::collections::{BTreeMap, HashMap};

use crate::value::Arg;

/// The columns of one predicate, each bound to its comparison value.
///
/// Keys are unique, and iteration always yields columns in lexicographic
/// order of their names, regardless of insertion order. Two predicates built
/// from the same key/value set therefore render identically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns {
    entries: BTreeMap<String, Arg>,
}

impl Columns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous value for that column.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Arg>) -> Option<Arg> {
        self.entries.insert(name.into(), value.into())
    }

    /// Builder-style `insert`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arg> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate columns in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arg)> {
        self.entries.iter().map(|(name, arg)| (name.as_str(), arg))
    }
}

impl<K, V> FromIterator<(K, V)> for Columns
where
    K: Into<String>,
    V: Into<Arg>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Columns
where
    K: Into<String>,
    V: Into<Arg>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Columns
where
    K: Into<String>,
    V: Into<Arg>,
{
    fn from(entries: HashMap<K, V, S>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<BTreeMap<K, V>> for Columns
where
    K: Into<String>,
    V: Into<Arg>,
{
    fn from(entries: BTreeMap<K, V>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for Columns
where
    K: Into<String>,
    V: Into<Arg>,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}
