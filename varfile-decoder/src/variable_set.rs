use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// Decoded variables, one value per key.
///
/// Inserting an existing key overwrites its value. Iteration is in key
/// order so output built from a set is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VariableSet {
    vars: BTreeMap<String, String>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.vars.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Copies every entry of `other` into `self`. Entries of `other` win.
    pub fn extend_from(&mut self, other: VariableSet) {
        self.vars.extend(other.vars);
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.vars
    }
}

/// Combines directly supplied variables with variables loaded from a file.
///
/// Values from the file take precedence over direct values for the same key.
pub fn merge(direct: VariableSet, file: VariableSet) -> VariableSet {
    let mut merged = direct;
    merged.extend_from(file);
    merged
}

impl<K, V> FromIterator<(K, V)> for VariableSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for VariableSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for VariableSet {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}

impl From<BTreeMap<String, String>> for VariableSet {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}
