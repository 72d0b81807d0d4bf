/*! Key/value labels that every occupied node of a tree can carry */

use core::fmt;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Tag store of a node. Keys are unique; iteration is in sorted key order so
/// renderings are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags(BTreeMap<String, usize>);

impl Tags {
    pub fn new() -> Self {
        Tags(BTreeMap::new())
    }

    /// Insert or overwrite a label
    pub fn set(&mut self, name: &str, value: usize) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Drop all labels except `name`
    pub fn retain_only(&mut self, name: &str) {
        self.0.retain(|key, _| key == name);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}]",
            self.iter().map(|(key, value)| format!("({key}, {value})")).join(", ")
        )
    }
}
