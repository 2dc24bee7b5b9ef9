use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// One dictionary value.
///
/// A lang file may map a source string straight to its translation, or map a
/// namespace (e.g. `/blueprints/datasources`) to a table of context-aware
/// translations:
///
/// ```json
/// {
///   "Create new": "Créer",
///   "/blueprints/datasources": { "Create new": "Nouvelle source" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Namespaced(BTreeMap<String, String>),
}

impl Entry {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(text) => Some(text),
            Entry::Namespaced(_) => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Entry::Namespaced(map) => map.get(key).map(String::as_str),
            Entry::Text(_) => None,
        }
    }
}

/// Translation dictionary of the active language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Dictionary {
    entries: HashMap<String, Entry>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) {
        self.entries.insert(key.into(), entry);
    }

    /// Merge `other` into this dictionary; keys from `other` replace existing keys
    /// wholesale (namespaced tables are not merged entry by entry).
    pub fn merge(&mut self, other: Dictionary) {
        self.entries.extend(other.entries);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entry)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, Entry)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, Entry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
