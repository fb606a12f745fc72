use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

///
/// One row of the full mapping table.
///
/// Fields are declared in alphabetical order so that serializing an entry yields
/// the same key order as the published `mapping.full.json`.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullMapEntry {
    /// The published (possibly aliased) lineage name that produced this entry.
    pub aliased: String,
    pub nextclade: String,
    pub unaliased: String,
    pub wholabel: String,
}

///
/// The denormalized lookup table: lineage name (aliased or unaliased) to entry.
///
/// Backed by a sorted map, so iteration, equality and the serialized form do not
/// depend on the order in which entries were inserted.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FullMap {
    entries: BTreeMap<String, FullMapEntry>,
}

impl FullMap {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Direct key lookup. No prefix matching is done here: the table already holds
    /// every lineage it knows about under its own name.
    ///
    pub fn get(&self, lineage: &str) -> Option<&FullMapEntry> {
        self.entries.get(lineage)
    }

    pub fn contains_key(&self, lineage: &str) -> bool {
        self.entries.contains_key(lineage)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in lexicographic key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FullMapEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert or replace the entry stored under `key`.
    pub(crate) fn insert(&mut self, key: String, entry: FullMapEntry) {
        self.entries.insert(key, entry);
    }

    pub(crate) fn entry(&mut self, key: String) -> Entry<'_, String, FullMapEntry> {
        self.entries.entry(key)
    }
}
