use fxhash::FxHashMap as HashMap;

///
/// Anything that can answer "which WHO label is attached to exactly this prefix?".
///
/// The matcher only ever needs exact-key probes, so any keyed table can take part
/// in longest-prefix resolution by implementing this trait.
///
pub trait LabelLookup {
    fn get_label(&self, prefix: &str) -> Option<&str>;
}

///
/// The core table: lineage prefixes (`B.1.617.2`, `AY`, ...) mapped to WHO labels.
///
/// Keys are unique. Inserting an existing prefix replaces its label, so a table
/// collected from rows keeps the last row seen for each prefix.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefixMap {
    map: HashMap<String, String>,
}

impl PrefixMap {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Attach a WHO label to a prefix.
    ///
    /// # Returns
    /// - the label previously attached to the prefix, if any
    ///
    pub fn insert(&mut self, prefix: impl Into<String>, label: impl Into<String>) -> Option<String> {
        self.map.insert(prefix.into(), label.into())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl LabelLookup for PrefixMap {
    fn get_label(&self, prefix: &str) -> Option<&str> {
        self.map.get(prefix).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for PrefixMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = PrefixMap::new();
        for (prefix, label) in iter {
            table.insert(prefix, label);
        }
        table
    }
}
