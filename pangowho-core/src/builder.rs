//!
//! Expansion of the lineage feed into the full mapping table.
//!
//! Every record contributes up to two entries: one under its published name and one
//! under its unaliased name. The two keys follow different overwrite rules:
//!
//! - the published-name entry is always written, so a later record with the same
//!   name replaces an earlier one;
//! - the unaliased entry is only written when the key is still free, so the first
//!   record that introduced an unaliased name keeps it.
//!
//! Both rules are kept as-is because the published `mapping.full.json` was built
//! with them.
//!
use std::collections::btree_map::Entry;

use crate::consts::UNKNOWN_WHO_LABEL;
use crate::matcher::resolve_or_unknown;
use crate::models::{FullMap, FullMapEntry, LabelLookup, LineageRecord};

///
/// Counts describing a finished build, used for reporting.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of feed records consumed.
    pub records: usize,
    /// Number of keys in the resulting table.
    pub entries: usize,
    /// Number of entries whose WHO label could not be resolved.
    pub unknown: usize,
}

impl BuildSummary {
    pub fn from_full_map(records: usize, full_map: &FullMap) -> Self {
        let unknown = full_map
            .iter()
            .filter(|(_, entry)| entry.wholabel == UNKNOWN_WHO_LABEL)
            .count();

        BuildSummary {
            records,
            entries: full_map.len(),
            unknown,
        }
    }
}

///
/// Builds a [`FullMap`] from lineage records using a prefix table for WHO labels.
///
/// ```rust
/// use pangowho_core::{FullMappingBuilder, LineageRecord, PrefixMap};
///
/// let table: PrefixMap = [("B.1.1.529", "Omicron")].into_iter().collect();
/// let records = vec![LineageRecord::new("BA.2", "B.1.1.529.2", "21L")];
///
/// let full_map = FullMappingBuilder::new(&table).build(&records);
///
/// assert_eq!(full_map.get("BA.2").unwrap().wholabel, "Unknown");
/// assert_eq!(full_map.get("B.1.1.529.2").unwrap().wholabel, "Omicron");
/// ```
///
pub struct FullMappingBuilder<'t, T: LabelLookup + ?Sized> {
    table: &'t T,
}

impl<'t, T: LabelLookup + ?Sized> FullMappingBuilder<'t, T> {
    pub fn new(table: &'t T) -> Self {
        FullMappingBuilder { table }
    }

    ///
    /// Expand the records, in order, into a full mapping table.
    ///
    /// # Arguments
    /// - `records`: the lineage feed, in document order
    ///
    pub fn build(&self, records: &[LineageRecord]) -> FullMap {
        let mut full_map = FullMap::new();

        for record in records {
            let aliased_entry = FullMapEntry {
                aliased: record.lineage.clone(),
                nextclade: record.nextstrain_clade.clone(),
                unaliased: record.unaliased.clone(),
                wholabel: resolve_or_unknown(&record.lineage, self.table),
            };
            full_map.insert(record.lineage.clone(), aliased_entry);

            // checked after the insert above: a record whose name is already
            // unaliased does not get a second entry
            if let Entry::Vacant(slot) = full_map.entry(record.unaliased.clone()) {
                slot.insert(FullMapEntry {
                    aliased: record.lineage.clone(),
                    nextclade: record.nextstrain_clade.clone(),
                    unaliased: record.unaliased.clone(),
                    wholabel: resolve_or_unknown(&record.unaliased, self.table),
                });
            }
        }

        full_map
    }

    /// Same as [`FullMappingBuilder::build`], also returning summary counts.
    pub fn build_with_summary(&self, records: &[LineageRecord]) -> (FullMap, BuildSummary) {
        let full_map = self.build(records);
        let summary = BuildSummary::from_full_map(records.len(), &full_map);

        log::info!(
            "Built {} entries from {} lineages ({} without a WHO label)",
            summary.entries,
            summary.records,
            summary.unknown
        );

        (full_map, summary)
    }
}
