//!
//! The lineage metadata feed: a JSON object keyed by lineage name.
//!
//! ```json
//! {
//!     "AY.4": { "nextstrainClade": "21J", "unaliased": "B.1.617.2.4", "designationDate": "..." },
//!     "BA.2": { "nextstrainClade": "21L", "unaliased": "B.1.1.529.2" }
//! }
//! ```
//!
//! Only `nextstrainClade` and `unaliased` are read. Records keep the order of the
//! document, which matters: the full mapping gives each unaliased name to the
//! first lineage that introduces it.
//!
use std::io::Read;

use indexmap::IndexMap;
use serde::Deserialize;

use pangowho_core::LineageRecord;

use crate::error::Result;
use crate::source::Source;

#[derive(Deserialize)]
struct LineageSummary {
    #[serde(rename = "nextstrainClade")]
    nextstrain_clade: String,
    unaliased: String,
}

/// Lineage name to summary, in document order. A repeated name keeps its first
/// position and its last value.
type LineageFeed = IndexMap<String, LineageSummary>;

///
/// Parse a lineage feed document.
///
pub fn parse_lineage_feed<R: Read>(reader: R) -> Result<Vec<LineageRecord>> {
    let feed: LineageFeed = serde_json::from_reader(reader)?;

    let records = feed
        .into_iter()
        .map(|(lineage, summary)| {
            LineageRecord::new(lineage, summary.unaliased, summary.nextstrain_clade)
        })
        .collect();

    Ok(records)
}

///
/// Fetch and parse the lineage feed from a file or URL.
///
pub fn read_lineage_feed(source: &Source) -> Result<Vec<LineageRecord>> {
    let records = parse_lineage_feed(source.open()?)?;

    let aliased = records.iter().filter(|r| r.is_aliased()).count();
    log::info!(
        "Loaded {} lineages ({} aliased) from {}",
        records.len(),
        aliased,
        source
    );

    Ok(records)
}
