use std::io::Read;

use pangowho_core::PrefixMap;

use crate::error::{Result, SourceError};
use crate::source::Source;

///
/// Parse a core prefix table.
///
/// The table is headerless CSV with the prefix in the first column and the WHO
/// label in the second. Further columns are ignored. A prefix listed twice keeps
/// the label of its last row.
///
/// # Arguments
/// - reader: the CSV document
///
pub fn parse_prefix_map<R: Read>(reader: R) -> Result<PrefixMap> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table = PrefixMap::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;

        match (record.get(0), record.get(1)) {
            (Some(prefix), Some(label)) => {
                if let Some(previous) = table.insert(prefix, label) {
                    log::debug!("Prefix {} listed twice, replacing {} with {}", prefix, previous, label);
                }
            }
            _ => {
                return Err(SourceError::MalformedRow {
                    row: index + 1,
                    found: record.len(),
                });
            }
        }
    }

    Ok(table)
}

///
/// Load the core prefix table from a file or URL.
///
pub fn read_prefix_map(source: &Source) -> Result<PrefixMap> {
    let table = parse_prefix_map(source.open()?)?;
    log::info!("Loaded {} prefixes from {}", table.len(), source);
    Ok(table)
}
