use anyhow::{Context, Result};
use clap::ArgMatches;

use pangowho_core::FullMappingBuilder;
use pangowho_io::consts::{DEFAULT_CORE_MAPPING, DEFAULT_FULL_MAPPING, LINEAGE_SUMMARY_URL};
use pangowho_io::{MappingWrite, Source, read_lineage_feed, read_prefix_map};

use crate::progress::with_spinner;

///
/// Load both inputs, build the full table and persist it.
///
/// Nothing is written unless both inputs were loaded and the table was built.
///
pub fn run_generate(matches: &ArgMatches) -> Result<()> {
    let core = matches
        .get_one::<String>("core")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CORE_MAPPING);
    let metadata = matches
        .get_one::<String>("metadata")
        .map(String::as_str)
        .unwrap_or(LINEAGE_SUMMARY_URL);
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or(DEFAULT_FULL_MAPPING);

    let core_table = read_prefix_map(&Source::parse(core))
        .with_context(|| format!("Failed to load the core table from {}", core))?;

    let feed = Source::parse(metadata);
    let records = with_spinner(&feed, format!("Loading lineage metadata from {}", feed), || {
        read_lineage_feed(&feed)
    })
    .with_context(|| format!("Failed to load lineage metadata from {}", feed))?;

    let (full_map, summary) = FullMappingBuilder::new(&core_table).build_with_summary(&records);

    full_map
        .write_json(output)
        .with_context(|| format!("Failed to write the full table to {}", output))?;

    println!(
        "Wrote {} entries for {} lineages to {} ({} without a WHO label)",
        summary.entries, summary.records, output, summary.unknown
    );

    Ok(())
}
