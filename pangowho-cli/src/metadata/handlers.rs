use anyhow::{Context, Result};
use clap::ArgMatches;

use pangowho_io::consts::{DEFAULT_METADATA_CSV, LINEAGE_SUMMARY_URL};
use pangowho_io::{MetadataWrite, Source, read_lineage_feed};

use crate::progress::with_spinner;

pub fn run_metadata(matches: &ArgMatches) -> Result<()> {
    let metadata = matches
        .get_one::<String>("metadata")
        .map(String::as_str)
        .unwrap_or(LINEAGE_SUMMARY_URL);
    let output = matches
        .get_one::<String>("output")
        .map(String::as_str)
        .unwrap_or(DEFAULT_METADATA_CSV);

    let feed = Source::parse(metadata);
    let records = with_spinner(&feed, format!("Loading lineage metadata from {}", feed), || {
        read_lineage_feed(&feed)
    })
    .with_context(|| format!("Failed to load lineage metadata from {}", feed))?;

    records
        .write_csv(output)
        .with_context(|| format!("Failed to write lineage metadata to {}", output))?;

    println!("Wrote {} lineages to {}", records.len(), output);

    Ok(())
}
