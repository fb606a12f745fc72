use clap::{Arg, Command};

use pangowho_io::consts::{DEFAULT_METADATA_CSV, LINEAGE_SUMMARY_URL};

pub const METADATA_CMD: &str = "metadata";

pub fn create_metadata_cli() -> Command {
    Command::new(METADATA_CMD)
        .about("Export the lineage metadata feed as a lineage,nextclade,unaliased CSV file.")
        .arg(
            Arg::new("metadata")
                .long("metadata")
                .short('m')
                .help(format!("Lineage metadata feed, path or URL [default: {LINEAGE_SUMMARY_URL}]")),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help(format!("Where to write the CSV file [default: {DEFAULT_METADATA_CSV}]")),
        )
}
