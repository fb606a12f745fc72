use clap::{Arg, Command};

use pangowho_io::consts::{DEFAULT_CORE_MAPPING, DEFAULT_FULL_MAPPING, LINEAGE_SUMMARY_URL};

pub const GENERATE_CMD: &str = "generate";

pub fn create_generate_cli() -> Command {
    Command::new(GENERATE_CMD)
        .about("Build the full lineage to WHO label table from the core table and the lineage metadata feed.")
        .arg(
            Arg::new("core")
                .long("core")
                .short('c')
                .help(format!("Core prefix table, path or URL [default: {DEFAULT_CORE_MAPPING}]")),
        )
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
                .help(format!("Where to write the full table [default: {DEFAULT_FULL_MAPPING}]")),
        )
}
