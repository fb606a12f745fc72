use clap::{Arg, Command};

use pangowho_io::consts::{DEFAULT_CORE_MAPPING, FULL_MAPPING_URL};

pub const LOOKUP_CMD: &str = "lookup";
pub const LOOKUP_FULL_CMD: &str = "lookup-full";

pub fn create_lookup_cli() -> Command {
    Command::new(LOOKUP_CMD)
        .about("Interactively resolve lineages against the core table by longest prefix match.")
        .arg(
            Arg::new("core")
                .long("core")
                .short('c')
                .help(format!("Core prefix table, path or URL [default: {DEFAULT_CORE_MAPPING}]")),
        )
}

pub fn create_lookup_full_cli() -> Command {
    Command::new(LOOKUP_FULL_CMD)
        .about("Interactively look lineages up in the full table.")
        .arg(
            Arg::new("mapping")
                .long("mapping")
                .short('m')
                .help(format!("Full mapping table, path or URL [default: {FULL_MAPPING_URL}]")),
        )
}
