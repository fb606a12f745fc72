use anyhow::{Context, Result};
use clap::ArgMatches;

use pangowho_io::consts::{DEFAULT_CORE_MAPPING, FULL_MAPPING_URL};
use pangowho_io::{Source, read_full_map, read_prefix_map};

use super::repl::run_terminal_session;
use crate::progress::with_spinner;

pub fn run_lookup(matches: &ArgMatches) -> Result<()> {
    let core = matches
        .get_one::<String>("core")
        .map(String::as_str)
        .unwrap_or(DEFAULT_CORE_MAPPING);

    let source = Source::parse(core);
    let core_table = with_spinner(&source, format!("Loading the core table from {}", source), || {
        read_prefix_map(&source)
    })
    .with_context(|| format!("Failed to load the core table from {}", source))?;

    run_terminal_session(&core_table)?;

    Ok(())
}

pub fn run_lookup_full(matches: &ArgMatches) -> Result<()> {
    let mapping = matches
        .get_one::<String>("mapping")
        .map(String::as_str)
        .unwrap_or(FULL_MAPPING_URL);

    let source = Source::parse(mapping);
    let full_map = with_spinner(&source, format!("Loading the full table from {}", source), || {
        read_full_map(&source)
    })
    .with_context(|| format!("Failed to load the full table from {}", source))?;

    run_terminal_session(&full_map)?;

    Ok(())
}
