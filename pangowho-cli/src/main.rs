mod generate;
mod lookup;
mod metadata;
mod progress;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "pangowho";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Map PANGO lineages to WHO variant labels, Nextclade clades and unaliased lineage names.")
        .subcommand_required(true)
        .subcommand(generate::cli::create_generate_cli())
        .subcommand(metadata::cli::create_metadata_cli())
        .subcommand(lookup::cli::create_lookup_cli())
        .subcommand(lookup::cli::create_lookup_full_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // FULL MAPPING GENERATION
        //
        Some((generate::cli::GENERATE_CMD, matches)) => {
            generate::handlers::run_generate(matches)?;
        }

        //
        // METADATA EXPORT
        //
        Some((metadata::cli::METADATA_CMD, matches)) => {
            metadata::handlers::run_metadata(matches)?;
        }

        //
        // INTERACTIVE LOOKUPS
        //
        Some((lookup::cli::LOOKUP_CMD, matches)) => {
            lookup::handlers::run_lookup(matches)?;
        }
        Some((lookup::cli::LOOKUP_FULL_CMD, matches)) => {
            lookup::handlers::run_lookup_full(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
